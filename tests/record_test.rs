//! Record serialization: JSON shape and CSV rows.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use chrono::{TimeZone, Utc};
use rs_darkpatterns::record::write_row;
use rs_darkpatterns::{Category, Classifier, DetectionRecord, PatternRegistry, CATEGORY_COUNT};

const PAGE: &str = r#"<html lang="nl"><body><p>Bijna uitverkocht</p><p>Lowest price ever</p></body></html>"#;

fn record() -> DetectionRecord {
    let at = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).single().expect("valid timestamp");
    Classifier::new(PatternRegistry::builtin().expect("builtin patterns load"))
        .classify_at("winkel.nl", PAGE, at)
        .expect("page classifies")
}

#[test]
fn json_uses_column_names() {
    let value = serde_json::to_value(record()).expect("record serializes");
    assert_eq!(value["site_domain"], "winkel.nl");
    assert_eq!(value["language"], "nl");
    assert_eq!(value["total_patterns"], 2);
    assert_eq!(value["flags"]["urgency"], true);
    assert_eq!(value["flags"]["lowest_price_badge"], true);
    assert_eq!(value["flags"]["bulk_upsell"], false);
    assert!(value["timestamp"].is_string());
}

#[test]
fn csv_row_matches_header() {
    let header = DetectionRecord::csv_header();
    let row = record().csv_row();
    assert_eq!(header.len(), CATEGORY_COUNT + 4);
    assert_eq!(row.len(), header.len());

    assert_eq!(header[0], "site_domain");
    assert_eq!(header[2], Category::Urgency.name());
    assert_eq!(row[0], "winkel.nl");
    assert_eq!(row[1], "nl");
    assert_eq!(row[2], "True");
    assert_eq!(row[CATEGORY_COUNT + 2], "2");
    assert_eq!(row[CATEGORY_COUNT + 3], "2025-02-03 04:05:06.000000");
}

#[test]
fn written_rows_quote_separators() {
    let mut out = Vec::new();
    write_row(&mut out, &["a,b".to_string(), "plain".to_string(), "say \"hi\"".to_string()], ',')
        .expect("row written");
    assert_eq!(String::from_utf8(out).expect("utf-8"), "\"a,b\",plain,\"say \"\"hi\"\"\"\n");
}
