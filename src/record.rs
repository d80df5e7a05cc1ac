//! Per-page classification output.
//!
//! A [`DetectionRecord`] always carries exactly one flag per [`Category`],
//! and its `total_patterns` is derived from those flags at construction.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::category::{Category, CATEGORY_COUNT};
use crate::locale::Locale;

/// Timestamp layout of the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One boolean per category, in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryFlags([bool; CATEGORY_COUNT]);

impl CategoryFlags {
    /// Build flags by asking `decide` about every category in order.
    pub fn from_fn(mut decide: impl FnMut(Category) -> bool) -> Self {
        let mut flags = [false; CATEGORY_COUNT];
        for category in Category::ALL {
            flags[category.index()] = decide(category);
        }
        Self(flags)
    }

    /// Flag of one category.
    #[must_use]
    pub fn get(&self, category: Category) -> bool {
        self.0[category.index()]
    }

    /// `(category, flag)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    /// Number of categories present.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|flag| **flag).count()
    }

    /// Always [`CATEGORY_COUNT`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw flags in record order.
    #[must_use]
    pub fn as_array(&self) -> &[bool; CATEGORY_COUNT] {
        &self.0
    }
}

impl Serialize for CategoryFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, flag) in self.iter() {
            map.serialize_entry(category.name(), &flag)?;
        }
        map.end()
    }
}

/// Classification result for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionRecord {
    #[serde(rename = "site_domain")]
    domain: String,
    #[serde(rename = "language")]
    locale: Locale,
    flags: CategoryFlags,
    total_patterns: usize,
    #[serde(rename = "timestamp")]
    captured_at: DateTime<Utc>,
}

impl DetectionRecord {
    /// Assemble a record; `total_patterns` is counted from `flags`.
    #[must_use]
    pub fn new(domain: impl Into<String>, locale: Locale, flags: CategoryFlags, captured_at: DateTime<Utc>) -> Self {
        Self {
            domain: domain.into(),
            locale,
            total_patterns: flags.count(),
            flags,
            captured_at,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn flags(&self) -> &CategoryFlags {
        &self.flags
    }

    /// Flag of one category.
    #[must_use]
    pub fn flag(&self, category: Category) -> bool {
        self.flags.get(category)
    }

    #[must_use]
    pub fn total_patterns(&self) -> usize {
        self.total_patterns
    }

    #[must_use]
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Column names of the tabular output.
    #[must_use]
    pub fn csv_header() -> Vec<String> {
        let mut header = vec!["site_domain".to_string(), "language".to_string()];
        header.extend(Category::ALL.iter().map(|category| category.name().to_string()));
        header.push("total_patterns".to_string());
        header.push("timestamp".to_string());
        header
    }

    /// Cells of this record, aligned with [`DetectionRecord::csv_header`].
    #[must_use]
    pub fn csv_row(&self) -> Vec<String> {
        let mut row = vec![self.domain.clone(), self.locale.code().to_string()];
        row.extend(self.flags.iter().map(|(_, flag)| bool_cell(flag).to_string()));
        row.push(self.total_patterns.to_string());
        row.push(self.captured_at.format(TIMESTAMP_FORMAT).to_string());
        row
    }
}

fn bool_cell(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

/// Split delimited text into rows of cells.
///
/// `"`-quoted cells may contain the separator, line breaks and `""` escapes,
/// the same quoting [`write_row`] produces. Blank lines are skipped.
#[must_use]
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            c if c == sep && !in_quotes => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    row.push(field);
    push_row(&mut rows, &mut row);
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].trim().is_empty() {
        row.clear();
    } else {
        rows.push(std::mem::take(row));
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one delimited row, quoting cells that need it.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (position, cell) in row.iter().enumerate() {
        if position > 0 {
            write!(w, "{sep}")?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}
