//! The fixed dark-pattern taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detect::{Detector, StructuralCheck};
use crate::error::Error;

/// Number of categories in the taxonomy.
pub const CATEGORY_COUNT: usize = 14;

/// One dark-pattern category.
///
/// Declaration order is the column order of every output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// False urgency and scarcity copy ("only 3 left", "hurry").
    Urgency,
    /// Guilt-tripping decline options.
    Confirmshame,
    /// Costs revealed late in the funnel.
    HiddenCosts,
    /// Free trials and silent auto-renewal.
    SubscriptionTrap,
    /// Activity notifications and popularity claims.
    SocialProof,
    /// Struck-through reference prices in `del`/`s` elements.
    PriceAnchoring,
    /// Struck-through prices styled with CSS.
    CssStrikethroughPrice,
    /// Opt-in checkboxes that arrive already checked.
    PrecheckedOptin,
    /// Countdown clocks.
    CountdownTimer,
    /// Nudges to install the shop's app.
    AppDownloadBanner,
    /// "Lowest price ever" style badges.
    LowestPriceBadge,
    /// Taxes or shipping deferred to checkout.
    CheckoutWarning,
    /// Quantity discounts pushing larger orders.
    BulkUpsell,
    /// Prize wheels and point rewards.
    GamifiedPopup,
}

impl Category {
    /// Every category in record order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Urgency,
        Category::Confirmshame,
        Category::HiddenCosts,
        Category::SubscriptionTrap,
        Category::SocialProof,
        Category::PriceAnchoring,
        Category::CssStrikethroughPrice,
        Category::PrecheckedOptin,
        Category::CountdownTimer,
        Category::AppDownloadBanner,
        Category::LowestPriceBadge,
        Category::CheckoutWarning,
        Category::BulkUpsell,
        Category::GamifiedPopup,
    ];

    /// Column / configuration key for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Urgency => "urgency",
            Category::Confirmshame => "confirmshame",
            Category::HiddenCosts => "hidden_costs",
            Category::SubscriptionTrap => "subscription_trap",
            Category::SocialProof => "social_proof",
            Category::PriceAnchoring => "price_anchoring",
            Category::CssStrikethroughPrice => "css_strikethrough_price",
            Category::PrecheckedOptin => "prechecked_optin",
            Category::CountdownTimer => "countdown_timer",
            Category::AppDownloadBanner => "app_download_banner",
            Category::LowestPriceBadge => "lowest_price_badge",
            Category::CheckoutWarning => "checkout_warning",
            Category::BulkUpsell => "bulk_upsell",
            Category::GamifiedPopup => "gamified_popup",
        }
    }

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Registration table: which detector decides this category.
    ///
    /// App-download, lowest-price, bulk-upsell and gamification copy only
    /// has English patterns; those categories ignore the page locale.
    #[must_use]
    pub const fn detector(self) -> Detector {
        match self {
            Category::Urgency
            | Category::Confirmshame
            | Category::HiddenCosts
            | Category::SubscriptionTrap
            | Category::SocialProof
            | Category::CheckoutWarning => Detector::Text { localized: true },
            Category::AppDownloadBanner
            | Category::LowestPriceBadge
            | Category::BulkUpsell
            | Category::GamifiedPopup => Detector::Text { localized: false },
            Category::PriceAnchoring => Detector::Structural(StructuralCheck::SemanticStrikethrough),
            Category::CssStrikethroughPrice => Detector::Structural(StructuralCheck::StyledStrikethrough),
            Category::PrecheckedOptin => Detector::Structural(StructuralCheck::PrecheckedOptin),
            Category::CountdownTimer => Detector::Structural(StructuralCheck::Countdown),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s.trim())
            .ok_or_else(|| Error::Configuration(format!("unknown category `{s}`")))
    }
}
