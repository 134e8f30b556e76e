//! Locale-aware string comparison for sorting.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use log::warn;

/// String comparator for one locale.
///
/// Falls back to code point order when the locale has no collation data.
///
/// `Send + Sync` through the `sync` feature of `icu_provider`, so a view can
/// share one collator with its debounced tasks.
pub enum Collation {
    Locale(Collator),
    CodePoint,
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locale(_) => write!(f, "Locale(...)"),
            Self::CodePoint => write!(f, "CodePoint"),
        }
    }
}

impl Collation {
    /// Build a collator for a BCP-47 tag such as `"ar"`.
    pub fn new(locale: &str) -> Self {
        let collator = locale.parse::<Locale>().ok().and_then(|locale| {
            Collator::try_new(&locale.into(), CollatorOptions::new()).ok()
        });

        match collator {
            Some(collator) => Self::Locale(collator),
            None => {
                warn!("No collation data for locale {locale:?}, using code point order");
                Self::CodePoint
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Locale(collator) => collator.compare(a, b),
            Self::CodePoint => a.cmp(b),
        }
    }
}
