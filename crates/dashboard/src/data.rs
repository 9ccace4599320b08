//! Root cause dataset
//!
//! The five root-cause records behind the dashboard. The data is fixed
//! at compile time and immutable for the process lifetime; the
//! subcategory and channel percentages of each record are entered so
//! they sum to roughly 100.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One slice of a record's breakdown (by subcategory or by channel).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub name: &'static str,
    pub count: u32,
    pub percent: u8,
}

/// One categorized reason for an order exception.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootCauseRecord {
    pub cause: &'static str,
    /// Number of exceptions attributed to this cause.
    pub count: u32,
    /// Share of all exceptions, 0-100.
    pub percent: u8,
    /// Week-over-week percent delta, sign preserved.
    pub trend: i32,
    /// Average handling cost per exception, USD.
    pub cost: f64,
    pub subcategories: Vec<Breakdown>,
    pub channels: Vec<Breakdown>,
}

fn slice(name: &'static str, count: u32, percent: u8) -> Breakdown {
    Breakdown { name, count, percent }
}

static ROOT_CAUSES: Lazy<Vec<RootCauseRecord>> = Lazy::new(|| {
    vec![
        RootCauseRecord {
            cause: "Incomplete Customer Data",
            count: 156,
            percent: 18,
            trend: 12,
            cost: 8.20,
            subcategories: vec![
                slice("Missing Phone", 78, 50),
                slice("Missing Email", 45, 29),
                slice("Invalid Address", 33, 21),
            ],
            channels: vec![
                slice("WhatsApp", 89, 57),
                slice("Website", 42, 27),
                slice("Amazon", 25, 16),
            ],
        },
        RootCauseRecord {
            cause: "SKU Not in System",
            count: 142,
            percent: 16,
            trend: -5,
            cost: 15.30,
            subcategories: vec![
                slice("New SKU not synced", 65, 46),
                slice("Discontinued SKU ordered", 48, 34),
                slice("SKU mismatch", 29, 20),
            ],
            channels: vec![
                slice("Amazon", 78, 55),
                slice("Website", 42, 30),
                slice("WhatsApp", 22, 15),
            ],
        },
        RootCauseRecord {
            cause: "Warehouse Stock Mismatch",
            count: 128,
            percent: 15,
            trend: 8,
            cost: 22.10,
            subcategories: vec![
                slice("Physical count mismatch", 62, 48),
                slice("Location error", 41, 32),
                slice("Reserved but not available", 25, 20),
            ],
            channels: vec![
                slice("Website", 58, 45),
                slice("Amazon", 45, 35),
                slice("WhatsApp", 25, 20),
            ],
        },
        RootCauseRecord {
            cause: "Pricing Discrepancy",
            count: 98,
            percent: 11,
            trend: 0,
            cost: 6.50,
            subcategories: vec![
                slice("Channel price mismatch", 45, 46),
                slice("Promo code error", 32, 33),
                slice("Currency conversion issue", 21, 21),
            ],
            channels: vec![
                slice("Amazon", 52, 53),
                slice("Website", 31, 32),
                slice("WhatsApp", 15, 15),
            ],
        },
        RootCauseRecord {
            cause: "Address Validation Failed",
            count: 87,
            percent: 10,
            trend: -3,
            cost: 4.20,
            subcategories: vec![
                slice("Incomplete address", 48, 55),
                slice("Invalid pincode", 25, 29),
                slice("Special characters", 14, 16),
            ],
            channels: vec![
                slice("WhatsApp", 45, 52),
                slice("Website", 28, 32),
                slice("Amazon", 14, 16),
            ],
        },
    ]
});

/// The full root-cause dataset, in display order.
pub fn root_causes() -> &'static [RootCauseRecord] {
    &ROOT_CAUSES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_five_records_in_order() {
        let records = root_causes();
        assert_eq!(records.len(), 5);

        let causes: Vec<&str> = records.iter().map(|r| r.cause).collect();
        assert_eq!(
            causes,
            vec![
                "Incomplete Customer Data",
                "SKU Not in System",
                "Warehouse Stock Mismatch",
                "Pricing Discrepancy",
                "Address Validation Failed",
            ]
        );
    }

    #[test]
    fn breakdown_percents_roughly_sum_to_100() {
        for record in root_causes() {
            let sub: u32 = record.subcategories.iter().map(|b| b.percent as u32).sum();
            let chan: u32 = record.channels.iter().map(|b| b.percent as u32).sum();
            assert!((98..=102).contains(&sub), "{}: subcategories sum {}", record.cause, sub);
            assert!((98..=102).contains(&chan), "{}: channels sum {}", record.cause, chan);
        }
    }

    #[test]
    fn trend_covers_all_three_directions() {
        let trends: Vec<i32> = root_causes().iter().map(|r| r.trend).collect();
        assert!(trends.iter().any(|t| *t > 0));
        assert!(trends.iter().any(|t| *t < 0));
        assert!(trends.iter().any(|t| *t == 0));
    }
}
