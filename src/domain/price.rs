//! Venue price ranges and the budget brackets used to filter them.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Amounts at or above this are shown in lakhs.
const LAKH: u64 = 100_000;

/// Inclusive price range a venue charges, in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest price.
    pub min: u64,
    /// Highest price.
    pub max: u64,
}

impl PriceRange {
    /// Creates a validated price range.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidVenue`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, CatalogError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidVenue`] if the range is inverted.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.min > self.max {
            return Err(CatalogError::InvalidVenue(format!(
                "price range min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Formats a price for display: lakhs with one decimal from 1 lakh up,
    /// comma-grouped digits below that.
    #[must_use]
    pub fn format_amount(amount: u64) -> String {
        if amount >= LAKH {
            let tenths = amount.saturating_mul(10).saturating_add(LAKH / 2) / LAKH;
            return format!("{}.{} Lac", tenths / 10, tenths % 10);
        }
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// A named price bucket offered by the budget selector.
///
/// `max: None` is an open upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetBracket {
    /// Selector label, also the lookup key.
    pub label: &'static str,
    /// Lower bound, inclusive.
    pub min: u64,
    /// Upper bound, inclusive; `None` for unbounded.
    pub max: Option<u64>,
}

/// The fixed, ordered bracket list.
pub const BUDGET_BRACKETS: [BudgetBracket; 4] = [
    BudgetBracket {
        label: "Under 2 Lac",
        min: 0,
        max: Some(200_000),
    },
    BudgetBracket {
        label: "2-4 Lac",
        min: 200_000,
        max: Some(400_000),
    },
    BudgetBracket {
        label: "4-6 Lac",
        min: 400_000,
        max: Some(600_000),
    },
    BudgetBracket {
        label: "Above 6 Lac",
        min: 600_000,
        max: None,
    },
];

impl BudgetBracket {
    /// Looks up a bracket by its label (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownBudget`] if no bracket matches.
    pub fn by_label(label: &str) -> Result<Self, CatalogError> {
        let wanted = label.trim();
        BUDGET_BRACKETS
            .into_iter()
            .find(|b| b.label.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownBudget(label.to_string()))
    }

    /// Range-overlap test: the bracket and the venue's range share at
    /// least one price.
    #[must_use]
    pub fn overlaps(&self, price: &PriceRange) -> bool {
        let below_max = self.max.is_none_or(|max| price.min <= max);
        below_max && price.max >= self.min
    }
}
