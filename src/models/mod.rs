pub mod portfolio;
pub mod profile;
pub mod size;
pub mod sneaker;

pub use portfolio::{NewPortfolioItem, PortfolioItem};
pub use profile::UserProfile;
pub use size::{ShoeSize, SizeBrand, SizeConversion};
pub use sneaker::{DropStatus, NewSneaker, Sneaker};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical condition of an owned pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Deadstock: unworn, original box.
    #[default]
    #[serde(rename = "DS")]
    Deadstock,
    /// Very near deadstock.
    #[serde(rename = "VNDS")]
    VeryNearDeadstock,
    #[serde(rename = "Used")]
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Deadstock => "DS",
            Condition::VeryNearDeadstock => "VNDS",
            Condition::Used => "Used",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DS" => Some(Condition::Deadstock),
            "VNDS" => Some(Condition::VeryNearDeadstock),
            "USED" => Some(Condition::Used),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationError: rejected input at construction time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: String },

    #[error("hype score must be within 0..=100 (got {0})")]
    HypeOutOfRange(i32),

    #[error("unsupported shoe size: {0}")]
    UnknownSize(String),

    #[error("unknown size brand: {0}")]
    UnknownBrand(String),

    #[error("{field} exceeds the maximum price of {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: String,
        max: Decimal,
    },

    #[error("{field} allows at most 2 decimal places (got {value})")]
    TooPrecise { field: &'static str, value: String },
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

/// Cents, as stored by the `NUMERIC(12, 2)` catalog columns.
pub const PRICE_SCALE: u32 = 2;

/// Largest amount a `NUMERIC(12, 2)` column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, PRICE_SCALE);

/// Accept a money amount that is non-negative, at most [`MAX_PRICE`] and
/// has no more than two decimal places.
pub fn check_price(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    if value > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field,
            value: value.to_string(),
            max: MAX_PRICE,
        });
    }
    if value.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::TooPrecise {
            field,
            value: value.to_string(),
        });
    }

    Ok(value)
}
