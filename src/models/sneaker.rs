use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{check_price, ValidationError};

/// Catalog entry as stored in the `sneakers` table.
///
/// Read-only from the valuation engine's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Sneaker {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub description: String,
    /// Original sale price (MSRP).
    pub retail_price: Decimal,
    /// Secondary-market estimate; `None` means no resale data.
    pub resale_price: Option<Decimal>,
    /// Popularity index, 0-100.
    pub hype_score: i32,
    pub is_raffle: bool,
    pub drop_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sneaker {
    pub fn drop_status(&self, today: NaiveDate) -> DropStatus {
        if self.drop_date <= today {
            DropStatus::Released
        } else {
            DropStatus::Upcoming
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropStatus {
    Upcoming,
    Released,
}

impl DropStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropStatus::Upcoming => "upcoming",
            DropStatus::Released => "released",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upcoming" => Some(DropStatus::Upcoming),
            "released" | "past" => Some(DropStatus::Released),
            _ => None,
        }
    }
}

impl std::fmt::Display for DropStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NewSneaker: admin create/update payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct NewSneaker {
    pub name: String,
    pub brand: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub retail_price: Decimal,
    #[serde(default)]
    pub resale_price: Option<Decimal>,
    #[serde(default = "default_hype_score")]
    pub hype_score: i32,
    #[serde(default)]
    pub is_raffle: bool,
    pub drop_date: NaiveDate,
}

fn default_hype_score() -> i32 {
    50
}

impl NewSneaker {
    /// Check field constraints and normalise optional values.
    ///
    /// A resale price of exactly zero is the form's "no data" value and is
    /// stored as `None`.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        self.brand = self.brand.trim().to_string();
        self.image = self.image.trim().to_string();

        if self.name.is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        if self.brand.is_empty() {
            return Err(ValidationError::Empty("brand"));
        }
        if self.image.is_empty() {
            return Err(ValidationError::Empty("image"));
        }
        check_price("retail_price", self.retail_price)?;
        if let Some(resale) = self.resale_price {
            check_price("resale_price", resale)?;
            if resale.is_zero() {
                self.resale_price = None;
            }
        }
        if !(0..=100).contains(&self.hype_score) {
            return Err(ValidationError::HypeOutOfRange(self.hype_score));
        }

        Ok(self)
    }

    /// Catalog id for a new entry: name slug plus a short random suffix.
    pub fn generate_id(&self) -> String {
        let slug = self
            .name
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        let suffix = Uuid::new_v4().simple().to_string();

        if slug.is_empty() {
            suffix[..12].to_string()
        } else {
            format!("{slug}-{}", &suffix[..6])
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
