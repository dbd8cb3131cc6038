use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{check_price, Condition, ShoeSize, Sneaker, ValidationError};

/// A pair the user owns. Never mutated after it is logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: Uuid,
    /// Catalog reference; may dangle if the catalog entry was removed.
    pub sneaker_id: String,
    pub size: ShoeSize,
    /// What the user actually paid, independent of retail.
    pub purchase_price: Decimal,
    pub condition: Condition,
    pub purchase_date: DateTime<Utc>,
}

impl PortfolioItem {
    /// Re-check entry rules on an item that did not come through
    /// [`NewPortfolioItem::into_item`], such as one read from a backup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sneaker_id.trim().is_empty() {
            return Err(ValidationError::Empty("sneaker_id"));
        }
        check_price("purchase_price", self.purchase_price)?;
        Ok(())
    }
}

/// Request payload for logging an acquisition.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPortfolioItem {
    pub sneaker_id: String,
    #[serde(default)]
    pub size: ShoeSize,
    /// Defaults to the catalog retail price.
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub condition: Condition,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl NewPortfolioItem {
    /// Build the stored item against the catalog entry it refers to.
    pub fn into_item(self, sneaker: &Sneaker, now: DateTime<Utc>) -> Result<PortfolioItem, ValidationError> {
        let purchase_price = check_price(
            "purchase_price",
            self.purchase_price.unwrap_or(sneaker.retail_price),
        )?;

        Ok(PortfolioItem {
            id: Uuid::new_v4(),
            sneaker_id: sneaker.id.clone(),
            size: self.size,
            purchase_price,
            condition: self.condition,
            purchase_date: self.purchase_date.unwrap_or(now),
        })
    }
}
