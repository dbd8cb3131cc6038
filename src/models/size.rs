use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// US men's size run offered by the size pickers.
pub const SIZE_RUN: [&str; 19] = [
    "4", "4.5", "5", "5.5", "6", "6.5", "7", "7.5", "8", "8.5", "9", "9.5", "10", "10.5",
    "11", "11.5", "12", "13", "14",
];

/// A US shoe size from the fixed [`SIZE_RUN`] vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ShoeSize(&'static str);

impl ShoeSize {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        SIZE_RUN
            .iter()
            .find(|candidate| **candidate == trimmed)
            .map(|candidate| ShoeSize(*candidate))
            .ok_or_else(|| ValidationError::UnknownSize(s.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Numeric US size.
    pub fn us(&self) -> Decimal {
        // Every entry of SIZE_RUN is a valid decimal literal.
        Decimal::from_str(self.0).unwrap_or(Decimal::ZERO)
    }

    /// Convert to UK / EU / CM using the brand's sizing offsets.
    pub fn convert(&self, brand: SizeBrand) -> SizeConversion {
        let us = self.us();
        let offset = brand.offset();
        let eu_step = if us > Decimal::from(7) {
            Decimal::from(3)
        } else {
            Decimal::from(2)
        };

        SizeConversion {
            brand,
            us,
            uk: us - Decimal::ONE + offset,
            eu: Decimal::from(30) + us + eu_step + offset,
            cm: brand.cm_base() + us,
        }
    }
}

impl Default for ShoeSize {
    fn default() -> Self {
        ShoeSize("10")
    }
}

impl<'de> Deserialize<'de> for ShoeSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ShoeSize::parse(&raw).map_err(de::Error::custom)
    }
}

impl From<ShoeSize> for String {
    fn from(size: ShoeSize) -> Self {
        size.0.to_string()
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ---------------------------------------------------------------------------
// Brand sizing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBrand {
    NikeJordan,
    AdidasYeezy,
    NewBalance,
    Converse,
}

impl SizeBrand {
    pub fn from_str(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().replace(['-', ' ', '/'], "_").as_str() {
            "nike_jordan" | "nike" | "jordan" => Ok(SizeBrand::NikeJordan),
            "adidas_yeezy" | "adidas" | "yeezy" => Ok(SizeBrand::AdidasYeezy),
            "new_balance" | "nb" => Ok(SizeBrand::NewBalance),
            "converse" => Ok(SizeBrand::Converse),
            _ => Err(ValidationError::UnknownBrand(s.to_string())),
        }
    }

    /// Half-size offset relative to Nike sizing.
    fn offset(&self) -> Decimal {
        match self {
            SizeBrand::NikeJordan | SizeBrand::NewBalance => Decimal::ZERO,
            SizeBrand::AdidasYeezy => Decimal::new(5, 1),
            SizeBrand::Converse => Decimal::NEGATIVE_ONE,
        }
    }

    fn cm_base(&self) -> Decimal {
        match self {
            SizeBrand::NikeJordan | SizeBrand::NewBalance => Decimal::from(20),
            SizeBrand::AdidasYeezy => Decimal::new(205, 1),
            SizeBrand::Converse => Decimal::from(21),
        }
    }
}

/// Approximate regional equivalents of a US size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeConversion {
    pub brand: SizeBrand,
    pub us: Decimal,
    pub uk: Decimal,
    pub eu: Decimal,
    pub cm: Decimal,
}
