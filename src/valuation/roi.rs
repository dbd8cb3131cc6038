use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::Sneaker;

/// Decimal places kept on percentages.
pub const PERCENT_DP: u32 = 1;

/// Gain of a catalog item's resale over its retail price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRoi {
    pub absolute_gain: Decimal,
    pub percent_gain: Decimal,
}

impl ItemRoi {
    pub const ZERO: ItemRoi = ItemRoi {
        absolute_gain: Decimal::ZERO,
        percent_gain: Decimal::ZERO,
    };
}

/// Price used when valuing a held pair: resale, else retail.
pub fn valuation_fallback(sneaker: &Sneaker) -> Decimal {
    sneaker.resale_price.unwrap_or(sneaker.retail_price)
}

/// Resale used when ranking two items against each other: resale, else zero.
pub fn comparison_fallback(sneaker: &Sneaker) -> Decimal {
    sneaker.resale_price.unwrap_or(Decimal::ZERO)
}

/// `part / base * 100`, rounded to [`PERCENT_DP`].
///
/// Zero when `base <= 0` or when the ratio does not fit in a `Decimal`.
pub fn percent_of(part: Decimal, base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    part.checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

/// Return on a single catalog item, resale vs. retail.
///
/// No resale data means no claim of gain or loss. A non-positive retail
/// price is degenerate and also yields the zero result.
pub fn item_roi(sneaker: &Sneaker) -> ItemRoi {
    let Some(resale) = sneaker.resale_price else {
        return ItemRoi::ZERO;
    };

    if sneaker.retail_price <= Decimal::ZERO {
        return ItemRoi::ZERO;
    }

    let absolute_gain = resale.saturating_sub(sneaker.retail_price);
    ItemRoi {
        absolute_gain,
        percent_gain: percent_of(absolute_gain, sneaker.retail_price),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
