use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::Serialize;

use super::roi::{comparison_fallback, item_roi, ItemRoi};
use crate::models::Sneaker;

/// Which side of a head-to-head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Contender {
    A,
    B,
}

impl Contender {
    pub fn other(self) -> Self {
        match self {
            Contender::A => Contender::B,
            Contender::B => Contender::A,
        }
    }
}

/// Three-way result of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    AWins,
    BWins,
    Tie,
}

impl Outcome {
    /// Outcome with A and B swapped.
    pub fn mirror(self) -> Self {
        match self {
            Outcome::AWins => Outcome::BWins,
            Outcome::BWins => Outcome::AWins,
            Outcome::Tie => Outcome::Tie,
        }
    }

    pub fn winner(self) -> Option<Contender> {
        match self {
            Outcome::AWins => Some(Contender::A),
            Outcome::BWins => Some(Contender::B),
            Outcome::Tie => None,
        }
    }

    fn higher_wins(a: Decimal, b: Decimal) -> Self {
        match a.cmp(&b) {
            Ordering::Greater => Outcome::AWins,
            Ordering::Less => Outcome::BWins,
            Ordering::Equal => Outcome::Tie,
        }
    }

    fn lower_wins(a: Decimal, b: Decimal) -> Self {
        Outcome::higher_wins(a, b).mirror()
    }
}

/// Versus-mode scorecard for two catalog items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Lower retail wins.
    pub retail_price: Outcome,
    /// Higher resale wins; missing resale counts as zero here.
    pub resale_price: Outcome,
    pub roi_percent: Outcome,
    pub hype_score: Outcome,
    pub a_roi: ItemRoi,
    pub b_roi: ItemRoi,
    pub better_buy: Contender,
}

impl ComparisonResult {
    pub fn metrics(&self) -> [Outcome; 4] {
        [self.retail_price, self.resale_price, self.roi_percent, self.hype_score]
    }

    /// Number of metrics won outright by `side`.
    pub fn wins_for(&self, side: Contender) -> usize {
        self.metrics()
            .iter()
            .filter(|outcome| outcome.winner() == Some(side))
            .count()
    }
}

/// Score `a` against `b` on retail, resale, ROI and hype.
///
/// Better buy: strictly higher ROI; on an ROI tie the higher hype score;
/// on a full tie, `a`.
pub fn compare(a: &Sneaker, b: &Sneaker) -> ComparisonResult {
    let a_roi = item_roi(a);
    let b_roi = item_roi(b);

    let roi_percent = Outcome::higher_wins(a_roi.percent_gain, b_roi.percent_gain);
    let hype_score = match a.hype_score.cmp(&b.hype_score) {
        Ordering::Greater => Outcome::AWins,
        Ordering::Less => Outcome::BWins,
        Ordering::Equal => Outcome::Tie,
    };

    let better_buy = roi_percent
        .winner()
        .or_else(|| hype_score.winner())
        .unwrap_or(Contender::A);

    ComparisonResult {
        retail_price: Outcome::lower_wins(a.retail_price, b.retail_price),
        resale_price: Outcome::higher_wins(comparison_fallback(a), comparison_fallback(b)),
        roi_percent,
        hype_score,
        a_roi,
        b_roi,
        better_buy,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
