use serde::Serialize;
use std::fmt;

/// Hype bands, ordered from least to most coveted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Limited,
    Hyped,
    Grail,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Limited => "limited",
            Rarity::Hyped => "hyped",
            Rarity::Grail => "grail",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tier for a hype score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RarityTier {
    pub rarity: Rarity,
    pub label: &'static str,
    /// Badge classes.
    pub style_class: &'static str,
    /// Accent text classes.
    pub text_class: &'static str,
    /// Inclusive score band.
    pub min_score: u8,
    pub max_score: u8,
}

impl RarityTier {
    pub fn contains(&self, hype_score: i32) -> bool {
        (self.min_score as i32..=self.max_score as i32).contains(&hype_score)
    }
}

pub const MIN_HYPE: i32 = 0;
pub const MAX_HYPE: i32 = 100;

/// Tier table, ascending. Bands are contiguous and cover 0..=100.
pub const TIERS: [RarityTier; 4] = [
    RarityTier {
        rarity: Rarity::Common,
        label: "Common",
        style_class: "bg-zinc-700 text-zinc-200",
        text_class: "text-zinc-400",
        min_score: 0,
        max_score: 49,
    },
    RarityTier {
        rarity: Rarity::Limited,
        label: "Limited",
        style_class: "bg-sky-500 text-black",
        text_class: "text-sky-400",
        min_score: 50,
        max_score: 74,
    },
    RarityTier {
        rarity: Rarity::Hyped,
        label: "Hyped",
        style_class: "bg-violet-600 text-white",
        text_class: "text-violet-400",
        min_score: 75,
        max_score: 89,
    },
    RarityTier {
        rarity: Rarity::Grail,
        label: "Grail",
        style_class: "bg-amber-400 text-black",
        text_class: "text-amber-400",
        min_score: 90,
        max_score: 100,
    },
];

/// Map a hype score to its tier.
///
/// Out-of-range scores are clamped to 0..=100 first, so every integer
/// lands in exactly one tier.
pub fn classify(hype_score: i32) -> RarityTier {
    let score = hype_score.clamp(MIN_HYPE, MAX_HYPE);

    TIERS
        .iter()
        .rev()
        .find(|tier| score >= tier.min_score as i32)
        .copied()
        .unwrap_or(TIERS[0])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
