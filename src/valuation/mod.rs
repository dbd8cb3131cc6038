//! Stateless valuation and comparison of catalog items and holdings.

pub mod comparison;
pub mod portfolio;
pub mod rarity;
pub mod roi;
pub mod wishlist;

pub use comparison::{compare, ComparisonResult, Contender, Outcome};
pub use portfolio::{
    holding_value, portfolio_holdings, portfolio_summary, summarize, HoldingValuation,
    PortfolioSummary,
};
pub use rarity::{classify, Rarity, RarityTier, TIERS};
pub use roi::{comparison_fallback, item_roi, percent_of, valuation_fallback, ItemRoi};
