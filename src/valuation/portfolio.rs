use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::roi::{percent_of, valuation_fallback};
use crate::models::{PortfolioItem, Sneaker};

/// Aggregate valuation of everything a user owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub count: usize,
    /// Sum of what the user paid.
    pub cost_basis: Decimal,
    /// Sum of current estimated values.
    pub current_value: Decimal,
    pub profit: Decimal,
    pub profit_percent: Decimal,
}

/// Per-pair valuation, as shown when listing or offering a pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingValuation {
    pub item_id: Uuid,
    pub sneaker_id: String,
    /// Catalog name; `None` when the reference no longer resolves.
    pub name: Option<String>,
    pub purchase_price: Decimal,
    pub estimated_value: Decimal,
    pub gain: Decimal,
    pub known: bool,
}

fn index_catalog(catalog: &[Sneaker]) -> HashMap<&str, &Sneaker> {
    catalog.iter().map(|s| (s.id.as_str(), s)).collect()
}

fn value_holding(item: &PortfolioItem, sneaker: Option<&Sneaker>) -> HoldingValuation {
    // Unknown pairs are still counted, valued at nothing.
    let estimated_value = sneaker.map(valuation_fallback).unwrap_or(Decimal::ZERO);

    HoldingValuation {
        item_id: item.id,
        sneaker_id: item.sneaker_id.clone(),
        name: sneaker.map(|s| s.name.clone()),
        purchase_price: item.purchase_price,
        estimated_value,
        gain: estimated_value.saturating_sub(item.purchase_price),
        known: sneaker.is_some(),
    }
}

/// Value each owned pair against the catalog, in input order.
pub fn portfolio_holdings(owned: &[PortfolioItem], catalog: &[Sneaker]) -> Vec<HoldingValuation> {
    let index = index_catalog(catalog);
    owned
        .iter()
        .map(|item| value_holding(item, index.get(item.sneaker_id.as_str()).copied()))
        .collect()
}

/// Estimated value of a single pair (the "Est. Value" of a trade offer).
pub fn holding_value(item: &PortfolioItem, catalog: &[Sneaker]) -> Decimal {
    let sneaker = catalog.iter().find(|s| s.id == item.sneaker_id);
    value_holding(item, sneaker).estimated_value
}

/// Fold owned pairs into counts, cost basis, current value and profit.
///
/// Order-independent: every field is a sum over the holdings.
pub fn portfolio_summary(owned: &[PortfolioItem], catalog: &[Sneaker]) -> PortfolioSummary {
    summarize(&portfolio_holdings(owned, catalog))
}

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Summary over already-valued holdings.
pub fn summarize(holdings: &[HoldingValuation]) -> PortfolioSummary {
    let cost_basis = saturating_sum(holdings.iter().map(|h| h.purchase_price));
    let current_value = saturating_sum(holdings.iter().map(|h| h.estimated_value));
    let profit = current_value.saturating_sub(cost_basis);

    PortfolioSummary {
        count: holdings.len(),
        cost_basis,
        current_value,
        profit,
        profit_percent: percent_of(profit, cost_basis),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
