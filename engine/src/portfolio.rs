//! # Portfolio Valuation
//!
//! Pure read model over a token catalog: what each holding is worth, what
//! the whole portfolio is worth, and each position's share of the total.

use shared::dto::token::Token;

/// One valued holding
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub name: String,
    /// Sovereign-currency bucket for stablecoin positions
    pub fiat: Option<String>,
    pub amount: f64,
    /// `amount * unit price`; tokens without a price value at 0
    pub value: f64,
    /// Fraction of the portfolio total, 0 when the total is 0
    pub share: f64,
}

/// Valued portfolio, positions sorted by value descending
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub positions: Vec<Position>,
}

/// Value a catalog of holdings.
///
/// A zero or absent unit price values the position at 0 rather than
/// failing, and a zero portfolio total yields all-zero shares rather than
/// NaN.
pub fn summarize(tokens: &[Token]) -> PortfolioSummary {
    let total_value: f64 = tokens
        .iter()
        .map(|t| t.amount * t.price.unwrap_or(0.0))
        .sum();

    let mut positions: Vec<Position> = tokens
        .iter()
        .map(|t| {
            let value = t.amount * t.price.unwrap_or(0.0);
            let share = if total_value > 0.0 {
                value / total_value
            } else {
                0.0
            };
            Position {
                symbol: t.symbol.clone(),
                name: t.name.clone(),
                fiat: t.fiat.clone(),
                amount: t.amount,
                value,
                share,
            }
        })
        .collect();

    positions.sort_by(|a, b| b.value.total_cmp(&a.value));

    PortfolioSummary {
        total_value,
        positions,
    }
}
