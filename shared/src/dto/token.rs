use serde::{Deserialize, Serialize};

/// A tradable asset supplied by the token catalog.
///
/// Stablecoins carry a `fiat` tag naming the sovereign-currency bucket they
/// belong to (and usually the `bond` series backing them); plain tokens
/// leave both absent. The on-hand `amount` is the user's holding as reported
/// by the catalog and is never negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Unique identifier, stable for the lifetime of the session
    pub id: String,
    /// Display symbol (e.g. "MXNs", "USDC")
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Icon reference (URL or asset key)
    pub icon: String,
    /// On-hand amount, non-negative
    pub amount: f64,
    /// Sovereign-currency bucket for stablecoins (e.g. "MXN"); absent for
    /// non-stablecoin tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    /// Bond series backing the stablecoin (e.g. "CETES")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond: Option<String>,
    /// Unit price in USD terms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Token catalog response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenCatalogResponse {
    pub tokens: Vec<Token>,
}
