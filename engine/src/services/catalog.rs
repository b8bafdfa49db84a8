//! # Token Catalog Client
//!
//! HTTP access to the platform's token catalog, plus a static in-memory
//! catalog for demos and tests. Both implement
//! [`CatalogService`](crate::core::service::CatalogService); the engine
//! never depends on a concrete backend.

use async_trait::async_trait;
use reqwest::Client;
use shared::dto::token::{Token, TokenCatalogResponse};

use crate::core::service::CatalogService;

/// HTTP client for the catalog endpoints of the backend API.
///
/// Configured with a 10 second timeout to prevent freezing.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

/// Get the stablecoin catalog.
#[tracing::instrument(skip(client))]
pub async fn get_stablecoins(client: &CatalogClient) -> Result<Vec<Token>, String> {
    fetch_catalog(client, "/api/market/stablecoins").await
}

/// Get the full token catalog.
#[tracing::instrument(skip(client))]
pub async fn get_tokens(client: &CatalogClient) -> Result<Vec<Token>, String> {
    fetch_catalog(client, "/api/market/tokens").await
}

async fn fetch_catalog(client: &CatalogClient, endpoint: &str) -> Result<Vec<Token>, String> {
    let start = std::time::Instant::now();
    let url = format!("{}{}", client.base_url, endpoint);

    tracing::debug!(url = %url, "Fetching token catalog");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Catalog fetch network error");
        format!("Network error: {}", e)
    })?;

    let duration = start.elapsed();

    if response.status().is_success() {
        let result = response
            .json::<TokenCatalogResponse>()
            .await
            .map(|resp| resp.tokens)
            .map_err(|e| {
                tracing::error!(error = %e, "Catalog response parse error");
                format!("Failed to parse response: {}", e)
            });

        if let Ok(ref tokens) = result {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                token_count = tokens.len(),
                "Catalog fetched successfully"
            );
        }
        result
    } else {
        let status = response.status();
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Catalog fetch failed"
        );
        Err(format!("Failed to fetch catalog: {}", status))
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn fetch_stablecoins(&self) -> Result<Vec<Token>, String> {
        get_stablecoins(self).await
    }

    async fn fetch_tokens(&self) -> Result<Vec<Token>, String> {
        get_tokens(self).await
    }
}

/// Fixed in-memory catalog: the platform's demo stablecoin set plus a
/// couple of plain tokens. Used by the demo binary and tests.
#[derive(Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The built-in token set
    pub fn tokens() -> Vec<Token> {
        vec![
            Token {
                id: "mxns".to_string(),
                symbol: "MXNs".to_string(),
                name: "Mexican Peso Stablecoin".to_string(),
                icon: "tokens/mxns.svg".to_string(),
                amount: 100000.0,
                fiat: Some("MXN".to_string()),
                bond: Some("CETES".to_string()),
                price: Some(0.058),
            },
            Token {
                id: "brls".to_string(),
                symbol: "BRLs".to_string(),
                name: "Brazilian Real Stablecoin".to_string(),
                icon: "tokens/brls.svg".to_string(),
                amount: 2500.0,
                fiat: Some("BRL".to_string()),
                bond: Some("Tesouro Direto".to_string()),
                price: Some(0.18),
            },
            Token {
                id: "eurs".to_string(),
                symbol: "EURs".to_string(),
                name: "Euro Stablecoin".to_string(),
                icon: "tokens/eurs.svg".to_string(),
                amount: 800.0,
                fiat: Some("EUR".to_string()),
                bond: Some("EuroBonds".to_string()),
                price: Some(1.09),
            },
            Token {
                id: "gbps".to_string(),
                symbol: "GBPs".to_string(),
                name: "British Pound Stablecoin".to_string(),
                icon: "tokens/gbps.svg".to_string(),
                amount: 450.0,
                fiat: Some("GBP".to_string()),
                bond: Some("Gilts".to_string()),
                price: Some(1.27),
            },
            Token {
                id: "usdc".to_string(),
                symbol: "USDC".to_string(),
                name: "USD Coin".to_string(),
                icon: "tokens/usdc.svg".to_string(),
                amount: 1500.0,
                fiat: Some("USD".to_string()),
                bond: None,
                price: Some(1.0),
            },
            Token {
                id: "sol".to_string(),
                symbol: "SOL".to_string(),
                name: "Solana".to_string(),
                icon: "tokens/sol.svg".to_string(),
                amount: 12.5,
                fiat: None,
                bond: None,
                price: Some(98.5),
            },
        ]
    }
}

#[async_trait]
impl CatalogService for StaticCatalog {
    async fn fetch_stablecoins(&self) -> Result<Vec<Token>, String> {
        Ok(Self::tokens()
            .into_iter()
            .filter(|t| t.fiat.is_some())
            .collect())
    }

    async fn fetch_tokens(&self) -> Result<Vec<Token>, String> {
        Ok(Self::tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_stablecoins_are_fiat_tagged() {
        let catalog = StaticCatalog::new();
        let stablecoins = catalog.fetch_stablecoins().await.unwrap();
        assert!(!stablecoins.is_empty());
        assert!(stablecoins.iter().all(|t| t.fiat.is_some()));
    }

    #[tokio::test]
    async fn test_static_catalog_includes_plain_tokens() {
        let catalog = StaticCatalog::new();
        let tokens = catalog.fetch_tokens().await.unwrap();
        assert!(tokens.iter().any(|t| t.fiat.is_none()));
    }
}
