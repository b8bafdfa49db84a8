//! # Rate Generator
//!
//! Pure conversion-rate lookup for an ordered token pair. Rates come from a
//! static direct-pair table, falling back to the ratio of fixed
//! fiat-equivalents for the recognized stablecoin symbols, and finally to
//! 1.0 for unknown pairs. A bounded random jitter is applied on top so
//! successive quotes move within a ±1% band.

use once_cell::sync::Lazy;
use rand::Rng;
use shared::dto::token::Token;
use std::collections::HashMap;

/// Jitter band applied to every quote, as a fraction of the base rate
pub const RATE_JITTER: f64 = 0.01;

/// Direct base rates for known symbol pairs, keyed (from, to).
/// Takes precedence over the fiat-equivalent fallback.
const DIRECT_RATES: &[((&str, &str), f64)] = &[
    (("MXNs", "USDC"), 0.058),
    (("USDC", "MXNs"), 17.24),
    (("BRLs", "USDC"), 0.18),
    (("USDC", "BRLs"), 5.55),
    (("EURs", "USDC"), 1.09),
    (("USDC", "EURs"), 0.917),
];

/// Fiat-equivalent value of one unit of each recognized stablecoin, in
/// common (USD) terms. Pairs without a direct entry derive their rate as
/// `fiat[from] / fiat[to]`.
static FIAT_EQUIVALENTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USDC", 1.0),
        ("USDT", 0.9998),
        ("MXNs", 0.058),
        ("BRLs", 0.18),
        ("EURs", 1.09),
        ("GBPs", 1.27),
        ("CHFs", 1.11),
        ("JPYs", 0.0067),
    ])
});

/// Base rate for a pair, before jitter.
///
/// Lookup order: direct pair table, fiat-equivalent ratio, then 1.0 so an
/// unrecognized pair quotes at par rather than blocking the trade.
pub fn base_rate(from: &Token, to: &Token) -> f64 {
    let direct = DIRECT_RATES
        .iter()
        .find(|((f, t), _)| *f == from.symbol && *t == to.symbol)
        .map(|(_, rate)| *rate);
    if let Some(rate) = direct {
        return rate;
    }

    if let (Some(from_fiat), Some(to_fiat)) = (
        FIAT_EQUIVALENTS.get(from.symbol.as_str()),
        FIAT_EQUIVALENTS.get(to.symbol.as_str()),
    ) {
        if *to_fiat > 0.0 {
            return from_fiat / to_fiat;
        }
    }

    1.0
}

/// Quote a conversion rate for the pair, or `None` when either side is
/// missing. Repeated calls with the same inputs draw from the same ±1%
/// band around the base rate; they are not bit-identical.
pub fn quote_rate(from: Option<&Token>, to: Option<&Token>) -> Option<f64> {
    let (from, to) = (from?, to?);
    let base = base_rate(from, to);
    let jitter: f64 = rand::rng().random_range(-RATE_JITTER..=RATE_JITTER);
    Some(base * (1.0 + jitter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str) -> Token {
        Token {
            id: symbol.to_lowercase(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            icon: format!("tokens/{}.svg", symbol.to_lowercase()),
            amount: 0.0,
            fiat: None,
            bond: None,
            price: None,
        }
    }

    #[test]
    fn test_direct_pair_takes_precedence() {
        let rate = base_rate(&token("MXNs"), &token("USDC"));
        assert_eq!(rate, 0.058);
    }

    #[test]
    fn test_fiat_fallback_ratio() {
        // GBPs/CHFs has no direct entry; derived from fiat equivalents
        let rate = base_rate(&token("GBPs"), &token("CHFs"));
        assert!((rate - 1.27 / 1.11).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_pair_quotes_at_par() {
        let rate = base_rate(&token("SOL"), &token("XYZ"));
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_quote_requires_both_sides() {
        assert!(quote_rate(None, Some(&token("USDC"))).is_none());
        assert!(quote_rate(Some(&token("MXNs")), None).is_none());
        assert!(quote_rate(None, None).is_none());
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let from = token("MXNs");
        let to = token("USDC");
        for _ in 0..200 {
            let rate = quote_rate(Some(&from), Some(&to)).unwrap();
            assert!(rate >= 0.058 * (1.0 - RATE_JITTER));
            assert!(rate <= 0.058 * (1.0 + RATE_JITTER));
        }
    }
}
