use serde::{Deserialize, Serialize};

use super::token::Token;

/// Persisted snapshot of an in-progress swap or redeem session.
///
/// This is the exact record written to the local session slot after every
/// mutating transition, and read back on startup to resume where the user
/// left off. Amounts are kept as the decimal text the user typed so partial
/// input like `"12."` survives a reload. `last_updated` is unix
/// milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_token: Option<Token>,
    pub from_amount: String,
    pub to_amount: String,
    /// Units of `to_token` per 1 unit of `from_token`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_roundtrip() {
        let snapshot = SessionSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_partial_amount_survives_roundtrip() {
        let snapshot = SessionSnapshot {
            from_amount: "12.".to_string(),
            to_amount: String::new(),
            rate: Some(0.058),
            last_updated: Some(1_700_000_000_000),
            ..SessionSnapshot::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_missing_fields_default() {
        // A foreign or truncated record still deserializes to something sane
        let back: SessionSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(back, SessionSnapshot::default());
    }
}
