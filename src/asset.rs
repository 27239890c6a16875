//! Asset value type
//!
//! An [`Asset`] is an immutable (symbol, precision) record. Identity is the
//! symbol alone: equality, ordering and hashing ignore precision, so two
//! records for the same symbol stay interchangeable as map keys even after
//! the venue revises the precision between refreshes.
//!
//! Fields are private to force validation through `new()`. The reverse
//! conversion (string to asset) is a registry lookup, see
//! [`crate::registry::AssetRegistry::get`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Errors
// ============================================================================

/// Construction errors for [`Asset`]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssetError {
    #[error("asset symbol must not be empty")]
    EmptySymbol,

    #[error("asset precision must be greater than 0")]
    InvalidPrecision,
}

// ============================================================================
// Asset
// ============================================================================

/// Immutable asset record (symbol, precision)
///
/// The stored symbol is always the canonical trimmed upper-case form.
#[derive(Debug, Clone)]
pub struct Asset {
    symbol: String,
    precision: u32,
}

impl Asset {
    /// Create a validated asset.
    ///
    /// The symbol is trimmed and upper-cased before storage.
    ///
    /// # Errors
    /// - `EmptySymbol` if the symbol is empty or whitespace-only
    /// - `InvalidPrecision` if `precision` is 0
    pub fn new(symbol: &str, precision: u32) -> Result<Self, AssetError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(AssetError::EmptySymbol);
        }
        if precision == 0 {
            return Err(AssetError::InvalidPrecision);
        }
        Ok(Self {
            symbol: symbol.to_uppercase(),
            precision,
        })
    }

    /// Get the asset symbol (canonical upper-case form)
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the asset precision (decimal places valid for quantities)
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Truncate `amount` to this asset's precision.
    ///
    /// Truncates toward zero, never rounds up: a quantity sent to the venue
    /// must not exceed what the caller computed.
    pub fn quantize(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.precision, RoundingStrategy::ToZero)
    }

    /// Total order over optional assets: a missing operand sorts last.
    pub fn cmp_opt(a: Option<&Asset>, b: Option<&Asset>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

// Identity is the symbol alone; precision is excluded on purpose.

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl PartialOrd for Asset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Asset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(&other.symbol)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl AsRef<str> for Asset {
    fn as_ref(&self) -> &str {
        &self.symbol
    }
}

/// Serializes as the bare symbol string, the form order payloads and logs use.
impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.symbol)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_new_normalizes_symbol() {
        let asset = Asset::new("  btc ", 8).unwrap();
        assert_eq!(asset.symbol(), "BTC");
        assert_eq!(asset.precision(), 8);
    }

    #[test]
    fn test_new_empty_symbol_rejected() {
        assert_eq!(Asset::new("", 8).unwrap_err(), AssetError::EmptySymbol);
        assert_eq!(Asset::new("   ", 8).unwrap_err(), AssetError::EmptySymbol);
    }

    #[test]
    fn test_new_zero_precision_rejected() {
        assert_eq!(
            Asset::new("BTC", 0).unwrap_err(),
            AssetError::InvalidPrecision
        );
    }

    #[test]
    fn test_equality_ignores_precision() {
        let a = Asset::new("eth", 1).unwrap();
        let b = Asset::new("ETH", 8).unwrap();
        assert_eq!(a, b);

        let c = Asset::new("BTC", 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Asset::new("eth", 1).unwrap());
        // Same symbol, different precision: must collide
        assert!(!set.insert(Asset::new("ETH", 8).unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_is_ordinal_by_symbol() {
        let mut assets = vec![
            Asset::new("XRP", 8).unwrap(),
            Asset::new("BTC", 8).unwrap(),
            Asset::new("ETH", 2).unwrap(),
        ];
        assets.sort();
        let symbols: Vec<&str> = assets.iter().map(|a| a.symbol()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "XRP"]);
    }

    #[test]
    fn test_cmp_opt_missing_sorts_last() {
        let btc = Asset::new("BTC", 8).unwrap();
        let eth = Asset::new("ETH", 8).unwrap();

        assert_eq!(Asset::cmp_opt(Some(&btc), None), Ordering::Less);
        assert_eq!(Asset::cmp_opt(None, Some(&btc)), Ordering::Greater);
        assert_eq!(Asset::cmp_opt(None, None), Ordering::Equal);
        assert_eq!(Asset::cmp_opt(Some(&btc), Some(&eth)), Ordering::Less);

        let mut maybe_assets = vec![None, Some(eth), None, Some(btc)];
        maybe_assets.sort_by(|a, b| Asset::cmp_opt(a.as_ref(), b.as_ref()));
        let symbols: Vec<Option<&str>> = maybe_assets
            .iter()
            .map(|a| a.as_ref().map(|a| a.symbol()))
            .collect();
        assert_eq!(symbols, vec![Some("BTC"), Some("ETH"), None, None]);
    }

    #[test]
    fn test_display_is_symbol() {
        let asset = Asset::new("bnb", 8).unwrap();
        assert_eq!(asset.to_string(), "BNB");
        assert_eq!(asset.as_ref(), "BNB");
    }

    #[test]
    fn test_serialize_as_bare_symbol() {
        let asset = Asset::new("BTC", 8).unwrap();
        assert_eq!(serde_json::to_string(&asset).unwrap(), "\"BTC\"");
    }

    #[test]
    fn test_quantize_truncates_toward_zero() {
        let asset = Asset::new("BTC", 4).unwrap();
        let amount = Decimal::from_str("1.23456789").unwrap();
        assert_eq!(asset.quantize(amount), Decimal::from_str("1.2345").unwrap());

        // Already within precision: unchanged
        let exact = Decimal::from_str("0.5").unwrap();
        assert_eq!(asset.quantize(exact), exact);
    }
}
