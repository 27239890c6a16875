//! Trading-pair definitions consumed by the registry refresh
//!
//! [`SymbolDefinition`] mirrors one entry of the venue's `exchangeInfo`
//! symbol listing. The metadata fetcher deserializes the listing and hands
//! the definitions to [`crate::registry::AssetRegistry::bulk_update`]; this
//! crate never fetches or parses the payload itself.

use crate::asset::{Asset, AssetError};
use serde::Deserialize;

/// Venue status string for an actively trading pair
const STATUS_TRADING: &str = "TRADING";

/// One trading pair from the venue's symbol listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDefinition {
    pub symbol: String,
    #[serde(default)]
    pub status: String,
    pub base_asset: String,
    pub base_asset_precision: u32,
    pub quote_asset: String,
    pub quote_precision: u32,
}

impl SymbolDefinition {
    /// Build a definition in code (callers that don't start from a payload)
    pub fn new(base: &str, base_precision: u32, quote: &str, quote_precision: u32) -> Self {
        let base = base.trim().to_uppercase();
        let quote = quote.trim().to_uppercase();
        Self {
            symbol: format!("{base}{quote}"),
            status: STATUS_TRADING.to_string(),
            base_asset: base,
            base_asset_precision: base_precision,
            quote_asset: quote,
            quote_precision,
        }
    }

    /// Validated base asset of this pair
    pub fn base(&self) -> Result<Asset, AssetError> {
        Asset::new(&self.base_asset, self.base_asset_precision)
    }

    /// Validated quote asset of this pair
    pub fn quote(&self) -> Result<Asset, AssetError> {
        Asset::new(&self.quote_asset, self.quote_precision)
    }

    /// Whether the venue currently allows trading this pair
    pub fn is_trading(&self) -> bool {
        self.status == STATUS_TRADING
    }
}

// ============================================================================
// Tests
// ============================================================================
