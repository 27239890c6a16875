//! Asset registry
//!
//! Process-wide cache of tradable assets, keyed by normalized symbol.
//! Redirects live in the same map: an alias key holds the `Arc` of its
//! canonical asset, so a lookup of the alias yields the canonical asset
//! directly with no second hop.
//!
//! The map sits behind one `RwLock`. Lookups run concurrently under the read
//! lock; `bulk_update` holds the write lock across its whole prune+upsert
//! sequence, so a reader sees either the full old state or the full new
//! state, never a refresh in flight.

use crate::asset::{Asset, AssetError};
use crate::seed;
use crate::symbol::SymbolDefinition;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// Errors
// ============================================================================

/// Errors returned by registry mutations
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    /// An empty listing is rejected so a bad upstream fetch cannot wipe the
    /// registry. The caller should treat this as a skipped refresh.
    #[error("symbol listing must not be empty")]
    EmptyUpdate,

    #[error("unknown canonical asset '{symbol}' for redirect")]
    UnknownAsset { symbol: String },

    #[error(transparent)]
    Asset(#[from] AssetError),
}

// ============================================================================
// AssetRegistry
// ============================================================================

/// Concurrently-read, exclusively-written asset cache
///
/// One instance per process, constructed at startup and injected into
/// callers. Callers hold `Arc<Asset>` handles; the records themselves are
/// immutable.
pub struct AssetRegistry {
    entries: RwLock<FxHashMap<String, Arc<Asset>>>,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Registry pre-populated from the generated seed table and its
    /// redirects, through the same insert paths a refresh uses.
    ///
    /// Panics if the seed table is malformed; that is build-time data, and
    /// the seed tests keep it valid.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        {
            let mut entries = registry.entries.write().unwrap();
            for &(symbol, precision) in seed::ASSETS {
                let asset =
                    Asset::new(symbol, precision).expect("seed table contains an invalid asset");
                entries.insert(asset.symbol().to_string(), Arc::new(asset));
            }
        }
        for &(alias, canonical) in seed::REDIRECTS {
            registry
                .insert_redirect(alias, canonical)
                .expect("seed redirect points at an unseeded asset");
        }
        registry
    }

    /// Look up an asset by symbol.
    ///
    /// The input is trimmed and upper-cased before the lookup. Absence is a
    /// valid negative result, not an error.
    pub fn get(&self, raw: &str) -> Option<Arc<Asset>> {
        let key = normalize(raw);
        if key.is_empty() {
            return None;
        }
        self.entries.read().unwrap().get(&key).cloned()
    }

    /// Alias a symbol to an asset already in the registry.
    ///
    /// The alias key stores the canonical entry's own `Arc`, so lookups of
    /// either symbol return the same record.
    pub fn insert_redirect(&self, alias: &str, canonical: &str) -> Result<(), RegistryError> {
        let alias = normalize(alias);
        if alias.is_empty() {
            return Err(AssetError::EmptySymbol.into());
        }
        let canonical = normalize(canonical);

        let mut entries = self.entries.write().unwrap();
        let target = entries
            .get(&canonical)
            .cloned()
            .ok_or(RegistryError::UnknownAsset { symbol: canonical })?;
        entries.insert(alias, target);
        Ok(())
    }

    /// Replace the registered asset set with the assets referenced by a
    /// trading-pair listing.
    ///
    /// The target set is the union of every definition's base and quote
    /// asset, de-duplicated by symbol. Existing entries whose *value* is not
    /// in the target set are pruned; pruning by value rather than key is what
    /// keeps a redirect alive as long as its canonical asset stays listed.
    /// Every target asset is then upserted at its own symbol key, which also
    /// refreshes a precision the venue changed upstream.
    ///
    /// Validation happens before any mutation: on error the previous state is
    /// fully intact.
    pub fn bulk_update(&self, symbols: &[SymbolDefinition]) -> Result<(), RegistryError> {
        if symbols.is_empty() {
            return Err(RegistryError::EmptyUpdate);
        }

        let mut target: FxHashMap<String, Arc<Asset>> = FxHashMap::default();
        for definition in symbols {
            for asset in [definition.base()?, definition.quote()?] {
                target
                    .entry(asset.symbol().to_string())
                    .or_insert_with(|| Arc::new(asset));
            }
        }

        let mut entries = self.entries.write().unwrap();

        let before = entries.len();
        entries.retain(|_, asset| target.contains_key(asset.symbol()));
        let pruned = before - entries.len();

        for (symbol, asset) in target {
            entries.insert(symbol, asset);
        }

        tracing::info!(
            target: "ASSETS",
            "asset registry refreshed: {} entries, {} pruned",
            entries.len(),
            pruned
        );

        Ok(())
    }

    /// Number of entries, aliases included
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Point-in-time list of distinct registered assets, sorted by symbol.
    /// Aliases collapse into their canonical asset.
    pub fn snapshot(&self) -> Vec<Arc<Asset>> {
        let entries = self.entries.read().unwrap();
        let mut assets: Vec<Arc<Asset>> = entries.values().cloned().collect();
        drop(entries);
        assets.sort();
        assets.dedup();
        assets
    }
}

/// Canonical lookup key: trimmed, upper-cased
fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ============================================================================
// Tests
// ============================================================================
