//! exchange-assets - Canonical asset registry for a trading-venue integration
//!
//! One process-wide registry maps normalized symbol strings to immutable
//! asset records, supports aliasing a renamed symbol to its canonical
//! replacement, and refreshes atomically from the venue's trading-pair
//! listing. Readers never observe a refresh in flight.
//!
//! # Modules
//!
//! - [`asset`] - Immutable asset value (symbol, precision)
//! - [`registry`] - Concurrently-read asset cache with redirects and bulk refresh
//! - [`symbol`] - Trading-pair definitions consumed by the refresh
//! - [`seed`] - Generated table of well-known listings

pub mod asset;
pub mod registry;
pub mod seed;
pub mod symbol;

// Convenient re-exports at crate root
pub use asset::{Asset, AssetError};
pub use registry::{AssetRegistry, RegistryError};
pub use symbol::SymbolDefinition;
