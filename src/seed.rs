//! Generated asset seed table
//!
//! Well-known venue listings compiled into the crate. The registry seeds
//! itself from this table at construction and keeps it current through
//! `bulk_update`; the table only has to be roughly current at build time.

/// (symbol, precision) pairs known at build time
pub const ASSETS: &[(&str, u32)] = &[
    ("ADA", 8),
    ("ADX", 8),
    ("AE", 8),
    ("AION", 8),
    ("AMB", 8),
    ("ARK", 8),
    ("ARN", 8),
    ("AST", 8),
    ("BAT", 8),
    ("BCC", 8),
    ("BCD", 8),
    ("BNB", 8),
    ("BNT", 8),
    ("BQX", 8),
    ("BTC", 8),
    ("BTG", 8),
    ("BTS", 8),
    ("CDT", 8),
    ("CMT", 8),
    ("CND", 8),
    ("DASH", 8),
    ("DGD", 8),
    ("DLT", 8),
    ("DNT", 8),
    ("EDO", 8),
    ("ELF", 8),
    ("ENG", 8),
    ("ENJ", 8),
    ("EOS", 8),
    ("ETC", 8),
    ("ETH", 8),
    ("EVX", 8),
    ("FUEL", 8),
    ("FUN", 8),
    ("GAS", 8),
    ("GTO", 8),
    ("GVT", 8),
    ("GXS", 8),
    ("ICX", 8),
    ("INS", 8),
    ("IOST", 8),
    ("IOTA", 8),
    ("KMD", 8),
    ("KNC", 8),
    ("LEND", 8),
    ("LINK", 8),
    ("LRC", 8),
    ("LSK", 8),
    ("LTC", 8),
    ("LUN", 8),
    ("MANA", 8),
    ("MCO", 8),
    ("MDA", 8),
    ("MOD", 8),
    ("MTH", 8),
    ("MTL", 8),
    ("NANO", 8),
    ("NAV", 8),
    ("NEBL", 8),
    ("NEO", 8),
    ("NULS", 8),
    ("OAX", 8),
    ("OMG", 8),
    ("ONT", 8),
    ("OST", 8),
    ("PIVX", 8),
    ("POA", 8),
    ("POE", 8),
    ("POWR", 8),
    ("PPT", 8),
    ("QSP", 8),
    ("QTUM", 8),
    ("RCN", 8),
    ("RDN", 8),
    ("REQ", 8),
    ("RLC", 8),
    ("SALT", 8),
    ("SNGLS", 8),
    ("SNM", 8),
    ("SNT", 8),
    ("STEEM", 8),
    ("STORJ", 8),
    ("STRAT", 8),
    ("SUB", 8),
    ("SYS", 8),
    ("THETA", 8),
    ("TNB", 8),
    ("TNT", 8),
    ("TRX", 8),
    ("TUSD", 8),
    ("USDT", 8),
    ("VEN", 8),
    ("VIA", 8),
    ("VIB", 8),
    ("WABI", 8),
    ("WAN", 8),
    ("WAVES", 8),
    ("WTC", 8),
    ("XEM", 8),
    ("XLM", 8),
    ("XMR", 8),
    ("XRP", 8),
    ("XVG", 8),
    ("XZC", 8),
    ("YOYO", 8),
    ("ZEC", 8),
    ("ZIL", 8),
    ("ZRX", 8),
];

/// Alias to canonical symbol. "BCH" resolves to the BCC Bitcoin Cash listing.
pub const REDIRECTS: &[(&str, &str)] = &[("BCH", "BCC")];

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;
    use std::collections::HashSet;

    #[test]
    fn test_seed_assets_are_valid() {
        for &(symbol, precision) in ASSETS {
            let asset = Asset::new(symbol, precision).unwrap();
            // Table entries are stored in canonical form already
            assert_eq!(asset.symbol(), symbol);
        }
    }

    #[test]
    fn test_seed_assets_have_no_duplicates() {
        let mut seen = HashSet::new();
        for &(symbol, _) in ASSETS {
            assert!(seen.insert(symbol), "duplicate seed symbol {symbol}");
        }
    }

    #[test]
    fn test_redirects_target_seeded_assets() {
        let symbols: HashSet<&str> = ASSETS.iter().map(|&(s, _)| s).collect();
        for &(alias, canonical) in REDIRECTS {
            assert!(
                symbols.contains(canonical),
                "redirect {alias} points at unseeded asset {canonical}"
            );
            assert!(
                !symbols.contains(alias),
                "redirect alias {alias} shadows a seeded asset"
            );
        }
    }
}
