//! Cryptocurrency quote normalisation.

use std::collections::HashSet;

use crate::domain::content::CoinQuote;
use crate::domain::ports::RawCoin;

/// Convert raw coin rows into canonical quotes, deduplicating by coin id.
/// Rows without an id are dropped; symbols are reported uppercase.
pub fn quotes(raw: Vec<RawCoin>) -> Vec<CoinQuote> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(quote)
        .filter(|quote| seen.insert(quote.id.clone()))
        .collect()
}

fn quote(raw: RawCoin) -> Option<CoinQuote> {
    let id = raw.id.filter(|id| !id.trim().is_empty())?;
    Some(CoinQuote {
        id,
        name: raw
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_owned()),
        symbol: raw.symbol.unwrap_or_default().to_uppercase(),
        price: raw.price_usd.unwrap_or(0.0),
        change_24h: raw.change_24h_pct.unwrap_or(0.0),
        market_cap: raw.market_cap_usd.map_or(0, |cap| cap as i64),
        volume: raw.volume_24h_usd.map_or(0, |volume| volume as i64),
        image: raw.image_url.unwrap_or_default(),
        rank: raw.rank.unwrap_or(0),
        is_static: false,
    })
}
