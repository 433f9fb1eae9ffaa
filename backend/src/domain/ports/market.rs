//! Port for the cryptocurrency market data provider.

use async_trait::async_trait;

use super::UpstreamFailure;

/// One coin row from the markets listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCoin {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub price_usd: Option<f64>,
    pub change_24h_pct: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub rank: Option<u32>,
    pub image_url: Option<String>,
}

/// Fetch top coins by market capitalisation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn top_coins(&self, limit: usize) -> Result<Vec<RawCoin>, UpstreamFailure>;
}
