//! Cryptocurrency market aggregation.

use std::sync::Arc;

use crate::domain::normalize;
use crate::domain::ports::MarketSource;
use crate::domain::{mock, CoinQuote, Envelope};

const COIN_LIMIT: usize = 10;

pub struct MarketFeedService {
    source: Arc<dyn MarketSource>,
}

impl MarketFeedService {
    pub fn new(source: Arc<dyn MarketSource>) -> Self {
        Self { source }
    }

    /// Top coins by market capitalisation; preference-independent.
    pub async fn top(&self) -> Envelope<CoinQuote> {
        match self.source.top_coins(COIN_LIMIT).await {
            Ok(raw) => Envelope::real(normalize::market::quotes(raw)),
            Err(err) => {
                tracing::warn!(error = %err, "market fetch failed");
                Envelope::mock(mock::coins(), Some(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::{MockMarketSource, RawCoin, UpstreamFailure};

    #[tokio::test]
    async fn live_quotes_pass_through_normalisation() {
        let mut source = MockMarketSource::new();
        source
            .expect_top_coins()
            .with(eq(COIN_LIMIT))
            .times(1)
            .returning(|_| {
                Ok(vec![RawCoin {
                    id: Some("bitcoin".to_owned()),
                    symbol: Some("btc".to_owned()),
                    name: Some("Bitcoin".to_owned()),
                    price_usd: Some(50_000.0),
                    ..RawCoin::default()
                }])
            });

        let envelope = MarketFeedService::new(Arc::new(source)).top().await;
        assert!(!envelope.is_mock);
        assert_eq!(envelope.items[0].symbol, "BTC");
    }

    #[tokio::test]
    async fn outage_falls_back_to_the_synthetic_majors() {
        let mut source = MockMarketSource::new();
        source
            .expect_top_coins()
            .returning(|_| Err(UpstreamFailure::status(502, "bad gateway")));

        let envelope = MarketFeedService::new(Arc::new(source)).top().await;
        assert!(envelope.is_mock);
        assert_eq!(envelope.items[0].symbol, "BTC");
        assert!(envelope.items.iter().all(|coin| coin.is_static));
    }
}
