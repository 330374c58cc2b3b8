use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[mockall_double::double]
use crate::yahoo_client::YahooClient;

const SP500_SYMBOL: &str = "^GSPC";

#[derive(Default)]
pub struct ReturnFetcher {
    yahoo_client: YahooClient,
}

impl ReturnFetcher {
    /// Computes the trailing one-year return of the S&P 500 from its latest
    /// close and the oldest close in a one-year daily window.
    pub async fn fetch_year_return(&self) -> Result<ReturnResult, FetchError> {
        log::info!("Fetching latest S&P 500 close");
        let current_bars = self.yahoo_client.daily_history(SP500_SYMBOL, "1d").await?;
        let latest = current_bars.last().ok_or(FetchError::NoCurrentData)?;

        log::info!("Fetching one-year S&P 500 history");
        let history = self.yahoo_client.daily_history(SP500_SYMBOL, "1y").await?;
        let year_ago_price = match history.first() {
            Some(oldest) if history.len() >= 2 => oldest.close,
            _ => return Err(FetchError::InsufficientHistory),
        };

        let current_price = latest.close;
        let year_return = (current_price - year_ago_price) / year_ago_price * 100.0;
        Ok(ReturnResult {
            current_price,
            year_ago_price,
            year_return,
            date: latest.timestamp.date_naive(),
        })
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not fetch current S&P 500 data")]
    NoCurrentData,

    #[error("insufficient historical data")]
    InsufficientHistory,

    #[error("market data provider unavailable: {0}")]
    ProviderUnavailable(#[from] reqwest::Error),
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ReturnResult {
    pub current_price: f64,
    pub year_ago_price: f64,

    /// Percentage, full precision; rounding is up to the renderer.
    pub year_return: f64,

    /// Calendar date of the latest close.
    pub date: NaiveDate,
}
