use chrono::DateTime;
use chrono::Utc;
use itertools::Itertools;
use reqwest::Client;
use serde::Deserialize;

const CHART_ENDPOINT: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// Yahoo rejects requests carrying the default reqwest agent
const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Default)]
pub struct YahooClient;

#[mockall::automock]
impl YahooClient {
    /// Downloads the daily bars of `symbol` over `range` (e.g. "1d", "1y"),
    /// oldest first.
    pub async fn daily_history(
        &self,
        symbol: &str,
        range: &str,
    ) -> reqwest::Result<Vec<DailyBar>> {
        let endpoint = format!("{}/{}?range={}&interval=1d", CHART_ENDPOINT, symbol, range);
        let response: ChartResponse = Client::builder()
            .build()?
            .get(&endpoint)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(flatten_bars(response))
    }
}

fn flatten_bars(response: ChartResponse) -> Vec<DailyBar> {
    let Some(result) = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
    else {
        return Vec::new();
    };
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|quote| quote.close)
        .unwrap_or_default();
    std::iter::zip(result.timestamp, closes)
        .filter_map(|(seconds, close)| {
            let timestamp = DateTime::from_timestamp(seconds, 0)?;
            Some(DailyBar {
                close: close?,
                timestamp,
            })
        })
        .sorted_by_key(|bar| bar.timestamp)
        .collect()
}

#[derive(Debug, PartialEq, Clone)]
pub struct DailyBar {
    /// Price at market close
    pub close: f64,

    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
