//! Stats provider seam and payload parsing.
//!
//! The provider exposes two documents per account:
//!
//! ```text
//! overall   { "data": { "overallWN8": 2213.4, "battles": 16250, ... } }
//! recent    { "data": { "battles": { "1000": { "overall": { "wn8": 2051.9, ... } } } } }
//! ```
//!
//! Only the fields the classifiers need are parsed; everything else in the
//! payload is ignored, including recent windows other than the configured one.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Lifetime totals for one account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallStats {
    pub wn8: f64,
    pub battles: u64,
}

/// Errors from a stats source.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid account id {0:?}")]
    InvalidAccount(String),

    #[error("recent window {0} missing from payload")]
    MissingWindow(u32),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where member stats come from.
pub trait StatsSource {
    fn overall(&self, account: &str) -> impl Future<Output = Result<OverallStats, StatsError>> + Send;

    fn recent(&self, account: &str) -> impl Future<Output = Result<f64, StatsError>> + Send;
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct OverallData {
    #[serde(rename = "overallWN8")]
    overall_wn8: f64,
    battles: u64,
}

#[derive(Deserialize)]
struct RecentData {
    battles: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RecentWindow {
    overall: RecentOverall,
}

#[derive(Deserialize)]
struct RecentOverall {
    wn8: f64,
}

/// Parse an overall-stats payload.
pub fn parse_overall(json: &str) -> Result<OverallStats, StatsError> {
    let envelope: Envelope<OverallData> = serde_json::from_str(json)?;
    Ok(OverallStats {
        wn8: envelope.data.overall_wn8,
        battles: envelope.data.battles,
    })
}

/// Parse a recent-stats payload, picking the rating for `window` battles.
pub fn parse_recent(json: &str, window: u32) -> Result<f64, StatsError> {
    let mut envelope: Envelope<RecentData> = serde_json::from_str(json)?;
    let raw = envelope
        .data
        .battles
        .remove(&window.to_string())
        .ok_or(StatsError::MissingWindow(window))?;
    let recent: RecentWindow = serde_json::from_value(raw)?;
    Ok(recent.overall.wn8)
}

/// Reads saved provider payloads from `<dir>/<account>/{overall,recent}.json`.
#[derive(Debug, Clone)]
pub struct FileStatsSource {
    dir: PathBuf,
    window: u32,
}

impl FileStatsSource {
    pub fn new(dir: impl AsRef<Path>, window: u32) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            window,
        }
    }

    fn payload_path(&self, account: &str, name: &str) -> Result<PathBuf, StatsError> {
        if account.is_empty() || !account.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StatsError::InvalidAccount(account.to_string()));
        }
        Ok(self.dir.join(account).join(name))
    }
}

impl StatsSource for FileStatsSource {
    async fn overall(&self, account: &str) -> Result<OverallStats, StatsError> {
        let path = self.payload_path(account, "overall.json")?;
        let json = tokio::fs::read_to_string(path).await?;
        parse_overall(&json)
    }

    async fn recent(&self, account: &str) -> Result<f64, StatsError> {
        let path = self.payload_path(account, "recent.json")?;
        let json = tokio::fs::read_to_string(path).await?;
        parse_recent(&json, self.window)
    }
}
