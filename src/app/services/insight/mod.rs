//! Optional AI-generated insights per dive
//!
//! The core never depends on an insight being available. Providers resolve
//! every failure to `None` and log it.
//!
//! - [`client`] - Gemini-backed provider
//! - [`prompt`] - Prompt text and structured-output schema
//! - [`types`] - generateContent wire types

pub mod client;
pub mod prompt;
pub mod types;

#[cfg(test)]
pub mod tests;

use std::future::Future;

use futures::future::join_all;
use tracing::{info, warn};

use crate::app::models::{DiveEntry, GeminiInsight};
use crate::config::LogbookConfig;

pub use client::{GeminiInsightClient, parse_insight_text};

/// Source of advisory notes for single dives
pub trait InsightProvider {
    /// Insight for `entry`, or `None` when unavailable for any reason
    fn get_insight(&self, entry: &DiveEntry) -> impl Future<Output = Option<GeminiInsight>> + Send;
}

/// Provider for the configuration, if insights are enabled and usable
pub fn provider_from_config(config: &LogbookConfig) -> Option<GeminiInsightClient> {
    if !config.insight.enabled {
        return None;
    }

    match GeminiInsightClient::new(&config.insight, config.request_timeout) {
        Ok(client) => {
            info!("Insights enabled with model {}", client.model());
            Some(client)
        }
        Err(e) => {
            warn!("Insights disabled: {}", e);
            None
        }
    }
}

/// Request insights for every dive concurrently
///
/// Results line up with `dives`; completion order is unspecified.
pub async fn fetch_insights<P: InsightProvider>(
    provider: &P,
    dives: &[&DiveEntry],
) -> Vec<Option<GeminiInsight>> {
    join_all(dives.iter().map(|dive| provider.get_insight(dive))).await
}
