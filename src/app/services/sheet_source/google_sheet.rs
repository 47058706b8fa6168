//! Published Google Sheet export over HTTP

use reqwest::{Client, Url};
use tracing::debug;

use super::TabularSource;
use crate::config::LogbookConfig;
use crate::constants::USER_AGENT;
use crate::{Error, Result};

/// CSV export of one tab of a published spreadsheet
#[derive(Debug, Clone)]
pub struct GoogleSheetSource {
    client: Client,
    url: Url,
}

impl GoogleSheetSource {
    /// Build the export URL and HTTP client from configuration
    pub fn new(config: &LogbookConfig) -> Result<Self> {
        let url = export_url(&config.sheets_base_url, &config.sheet_id, &config.tab_name)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self { client, url })
    }
}

/// `{base}/{sheet_id}/gviz/tq?tqx=out:csv&sheet={tab}` with the tab encoded
pub fn export_url(base_url: &str, sheet_id: &str, tab_name: &str) -> Result<Url> {
    let raw = format!("{}/{}/gviz/tq", base_url.trim_end_matches('/'), sheet_id);
    let mut url = Url::parse(&raw).map_err(|e| Error::invalid_url(&raw, e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("tqx", "out:csv")
        .append_pair("sheet", tab_name);
    Ok(url)
}

impl TabularSource for GoogleSheetSource {
    fn describe(&self) -> String {
        format!("published sheet at {}", self.url)
    }

    async fn fetch_text(&self) -> Result<String> {
        debug!("Requesting sheet export: {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("Failed to reach {}", self.url), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(self.url.as_str(), status.as_u16()));
        }

        // Private or unpublished sheets answer 200 with an HTML sign-in page
        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if content_type.starts_with("text/html") {
                return Err(Error::unexpected_content(self.url.as_str(), content_type));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http("Failed to read export body", e))?;

        debug!("Received {} bytes of CSV", body.len());
        Ok(body)
    }
}
