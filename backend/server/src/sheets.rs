//! # Google Sheets
//!
//! The backing store is one shared spreadsheet. This system uses a single
//! logical operation against it: append a 7-column row to the orders
//! range. There is no read path, no retry, and no idempotency key, so a
//! client retry can produce a duplicate row. That gap is accepted.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use cart::orders::Order;

use crate::config::Config;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Append-only sink for submitted orders. The handler only ever sees this
/// seam, so tests can swap in a recording fake.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn append(&self, order: &Order) -> Result<(), StoreError>;
}

pub struct SheetsStore {
    http: Client,
    endpoint: String,
    token: String,
}

impl SheetsStore {
    pub fn new(config: &Config) -> Self {
        let endpoint = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=RAW",
            config.sheets_url, config.sheet_id, config.sheet_range
        );

        Self {
            http: Client::new(),
            endpoint,
            token: config.sheets_token.clone(),
        }
    }
}

#[async_trait]
impl OrderStore for SheetsStore {
    async fn append(&self, order: &Order) -> Result<(), StoreError> {
        let payload = json!({ "values": [order.row()] });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        response.error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
pub struct RecordingStore {
    pub appended: std::sync::Mutex<Vec<Order>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingStore {
    pub fn new() -> Self {
        Self {
            appended: std::sync::Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            appended: std::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl OrderStore for RecordingStore {
    async fn append(&self, order: &Order) -> Result<(), StoreError> {
        if self.fail {
            return Err("sheets quota exceeded".into());
        }

        self.appended.lock().unwrap().push(order.clone());

        Ok(())
    }
}
