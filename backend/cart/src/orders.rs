//! Order wire contract shared by the server and the client.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::types::CartItem;

/// Submission request body. Fields are optional so the handler can answer
/// missing data with its own validation message instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub name: Option<String>,
    pub items: Option<Vec<CartItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Submission response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResponse {
    pub fn ok(order_id: String) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}

/// Downstream order lifecycle. Always `Pending` at creation here; later
/// transitions happen in the sheet, outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Confirmed,
    Completed,
}

/// A submission record. Built by the server at submission time and handed
/// to the external sheet immediately; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub name: String,
    pub items: Vec<CartItem>,
    pub total_price: u64,
    pub notes: String,
    pub timestamp: String,
    pub status: Status,
}

impl Order {
    /// Human-readable item summary, e.g. `"2x Phở Bò, 1x Trà Đá"`.
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|entry| format!("{}x {}", entry.quantity, entry.item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The sheet row, in column order:
    /// Timestamp | Order ID | Name | Item Details | Total Price | Notes | Status
    pub fn row(&self) -> Vec<Value> {
        let notes = if self.notes.is_empty() {
            "-"
        } else {
            self.notes.as_str()
        };

        vec![
            json!(self.timestamp),
            json!(self.order_id),
            json!(self.name),
            json!(self.item_summary()),
            json!(self.total_price),
            json!(notes),
            json!(self.status),
        ]
    }
}
