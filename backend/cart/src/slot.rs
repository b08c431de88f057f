use std::{env, fs, path::PathBuf};

use tracing::warn;

use crate::types::CartItem;

pub const SLOT_ENV: &str = "QUANAN_CART_PATH";
pub const DEFAULT_SLOT: &str = "restaurant-cart.json";

/// Durable local slot for the cart: one JSON file holding the serialized
/// item sequence. Survives restarts on one device only.
#[derive(Debug, Clone)]
pub struct CartSlot {
    path: PathBuf,
}

impl CartSlot {
    pub fn from_env() -> Self {
        let path = env::var(SLOT_ENV).unwrap_or_else(|_| DEFAULT_SLOT.to_string());

        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the saved item sequence. An absent file or unparseable content
    /// is "no saved cart", never an error.
    pub fn load(&self) -> Vec<CartItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!("Discarding saved cart at {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Mirror the item sequence to disk. A failed write is logged and the
    /// cart stays usable in memory.
    pub fn save(&self, items: &[CartItem]) {
        match serde_json::to_string(items) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!("Failed to persist cart to {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("Failed to serialize cart: {e}"),
        }
    }
}
