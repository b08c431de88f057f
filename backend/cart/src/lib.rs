//! # Cart Engine
//!
//! Shared domain crate for the ordering flow: menu catalog, cart state
//! machine, and the order wire contract.
//!
//! ## Overall Data Structures
//!
//! - Menu catalog: fixed literal table loaded once per process. Never
//!   mutated. Each entry carries id, display name, unit price in VND,
//!   category, glyph, and an optional description.
//!
//! - Cart: ordered sequence of menu items with quantities, insertion order
//!   is display order. `total_items` and `total_price` are derived and
//!   recomputed from the item list after every transition so they cannot
//!   drift.
//!
//! - Durable slot: one JSON file holding the serialized item sequence.
//!   Read once when a session opens, written after every mutation. Absent
//!   or corrupt content means "no saved cart".
//!
//! ## Flow
//!
//! - Session opens, hydrating the cart from the slot
//! - Every user action goes through the reducer, then the resulting item
//!   list is mirrored back to the slot
//! - On successful submission the cart is cleared (and the empty list is
//!   persisted)
//!
//! ## Notes
//!
//! - The reducer itself is pure. Persistence lives in [`session`] so the
//!   transition logic stays testable without touching the filesystem.
//!
//! - Orders are built server side at submission time and handed off to the
//!   external sheet immediately. Nothing here keeps a copy.

pub mod menu;
pub mod orders;
pub mod reducer;
pub mod session;
pub mod slot;
pub mod types;

pub use reducer::{CartAction, reduce};
pub use session::CartSession;
pub use slot::CartSlot;
pub use types::{CartItem, CartState, Category, MenuItem};
