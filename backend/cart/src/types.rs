use serde::{Deserialize, Serialize};

/// Menu category. Serialized values match the frontend wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Drink,
    Snack,
}

/// Static catalog entry. Prices are in the smallest currency unit (VND).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A menu item in the cart, extended with a quantity. Identity is the menu
/// id. Quantity is at least 1 while the item is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn line_total(&self) -> u64 {
        self.item.price * u64::from(self.quantity)
    }
}

/// Cart contents plus derived totals. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub total_price: u64,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
