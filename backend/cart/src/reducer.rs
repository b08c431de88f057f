use crate::types::{CartItem, CartState, MenuItem};

/// Cart transitions. Every view mutates the cart through these and nothing
/// else.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Increment the quantity if the item is already present, otherwise
    /// append it with quantity 1.
    Add(MenuItem),
    /// Drop the item with this id. Absent id is a no-op.
    Remove(String),
    /// Set the quantity outright. A value of 0 or less removes the item;
    /// an absent id is a no-op (items are not resurrected).
    SetQuantity { id: String, quantity: i64 },
    /// Reset to the canonical empty cart.
    Clear,
    /// Replace the item list wholesale, used once at startup from the
    /// durable slot.
    Hydrate(Vec<CartItem>),
}

fn with_totals(items: Vec<CartItem>) -> CartState {
    let total_items = items.iter().map(|entry| u64::from(entry.quantity)).sum();
    let total_price = items.iter().map(CartItem::line_total).sum();

    CartState {
        items,
        total_items,
        total_price,
    }
}

/// Pure transition function. Totals are recomputed from the item list on
/// every call, never patched incrementally.
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(item) => {
            let mut items = state.items;

            match items.iter_mut().find(|entry| entry.id() == item.id) {
                Some(existing) => existing.quantity += 1,
                None => items.push(CartItem::new(item)),
            }

            with_totals(items)
        }

        CartAction::Remove(id) => {
            let items = state
                .items
                .into_iter()
                .filter(|entry| entry.id() != id)
                .collect();

            with_totals(items)
        }

        CartAction::SetQuantity { id, quantity } => {
            let items = state
                .items
                .into_iter()
                .filter_map(|mut entry| {
                    if entry.id() == id {
                        if quantity <= 0 {
                            return None;
                        }
                        entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                    }
                    Some(entry)
                })
                .collect();

            with_totals(items)
        }

        CartAction::Clear => CartState::default(),

        // Stored data may predate the quantity >= 1 invariant, drop any
        // zero entries instead of letting them back in.
        CartAction::Hydrate(items) => {
            with_totals(items.into_iter().filter(|entry| entry.quantity > 0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CartAction, reduce};
    use crate::types::{CartItem, CartState, Category, MenuItem};

    fn pho_bo() -> MenuItem {
        MenuItem {
            id: "pho-bo".to_string(),
            name: "Phở Bò".to_string(),
            price: 45_000,
            category: Category::Main,
            image: "🍜".to_string(),
            description: None,
        }
    }

    fn tra_da() -> MenuItem {
        MenuItem {
            id: "tra-da".to_string(),
            name: "Trà Đá".to_string(),
            price: 5_000,
            category: Category::Drink,
            image: "🍵".to_string(),
            description: None,
        }
    }

    #[test]
    fn repeated_add_accumulates_quantity() {
        let mut state = CartState::default();
        for _ in 0..3 {
            state = reduce(state, CartAction::Add(pho_bo()));
        }

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 3);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, 135_000);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
        let state = reduce(state, CartAction::Add(tra_da()));
        let state = reduce(state, CartAction::Add(pho_bo()));

        let ids: Vec<&str> = state.items.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, ["pho-bo", "tra-da"]);
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, 95_000);
    }

    #[test]
    fn remove_drops_item_and_ignores_absent_id() {
        let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
        let state = reduce(state, CartAction::Remove("tra-da".to_string()));
        assert_eq!(state.items.len(), 1);

        let state = reduce(state, CartAction::Remove("pho-bo".to_string()));
        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, 0);
    }

    #[test]
    fn set_quantity_updates_totals() {
        let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
        let state = reduce(
            state,
            CartAction::SetQuantity {
                id: "pho-bo".to_string(),
                quantity: 5,
            },
        );

        assert_eq!(state.items[0].quantity, 5);
        assert_eq!(state.total_items, 5);
        assert_eq!(state.total_price, 225_000);
    }

    #[test]
    fn set_quantity_to_zero_or_less_removes_item() {
        for quantity in [0, -3] {
            let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
            let state = reduce(
                state,
                CartAction::SetQuantity {
                    id: "pho-bo".to_string(),
                    quantity,
                },
            );

            assert!(state.is_empty());
            assert_eq!(state.total_price, 0);
        }
    }

    #[test]
    fn set_quantity_on_absent_id_does_not_resurrect() {
        let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
        let state = reduce(state, CartAction::Remove("pho-bo".to_string()));
        let state = reduce(
            state,
            CartAction::SetQuantity {
                id: "pho-bo".to_string(),
                quantity: 2,
            },
        );

        assert!(state.is_empty());
    }

    #[test]
    fn clear_yields_canonical_empty_state() {
        let state = reduce(CartState::default(), CartAction::Add(pho_bo()));
        let state = reduce(state, CartAction::Add(tra_da()));
        let state = reduce(state, CartAction::Clear);

        assert_eq!(state, CartState::default());
    }

    #[test]
    fn hydrate_recomputes_totals_and_drops_zero_quantities() {
        let saved = vec![
            CartItem {
                item: pho_bo(),
                quantity: 2,
            },
            CartItem {
                item: tra_da(),
                quantity: 0,
            },
        ];

        let state = reduce(CartState::default(), CartAction::Hydrate(saved));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id(), "pho-bo");
        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price, 90_000);
    }
}
