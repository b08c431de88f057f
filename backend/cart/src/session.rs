use crate::{
    reducer::{CartAction, reduce},
    slot::CartSlot,
    types::CartState,
};

/// One browsing session's cart: the reducer state plus the durable slot
/// that observes every resulting state. All reads and writes go through
/// this handle, there is no ambient global cart.
pub struct CartSession {
    state: CartState,
    slot: CartSlot,
}

impl CartSession {
    /// Hydrate once from the slot. Corrupt or missing saved data starts an
    /// empty cart.
    pub fn open(slot: CartSlot) -> Self {
        let saved = slot.load();
        let state = reduce(CartState::default(), CartAction::Hydrate(saved));

        Self { state, slot }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Run one transition and mirror the result to the slot.
    pub fn dispatch(&mut self, action: CartAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
        self.slot.save(&self.state.items);
    }
}
