//! Swipe-deck state for the match page.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use crate::net::api::ApiError;
use crate::util::adapter::PetView;

/// The deck of pets presented one at a time on the match page.
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    pub pets: Vec<PetView>,
    /// Position of the card on top; past the end means the deck ran out.
    pub index: usize,
    pub loading: bool,
    /// Degraded mode: the listing could not be fetched. The page says so
    /// instead of showing stand-in pets.
    pub error: Option<ApiError>,
}

impl DeckState {
    /// A deck that is still fetching.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// A deck ready to swipe.
    pub fn loaded(pets: Vec<PetView>) -> Self {
        Self { pets, ..Self::default() }
    }

    /// A deck that failed to load.
    pub fn failed(error: ApiError) -> Self {
        Self { error: Some(error), ..Self::default() }
    }

    /// The card on top, if any remain.
    pub fn current(&self) -> Option<&PetView> {
        self.pets.get(self.index)
    }

    /// Move to the next card. Saturates once the deck is exhausted.
    pub fn advance(&mut self) {
        if self.index < self.pets.len() {
            self.index += 1;
        }
    }

    /// Whether every card has been swiped. An empty deck counts as
    /// exhausted, but pages show the "no pets" state for it instead.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.pets.len()
    }

    /// Rewind to the first card ("Recomeçar").
    pub fn restart(&mut self) {
        self.index = 0;
    }
}
