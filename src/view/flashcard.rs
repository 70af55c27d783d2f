//! Flashcard drill state shared by the vocabulary and test pages.
//!
//! Navigation never wraps: `next` on the last card and `prev` on the first
//! leave the position alone. Every navigation call (boundary ones included)
//! hides the answer, so after `next`, `prev` or `toggle_shuffle` the answer
//! is always hidden.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::content::Card;

#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardState {
    canonical: Vec<Card>,
    cards: Vec<Card>,
    card_index: usize,
    answer_visible: bool,
    shuffle_enabled: bool,
}

impl FlashcardState {
    /// Starts on the first card of `cards`, in the given order.
    pub fn new(cards: Vec<Card>) -> Self {
        FlashcardState {
            canonical: cards.clone(),
            cards,
            card_index: 0,
            answer_visible: false,
            shuffle_enabled: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.card_index)
    }

    pub fn has_next(&self) -> bool {
        self.card_index + 1 < self.cards.len()
    }

    pub fn has_prev(&self) -> bool {
        self.card_index > 0
    }

    /// "Card 2 of 5"; `None` for an empty deck.
    pub fn progress_label(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("Card {} of {}", self.card_index + 1, self.cards.len()))
        }
    }

    pub fn reveal(&mut self) {
        if !self.is_empty() {
            self.answer_visible = true;
        }
    }

    pub fn hide(&mut self) {
        self.answer_visible = false;
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.card_index += 1;
        }
        self.answer_visible = false;
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.card_index -= 1;
        }
        self.answer_visible = false;
    }

    pub fn toggle_shuffle(&mut self) {
        self.toggle_shuffle_with(&mut rand::thread_rng());
    }

    /// Turning shuffle on draws a uniform permutation of the deck; turning it
    /// off restores the canonical order. Either way the drill restarts at the
    /// first card with the answer hidden.
    pub fn toggle_shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle_enabled = !self.shuffle_enabled;
        if self.shuffle_enabled {
            self.cards.shuffle(rng);
        } else {
            self.cards.clone_from(&self.canonical);
        }
        self.card_index = 0;
        self.answer_visible = false;
    }
}
