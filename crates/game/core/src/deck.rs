//! Self-shuffling draw pile.
use crate::rng::{RandomSource, shuffle};

/// An ordered pile of cards plus a draw cursor.
///
/// Cards before the cursor have been drawn since the last shuffle. When the
/// cursor reaches the end, the whole pile is reshuffled and the cursor resets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck<T> {
    cards: Vec<T>,
    cursor: usize,
}

impl<T: Clone + PartialEq> Deck<T> {
    /// A deck that shuffles before its first draw.
    pub fn new(cards: Vec<T>) -> Self {
        let cursor = cards.len();
        Self { cards, cursor }
    }

    /// A deck drawn in the given order until it first runs out.
    pub fn stacked(cards: Vec<T>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Draws the next card, reshuffling first when the pile is exhausted.
    ///
    /// Returns `None` only when the deck holds no cards at all.
    pub fn draw(&mut self, rng: &mut dyn RandomSource) -> Option<T> {
        if self.cards.is_empty() {
            return None;
        }
        if self.cursor >= self.cards.len() {
            shuffle(&mut self.cards, rng);
            self.cursor = 0;
        }
        let card = self.cards[self.cursor].clone();
        self.cursor += 1;
        Some(card)
    }

    /// Puts a card on the bottom of the drawn pile so it stays out of play
    /// until the next reshuffle.
    pub fn add(&mut self, card: T) {
        self.cards.insert(0, card);
        self.cursor += 1;
    }

    /// Takes a card out of circulation. Returns false if it was not present.
    pub fn remove(&mut self, card: &T) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                if index < self.cursor {
                    self.cursor -= 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, card: &T) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    pub fn cards(&self) -> &[T] {
        &self.cards
    }
}
