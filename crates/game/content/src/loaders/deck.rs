//! Card deck loader.

use std::path::Path;

use monopoly_core::{Card, Deck};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Deck structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckFile {
    pub cards: Vec<Card>,
}

/// Loader for Chance and Community Chest decks from RON files.
pub struct DeckLoader;

impl DeckLoader {
    /// Load the cards of a deck, in file order.
    pub fn load_cards(path: &Path) -> LoadResult<Vec<Card>> {
        let content = read_file(path)?;
        let deck: DeckFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse deck RON {}: {}", path.display(), e))?;

        if deck.cards.is_empty() {
            anyhow::bail!("Deck {} holds no cards", path.display());
        }
        Ok(deck.cards)
    }

    /// Load a deck that shuffles before its first draw.
    pub fn load(path: &Path) -> LoadResult<Deck<Card>> {
        Self::load_cards(path).map(Deck::new)
    }
}
