//! Data-driven content definitions and loaders.
//!
//! This crate houses the static data of the standard edition and provides
//! loaders for RON/TOML data files:
//! - Board layout (data-driven via RON)
//! - Chance and Community Chest decks (data-driven via RON)
//! - Rule constants (data-driven via TOML)
//!
//! Content is handed to the board at construction and never changes during play.

pub mod standard;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use standard::{chance_cards, community_chest_cards, standard_track};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DeckFile, DeckLoader, LoadResult, TrackFile, TrackLoader,
};
