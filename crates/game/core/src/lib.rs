//! Deterministic Monopoly rules engine.
//!
//! `monopoly-core` owns the economic rules (deeds, rent, the bank, building and
//! mortgaging, liquidation and bankruptcy) and the turn state machine that
//! moves players around the track. It performs no I/O: every transition is
//! recorded as a [`GameEvent`], and all randomness comes from a seeded
//! [`RandomSource`]. Game data (the track and the card decks) is supplied by
//! the caller through [`Board::builder`].
pub mod bank;
pub mod board;
pub mod card;
pub mod common;
pub mod config;
pub mod deck;
pub mod deed;
pub mod dice;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod strategy;
pub mod tile;

pub use bank::{Bank, BankError, ChargeOutcome, DevelopmentFault, Holder};
pub use board::{Board, BoardBuilder, BoardError, Track};
pub use card::{Card, DeckKind};
pub use common::{Money, PlayerId, Token};
pub use config::GameConfig;
pub use deck::Deck;
pub use deed::{
    ColourGroup, DeedId, DeedKind, PropertyDeed, RailroadDeed, TitleDeed, UtilityDeed,
};
pub use dice::{Dice, Roll};
pub use error::{ErrorSeverity, GameError};
pub use event::{EventLog, GameEvent, JailRelease};
pub use player::{Bankruptcy, Development, Player};
pub use rng::{PcgRandom, RandomSource};
pub use snapshot::{BankSnapshot, GameSnapshot, HoldingSnapshot, PlayerSnapshot};
pub use strategy::{StandardStrategy, Strategy};
pub use tile::{RentRule, Tile, TileKind};
