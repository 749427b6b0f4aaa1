use crate::bank::BankError;
use crate::card::DeckKind;
use crate::common::PlayerId;
use crate::deed::{DeedId, DeedKind};
use crate::error::{ErrorSeverity, GameError};
use crate::tile::TileKind;

/// Failures of the turn engine and of board construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error("the track is empty")]
    EmptyTrack,

    #[error("the first tile of the track must be Go")]
    MissingGo,

    #[error("the track must hold exactly one Jail, found {count}")]
    JailCount { count: usize },

    #[error("{deed} appears more than once on the track")]
    DuplicateDeed { deed: DeedId },

    #[error("no {kind} tile ahead of position {position}")]
    TileNotFound { kind: TileKind, position: usize },

    #[error("{deed} is not on the track")]
    DeedNotFound { deed: DeedId },

    #[error("{deed} is not a {expected:?}")]
    WrongDeedKind { deed: DeedId, expected: DeedKind },

    #[error("the {deck} deck is empty")]
    EmptyDeck { deck: DeckKind },

    #[error("the {deck} Get Out of Jail Free card is not in its deck")]
    CardNotInDeck { deck: DeckKind },

    #[error("{player} is not seated at this table")]
    UnknownPlayer { player: PlayerId },

    #[error("a game needs {min} to {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Bank(err) => err.severity(),
            Self::EmptyTrack
            | Self::MissingGo
            | Self::JailCount { .. }
            | Self::DuplicateDeed { .. }
            | Self::PlayerCount { .. } => ErrorSeverity::Validation,
            Self::TileNotFound { .. } | Self::DeedNotFound { .. } | Self::EmptyDeck { .. } => {
                ErrorSeverity::Fatal
            }
            Self::WrongDeedKind { .. }
            | Self::CardNotInDeck { .. }
            | Self::UnknownPlayer { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Bank(err) => err.error_code(),
            Self::EmptyTrack => "empty_track",
            Self::MissingGo => "missing_go",
            Self::JailCount { .. } => "jail_count",
            Self::DuplicateDeed { .. } => "duplicate_deed",
            Self::TileNotFound { .. } => "tile_not_found",
            Self::DeedNotFound { .. } => "deed_not_found",
            Self::WrongDeedKind { .. } => "wrong_deed_kind",
            Self::EmptyDeck { .. } => "empty_deck",
            Self::CardNotInDeck { .. } => "card_not_in_deck",
            Self::UnknownPlayer { .. } => "unknown_player",
            Self::PlayerCount { .. } => "player_count",
        }
    }
}
