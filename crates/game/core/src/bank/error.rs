//! Failures of bank transactions.
use core::fmt;

use crate::common::{Money, PlayerId, Token};
use crate::deed::{ColourGroup, DeedId};
use crate::error::{ErrorSeverity, GameError};

/// Who was expected to hold a deed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Holder {
    Bank,
    Player(PlayerId),
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Holder::Bank => f.write_str("the bank"),
            Holder::Player(id) => write!(f, "{id}"),
        }
    }
}

/// Development rule a request broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DevelopmentFault {
    NotBuildable,
    AlreadyMortgaged,
    NotMortgaged,
    HasBuildings,
    GroupMortgaged,
    UnevenBuilding,
    HouseLimit,
    HotelPresent,
    NeedsFourHouses,
    NoHouse,
    NoHotel,
}

impl fmt::Display for DevelopmentFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotBuildable => "only colour-group properties carry buildings",
            Self::AlreadyMortgaged => "the deed is already mortgaged",
            Self::NotMortgaged => "the deed is not mortgaged",
            Self::HasBuildings => "the deed still carries buildings",
            Self::GroupMortgaged => "a property in the group is mortgaged",
            Self::UnevenBuilding => "the group would no longer be evenly built",
            Self::HouseLimit => "at most four houses fit on a property",
            Self::HotelPresent => "the property already has a hotel",
            Self::NeedsFourHouses => "a hotel needs four houses first",
            Self::NoHouse => "there is no house to sell",
            Self::NoHotel => "there is no hotel to sell",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("amount must not be negative, got ${amount}")]
    InvalidAmount { amount: Money },

    #[error("{deed} is not held by {holder}")]
    PropertyOwnership { deed: DeedId, holder: Holder },

    #[error("{player} does not own every {group} property")]
    MonopolyOwnership { player: PlayerId, group: ColourGroup },

    #[error("cannot change {deed}: {fault}")]
    PropertyDevelopment { deed: DeedId, fault: DevelopmentFault },

    #[error("{player} needs ${required} but only has ${available}")]
    InsufficientFunds {
        player: PlayerId,
        required: Money,
        available: Money,
    },

    #[error("the bank has no {token}s left")]
    InsufficientToken { token: Token },
}

impl BankError {
    pub(crate) fn development(deed: DeedId, fault: DevelopmentFault) -> Self {
        Self::PropertyDevelopment { deed, fault }
    }
}

impl GameError for BankError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidAmount { .. } => ErrorSeverity::Internal,
            Self::PropertyOwnership { .. }
            | Self::MonopolyOwnership { .. }
            | Self::PropertyDevelopment { .. } => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } | Self::InsufficientToken { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::PropertyOwnership { .. } => "property_ownership",
            Self::MonopolyOwnership { .. } => "monopoly_ownership",
            Self::PropertyDevelopment { .. } => "property_development",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InsufficientToken { .. } => "insufficient_token",
        }
    }
}
