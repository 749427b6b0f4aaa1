//! Chance and Community Chest cards.
use core::fmt;

use crate::board::{Board, BoardError};
use crate::common::{Money, PlayerId};
use crate::deed::{DeedId, DeedKind};
use crate::tile::{RentRule, TileKind};

/// Which pile a card belongs to. Kept Get Out of Jail Free cards remember
/// their origin so they can go back to the right deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeckKind::Chance => "Chance",
            DeckKind::CommunityChest => "Community Chest",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    AdvanceToGo,
    /// Moves forward to the named deed, collecting salary on the way.
    AdvanceTo(DeedId),
    /// Owned utilities charge ten times a fresh roll.
    AdvanceToNearestUtility,
    /// Owned railroads charge twice the normal rent.
    AdvanceToNearestRailroad,
    GoBack {
        spaces: u8,
    },
    GoToJail,
    GetOutOfJailFree(DeckKind),
    Collect {
        amount: Money,
        reason: String,
    },
    Pay {
        amount: Money,
        reason: String,
    },
    /// Charged per building the player owns.
    Repairs {
        per_house: Money,
        per_hotel: Money,
    },
    PayEachPlayer {
        amount: Money,
        reason: String,
    },
    CollectFromEachPlayer {
        amount: Money,
        reason: String,
    },
}

impl Card {
    pub const UTILITY_ROLL_MULTIPLIER: Money = 10;
    pub const RAILROAD_RENT_MULTIPLIER: Money = 2;

    /// Applies the card to `player`.
    pub fn on_draw(&self, board: &mut Board, player: PlayerId) -> Result<(), BoardError> {
        match self {
            Card::AdvanceToGo => board.advance_player_to_tile(player, TileKind::Go),
            Card::AdvanceTo(deed) => match deed.kind() {
                DeedKind::Property => board.advance_player_to_property(player, *deed),
                DeedKind::Railroad => board.advance_player_to_railroad(player, *deed),
                DeedKind::Utility => board.advance_player_to_deed(player, *deed),
            },
            Card::AdvanceToNearestUtility => board.advance_player_to_tile_with_rent(
                player,
                TileKind::Utility,
                RentRule::RollTimes(Self::UTILITY_ROLL_MULTIPLIER),
            ),
            Card::AdvanceToNearestRailroad => board.advance_player_to_tile_with_rent(
                player,
                TileKind::Railroad,
                RentRule::Multiplied(Self::RAILROAD_RENT_MULTIPLIER),
            ),
            Card::GoBack { spaces } => board.go_back(player, *spaces),
            Card::GoToJail => board.go_to_jail(player),
            Card::GetOutOfJailFree(origin) => board.grant_jail_free_card(player, *origin),
            Card::Collect { amount, reason } => board.pay(player, *amount, reason),
            Card::Pay { amount, reason } => board.charge(player, *amount, reason),
            Card::Repairs {
                per_house,
                per_hotel,
            } => {
                let (houses, hotels) = board.player(player)?.building_counts();
                let amount = Money::from(houses) * per_house + Money::from(hotels) * per_hotel;
                board.charge(player, amount, "for property repairs")
            }
            Card::PayEachPlayer { amount, reason } => {
                for other in board.opponents(player) {
                    board.pay_player(player, other, *amount, reason)?;
                    if board.player(player)?.is_bankrupt() {
                        break;
                    }
                }
                Ok(())
            }
            Card::CollectFromEachPlayer { amount, reason } => {
                for other in board.opponents(player) {
                    board.pay_player(other, player, *amount, reason)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::AdvanceToGo => f.write_str("Advance to Go"),
            Card::AdvanceTo(deed) => write!(f, "Advance to {deed}"),
            Card::AdvanceToNearestUtility => f.write_str("Advance to the nearest Utility"),
            Card::AdvanceToNearestRailroad => f.write_str("Advance to the nearest Railroad"),
            Card::GoBack { spaces } => write!(f, "Go back {spaces} spaces"),
            Card::GoToJail => f.write_str("Go to Jail"),
            Card::GetOutOfJailFree(_) => f.write_str("Get Out of Jail Free"),
            Card::Collect { amount, reason } => write!(f, "Collect ${amount} {reason}"),
            Card::Pay { amount, reason } => write!(f, "Pay ${amount} {reason}"),
            Card::Repairs {
                per_house,
                per_hotel,
            } => write!(
                f,
                "Make repairs: ${per_house} per house, ${per_hotel} per hotel"
            ),
            Card::PayEachPlayer { amount, reason } => {
                write!(f, "Pay each player ${amount} {reason}")
            }
            Card::CollectFromEachPlayer { amount, reason } => {
                write!(f, "Collect ${amount} from every player {reason}")
            }
        }
    }
}
