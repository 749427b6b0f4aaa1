//! Read-only, serializable view of a board.
use crate::bank::Bank;
use crate::board::Board;
use crate::card::DeckKind;
use crate::common::{Money, PlayerId};
use crate::deed::DeedId;
use crate::player::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub round: u32,
    pub players: Vec<PlayerSnapshot>,
    pub bank: BankSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub money: Money,
    pub net_worth: Money,
    pub position: usize,
    pub in_jail: bool,
    pub bankrupt: bool,
    pub holdings: Vec<HoldingSnapshot>,
    pub jail_free_cards: Vec<DeckKind>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldingSnapshot {
    pub deed: DeedId,
    pub houses: u8,
    pub has_hotel: bool,
    pub is_mortgaged: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankSnapshot {
    pub money: Money,
    pub houses: u32,
    pub hotels: u32,
    pub unsold_deeds: Vec<DeedId>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            money: player.money,
            net_worth: player.net_worth(),
            position: player.position,
            in_jail: player.in_jail,
            bankrupt: player.is_bankrupt(),
            holdings: player
                .deeds
                .iter()
                .map(|(deed, d)| HoldingSnapshot {
                    deed: *deed,
                    houses: d.houses,
                    has_hotel: d.has_hotel,
                    is_mortgaged: d.is_mortgaged,
                })
                .collect(),
            jail_free_cards: player.jail_free_cards.clone(),
        }
    }
}

impl From<&Bank> for BankSnapshot {
    fn from(bank: &Bank) -> Self {
        Self {
            money: bank.money,
            houses: bank.houses,
            hotels: bank.hotels,
            unsold_deeds: bank.unsold_deeds().collect(),
        }
    }
}

impl Board {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round(),
            players: self.players().iter().map(PlayerSnapshot::from).collect(),
            bank: BankSnapshot::from(self.bank()),
        }
    }
}
