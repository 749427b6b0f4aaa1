//! Spaces of the track and what happens when a player stops on one.
use core::fmt;

use crate::board::{Board, BoardError};
use crate::card::DeckKind;
use crate::common::{Money, PlayerId};
use crate::deed::DeedId;
use crate::event::GameEvent;

/// One space of the track.
///
/// Card tiles carry a `side` so the track can hold several of each while
/// staying free of duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumDiscriminants)]
#[strum_discriminants(name(TileKind), derive(Hash, strum::Display))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Go,
    Property(DeedId),
    Railroad(DeedId),
    Utility(DeedId),
    CommunityChest { side: u8 },
    Chance { side: u8 },
    IncomeTax,
    LuxuryTax,
    Jail,
    FreeParking,
    GoToJail,
}

/// How rent is computed when a card sends a player onto an owned deed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RentRule {
    /// The deed's own rent.
    #[default]
    Standard,
    /// The deed's own rent times the factor.
    Multiplied(Money),
    /// A fresh roll of the dice times the factor.
    RollTimes(Money),
}

impl Tile {
    pub fn kind(&self) -> TileKind {
        self.into()
    }

    /// Deed bound to a buyable tile.
    pub fn deed(&self) -> Option<DeedId> {
        match self {
            Tile::Property(deed) | Tile::Railroad(deed) | Tile::Utility(deed) => Some(*deed),
            _ => None,
        }
    }

    pub fn on_landing(
        self,
        board: &mut Board,
        player: PlayerId,
        rent: RentRule,
    ) -> Result<(), BoardError> {
        match self {
            Tile::Go | Tile::Jail | Tile::FreeParking => Ok(()),
            Tile::Property(deed) | Tile::Railroad(deed) | Tile::Utility(deed) => {
                land_on_deed(board, player, deed, rent)
            }
            Tile::CommunityChest { .. } => board.draw_card(player, DeckKind::CommunityChest),
            Tile::Chance { .. } => board.draw_card(player, DeckKind::Chance),
            Tile::IncomeTax => {
                let config = board.config();
                let amount = board
                    .player(player)?
                    .income_tax_amount(config.income_tax_cap, config.income_tax_percent);
                board.charge(player, amount, "in income tax")
            }
            Tile::LuxuryTax => {
                let amount = board.config().luxury_tax;
                board.charge(player, amount, "in luxury tax")
            }
            Tile::GoToJail => board.go_to_jail(player),
        }
    }
}

/// Buy if unowned and the strategy agrees, pay rent if someone else owns it.
fn land_on_deed(
    board: &mut Board,
    player: PlayerId,
    deed: DeedId,
    rent: RentRule,
) -> Result<(), BoardError> {
    let index = board.index_of(player)?;
    let owner = board.players.iter().position(|p| p.is_owner(deed));

    match owner {
        Some(owner) if owner == index => Ok(()),
        Some(owner) => {
            let title = deed.deed();
            let amount = match rent {
                RentRule::Standard => title.calculate_rent(&board.players[owner], board.dice.previous()),
                RentRule::Multiplied(factor) => {
                    factor * title.calculate_rent(&board.players[owner], board.dice.previous())
                }
                RentRule::RollTimes(factor) => {
                    let mortgaged = board.players[owner]
                        .development(deed)
                        .is_some_and(|d| d.is_mortgaged);
                    if mortgaged {
                        0
                    } else {
                        let roll = board.dice.roll(board.rng.as_mut());
                        board.events.push(GameEvent::DiceRolled { player, roll });
                        factor * Money::from(roll.amount())
                    }
                }
            };
            if amount == 0 {
                return Ok(());
            }
            let reason = format!("in rent for {deed}");
            board.pay_player(player, PlayerId(owner), amount, &reason)
        }
        None => {
            let title = deed.deed();
            let buying = board.strategies[index].is_buying(&board.players[index], title);
            if buying {
                board
                    .bank
                    .sell_deed_to_player(deed, &mut board.players[index], &mut board.events)?;
            } else {
                board
                    .events
                    .push(GameEvent::PurchaseDeclined { player, deed });
            }
            Ok(())
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Go => f.write_str("Go"),
            Tile::Property(deed) | Tile::Railroad(deed) | Tile::Utility(deed) => {
                write!(f, "{deed}")
            }
            Tile::CommunityChest { .. } => f.write_str("Community Chest"),
            Tile::Chance { .. } => f.write_str("Chance"),
            Tile::IncomeTax => f.write_str("Income Tax"),
            Tile::LuxuryTax => f.write_str("Luxury Tax"),
            Tile::Jail => f.write_str("Jail"),
            Tile::FreeParking => f.write_str("Free Parking"),
            Tile::GoToJail => f.write_str("Go To Jail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyable_tiles_expose_their_deed() {
        assert_eq!(
            Tile::Railroad(DeedId::ReadingRailroad).deed(),
            Some(DeedId::ReadingRailroad)
        );
        assert_eq!(Tile::Chance { side: 1 }.deed(), None);
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(Tile::Chance { side: 2 }.kind(), TileKind::Chance);
        assert_eq!(Tile::Property(DeedId::Boardwalk).kind(), TileKind::Property);
        assert_eq!(TileKind::GoToJail.to_string(), "GoToJail");
    }
}
