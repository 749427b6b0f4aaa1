//! Typed record of everything that happens during play.
//!
//! The engine never prints. Each state transition appends a [`GameEvent`] to
//! the board's [`EventLog`]; callers drain the log to narrate or audit a game.
use core::fmt;

use crate::card::{Card, DeckKind};
use crate::common::{Money, PlayerId};
use crate::deed::DeedId;
use crate::dice::Roll;
use crate::tile::Tile;

/// How a player got out of jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JailRelease {
    Card,
    EarlyFee,
    Doubles,
    TimeServed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    RoundStarted {
        round: u32,
    },
    TurnStarted {
        player: PlayerId,
        position: usize,
        in_jail: bool,
        money: Money,
    },
    DiceRolled {
        player: PlayerId,
        roll: Roll,
    },
    Moved {
        player: PlayerId,
        from: usize,
        to: usize,
        passed_go: bool,
    },
    Landed {
        player: PlayerId,
        position: usize,
        tile: Tile,
    },
    BankPaid {
        player: PlayerId,
        amount: Money,
        reason: String,
    },
    BankCharged {
        player: PlayerId,
        amount: Money,
        reason: String,
    },
    PlayerPaid {
        payer: PlayerId,
        payee: PlayerId,
        amount: Money,
        reason: String,
    },
    DeedPurchased {
        player: PlayerId,
        deed: DeedId,
        price: Money,
    },
    PurchaseDeclined {
        player: PlayerId,
        deed: DeedId,
    },
    DeedMortgaged {
        player: PlayerId,
        deed: DeedId,
        amount: Money,
    },
    DeedUnmortgaged {
        player: PlayerId,
        deed: DeedId,
        amount: Money,
    },
    HouseBuilt {
        player: PlayerId,
        deed: DeedId,
        houses: u8,
        cost: Money,
    },
    HouseSold {
        player: PlayerId,
        deed: DeedId,
        houses: u8,
        refund: Money,
    },
    HotelBuilt {
        player: PlayerId,
        deed: DeedId,
        cost: Money,
    },
    HotelSold {
        player: PlayerId,
        deed: DeedId,
        refund: Money,
    },
    CardDrawn {
        player: PlayerId,
        deck: DeckKind,
        card: Card,
    },
    JailFreeCardGranted {
        player: PlayerId,
        deck: DeckKind,
    },
    JailFreeCardUsed {
        player: PlayerId,
        deck: DeckKind,
    },
    SentToJail {
        player: PlayerId,
    },
    ReleasedFromJail {
        player: PlayerId,
        release: JailRelease,
    },
    LiquidationStarted {
        player: PlayerId,
        required: Money,
        available: Money,
    },
    Bankrupt {
        player: PlayerId,
        creditor: Option<PlayerId>,
        forfeited: Money,
    },
    DeedsReturned {
        deeds: Vec<DeedId>,
    },
}

impl GameEvent {
    /// The player the event is about, if any.
    pub fn subject(&self) -> Option<PlayerId> {
        match self {
            Self::RoundStarted { .. } | Self::DeedsReturned { .. } => None,
            Self::PlayerPaid { payer, .. } => Some(*payer),
            Self::TurnStarted { player, .. }
            | Self::DiceRolled { player, .. }
            | Self::Moved { player, .. }
            | Self::Landed { player, .. }
            | Self::BankPaid { player, .. }
            | Self::BankCharged { player, .. }
            | Self::DeedPurchased { player, .. }
            | Self::PurchaseDeclined { player, .. }
            | Self::DeedMortgaged { player, .. }
            | Self::DeedUnmortgaged { player, .. }
            | Self::HouseBuilt { player, .. }
            | Self::HouseSold { player, .. }
            | Self::HotelBuilt { player, .. }
            | Self::HotelSold { player, .. }
            | Self::CardDrawn { player, .. }
            | Self::JailFreeCardGranted { player, .. }
            | Self::JailFreeCardUsed { player, .. }
            | Self::SentToJail { player }
            | Self::ReleasedFromJail { player, .. }
            | Self::LiquidationStarted { player, .. }
            | Self::Bankrupt { player, .. } => Some(*player),
        }
    }
}

/// Narration without the subject's name, e.g. `rolled 7 (3+4)`.
impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { round } => write!(f, "round {round} begins"),
            Self::TurnStarted {
                position,
                in_jail,
                money,
                ..
            } => {
                let place = if *in_jail { "in jail" } else { "on" };
                write!(f, "starts a turn {place} tile {position} with ${money}")
            }
            Self::DiceRolled { roll, .. } => write!(f, "rolled {roll}"),
            Self::Moved {
                from,
                to,
                passed_go,
                ..
            } => {
                write!(f, "moved from tile {from} to tile {to}")?;
                if *passed_go {
                    f.write_str(", passing Go")?;
                }
                Ok(())
            }
            Self::Landed { tile, .. } => write!(f, "landed on {tile}"),
            Self::BankPaid { amount, reason, .. } => {
                write!(f, "receives ${amount} from the bank {reason}")
            }
            Self::BankCharged { amount, reason, .. } => write!(f, "pays ${amount} {reason}"),
            Self::PlayerPaid {
                payee,
                amount,
                reason,
                ..
            } => write!(f, "pays ${amount} to {payee} {reason}"),
            Self::DeedPurchased { deed, price, .. } => write!(f, "bought {deed} for ${price}"),
            Self::PurchaseDeclined { deed, .. } => write!(f, "declined to buy {deed}"),
            Self::DeedMortgaged { deed, amount, .. } => {
                write!(f, "mortgaged {deed} for ${amount}")
            }
            Self::DeedUnmortgaged { deed, amount, .. } => {
                write!(f, "lifted the mortgage on {deed} for ${amount}")
            }
            Self::HouseBuilt {
                deed, houses, cost, ..
            } => write!(f, "built house {houses} on {deed} for ${cost}"),
            Self::HouseSold {
                deed,
                houses,
                refund,
                ..
            } => write!(
                f,
                "sold a house on {deed} for ${refund}, {houses} remaining"
            ),
            Self::HotelBuilt { deed, cost, .. } => write!(f, "built a hotel on {deed} for ${cost}"),
            Self::HotelSold { deed, refund, .. } => {
                write!(f, "sold the hotel on {deed} for ${refund}")
            }
            Self::CardDrawn { deck, card, .. } => write!(f, "drew {deck}: {card}"),
            Self::JailFreeCardGranted { deck, .. } => {
                write!(f, "keeps the {deck} Get Out of Jail Free card")
            }
            Self::JailFreeCardUsed { deck, .. } => {
                write!(f, "played the {deck} Get Out of Jail Free card")
            }
            Self::SentToJail { .. } => f.write_str("went to jail"),
            Self::ReleasedFromJail { release, .. } => {
                let how = match release {
                    JailRelease::Card => "with a card",
                    JailRelease::EarlyFee => "by paying the fee early",
                    JailRelease::Doubles => "by rolling doubles",
                    JailRelease::TimeServed => "after serving the maximum time",
                };
                write!(f, "was released from jail {how}")
            }
            Self::LiquidationStarted {
                required,
                available,
                ..
            } => write!(
                f,
                "needs ${required} but only has ${available}; liquidating assets"
            ),
            Self::Bankrupt {
                creditor,
                forfeited,
                ..
            } => match creditor {
                Some(creditor) => {
                    write!(f, "is bankrupt and forfeits ${forfeited} to {creditor}")
                }
                None => write!(f, "is bankrupt and forfeits ${forfeited} to the bank"),
            },
            Self::DeedsReturned { deeds } => {
                let names: Vec<&str> = deeds.iter().map(|d| d.name()).collect();
                write!(f, "{} returned to the bank", names.join(", "))
            }
        }
    }
}

/// Append-only buffer of events awaiting a consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Removes and returns every buffered event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
