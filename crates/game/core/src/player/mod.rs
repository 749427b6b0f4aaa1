//! Player wallet, position, jail status, and ownership ledger.
mod building;
mod development;
mod liquidation;

pub use development::Development;
pub use liquidation::Bankruptcy;

use std::collections::BTreeMap;

use crate::card::DeckKind;
use crate::common::{Money, PlayerId};
use crate::deed::{ColourGroup, DeedId, DeedKind, TitleDeed};

/// One seat at the table.
///
/// The `deeds` ledger is the player's half of the ownership registry: a deed
/// is either a key here or in the bank's unsold pool, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub money: Money,
    /// Index into the track.
    pub position: usize,
    pub in_jail: bool,
    /// Turns left before the jail fee becomes mandatory (0-3).
    pub turns_left_in_jail: u8,
    pub deeds: BTreeMap<DeedId, Development>,
    /// Origin deck of every held Get Out of Jail Free card.
    pub jail_free_cards: Vec<DeckKind>,
    pub bankrupt: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            money: 0,
            position: 0,
            in_jail: false,
            turns_left_in_jail: 0,
            deeds: BTreeMap::new(),
            jail_free_cards: Vec::new(),
            bankrupt: false,
        }
    }

    pub fn with_money(mut self, money: Money) -> Self {
        self.money = money;
        self
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    pub fn is_owner(&self, deed: DeedId) -> bool {
        self.deeds.contains_key(&deed)
    }

    pub fn development(&self, deed: DeedId) -> Option<&Development> {
        self.deeds.get(&deed)
    }

    pub fn development_mut(&mut self, deed: DeedId) -> Option<&mut Development> {
        self.deeds.get_mut(&deed)
    }

    pub fn owned_in_group(&self, group: ColourGroup) -> usize {
        group
            .members()
            .iter()
            .filter(|id| self.is_owner(**id))
            .count()
    }

    pub fn has_monopoly(&self, group: ColourGroup) -> bool {
        self.owned_in_group(group) == group.size()
    }

    fn owned_of_kind(&self, kind: DeedKind) -> usize {
        self.deeds.keys().filter(|id| id.kind() == kind).count()
    }

    pub fn railroads_owned(&self) -> usize {
        self.owned_of_kind(DeedKind::Railroad)
    }

    pub fn utilities_owned(&self) -> usize {
        self.owned_of_kind(DeedKind::Utility)
    }

    /// Total `(houses, hotels)` standing on the player's properties.
    pub fn building_counts(&self) -> (u32, u32) {
        self.deeds.values().fold((0, 0), |(houses, hotels), d| {
            (
                houses + u32::from(d.houses),
                hotels + u32::from(d.has_hotel),
            )
        })
    }

    /// Cash plus printed deed prices plus what every building cost.
    pub fn net_worth(&self) -> Money {
        let holdings: Money = self
            .deeds
            .iter()
            .map(|(id, development)| {
                let deed = id.deed();
                let buildings = match deed {
                    TitleDeed::Property(p) => p.build_cost * Money::from(development.level()),
                    _ => 0,
                };
                deed.price() + buildings
            })
            .sum();
        self.money + holdings
    }

    /// Income tax owed: the lesser of `cap` and `percent`% of net worth.
    pub fn income_tax_amount(&self, cap: Money, percent: Money) -> Money {
        (self.net_worth() * percent / 100).clamp(0, cap)
    }

    /// True once every held deed is mortgaged and bare of buildings.
    pub fn has_fully_liquidated_assets(&self) -> bool {
        self.deeds
            .values()
            .all(|d| d.is_mortgaged && !d.is_developed())
    }

    pub fn send_to_jail(&mut self, turns: u8) {
        self.in_jail = true;
        self.turns_left_in_jail = turns;
    }

    pub fn release_from_jail(&mut self) {
        self.in_jail = false;
        self.turns_left_in_jail = 0;
    }

    /// Burns one jail turn and returns how many remain.
    pub fn decrement_turns_left_in_jail(&mut self) -> u8 {
        self.turns_left_in_jail = self.turns_left_in_jail.saturating_sub(1);
        self.turns_left_in_jail
    }
}
