//! The bank: money supply, building inventory, and every property transaction.
//!
//! Each operation validates all of its preconditions before touching any
//! balance or inventory, so a failed call leaves the game exactly as it was.
mod error;

pub use error::{BankError, DevelopmentFault, Holder};

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use crate::card::DeckKind;
use crate::common::{Money, Token};
use crate::config::GameConfig;
use crate::deed::{DeedId, PropertyDeed, TitleDeed};
use crate::event::{EventLog, GameEvent};
use crate::player::{Development, Player};

/// Result of a charge that may have triggered liquidation.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// The player paid in full, possibly after liquidating assets.
    Paid,
    /// The player could not pay and was declared bankrupt. The listed
    /// Get Out of Jail Free cards must go back to their decks.
    Bankrupt { returned_cards: Vec<DeckKind> },
}

impl ChargeOutcome {
    pub fn is_bankrupt(&self) -> bool {
        matches!(self, Self::Bankrupt { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bank {
    pub money: Money,
    pub houses: u32,
    pub hotels: u32,
    mortgage_interest_percent: Money,
    deeds: BTreeSet<DeedId>,
}

impl Bank {
    /// A bank holding every deed and the given inventory.
    pub fn new(money: Money, houses: u32, hotels: u32) -> Self {
        Self {
            money,
            houses,
            hotels,
            mortgage_interest_percent: GameConfig::DEFAULT_MORTGAGE_INTEREST_PERCENT,
            deeds: DeedId::iter().collect(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut bank = Self::new(config.bank_money, config.bank_houses, config.bank_hotels);
        bank.mortgage_interest_percent = config.mortgage_interest_percent;
        bank
    }

    /// True while `deed` is still in the unsold pool.
    pub fn holds(&self, deed: DeedId) -> bool {
        self.deeds.contains(&deed)
    }

    pub fn unsold_deeds(&self) -> impl Iterator<Item = DeedId> + '_ {
        self.deeds.iter().copied()
    }

    /// Cost of lifting the mortgage on `deed`: mortgage value plus interest,
    /// rounded up.
    pub fn unmortgage_cost(&self, deed: DeedId) -> Money {
        let value = deed.deed().mortgage_value();
        value + (value * self.mortgage_interest_percent + 99) / 100
    }

    /// Bank to player transfer. The bank never runs out of money.
    pub fn pay(
        &mut self,
        amount: Money,
        player: &mut Player,
        reason: &str,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        ensure_non_negative(amount)?;
        self.disburse(amount, player);
        events.push(GameEvent::BankPaid {
            player: player.id,
            amount,
            reason: reason.to_owned(),
        });
        Ok(())
    }

    /// Player to bank transfer.
    ///
    /// A player short of cash liquidates assets first. If that still does not
    /// cover the amount, the player is declared bankrupt to the bank and the
    /// debt is settled by forfeiting everything they hold.
    pub fn charge(
        &mut self,
        amount: Money,
        player: &mut Player,
        reason: &str,
        events: &mut EventLog,
    ) -> Result<ChargeOutcome, BankError> {
        ensure_non_negative(amount)?;
        if player.is_bankrupt() {
            return Ok(ChargeOutcome::Bankrupt {
                returned_cards: Vec::new(),
            });
        }

        if player.money < amount {
            events.push(GameEvent::LiquidationStarted {
                player: player.id,
                required: amount,
                available: player.money,
            });
            if player.liquidate_assets(amount, self, events).is_err() {
                let returned_cards = player.declare_bankruptcy(self, None, events);
                return Ok(ChargeOutcome::Bankrupt { returned_cards });
            }
        }

        self.collect(amount, player);
        events.push(GameEvent::BankCharged {
            player: player.id,
            amount,
            reason: reason.to_owned(),
        });
        Ok(ChargeOutcome::Paid)
    }

    /// Sells an unowned deed at its printed price. Cash only.
    pub fn sell_deed_to_player(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        if !self.holds(deed) {
            return Err(BankError::PropertyOwnership {
                deed,
                holder: Holder::Bank,
            });
        }
        let price = deed.deed().price();
        ensure_funds(player, price)?;

        self.collect(price, player);
        self.deeds.remove(&deed);
        player.deeds.insert(deed, Development::default());
        events.push(GameEvent::DeedPurchased {
            player: player.id,
            deed,
            price,
        });
        Ok(())
    }

    pub fn mortgage_deed(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let development = owned_development(deed, player)?;
        if development.is_mortgaged {
            return Err(BankError::development(deed, DevelopmentFault::AlreadyMortgaged));
        }
        if development.is_developed() {
            return Err(BankError::development(deed, DevelopmentFault::HasBuildings));
        }

        let amount = deed.deed().mortgage_value();
        self.disburse(amount, player);
        set_development(player, deed, |d| d.is_mortgaged = true);
        events.push(GameEvent::DeedMortgaged {
            player: player.id,
            deed,
            amount,
        });
        Ok(())
    }

    /// Lifts a mortgage for its value plus interest. Cash only.
    pub fn unmortgage_deed(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let development = owned_development(deed, player)?;
        if !development.is_mortgaged {
            return Err(BankError::development(deed, DevelopmentFault::NotMortgaged));
        }
        let amount = self.unmortgage_cost(deed);
        ensure_funds(player, amount)?;

        self.collect(amount, player);
        set_development(player, deed, |d| d.is_mortgaged = false);
        events.push(GameEvent::DeedUnmortgaged {
            player: player.id,
            deed,
            amount,
        });
        Ok(())
    }

    pub fn sell_house_to_player(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let (property, development) = owned_property(deed, player)?;
        ensure_monopoly(property, player)?;
        if player.group_has_mortgage(property.group) {
            return Err(BankError::development(deed, DevelopmentFault::GroupMortgaged));
        }
        if !player.adding_house_respects_even_building(deed) {
            return Err(BankError::development(deed, DevelopmentFault::UnevenBuilding));
        }
        if development.has_hotel {
            return Err(BankError::development(deed, DevelopmentFault::HotelPresent));
        }
        if development.houses >= Development::MAX_HOUSES {
            return Err(BankError::development(deed, DevelopmentFault::HouseLimit));
        }
        if self.houses == 0 {
            return Err(BankError::InsufficientToken {
                token: Token::House,
            });
        }
        ensure_funds(player, property.build_cost)?;

        self.collect(property.build_cost, player);
        self.houses -= 1;
        set_development(player, deed, |d| d.houses += 1);
        events.push(GameEvent::HouseBuilt {
            player: player.id,
            deed,
            houses: development.houses + 1,
            cost: property.build_cost,
        });
        Ok(())
    }

    /// Buys a house back for half its build cost, rounded up.
    pub fn buy_house_from_player(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let (property, development) = owned_property(deed, player)?;
        if development.has_hotel {
            return Err(BankError::development(deed, DevelopmentFault::HotelPresent));
        }
        if development.houses == 0 {
            return Err(BankError::development(deed, DevelopmentFault::NoHouse));
        }
        if !player.removing_house_respects_even_building(deed) {
            return Err(BankError::development(deed, DevelopmentFault::UnevenBuilding));
        }

        let refund = half_rounded_up(property.build_cost);
        self.disburse(refund, player);
        self.houses += 1;
        set_development(player, deed, |d| d.houses -= 1);
        events.push(GameEvent::HouseSold {
            player: player.id,
            deed,
            houses: development.houses - 1,
            refund,
        });
        Ok(())
    }

    /// Converts four houses into a hotel; the houses go back to the bank.
    pub fn sell_hotel_to_player(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let (property, development) = owned_property(deed, player)?;
        if development.has_hotel {
            return Err(BankError::development(deed, DevelopmentFault::HotelPresent));
        }
        if development.houses != Development::MAX_HOUSES {
            return Err(BankError::development(deed, DevelopmentFault::NeedsFourHouses));
        }
        ensure_monopoly(property, player)?;
        if !player.hotel_change_respects_even_building(deed) {
            return Err(BankError::development(deed, DevelopmentFault::UnevenBuilding));
        }
        if self.hotels == 0 {
            return Err(BankError::InsufficientToken {
                token: Token::Hotel,
            });
        }
        ensure_funds(player, property.build_cost)?;

        self.collect(property.build_cost, player);
        self.hotels -= 1;
        self.houses += u32::from(Development::MAX_HOUSES);
        set_development(player, deed, |d| {
            d.houses = 0;
            d.has_hotel = true;
        });
        events.push(GameEvent::HotelBuilt {
            player: player.id,
            deed,
            cost: property.build_cost,
        });
        Ok(())
    }

    /// Breaks a hotel back down into four houses, which the bank must supply.
    pub fn buy_hotel_from_player(
        &mut self,
        deed: DeedId,
        player: &mut Player,
        events: &mut EventLog,
    ) -> Result<(), BankError> {
        let (property, development) = owned_property(deed, player)?;
        if !development.has_hotel {
            return Err(BankError::development(deed, DevelopmentFault::NoHotel));
        }
        if !player.hotel_change_respects_even_building(deed) {
            return Err(BankError::development(deed, DevelopmentFault::UnevenBuilding));
        }
        let houses_needed = u32::from(Development::MAX_HOUSES);
        if self.houses < houses_needed {
            return Err(BankError::InsufficientToken {
                token: Token::House,
            });
        }

        let refund = half_rounded_up(property.build_cost);
        self.disburse(refund, player);
        self.hotels += 1;
        self.houses -= houses_needed;
        set_development(player, deed, |d| {
            d.houses = Development::MAX_HOUSES;
            d.has_hotel = false;
        });
        events.push(GameEvent::HotelSold {
            player: player.id,
            deed,
            refund,
        });
        Ok(())
    }

    /// Returns deeds surrendered in bankruptcy to the unsold pool.
    pub fn transfer_mortgaged_deeds(
        &mut self,
        deeds: impl IntoIterator<Item = DeedId>,
        events: &mut EventLog,
    ) {
        let returned: Vec<DeedId> = deeds.into_iter().collect();
        if returned.is_empty() {
            return;
        }
        self.deeds.extend(returned.iter().copied());
        events.push(GameEvent::DeedsReturned { deeds: returned });
    }

    fn disburse(&mut self, amount: Money, player: &mut Player) {
        self.money -= amount;
        player.money += amount;
    }

    fn collect(&mut self, amount: Money, player: &mut Player) {
        self.money += amount;
        player.money -= amount;
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

fn ensure_non_negative(amount: Money) -> Result<(), BankError> {
    if amount < 0 {
        return Err(BankError::InvalidAmount { amount });
    }
    Ok(())
}

fn ensure_funds(player: &Player, required: Money) -> Result<(), BankError> {
    if player.money < required {
        return Err(BankError::InsufficientFunds {
            player: player.id,
            required,
            available: player.money,
        });
    }
    Ok(())
}

fn ensure_monopoly(property: &PropertyDeed, player: &Player) -> Result<(), BankError> {
    if !player.has_monopoly(property.group) {
        return Err(BankError::MonopolyOwnership {
            player: player.id,
            group: property.group,
        });
    }
    Ok(())
}

fn owned_development(deed: DeedId, player: &Player) -> Result<Development, BankError> {
    player
        .development(deed)
        .copied()
        .ok_or(BankError::PropertyOwnership {
            deed,
            holder: Holder::Player(player.id),
        })
}

fn owned_property(
    deed: DeedId,
    player: &Player,
) -> Result<(&'static PropertyDeed, Development), BankError> {
    let development = owned_development(deed, player)?;
    match deed.deed() {
        TitleDeed::Property(property) => Ok((property, development)),
        _ => Err(BankError::development(deed, DevelopmentFault::NotBuildable)),
    }
}

fn set_development(player: &mut Player, deed: DeedId, update: impl FnOnce(&mut Development)) {
    if let Some(development) = player.development_mut(deed) {
        update(development);
    }
}

fn half_rounded_up(amount: Money) -> Money {
    (amount + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PlayerId;

    fn player(money: Money) -> Player {
        Player::new(PlayerId(0), "Count von Count").with_money(money)
    }

    fn dark_blue_owner(money: Money) -> (Bank, Player, EventLog) {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut player = player(money);
        bank.sell_deed_to_player(DeedId::ParkPlace, &mut player, &mut events)
            .unwrap();
        bank.sell_deed_to_player(DeedId::Boardwalk, &mut player, &mut events)
            .unwrap();
        (bank, player, events)
    }

    fn fault(result: Result<(), BankError>) -> DevelopmentFault {
        match result {
            Err(BankError::PropertyDevelopment { fault, .. }) => fault,
            other => panic!("expected a development fault, got {other:?}"),
        }
    }

    #[test]
    fn negative_amounts_are_rejected_without_side_effects() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut cookie = player(500);

        let paid = bank.pay(-10, &mut cookie, "", &mut events);
        assert_eq!(paid, Err(BankError::InvalidAmount { amount: -10 }));
        let charged = bank.charge(-10, &mut cookie, "", &mut events);
        assert_eq!(charged, Err(BankError::InvalidAmount { amount: -10 }));

        assert_eq!(cookie.money, 500);
        assert_eq!(bank.money, GameConfig::DEFAULT_BANK_MONEY);
        assert!(events.is_empty());
    }

    #[test]
    fn pay_and_charge_move_cash_both_ways() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(500);

        bank.pay(100, &mut elmo, "for testing", &mut events).unwrap();
        assert_eq!(elmo.money, 600);
        assert_eq!(bank.money, GameConfig::DEFAULT_BANK_MONEY - 100);

        let outcome = bank.charge(250, &mut elmo, "for testing", &mut events).unwrap();
        assert_eq!(outcome, ChargeOutcome::Paid);
        assert_eq!(elmo.money, 350);
        assert_eq!(bank.money, GameConfig::DEFAULT_BANK_MONEY + 150);

        bank.pay(0, &mut elmo, "", &mut events).unwrap();
        assert_eq!(elmo.money, 350);
    }

    #[test]
    fn deed_cannot_be_sold_twice() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut bert = player(100);
        let mut ernie = Player::new(PlayerId(1), "Ernie").with_money(100);

        bank.sell_deed_to_player(DeedId::MediterraneanAvenue, &mut bert, &mut events)
            .unwrap();
        assert_eq!(bert.money, 40);
        assert!(bert.is_owner(DeedId::MediterraneanAvenue));
        assert!(!bank.holds(DeedId::MediterraneanAvenue));

        let result = bank.sell_deed_to_player(DeedId::MediterraneanAvenue, &mut ernie, &mut events);
        assert_eq!(
            result,
            Err(BankError::PropertyOwnership {
                deed: DeedId::MediterraneanAvenue,
                holder: Holder::Bank,
            })
        );
        assert_eq!(ernie.money, 100);
        assert!(ernie.deeds.is_empty());
    }

    #[test]
    fn unaffordable_deed_is_not_sold() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut oscar = player(0);

        let result = bank.sell_deed_to_player(DeedId::MediterraneanAvenue, &mut oscar, &mut events);
        assert!(matches!(result, Err(BankError::InsufficientFunds { required: 60, .. })));
        assert!(bank.holds(DeedId::MediterraneanAvenue));
        assert_eq!(bank.money, GameConfig::DEFAULT_BANK_MONEY);
    }

    #[test]
    fn mortgage_pays_value_once() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(60);
        bank.sell_deed_to_player(DeedId::BalticAvenue, &mut elmo, &mut events)
            .unwrap();

        bank.mortgage_deed(DeedId::BalticAvenue, &mut elmo, &mut events)
            .unwrap();
        assert_eq!(elmo.money, 30);
        assert!(elmo.development(DeedId::BalticAvenue).is_some_and(|d| d.is_mortgaged));

        let again = bank.mortgage_deed(DeedId::BalticAvenue, &mut elmo, &mut events);
        assert_eq!(fault(again), DevelopmentFault::AlreadyMortgaged);
        assert_eq!(elmo.money, 30);
    }

    #[test]
    fn mortgage_requires_ownership() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(0);
        let result = bank.mortgage_deed(DeedId::BalticAvenue, &mut elmo, &mut events);
        assert!(matches!(result, Err(BankError::PropertyOwnership { .. })));
    }

    #[test]
    fn unmortgage_charges_ten_percent_interest() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(62);
        bank.sell_deed_to_player(DeedId::MediterraneanAvenue, &mut elmo, &mut events)
            .unwrap();
        bank.mortgage_deed(DeedId::MediterraneanAvenue, &mut elmo, &mut events)
            .unwrap();
        assert_eq!(elmo.money, 32);
        assert_eq!(bank.unmortgage_cost(DeedId::MediterraneanAvenue), 33);

        let short = bank.unmortgage_deed(DeedId::MediterraneanAvenue, &mut elmo, &mut events);
        assert!(matches!(short, Err(BankError::InsufficientFunds { required: 33, .. })));

        elmo.money += 1;
        bank.unmortgage_deed(DeedId::MediterraneanAvenue, &mut elmo, &mut events)
            .unwrap();
        assert_eq!(elmo.money, 0);
        assert!(elmo
            .development(DeedId::MediterraneanAvenue)
            .is_some_and(|d| !d.is_mortgaged));
    }

    #[test]
    fn building_requires_ownership_then_monopoly() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut count = player(500);

        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert!(matches!(result, Err(BankError::PropertyOwnership { .. })));

        bank.sell_deed_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert!(matches!(result, Err(BankError::MonopolyOwnership { .. })));
        let result = bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::NeedsFourHouses);
    }

    #[test]
    fn hotel_checks_houses_before_monopoly() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut count = player(500);
        bank.sell_deed_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();

        count.development_mut(DeedId::ParkPlace).unwrap().has_hotel = true;
        let result = bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::HotelPresent);

        *count.development_mut(DeedId::ParkPlace).unwrap() = Development {
            houses: Development::MAX_HOUSES,
            ..Development::default()
        };
        let before = count.clone();
        let result = bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert!(matches!(result, Err(BankError::MonopolyOwnership { .. })));
        assert_eq!(count, before);
        assert_eq!(bank.hotels, GameConfig::DEFAULT_BANK_HOTELS);
    }

    #[test]
    fn railroads_cannot_be_developed() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut count = player(500);
        bank.sell_deed_to_player(DeedId::ReadingRailroad, &mut count, &mut events)
            .unwrap();
        let result = bank.sell_house_to_player(DeedId::ReadingRailroad, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::NotBuildable);
    }

    #[test]
    fn houses_alternate_across_the_group() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);

        bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        let before = count.clone();
        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::UnevenBuilding);
        assert_eq!(count, before);

        bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();
        bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();
        let result = bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::UnevenBuilding);

        bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        assert!(count.deeds.values().all(|d| d.houses == 2));
    }

    #[test]
    fn fifth_house_is_rejected() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        for _ in 0..4 {
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
        }
        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::HouseLimit);
    }

    #[test]
    fn house_inventory_is_finite() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        bank.houses = 2;
        bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();
        let before = count.clone();
        let bank_money = bank.money;
        let recorded = events.len();

        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(
            result,
            Err(BankError::InsufficientToken {
                token: Token::House
            })
        );
        assert_eq!(count, before);
        assert_eq!(bank.houses, 0);
        assert_eq!(bank.money, bank_money);
        assert_eq!(events.len(), recorded);
    }

    #[test]
    fn houses_are_cash_only() {
        let (mut bank, mut count, mut events) = dark_blue_owner(750);
        let result = bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));
        assert_eq!(bank.houses, GameConfig::DEFAULT_BANK_HOUSES);
    }

    #[test]
    fn build_house_spends_build_cost() {
        let (mut bank, mut count, mut events) = dark_blue_owner(950);
        bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        assert_eq!(count.money, 0);
        let park = count.development(DeedId::ParkPlace).copied().unwrap_or_default();
        assert_eq!(park.houses, 1);
        assert!(!park.has_hotel);
        assert_eq!(bank.houses, GameConfig::DEFAULT_BANK_HOUSES - 1);
    }

    #[test]
    fn building_is_blocked_while_group_member_is_mortgaged() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        bank.mortgage_deed(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        let result = bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::GroupMortgaged);
    }

    #[test]
    fn uneven_hotel_is_rejected_until_group_catches_up() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        for _ in 0..3 {
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
        }
        let result = bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::UnevenBuilding);

        bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();
        bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        bank.sell_hotel_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();

        let result = bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::HotelPresent);
    }

    #[test]
    fn hotel_inventory_is_finite() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        bank.hotels = 1;
        for _ in 0..4 {
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
        }
        bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        let result = bank.sell_hotel_to_player(DeedId::Boardwalk, &mut count, &mut events);
        assert_eq!(
            result,
            Err(BankError::InsufficientToken {
                token: Token::Hotel
            })
        );
    }

    #[test]
    fn hotels_are_cash_only() {
        let (mut bank, mut count, mut events) = dark_blue_owner(2549);
        for _ in 0..4 {
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
        }
        let result = bank.sell_hotel_to_player(DeedId::Boardwalk, &mut count, &mut events);
        assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));
    }

    #[test]
    fn full_dark_blue_development_spends_exactly_2750() {
        let (mut bank, mut count, mut events) = dark_blue_owner(2750);
        for _ in 0..4 {
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
        }
        assert_eq!(bank.houses, GameConfig::DEFAULT_BANK_HOUSES - 8);

        bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        bank.sell_hotel_to_player(DeedId::Boardwalk, &mut count, &mut events)
            .unwrap();

        assert!(count.deeds.values().all(|d| d.houses == 0 && d.has_hotel));
        assert_eq!(count.money, 0);
        assert_eq!(bank.houses, GameConfig::DEFAULT_BANK_HOUSES);
        assert_eq!(bank.hotels, GameConfig::DEFAULT_BANK_HOTELS - 2);
    }

    #[test]
    fn selling_buildings_back_refunds_half_rounded_up() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut count = player(5000);
        for deed in [DeedId::OrientalAvenue, DeedId::VermontAvenue, DeedId::ConnecticutAvenue] {
            bank.sell_deed_to_player(deed, &mut count, &mut events).unwrap();
            bank.sell_house_to_player(deed, &mut count, &mut events).unwrap();
        }
        let before = count.money;

        bank.buy_house_from_player(DeedId::VermontAvenue, &mut count, &mut events)
            .unwrap();
        assert_eq!(count.money, before + 25);
        let result = bank.buy_house_from_player(DeedId::VermontAvenue, &mut count, &mut events);
        assert_eq!(fault(result), DevelopmentFault::NoHouse);
        assert_eq!(half_rounded_up(75), 38);
    }

    #[test]
    fn hotel_sale_needs_four_houses_in_stock() {
        let (mut bank, mut count, mut events) = dark_blue_owner(5000);
        for _ in 0..4 {
            bank.sell_house_to_player(DeedId::ParkPlace, &mut count, &mut events)
                .unwrap();
            bank.sell_house_to_player(DeedId::Boardwalk, &mut count, &mut events)
                .unwrap();
        }
        bank.sell_hotel_to_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();

        bank.houses = 3;
        let result = bank.buy_hotel_from_player(DeedId::ParkPlace, &mut count, &mut events);
        assert_eq!(
            result,
            Err(BankError::InsufficientToken {
                token: Token::House
            })
        );

        bank.houses = 4;
        let hotels = bank.hotels;
        bank.buy_hotel_from_player(DeedId::ParkPlace, &mut count, &mut events)
            .unwrap();
        assert_eq!(bank.houses, 0);
        assert_eq!(bank.hotels, hotels + 1);
        let park = count.development(DeedId::ParkPlace).copied().unwrap_or_default();
        assert_eq!((park.houses, park.has_hotel), (4, false));
    }

    #[test]
    fn charge_beyond_net_worth_bankrupts_player_to_bank() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(120);
        elmo.jail_free_cards.push(DeckKind::Chance);
        bank.sell_deed_to_player(DeedId::MediterraneanAvenue, &mut elmo, &mut events)
            .unwrap();
        bank.sell_deed_to_player(DeedId::BalticAvenue, &mut elmo, &mut events)
            .unwrap();
        let bank_before = bank.money;

        let outcome = bank
            .charge(100, &mut elmo, "for assorted bribes", &mut events)
            .unwrap();

        assert_eq!(
            outcome,
            ChargeOutcome::Bankrupt {
                returned_cards: vec![DeckKind::Chance]
            }
        );
        assert!(elmo.is_bankrupt());
        assert_eq!(elmo.money, 0);
        assert!(elmo.deeds.is_empty());
        assert!(elmo.jail_free_cards.is_empty());
        assert!(bank.holds(DeedId::MediterraneanAvenue));
        assert!(bank.holds(DeedId::BalticAvenue));
        // 60 paid out in mortgages, 60 forfeited back
        assert_eq!(bank.money, bank_before);
    }

    #[test]
    fn charge_covered_by_liquidation_is_paid() {
        let mut bank = Bank::default();
        let mut events = EventLog::default();
        let mut elmo = player(260);
        bank.sell_deed_to_player(DeedId::ReadingRailroad, &mut elmo, &mut events)
            .unwrap();
        bank.sell_deed_to_player(DeedId::BalticAvenue, &mut elmo, &mut events)
            .unwrap();
        assert_eq!(elmo.money, 0);

        let outcome = bank.charge(90, &mut elmo, "for testing", &mut events).unwrap();
        assert_eq!(outcome, ChargeOutcome::Paid);
        assert!(!elmo.is_bankrupt());
        // Reading (3 of 4 railroads missing) goes before Baltic (1 of 2 missing)
        assert!(elmo.development(DeedId::ReadingRailroad).is_some_and(|d| d.is_mortgaged));
        assert!(elmo.development(DeedId::BalticAvenue).is_some_and(|d| !d.is_mortgaged));
        assert_eq!(elmo.money, 10);
    }
}
