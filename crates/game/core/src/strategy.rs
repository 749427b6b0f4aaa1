//! Pluggable per-player decisions.
//!
//! The engine calls a [`Strategy`] at fixed points of a turn and never looks
//! at how it decides. [`StandardStrategy`] is the default policy.
use crate::bank::Bank;
use crate::card::DeckKind;
use crate::common::{Money, Token};
use crate::deed::{DeedId, TitleDeed};
use crate::event::EventLog;
use crate::player::{Development, Player};

pub trait Strategy {
    /// Called when the player lands on an unowned deed.
    fn is_buying(&self, player: &Player, deed: TitleDeed) -> bool;

    /// Called after every landing. May lift mortgages and buy buildings
    /// through the bank; failed requests leave the game unchanged.
    fn develop_properties(&self, player: &mut Player, bank: &mut Bank, events: &mut EventLog);

    /// Called at the start of a jailed turn when no card is played.
    fn is_paying_jail_fee(&self, player: &Player, fee: Money) -> bool;

    /// Origin deck of the held card to play at the start of a jailed turn.
    fn choose_jail_free_card(&self, player: &Player) -> Option<DeckKind>;
}

/// Buys whatever it can afford and builds wherever the rules allow.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardStrategy;

impl StandardStrategy {
    /// Cheapest mortgaged deed the player can afford to lift.
    fn next_unmortgage(player: &Player, bank: &Bank) -> Option<DeedId> {
        player
            .deeds
            .iter()
            .filter(|(_, d)| d.is_mortgaged)
            .map(|(id, _)| *id)
            .filter(|id| bank.unmortgage_cost(*id) <= player.money)
            .min_by_key(|id| bank.unmortgage_cost(*id))
    }

    /// Legal, affordable building with the highest current rent.
    fn next_building(player: &Player, bank: &Bank) -> Option<(DeedId, Token)> {
        player
            .deeds
            .iter()
            .filter_map(|(id, development)| {
                let TitleDeed::Property(property) = id.deed() else {
                    return None;
                };
                if !player.has_monopoly(property.group)
                    || player.group_has_mortgage(property.group)
                    || player.money < property.build_cost
                {
                    return None;
                }
                let token = Self::buildable_token(player, bank, *id, development)?;
                Some((*id, token))
            })
            .max_by_key(|(id, _)| id.deed().calculate_rent(player, None))
    }

    fn buildable_token(
        player: &Player,
        bank: &Bank,
        deed: DeedId,
        development: &Development,
    ) -> Option<Token> {
        if development.has_hotel {
            None
        } else if development.houses < Development::MAX_HOUSES {
            (bank.houses > 0 && player.adding_house_respects_even_building(deed))
                .then_some(Token::House)
        } else {
            (bank.hotels > 0 && player.hotel_change_respects_even_building(deed))
                .then_some(Token::Hotel)
        }
    }
}

impl Strategy for StandardStrategy {
    fn is_buying(&self, player: &Player, deed: TitleDeed) -> bool {
        player.money >= deed.price()
    }

    fn develop_properties(&self, player: &mut Player, bank: &mut Bank, events: &mut EventLog) {
        while let Some(deed) = Self::next_unmortgage(player, bank) {
            if bank.unmortgage_deed(deed, player, events).is_err() {
                break;
            }
        }

        while let Some((deed, token)) = Self::next_building(player, bank) {
            let built = match token {
                Token::House => bank.sell_house_to_player(deed, player, events),
                Token::Hotel => bank.sell_hotel_to_player(deed, player, events),
            };
            if built.is_err() {
                break;
            }
        }
    }

    fn is_paying_jail_fee(&self, player: &Player, fee: Money) -> bool {
        player.money >= fee
    }

    fn choose_jail_free_card(&self, player: &Player) -> Option<DeckKind> {
        player.jail_free_cards.first().copied()
    }
}
