//! Raising cash under duress, and bankruptcy when that fails.
use core::cmp::Reverse;

use super::Player;
use crate::bank::Bank;
use crate::card::DeckKind;
use crate::common::{Money, PlayerId};
use crate::deed::{DeedId, DeedKind};
use crate::error::{ErrorSeverity, GameError};
use crate::event::{EventLog, GameEvent};

/// Liquidation ran out of assets before covering the debt.
///
/// Never escapes a charge or player-to-player payment; those convert it into
/// a bankruptcy settlement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{player} cannot raise ${required} (short by ${shortfall})")]
pub struct Bankruptcy {
    pub player: PlayerId,
    pub required: Money,
    pub shortfall: Money,
}

impl GameError for Bankruptcy {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "bankruptcy"
    }
}

impl Player {
    /// Mortgages and sells back buildings until the player holds `required`.
    ///
    /// Steps, re-evaluated after every single transaction:
    /// 1. mortgage deeds outside completed colour groups
    /// 2. sell back buildings, lowest current rent first
    /// 3. mortgage the now-bare monopoly deeds
    ///
    /// Candidates for mortgaging are ranked by how far their group is from
    /// completion, then by smallest mortgage value.
    pub fn liquidate_assets(
        &mut self,
        required: Money,
        bank: &mut Bank,
        events: &mut EventLog,
    ) -> Result<(), Bankruptcy> {
        while self.money < required {
            if self.mortgage_next(false, bank, events)
                || self.sell_back_next_building(bank, events)
                || self.mortgage_next(true, bank, events)
            {
                continue;
            }
            return Err(Bankruptcy {
                player: self.id,
                required,
                shortfall: required - self.money,
            });
        }
        Ok(())
    }

    /// Hands everything over and leaves the game.
    ///
    /// Remaining cash goes to `creditor` when the debt is owed to another
    /// player, otherwise to the bank. Deeds always return to the bank's
    /// unsold pool. The returned cards must be put back in their decks.
    pub fn declare_bankruptcy(
        &mut self,
        bank: &mut Bank,
        creditor: Option<&mut Player>,
        events: &mut EventLog,
    ) -> Vec<DeckKind> {
        let forfeited = self.money.max(0);
        let creditor_id = match creditor {
            Some(creditor) => {
                creditor.money += forfeited;
                Some(creditor.id)
            }
            None => {
                bank.money += forfeited;
                None
            }
        };
        self.money = 0;

        let (houses, hotels) = self.building_counts();
        bank.houses += houses;
        bank.hotels += hotels;

        let deeds = core::mem::take(&mut self.deeds);
        bank.transfer_mortgaged_deeds(deeds.into_keys(), events);

        let cards = core::mem::take(&mut self.jail_free_cards);
        self.release_from_jail();
        self.bankrupt = true;
        events.push(GameEvent::Bankrupt {
            player: self.id,
            creditor: creditor_id,
            forfeited,
        });
        cards
    }

    fn is_in_completed_group(&self, deed: DeedId) -> bool {
        deed.colour_group()
            .is_some_and(|group| self.has_monopoly(group))
    }

    fn deeds_missing_from_group(&self, deed: DeedId) -> usize {
        let owned = match deed.kind() {
            DeedKind::Property => deed
                .colour_group()
                .map_or(0, |group| self.owned_in_group(group)),
            DeedKind::Railroad => self.railroads_owned(),
            DeedKind::Utility => self.utilities_owned(),
        };
        deed.deed().group_size().saturating_sub(owned)
    }

    fn mortgage_next(&mut self, monopolies: bool, bank: &mut Bank, events: &mut EventLog) -> bool {
        let candidate = self
            .deeds
            .iter()
            .filter(|(_, d)| !d.is_mortgaged && !d.is_developed())
            .map(|(id, _)| *id)
            .filter(|id| self.is_in_completed_group(*id) == monopolies)
            .min_by_key(|id| {
                (
                    Reverse(self.deeds_missing_from_group(*id)),
                    id.deed().mortgage_value(),
                )
            });

        match candidate {
            Some(deed) => bank.mortgage_deed(deed, self, events).is_ok(),
            None => false,
        }
    }

    fn sell_back_next_building(&mut self, bank: &mut Bank, events: &mut EventLog) -> bool {
        let candidate = self
            .deeds
            .iter()
            .filter(|(_, d)| d.is_developed())
            .filter(|(id, d)| {
                if d.has_hotel {
                    self.hotel_change_respects_even_building(**id) && bank.houses >= 4
                } else {
                    self.removing_house_respects_even_building(**id)
                }
            })
            .map(|(id, d)| (*id, d.has_hotel))
            .min_by_key(|(id, _)| id.deed().calculate_rent(self, None));

        match candidate {
            Some((deed, true)) => bank.buy_hotel_from_player(deed, self, events).is_ok(),
            Some((deed, false)) => bank.buy_house_from_player(deed, self, events).is_ok(),
            None => false,
        }
    }
}
