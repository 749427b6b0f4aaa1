//! Per-player turn state machine.
use super::{Board, BoardError};
use crate::common::PlayerId;
use crate::event::{GameEvent, JailRelease};
use crate::tile::RentRule;

/// Consecutive doubles that send a player to jail.
const MAX_DOUBLES: u8 = 3;

impl Board {
    /// Plays one turn for every player still in the game, in seating order.
    pub fn execute_round(&mut self, round: u32) -> Result<(), BoardError> {
        self.round = round;
        self.events.push(GameEvent::RoundStarted { round });
        for index in 0..self.players.len() {
            if self.players[index].is_bankrupt() {
                continue;
            }
            self.execute_turn(index)?;
        }
        Ok(())
    }

    fn execute_turn(&mut self, index: usize) -> Result<(), BoardError> {
        let player = &self.players[index];
        let id = player.id;
        self.events.push(GameEvent::TurnStarted {
            player: id,
            position: player.position,
            in_jail: player.in_jail,
            money: player.money,
        });

        if player.in_jail && player.turns_left_in_jail > 0 {
            self.attempt_to_leave_jail(index)?;
            if self.players[index].is_bankrupt() {
                return Ok(());
            }
        }

        let mut doubles = 0;
        loop {
            let roll = self.dice.roll(self.rng.as_mut());
            self.events.push(GameEvent::DiceRolled { player: id, roll });

            if roll.is_doubles() {
                doubles += 1;
                if self.players[index].in_jail {
                    self.release(index, JailRelease::Doubles);
                    // leaving jail on doubles does not earn another roll
                    doubles = MAX_DOUBLES;
                } else if doubles == MAX_DOUBLES {
                    self.go_to_jail(id)?;
                    break;
                }
            } else if self.players[index].in_jail
                && self.players[index].decrement_turns_left_in_jail() == 0
            {
                let fee = self.config.jail_fee;
                self.charge(id, fee, "to get out of jail")?;
                if self.players[index].is_bankrupt() {
                    break;
                }
                self.release(index, JailRelease::TimeServed);
            }

            if !self.players[index].in_jail {
                self.advance(index, roll.amount() as i32, RentRule::Standard)?;
            }

            if self.players[index].is_bankrupt() {
                break;
            }
            self.develop_properties(index);

            // a trip to jail ends the turn even after doubles
            if !roll.is_doubles() || doubles >= MAX_DOUBLES || self.players[index].in_jail {
                break;
            }
        }
        Ok(())
    }

    /// Plays a held card, or pays the fee if the strategy wants to.
    fn attempt_to_leave_jail(&mut self, index: usize) -> Result<(), BoardError> {
        let id = self.players[index].id;
        let fee = self.config.jail_fee;
        let card = self.strategies[index]
            .choose_jail_free_card(&self.players[index])
            .and_then(|origin| {
                let held = &self.players[index].jail_free_cards;
                held.iter().position(|c| *c == origin)
            });

        if let Some(slot) = card {
            let origin = self.players[index].jail_free_cards.remove(slot);
            self.return_jail_free_card(origin);
            self.events.push(GameEvent::JailFreeCardUsed {
                player: id,
                deck: origin,
            });
            self.release(index, JailRelease::Card);
            return Ok(());
        }

        if self.strategies[index].is_paying_jail_fee(&self.players[index], fee) {
            self.charge(id, fee, "to get out of jail early")?;
            if !self.players[index].is_bankrupt() {
                self.release(index, JailRelease::EarlyFee);
            }
        }
        Ok(())
    }

    fn release(&mut self, index: usize, release: JailRelease) {
        let player = &mut self.players[index];
        player.release_from_jail();
        self.events.push(GameEvent::ReleasedFromJail {
            player: player.id,
            release,
        });
    }

    fn develop_properties(&mut self, index: usize) {
        self.strategies[index].develop_properties(
            &mut self.players[index],
            &mut self.bank,
            &mut self.events,
        );
    }

    /// Seat of the only player left standing, once everyone else is bankrupt.
    pub fn winner(&self) -> Option<PlayerId> {
        let mut active = self.active_players();
        match (active.next(), active.next()) {
            (Some(winner), None) => Some(winner.id),
            _ => None,
        }
    }
}
