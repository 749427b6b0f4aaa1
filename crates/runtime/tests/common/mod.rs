//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use monopoly_core::{
    Bank, Card, DeckKind, DeedId, Deck, Dice, EventLog, GameEvent, Money, Player, PlayerId, Roll,
    Strategy, TitleDeed,
};
use monopoly_runtime::{Simulation, SimulationBuilder, SimulationConfig};

pub const ALICE: PlayerId = PlayerId(0);
pub const BOB: PlayerId = PlayerId(1);

/// Strategy with fixed answers and no development.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scripted {
    pub buys: bool,
    pub pays_fee: bool,
    pub plays_card: bool,
}

impl Scripted {
    pub fn passive() -> Self {
        Self::default()
    }

    pub fn paying_fee() -> Self {
        Self {
            pays_fee: true,
            ..Self::default()
        }
    }

    pub fn playing_card() -> Self {
        Self {
            plays_card: true,
            ..Self::default()
        }
    }
}

impl Strategy for Scripted {
    fn is_buying(&self, player: &Player, deed: TitleDeed) -> bool {
        self.buys && player.money >= deed.price()
    }

    fn develop_properties(&self, _: &mut Player, _: &mut Bank, _: &mut EventLog) {}

    fn is_paying_jail_fee(&self, player: &Player, fee: Money) -> bool {
        self.pays_fee && player.money >= fee
    }

    fn choose_jail_free_card(&self, player: &Player) -> Option<DeckKind> {
        if self.plays_card {
            player.jail_free_cards.first().copied()
        } else {
            None
        }
    }
}

pub fn rolls(pairs: &[(u8, u8)]) -> Dice {
    Dice::loaded(pairs.iter().map(|&(a, b)| Roll::new(a, b)))
}

/// Two passive players on the standard board with scripted dice and decks.
pub fn two_players(dice: &[(u8, u8)], chance: Vec<Card>, chest: Vec<Card>) -> SimulationBuilder {
    Simulation::builder()
        .config(SimulationConfig::default().with_seed(7))
        .player("Alice", Scripted::passive())
        .player("Bob", Scripted::passive())
        .dice(rolls(dice))
        .chance(Deck::stacked(chance))
        .community_chest(Deck::stacked(chest))
}

pub fn one_player(
    strategy: Scripted,
    dice: &[(u8, u8)],
    chance: Vec<Card>,
    chest: Vec<Card>,
) -> SimulationBuilder {
    Simulation::builder()
        .config(SimulationConfig::default().with_seed(7))
        .player("Alice", strategy)
        .dice(rolls(dice))
        .chance(Deck::stacked(chance))
        .community_chest(Deck::stacked(chest))
}

/// Buys `deed` from the bank for `id` without changing the player's cash.
pub fn grant_deed(sim: &mut Simulation, id: PlayerId, deed: DeedId) {
    let board = sim.board_mut();
    let mut player = board.player(id).unwrap().clone();
    player.money += deed.deed().price();
    board
        .bank_mut()
        .sell_deed_to_player(deed, &mut player, &mut EventLog::default())
        .unwrap();
    board.bank_mut().money -= deed.deed().price();
    *board.player_mut(id).unwrap() = player;
}

pub fn money(sim: &Simulation, id: PlayerId) -> Money {
    sim.board().player(id).unwrap().money
}

pub fn position(sim: &Simulation, id: PlayerId) -> usize {
    sim.board().player(id).unwrap().position
}

/// Plays one round on the board and returns its events, including any
/// recorded since the last drain.
pub fn play_round(sim: &mut Simulation) -> Vec<GameEvent> {
    let round = sim.board().round() + 1;
    let board = sim.board_mut();
    board.execute_round(round).unwrap();
    board.drain_events()
}

pub fn count(events: &[GameEvent], predicate: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| predicate(e)).count()
}
