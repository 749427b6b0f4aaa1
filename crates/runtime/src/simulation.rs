//! The game loop: setup, rounds, and termination.

use tracing::{debug, info};

use monopoly_content::{chance_cards, community_chest_cards, standard_track};
use monopoly_core::{
    Board, Card, Deck, Dice, PlayerId, StandardStrategy, Strategy, Track,
};

use crate::config::SimulationConfig;
use crate::error::{Result, RuntimeError};
use crate::narration::narrate;
use crate::report::{Outcome, SimulationReport};

/// One game from setup to its end.
///
/// Each player is paid the starting cash by the bank and placed on Go. The
/// game ends when a single player remains solvent or when the round limit
/// is reached, whichever comes first.
pub struct Simulation {
    board: Board,
    config: SimulationConfig,
    seed: u64,
    rounds_played: u32,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// How the game ended, or `None` while it is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        let seats = self.board.players().len();
        let active = self.board.active_players().count();
        if active == 0 || (seats > 1 && active == 1) {
            Some(Outcome::LastPlayerStanding)
        } else if self.rounds_played >= self.config.max_rounds {
            Some(Outcome::RoundLimit)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Plays the next round and narrates what happened.
    pub fn step(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(RuntimeError::Finished {
                rounds: self.rounds_played,
            });
        }

        self.rounds_played += 1;
        let round = self.rounds_played;
        let result = self.board.execute_round(round);
        let events = self.board.drain_events();
        narrate(round, &events, self.board.players());
        result?;
        Ok(())
    }

    /// Plays rounds until the game ends.
    pub fn run(&mut self) -> Result<SimulationReport> {
        info!(
            target: "monopoly::runtime",
            seed = self.seed,
            players = self.board.players().len(),
            max_rounds = self.config.max_rounds,
            "Starting game"
        );
        while !self.is_finished() {
            self.step()?;
        }
        let report = self.report();
        info!(
            target: "monopoly::runtime",
            rounds = report.rounds_played,
            outcome = %report.outcome,
            "Game over"
        );
        Ok(report)
    }

    /// Summary of the game so far. The outcome defaults to the round limit
    /// while the game is still running.
    pub fn report(&self) -> SimulationReport {
        let outcome = self.outcome().unwrap_or(Outcome::RoundLimit);
        SimulationReport::new(&self.board, self.seed, self.rounds_played, outcome)
    }
}

/// Builder for [`Simulation`]. Unset content falls back to the standard edition.
pub struct SimulationBuilder {
    config: SimulationConfig,
    seats: Vec<(String, Box<dyn Strategy>)>,
    track: Option<Track>,
    chance: Option<Deck<Card>>,
    community_chest: Option<Deck<Card>>,
    dice: Option<Dice>,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            seats: Vec::new(),
            track: None,
            chance: None,
            community_chest: None,
            dice: None,
        }
    }

    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.seats.push((name.into(), Box::new(strategy)));
        self
    }

    /// Seats each name with the [`StandardStrategy`].
    pub fn standard_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.player(name, StandardStrategy);
        }
        self
    }

    pub fn track(mut self, track: Track) -> Self {
        self.track = Some(track);
        self
    }

    pub fn chance(mut self, deck: Deck<Card>) -> Self {
        self.chance = Some(deck);
        self
    }

    pub fn community_chest(mut self, deck: Deck<Card>) -> Self {
        self.community_chest = Some(deck);
        self
    }

    pub fn dice(mut self, dice: Dice) -> Self {
        self.dice = Some(dice);
        self
    }

    pub fn build(self) -> Result<Simulation> {
        if self.config.max_rounds == 0 {
            return Err(RuntimeError::InvalidRoundLimit);
        }
        let seed = self.config.resolve_seed();
        let track = match self.track {
            Some(track) => track,
            None => Track::new(standard_track())?,
        };

        let mut builder = Board::builder(track)
            .config(self.config.game.clone())
            .seed(seed)
            .chance(self.chance.unwrap_or_else(|| Deck::new(chance_cards())))
            .community_chest(
                self.community_chest
                    .unwrap_or_else(|| Deck::new(community_chest_cards())),
            );
        if let Some(dice) = self.dice {
            builder = builder.dice(dice);
        }
        for (name, strategy) in self.seats {
            builder = builder.boxed_player(name, strategy);
        }
        let mut board = builder.build()?;

        let starting_cash = self.config.game.starting_cash;
        for seat in 0..board.players().len() {
            board.pay(PlayerId(seat), starting_cash, "in starting cash")?;
        }
        let setup = board.drain_events();
        debug!(
            target: "monopoly::runtime",
            seed,
            events = setup.len(),
            "Players seated on Go"
        );
        narrate(0, &setup, board.players());

        Ok(Simulation {
            board,
            config: self.config,
            seed,
            rounds_played: 0,
        })
    }
}
