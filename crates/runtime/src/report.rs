//! End-of-game summary.
use std::fmt;

use serde::{Deserialize, Serialize};

use monopoly_core::{Board, GameSnapshot, Money, PlayerId};

use crate::error::{Result, RuntimeError};

/// Why the game stopped. Both are normal endings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    LastPlayerStanding,
    RoundLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::LastPlayerStanding => "last player standing",
            Outcome::RoundLimit => "round limit reached",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub money: Money,
    pub net_worth: Money,
    pub bankrupt: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub rounds_played: u32,
    pub outcome: Outcome,
    /// Set only when every other player went bankrupt.
    pub winner: Option<Standing>,
    /// Solvent players by net worth, then bankrupt players in seating order.
    pub standings: Vec<Standing>,
    pub snapshot: GameSnapshot,
}

impl SimulationReport {
    pub(crate) fn new(board: &Board, seed: u64, rounds_played: u32, outcome: Outcome) -> Self {
        let mut standings: Vec<Standing> = board
            .players()
            .iter()
            .map(|p| Standing {
                player: p.id,
                name: p.name.clone(),
                money: p.money,
                net_worth: p.net_worth(),
                bankrupt: p.is_bankrupt(),
            })
            .collect();
        standings.sort_by_key(|s| (s.bankrupt, std::cmp::Reverse(s.net_worth), s.player));

        let winner = match outcome {
            Outcome::LastPlayerStanding => board
                .winner()
                .and_then(|id| standings.iter().find(|s| s.player == id).cloned()),
            Outcome::RoundLimit => None,
        };

        Self {
            seed,
            rounds_played,
            outcome,
            winner,
            standings,
            snapshot: board.snapshot(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RuntimeError::Report)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game over after {} rounds ({}), seed {}",
            self.rounds_played, self.outcome, self.seed
        )?;
        if let Some(winner) = &self.winner {
            writeln!(f, "Winner: {}", winner.name)?;
        }
        for (rank, s) in self.standings.iter().enumerate() {
            if s.bankrupt {
                writeln!(f, "{:>2}. {} (bankrupt)", rank + 1, s.name)?;
            } else {
                writeln!(
                    f,
                    "{:>2}. {}: ${} cash, ${} net worth",
                    rank + 1,
                    s.name,
                    s.money,
                    s.net_worth
                )?;
            }
        }
        let bank = &self.snapshot.bank;
        write!(
            f,
            "Bank: ${}, {} houses, {} hotels, {} deeds unsold",
            bank.money,
            bank.houses,
            bank.hotels,
            bank.unsold_deeds.len()
        )
    }
}
