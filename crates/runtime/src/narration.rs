//! Turns the core's event stream into log lines.
use tracing::{debug, info, warn};

use monopoly_core::{GameEvent, Player};

/// Logs every event of a round under the `monopoly::game` target.
///
/// Rolls and movement go to `debug`, liquidation and bankruptcy to `warn`,
/// everything else to `info`.
pub fn narrate(round: u32, events: &[GameEvent], players: &[Player]) {
    for event in events {
        let name = event
            .subject()
            .and_then(|id| players.get(id.index()))
            .map_or("", |p| p.name.as_str());

        match event {
            GameEvent::RoundStarted { .. } | GameEvent::DeedsReturned { .. } => {
                info!(target: "monopoly::game", round, "{event}");
            }
            GameEvent::TurnStarted { .. }
            | GameEvent::DiceRolled { .. }
            | GameEvent::Moved { .. }
            | GameEvent::Landed { .. } => {
                debug!(target: "monopoly::game", round, player = name, "{name} {event}");
            }
            GameEvent::PlayerPaid {
                payee,
                amount,
                reason,
                ..
            } => {
                let payee = players.get(payee.index()).map_or("", |p| p.name.as_str());
                info!(
                    target: "monopoly::game",
                    round,
                    player = name,
                    amount,
                    "{name} pays ${amount} to {payee} {reason}"
                );
            }
            GameEvent::LiquidationStarted { .. } | GameEvent::Bankrupt { .. } => {
                warn!(target: "monopoly::game", round, player = name, "{name} {event}");
            }
            _ => {
                info!(target: "monopoly::game", round, player = name, "{name} {event}");
            }
        }
    }
}
