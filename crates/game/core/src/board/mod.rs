//! The board: track, seats, decks, dice, and the turn engine that drives them.
//!
//! [`Board`] owns every piece of mutable game state. Tiles and cards receive
//! `&mut Board` as their capability to move players, collect payments, and
//! draw further cards; all money still flows through the [`Bank`].
mod error;
mod movement;
mod track;
mod turn;

pub use error::BoardError;
pub use track::Track;

use crate::bank::{Bank, ChargeOutcome};
use crate::card::{Card, DeckKind};
use crate::common::{Money, PlayerId};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::dice::Dice;
use crate::event::{EventLog, GameEvent};
use crate::player::Player;
use crate::rng::{PcgRandom, RandomSource};
use crate::strategy::Strategy;

pub struct Board {
    pub(crate) track: Track,
    pub(crate) players: Vec<Player>,
    pub(crate) strategies: Vec<Box<dyn Strategy>>,
    pub(crate) bank: Bank,
    pub(crate) dice: Dice,
    chance: Deck<Card>,
    community_chest: Deck<Card>,
    pub(crate) rng: Box<dyn RandomSource>,
    config: GameConfig,
    pub(crate) events: EventLog,
    round: u32,
}

impl Board {
    pub fn builder(track: Track) -> BoardBuilder {
        BoardBuilder::new(track)
    }

    // ===== queries =====

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Last round started through [`Board::execute_round`].
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, BoardError> {
        self.players
            .get(id.index())
            .ok_or(BoardError::UnknownPlayer { player: id })
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, BoardError> {
        self.players
            .get_mut(id.index())
            .ok_or(BoardError::UnknownPlayer { player: id })
    }

    /// Players still in the game, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_bankrupt())
    }

    /// Every other player still in the game, in seating order.
    pub fn opponents(&self, id: PlayerId) -> Vec<PlayerId> {
        self.active_players()
            .map(|p| p.id)
            .filter(|other| *other != id)
            .collect()
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut Bank {
        &mut self.bank
    }

    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    pub fn deck(&self, kind: DeckKind) -> &Deck<Card> {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    pub fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck<Card> {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub(crate) fn index_of(&self, id: PlayerId) -> Result<usize, BoardError> {
        if id.index() < self.players.len() {
            Ok(id.index())
        } else {
            Err(BoardError::UnknownPlayer { player: id })
        }
    }

    // ===== money =====

    /// Bank pays the player.
    pub fn pay(&mut self, id: PlayerId, amount: Money, reason: &str) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        self.bank
            .pay(amount, &mut self.players[index], reason, &mut self.events)?;
        Ok(())
    }

    /// Player pays the bank, liquidating or going bankrupt if short.
    pub fn charge(&mut self, id: PlayerId, amount: Money, reason: &str) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        let outcome = self
            .bank
            .charge(amount, &mut self.players[index], reason, &mut self.events)?;
        if let ChargeOutcome::Bankrupt { returned_cards } = outcome {
            self.return_jail_free_cards(returned_cards);
        }
        Ok(())
    }

    /// Player-to-player payment such as rent.
    ///
    /// A payer short of cash liquidates first. If that fails, the payer goes
    /// bankrupt and the creditor receives whatever cash is left; the deeds go
    /// back to the bank.
    pub fn pay_player(
        &mut self,
        payer: PlayerId,
        payee: PlayerId,
        amount: Money,
        reason: &str,
    ) -> Result<(), BoardError> {
        let from = self.index_of(payer)?;
        let to = self.index_of(payee)?;
        if amount < 0 {
            return Err(crate::bank::BankError::InvalidAmount { amount }.into());
        }
        if from == to || self.players[from].is_bankrupt() {
            return Ok(());
        }

        if self.players[from].money < amount {
            self.events.push(GameEvent::LiquidationStarted {
                player: payer,
                required: amount,
                available: self.players[from].money,
            });
            let liquidated =
                self.players[from].liquidate_assets(amount, &mut self.bank, &mut self.events);
            if liquidated.is_err() {
                let (debtor, creditor) = pair_mut(&mut self.players, from, to);
                let cards = debtor.declare_bankruptcy(&mut self.bank, Some(creditor), &mut self.events);
                self.return_jail_free_cards(cards);
                return Ok(());
            }
        }

        self.players[from].money -= amount;
        self.players[to].money += amount;
        self.events.push(GameEvent::PlayerPaid {
            payer,
            payee,
            amount,
            reason: reason.to_owned(),
        });
        Ok(())
    }

    // ===== cards =====

    /// Draws from `kind` and applies the card to the player.
    pub fn draw_card(&mut self, id: PlayerId, kind: DeckKind) -> Result<(), BoardError> {
        self.index_of(id)?;
        let drawn = match kind {
            DeckKind::Chance => self.chance.draw(self.rng.as_mut()),
            DeckKind::CommunityChest => self.community_chest.draw(self.rng.as_mut()),
        };
        let card = drawn.ok_or(BoardError::EmptyDeck { deck: kind })?;
        self.events.push(GameEvent::CardDrawn {
            player: id,
            deck: kind,
            card: card.clone(),
        });
        card.on_draw(self, id)
    }

    /// Takes the Get Out of Jail Free card out of its deck and hands it over.
    pub fn grant_jail_free_card(&mut self, id: PlayerId, origin: DeckKind) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        if !self.deck_mut(origin).remove(&Card::GetOutOfJailFree(origin)) {
            return Err(BoardError::CardNotInDeck { deck: origin });
        }
        self.players[index].jail_free_cards.push(origin);
        self.events.push(GameEvent::JailFreeCardGranted {
            player: id,
            deck: origin,
        });
        Ok(())
    }

    /// Puts a used or forfeited Get Out of Jail Free card back in its deck.
    pub fn return_jail_free_card(&mut self, origin: DeckKind) {
        self.deck_mut(origin).add(Card::GetOutOfJailFree(origin));
    }

    fn return_jail_free_cards(&mut self, cards: Vec<DeckKind>) {
        for origin in cards {
            self.return_jail_free_card(origin);
        }
    }
}

/// Two distinct seats borrowed mutably at once.
fn pair_mut(players: &mut [Player], first: usize, second: usize) -> (&mut Player, &mut Player) {
    if first < second {
        let (left, right) = players.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

/// Assembles a [`Board`]. Seats are filled in the order players are added.
pub struct BoardBuilder {
    track: Track,
    config: GameConfig,
    seats: Vec<(String, Box<dyn Strategy>)>,
    bank: Option<Bank>,
    dice: Dice,
    chance: Deck<Card>,
    community_chest: Deck<Card>,
    rng: Option<Box<dyn RandomSource>>,
}

impl BoardBuilder {
    fn new(track: Track) -> Self {
        Self {
            track,
            config: GameConfig::default(),
            seats: Vec::new(),
            bank: None,
            dice: Dice::new(),
            chance: Deck::new(Vec::new()),
            community_chest: Deck::new(Vec::new()),
            rng: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.boxed_player(name, Box::new(strategy))
    }

    pub fn boxed_player(mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        self.seats.push((name.into(), strategy));
        self
    }

    /// Overrides the bank built from the config.
    pub fn bank(mut self, bank: Bank) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    pub fn chance(mut self, deck: Deck<Card>) -> Self {
        self.chance = deck;
        self
    }

    pub fn community_chest(mut self, deck: Deck<Card>) -> Self {
        self.community_chest = deck;
        self
    }

    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRandom::new(seed))
    }

    /// Seats every player on Go with no cash; starting money is paid by the
    /// caller through [`Board::pay`].
    pub fn build(self) -> Result<Board, BoardError> {
        let count = self.seats.len();
        if !(GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS).contains(&count) {
            return Err(BoardError::PlayerCount {
                count,
                min: GameConfig::MIN_PLAYERS,
                max: GameConfig::MAX_PLAYERS,
            });
        }

        let (players, strategies) = self
            .seats
            .into_iter()
            .enumerate()
            .map(|(seat, (name, strategy))| (Player::new(PlayerId(seat), name), strategy))
            .unzip();

        Ok(Board {
            bank: self.bank.unwrap_or_else(|| Bank::from_config(&self.config)),
            track: self.track,
            players,
            strategies,
            dice: self.dice,
            chance: self.chance,
            community_chest: self.community_chest,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRandom::new(0))),
            config: self.config,
            events: EventLog::default(),
            round: 0,
        })
    }
}
