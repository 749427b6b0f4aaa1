//! Moving tokens around the track.
use super::{Board, BoardError};
use crate::common::PlayerId;
use crate::deed::{DeedId, DeedKind};
use crate::event::GameEvent;
use crate::tile::{RentRule, TileKind};

impl Board {
    /// Moves the player `offset` tiles and resolves the landing.
    ///
    /// Salary is paid only on a forward move that wraps past (or onto) Go.
    pub fn advance_player_by(&mut self, id: PlayerId, offset: i32) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        self.advance(index, offset, RentRule::Standard)
    }

    /// Moves forward to the nearest tile of `kind`.
    pub fn advance_player_to_tile(&mut self, id: PlayerId, kind: TileKind) -> Result<(), BoardError> {
        self.advance_player_to_tile_with_rent(id, kind, RentRule::Standard)
    }

    pub fn advance_player_to_tile_with_rent(
        &mut self,
        id: PlayerId,
        kind: TileKind,
        rent: RentRule,
    ) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        let position = self.players[index].position;
        let offset = self
            .track
            .distance_to_kind(position, kind)
            .ok_or(BoardError::TileNotFound { kind, position })?;
        self.advance(index, offset, rent)
    }

    /// Moves forward to the tile bound to `deed`.
    pub fn advance_player_to_deed(&mut self, id: PlayerId, deed: DeedId) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        let position = self.players[index].position;
        let offset = self
            .track
            .distance_to_deed(position, deed)
            .ok_or(BoardError::DeedNotFound { deed })?;
        self.advance(index, offset, RentRule::Standard)
    }

    pub fn advance_player_to_property(&mut self, id: PlayerId, deed: DeedId) -> Result<(), BoardError> {
        ensure_kind(deed, DeedKind::Property)?;
        self.advance_player_to_deed(id, deed)
    }

    pub fn advance_player_to_railroad(&mut self, id: PlayerId, deed: DeedId) -> Result<(), BoardError> {
        ensure_kind(deed, DeedKind::Railroad)?;
        self.advance_player_to_deed(id, deed)
    }

    /// Moves backwards. Never pays salary, even when wrapping past Go.
    pub fn go_back(&mut self, id: PlayerId, spaces: u8) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        self.advance(index, -i32::from(spaces), RentRule::Standard)
    }

    /// Straight to the Jail tile: no salary, no landing effect.
    pub fn go_to_jail(&mut self, id: PlayerId) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        let jail = self.track.jail_position();
        let turns = self.config.max_turns_in_jail;

        let player = &mut self.players[index];
        let from = player.position;
        player.position = jail;
        player.send_to_jail(turns);

        self.events.push(GameEvent::Moved {
            player: id,
            from,
            to: jail,
            passed_go: false,
        });
        self.events.push(GameEvent::SentToJail { player: id });
        Ok(())
    }

    pub(crate) fn advance(&mut self, index: usize, offset: i32, rent: RentRule) -> Result<(), BoardError> {
        let id = self.players[index].id;
        let from = self.players[index].position;
        let to = self.track.offset_position(from, offset);
        let passed_go = offset > 0 && to < from;

        self.players[index].position = to;
        self.events.push(GameEvent::Moved {
            player: id,
            from,
            to,
            passed_go,
        });

        if passed_go {
            let salary = self.config.go_salary;
            self.pay(id, salary, "for passing Go")?;
        }

        let tile = self.track.tile(to);
        self.events.push(GameEvent::Landed {
            player: id,
            position: to,
            tile,
        });
        tile.on_landing(self, id, rent)
    }
}

fn ensure_kind(deed: DeedId, expected: DeedKind) -> Result<(), BoardError> {
    if deed.kind() != expected {
        return Err(BoardError::WrongDeedKind { deed, expected });
    }
    Ok(())
}
