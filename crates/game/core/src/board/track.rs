//! The circular sequence of tiles.
use std::collections::BTreeSet;

use super::BoardError;
use crate::deed::DeedId;
use crate::tile::{Tile, TileKind};

/// Immutable, validated tile layout indexed circularly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    tiles: Vec<Tile>,
    jail: usize,
}

impl Track {
    /// Validates a layout: Go first, exactly one Jail, every deed at most once.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        match tiles.first() {
            None => return Err(BoardError::EmptyTrack),
            Some(Tile::Go) => {}
            Some(_) => return Err(BoardError::MissingGo),
        }

        let jails: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| matches!(t, Tile::Jail))
            .map(|(i, _)| i)
            .collect();
        let &[jail] = jails.as_slice() else {
            return Err(BoardError::JailCount { count: jails.len() });
        };

        let mut seen = BTreeSet::new();
        for deed in tiles.iter().filter_map(Tile::deed) {
            if !seen.insert(deed) {
                return Err(BoardError::DuplicateDeed { deed });
            }
        }

        Ok(Self { tiles, jail })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `position`, wrapping around the track.
    pub fn tile(&self, position: usize) -> Tile {
        self.tiles[position % self.tiles.len()]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn jail_position(&self) -> usize {
        self.jail
    }

    /// Position reached by moving `offset` tiles (negative moves backwards).
    pub fn offset_position(&self, position: usize, offset: i32) -> usize {
        let len = self.tiles.len() as i64;
        (position as i64 + i64::from(offset)).rem_euclid(len) as usize
    }

    /// Forward distance to the nearest tile after `from` matching `predicate`.
    /// The starting tile itself is never a match.
    pub fn find_forward(&self, from: usize, predicate: impl Fn(&Tile) -> bool) -> Option<i32> {
        (1..self.tiles.len())
            .find(|step| predicate(&self.tile(from + step)))
            .map(|step| step as i32)
    }

    pub fn distance_to_kind(&self, from: usize, kind: TileKind) -> Option<i32> {
        self.find_forward(from, |tile| tile.kind() == kind)
    }

    pub fn distance_to_deed(&self, from: usize, deed: DeedId) -> Option<i32> {
        self.find_forward(from, |tile| tile.deed() == Some(deed))
    }
}
