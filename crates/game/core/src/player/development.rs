/// Per-deed development record held in a player's ledger.
///
/// A hotel replaces the four houses it was built on, so `houses` is 0 whenever
/// `has_hotel` is set. Developed deeds cannot be mortgaged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Development {
    pub houses: u8,
    pub has_hotel: bool,
    pub is_mortgaged: bool,
}

impl Development {
    pub const MAX_HOUSES: u8 = 4;

    /// Building level in house equivalents: 0-4 houses, 5 for a hotel.
    pub const fn level(&self) -> u8 {
        if self.has_hotel {
            Self::MAX_HOUSES + 1
        } else {
            self.houses
        }
    }

    pub const fn is_developed(&self) -> bool {
        self.has_hotel || self.houses > 0
    }
}
