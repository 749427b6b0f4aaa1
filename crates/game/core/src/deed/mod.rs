//! Title deeds: immutable price data plus per-owner rent.
//!
//! Every deed is identified by a [`DeedId`]. The static data for each id
//! lives in one of three tables (properties, railroads, utilities) and is
//! resolved with [`DeedId::deed`]. Ownership is never stored here; the bank's
//! pool and each player's ledger are keyed by `DeedId`, so moving a deed is a
//! move of its key between those two registries.
mod colour_group;
mod tables;

pub use colour_group::ColourGroup;
pub use tables::{PROPERTIES, RAILROADS, UTILITIES};

use crate::common::Money;
use crate::dice::Roll;
use crate::player::Player;

/// Stable key for each of the 28 title deeds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeedId {
    #[strum(serialize = "Mediterranean Avenue")]
    MediterraneanAvenue,
    #[strum(serialize = "Baltic Avenue")]
    BalticAvenue,
    #[strum(serialize = "Oriental Avenue")]
    OrientalAvenue,
    #[strum(serialize = "Vermont Avenue")]
    VermontAvenue,
    #[strum(serialize = "Connecticut Avenue")]
    ConnecticutAvenue,
    #[strum(serialize = "St. Charles Place")]
    StCharlesPlace,
    #[strum(serialize = "States Avenue")]
    StatesAvenue,
    #[strum(serialize = "Virginia Avenue")]
    VirginiaAvenue,
    #[strum(serialize = "St. James Place")]
    StJamesPlace,
    #[strum(serialize = "Tennessee Avenue")]
    TennesseeAvenue,
    #[strum(serialize = "New York Avenue")]
    NewYorkAvenue,
    #[strum(serialize = "Kentucky Avenue")]
    KentuckyAvenue,
    #[strum(serialize = "Indiana Avenue")]
    IndianaAvenue,
    #[strum(serialize = "Illinois Avenue")]
    IllinoisAvenue,
    #[strum(serialize = "Atlantic Avenue")]
    AtlanticAvenue,
    #[strum(serialize = "Ventnor Avenue")]
    VentnorAvenue,
    #[strum(serialize = "Marvin Gardens")]
    MarvinGardens,
    #[strum(serialize = "Pacific Avenue")]
    PacificAvenue,
    #[strum(serialize = "North Carolina Avenue")]
    NorthCarolinaAvenue,
    #[strum(serialize = "Pennsylvania Avenue")]
    PennsylvaniaAvenue,
    #[strum(serialize = "Park Place")]
    ParkPlace,
    #[strum(serialize = "Boardwalk")]
    Boardwalk,
    #[strum(serialize = "Reading Railroad")]
    ReadingRailroad,
    #[strum(serialize = "Pennsylvania Railroad")]
    PennsylvaniaRailroad,
    #[strum(serialize = "B. & O. Railroad")]
    BAndORailroad,
    #[strum(serialize = "Short Line")]
    ShortLineRailroad,
    #[strum(serialize = "Electric Company")]
    ElectricCompany,
    #[strum(serialize = "Water Works")]
    WaterWorks,
}

/// Asset family of a deed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeedKind {
    Property,
    Railroad,
    Utility,
}

impl DeedId {
    /// Resolves the static data for this deed.
    pub fn deed(self) -> TitleDeed {
        use DeedId::*;
        match self {
            MediterraneanAvenue => TitleDeed::Property(&PROPERTIES[0]),
            BalticAvenue => TitleDeed::Property(&PROPERTIES[1]),
            OrientalAvenue => TitleDeed::Property(&PROPERTIES[2]),
            VermontAvenue => TitleDeed::Property(&PROPERTIES[3]),
            ConnecticutAvenue => TitleDeed::Property(&PROPERTIES[4]),
            StCharlesPlace => TitleDeed::Property(&PROPERTIES[5]),
            StatesAvenue => TitleDeed::Property(&PROPERTIES[6]),
            VirginiaAvenue => TitleDeed::Property(&PROPERTIES[7]),
            StJamesPlace => TitleDeed::Property(&PROPERTIES[8]),
            TennesseeAvenue => TitleDeed::Property(&PROPERTIES[9]),
            NewYorkAvenue => TitleDeed::Property(&PROPERTIES[10]),
            KentuckyAvenue => TitleDeed::Property(&PROPERTIES[11]),
            IndianaAvenue => TitleDeed::Property(&PROPERTIES[12]),
            IllinoisAvenue => TitleDeed::Property(&PROPERTIES[13]),
            AtlanticAvenue => TitleDeed::Property(&PROPERTIES[14]),
            VentnorAvenue => TitleDeed::Property(&PROPERTIES[15]),
            MarvinGardens => TitleDeed::Property(&PROPERTIES[16]),
            PacificAvenue => TitleDeed::Property(&PROPERTIES[17]),
            NorthCarolinaAvenue => TitleDeed::Property(&PROPERTIES[18]),
            PennsylvaniaAvenue => TitleDeed::Property(&PROPERTIES[19]),
            ParkPlace => TitleDeed::Property(&PROPERTIES[20]),
            Boardwalk => TitleDeed::Property(&PROPERTIES[21]),
            ReadingRailroad => TitleDeed::Railroad(&RAILROADS[0]),
            PennsylvaniaRailroad => TitleDeed::Railroad(&RAILROADS[1]),
            BAndORailroad => TitleDeed::Railroad(&RAILROADS[2]),
            ShortLineRailroad => TitleDeed::Railroad(&RAILROADS[3]),
            ElectricCompany => TitleDeed::Utility(&UTILITIES[0]),
            WaterWorks => TitleDeed::Utility(&UTILITIES[1]),
        }
    }

    pub fn kind(self) -> DeedKind {
        self.deed().kind()
    }

    /// Colour group, for properties only.
    pub fn colour_group(self) -> Option<ColourGroup> {
        match self.deed() {
            TitleDeed::Property(p) => Some(p.group),
            _ => None,
        }
    }

    /// Full display name, e.g. `"St. Charles Place"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A colour-group member that can carry houses and a hotel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDeed {
    pub id: DeedId,
    pub group: ColourGroup,
    pub price: Money,
    pub mortgage_value: Money,
    pub build_cost: Money,
    /// No houses, 1 through 4 houses, hotel.
    pub rents: [Money; 6],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RailroadDeed {
    pub id: DeedId,
    pub price: Money,
    pub mortgage_value: Money,
}

impl RailroadDeed {
    pub const PRICE: Money = 200;
    /// Rent for owning 1, 2, 3 or 4 railroads.
    pub const RENTS: [Money; 4] = [25, 50, 100, 200];

    pub const fn new(id: DeedId) -> Self {
        Self {
            id,
            price: Self::PRICE,
            mortgage_value: Self::PRICE / 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilityDeed {
    pub id: DeedId,
    pub price: Money,
    pub mortgage_value: Money,
}

impl UtilityDeed {
    pub const PRICE: Money = 150;
    pub const SINGLE_MULTIPLIER: Money = 4;
    pub const PAIR_MULTIPLIER: Money = 10;

    pub const fn new(id: DeedId) -> Self {
        Self {
            id,
            price: Self::PRICE,
            mortgage_value: Self::PRICE / 2,
        }
    }
}

/// Static data for one deed, by asset family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleDeed {
    Property(&'static PropertyDeed),
    Railroad(&'static RailroadDeed),
    Utility(&'static UtilityDeed),
}

impl TitleDeed {
    pub fn id(&self) -> DeedId {
        match self {
            Self::Property(p) => p.id,
            Self::Railroad(r) => r.id,
            Self::Utility(u) => u.id,
        }
    }

    pub fn kind(&self) -> DeedKind {
        match self {
            Self::Property(_) => DeedKind::Property,
            Self::Railroad(_) => DeedKind::Railroad,
            Self::Utility(_) => DeedKind::Utility,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Self::Property(p) => p.price,
            Self::Railroad(r) => r.price,
            Self::Utility(u) => u.price,
        }
    }

    pub fn mortgage_value(&self) -> Money {
        match self {
            Self::Property(p) => p.mortgage_value,
            Self::Railroad(r) => r.mortgage_value,
            Self::Utility(u) => u.mortgage_value,
        }
    }

    /// Number of deeds sharing this deed's group (colour, railroads, or
    /// utilities).
    pub fn group_size(&self) -> usize {
        match self {
            Self::Property(p) => p.group.size(),
            Self::Railroad(_) => RAILROADS.len(),
            Self::Utility(_) => UTILITIES.len(),
        }
    }

    /// Rent owed by a visitor when `owner` holds this deed.
    ///
    /// `last_roll` is the roll that brought the visitor here; only utilities
    /// read it. A deed the owner does not actually hold, or holds mortgaged,
    /// yields no rent.
    pub fn calculate_rent(&self, owner: &Player, last_roll: Option<Roll>) -> Money {
        let Some(development) = owner.development(self.id()) else {
            return 0;
        };
        if development.is_mortgaged {
            return 0;
        }

        match self {
            Self::Property(p) => {
                if development.has_hotel {
                    p.rents[5]
                } else if development.houses > 0 {
                    p.rents[usize::from(development.houses.min(4))]
                } else if owner.has_monopoly(p.group) {
                    p.rents[0] * 2
                } else {
                    p.rents[0]
                }
            }
            Self::Railroad(_) => {
                let owned = owner.railroads_owned();
                RailroadDeed::RENTS[owned.clamp(1, 4) - 1]
            }
            Self::Utility(_) => {
                let multiplier = if owner.utilities_owned() == UTILITIES.len() {
                    UtilityDeed::PAIR_MULTIPLIER
                } else {
                    UtilityDeed::SINGLE_MULTIPLIER
                };
                let amount = last_roll.map_or(0, |roll| Money::from(roll.amount()));
                amount * multiplier
            }
        }
    }
}
