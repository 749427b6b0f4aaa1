use super::DeedId;

/// Colour groups a [`super::PropertyDeed`] belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColourGroup {
    Brown,
    #[strum(serialize = "Light Blue")]
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    #[strum(serialize = "Dark Blue")]
    DarkBlue,
}

impl ColourGroup {
    /// Every property in the group, in track order.
    pub const fn members(self) -> &'static [DeedId] {
        use DeedId::*;
        match self {
            Self::Brown => &[MediterraneanAvenue, BalticAvenue],
            Self::LightBlue => &[OrientalAvenue, VermontAvenue, ConnecticutAvenue],
            Self::Pink => &[StCharlesPlace, StatesAvenue, VirginiaAvenue],
            Self::Orange => &[StJamesPlace, TennesseeAvenue, NewYorkAvenue],
            Self::Red => &[KentuckyAvenue, IndianaAvenue, IllinoisAvenue],
            Self::Yellow => &[AtlanticAvenue, VentnorAvenue, MarvinGardens],
            Self::Green => &[PacificAvenue, NorthCarolinaAvenue, PennsylvaniaAvenue],
            Self::DarkBlue => &[ParkPlace, Boardwalk],
        }
    }

    pub const fn size(self) -> usize {
        self.members().len()
    }
}
