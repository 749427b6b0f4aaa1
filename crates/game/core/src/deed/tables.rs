//! Printed title-deed values for the standard edition.
//!
//! Each asset kind gets its own table. [`super::DeedId::deed`] composes the
//! unified registry from these tables afterwards.
use super::{ColourGroup, DeedId, PropertyDeed, RailroadDeed, UtilityDeed};

const fn property(
    id: DeedId,
    group: ColourGroup,
    price: i64,
    build_cost: i64,
    rents: [i64; 6],
) -> PropertyDeed {
    PropertyDeed {
        id,
        group,
        price,
        mortgage_value: price / 2,
        build_cost,
        rents,
    }
}

/// Rent slots: no houses, 1-4 houses, hotel.
pub static PROPERTIES: [PropertyDeed; 22] = {
    use ColourGroup::*;
    use DeedId::*;
    [
        property(MediterraneanAvenue, Brown, 60, 50, [2, 10, 30, 90, 160, 250]),
        property(BalticAvenue, Brown, 60, 50, [4, 20, 60, 180, 320, 450]),
        property(OrientalAvenue, LightBlue, 100, 50, [6, 30, 90, 270, 400, 550]),
        property(VermontAvenue, LightBlue, 100, 50, [6, 30, 90, 270, 400, 550]),
        property(ConnecticutAvenue, LightBlue, 120, 50, [8, 40, 100, 300, 450, 600]),
        property(StCharlesPlace, Pink, 140, 100, [10, 50, 150, 450, 625, 750]),
        property(StatesAvenue, Pink, 140, 100, [10, 50, 150, 450, 625, 750]),
        property(VirginiaAvenue, Pink, 160, 100, [12, 60, 180, 500, 700, 900]),
        property(StJamesPlace, Orange, 180, 100, [14, 70, 200, 550, 750, 950]),
        property(TennesseeAvenue, Orange, 180, 100, [14, 70, 200, 550, 750, 950]),
        property(NewYorkAvenue, Orange, 200, 100, [16, 80, 220, 600, 800, 1000]),
        property(KentuckyAvenue, Red, 220, 150, [18, 90, 250, 700, 875, 1050]),
        property(IndianaAvenue, Red, 220, 150, [18, 90, 250, 700, 875, 1050]),
        property(IllinoisAvenue, Red, 240, 150, [20, 100, 300, 750, 925, 1100]),
        property(AtlanticAvenue, Yellow, 260, 150, [22, 110, 330, 800, 975, 1150]),
        property(VentnorAvenue, Yellow, 260, 150, [22, 110, 330, 800, 975, 1150]),
        property(MarvinGardens, Yellow, 280, 150, [24, 120, 360, 850, 1025, 1200]),
        property(PacificAvenue, Green, 300, 200, [26, 130, 390, 900, 1100, 1275]),
        property(NorthCarolinaAvenue, Green, 300, 200, [26, 130, 390, 900, 1100, 1275]),
        property(PennsylvaniaAvenue, Green, 320, 200, [28, 150, 450, 1000, 1200, 1400]),
        property(ParkPlace, DarkBlue, 350, 200, [35, 175, 500, 1100, 1300, 1500]),
        property(Boardwalk, DarkBlue, 400, 200, [50, 200, 600, 1400, 1700, 2000]),
    ]
};

pub static RAILROADS: [RailroadDeed; 4] = [
    RailroadDeed::new(DeedId::ReadingRailroad),
    RailroadDeed::new(DeedId::PennsylvaniaRailroad),
    RailroadDeed::new(DeedId::BAndORailroad),
    RailroadDeed::new(DeedId::ShortLineRailroad),
];

pub static UTILITIES: [UtilityDeed; 2] = [
    UtilityDeed::new(DeedId::ElectricCompany),
    UtilityDeed::new(DeedId::WaterWorks),
];
