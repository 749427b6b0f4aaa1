//! Built-in data for the standard edition.
//!
//! The same layout and decks ship as RON under `data/`; the loaders read
//! those files, while these functions need no I/O.
use monopoly_core::{Card, DeckKind, DeedId, Money, Tile};

/// The 40 tiles of the standard board, starting at Go.
pub fn standard_track() -> Vec<Tile> {
    use DeedId::*;
    vec![
        Tile::Go,
        Tile::Property(MediterraneanAvenue),
        Tile::CommunityChest { side: 1 },
        Tile::Property(BalticAvenue),
        Tile::IncomeTax,
        Tile::Railroad(ReadingRailroad),
        Tile::Property(OrientalAvenue),
        Tile::Chance { side: 1 },
        Tile::Property(VermontAvenue),
        Tile::Property(ConnecticutAvenue),
        Tile::Jail,
        Tile::Property(StCharlesPlace),
        Tile::Utility(ElectricCompany),
        Tile::Property(StatesAvenue),
        Tile::Property(VirginiaAvenue),
        Tile::Railroad(PennsylvaniaRailroad),
        Tile::Property(StJamesPlace),
        Tile::CommunityChest { side: 2 },
        Tile::Property(TennesseeAvenue),
        Tile::Property(NewYorkAvenue),
        Tile::FreeParking,
        Tile::Property(KentuckyAvenue),
        Tile::Chance { side: 2 },
        Tile::Property(IndianaAvenue),
        Tile::Property(IllinoisAvenue),
        Tile::Railroad(BAndORailroad),
        Tile::Property(AtlanticAvenue),
        Tile::Property(VentnorAvenue),
        Tile::Utility(WaterWorks),
        Tile::Property(MarvinGardens),
        Tile::GoToJail,
        Tile::Property(PacificAvenue),
        Tile::Property(NorthCarolinaAvenue),
        Tile::CommunityChest { side: 3 },
        Tile::Property(PennsylvaniaAvenue),
        Tile::Railroad(ShortLineRailroad),
        Tile::Chance { side: 3 },
        Tile::Property(ParkPlace),
        Tile::LuxuryTax,
        Tile::Property(Boardwalk),
    ]
}

fn collect(amount: Money, reason: &str) -> Card {
    Card::Collect {
        amount,
        reason: reason.to_owned(),
    }
}

fn pay(amount: Money, reason: &str) -> Card {
    Card::Pay {
        amount,
        reason: reason.to_owned(),
    }
}

/// The 16 Chance cards.
pub fn chance_cards() -> Vec<Card> {
    vec![
        Card::AdvanceToGo,
        Card::AdvanceTo(DeedId::IllinoisAvenue),
        Card::AdvanceTo(DeedId::StCharlesPlace),
        Card::AdvanceToNearestUtility,
        Card::AdvanceToNearestRailroad,
        Card::AdvanceToNearestRailroad,
        collect(50, "as a bank dividend"),
        Card::GetOutOfJailFree(DeckKind::Chance),
        Card::GoBack { spaces: 3 },
        Card::GoToJail,
        Card::Repairs {
            per_house: 25,
            per_hotel: 100,
        },
        Card::AdvanceTo(DeedId::ReadingRailroad),
        pay(15, "in poor tax"),
        Card::AdvanceTo(DeedId::Boardwalk),
        Card::PayEachPlayer {
            amount: 50,
            reason: "as Chairman of the Board".to_owned(),
        },
        collect(150, "as the building loan matures"),
    ]
}

/// The 17 Community Chest cards.
pub fn community_chest_cards() -> Vec<Card> {
    vec![
        Card::AdvanceToGo,
        collect(200, "from a bank error in your favour"),
        pay(50, "in doctor's fees"),
        collect(50, "from the sale of stock"),
        Card::GetOutOfJailFree(DeckKind::CommunityChest),
        Card::GoToJail,
        Card::CollectFromEachPlayer {
            amount: 50,
            reason: "for opening night opera seats".to_owned(),
        },
        collect(100, "as the holiday fund matures"),
        collect(20, "as an income tax refund"),
        Card::CollectFromEachPlayer {
            amount: 10,
            reason: "as a birthday gift".to_owned(),
        },
        collect(100, "as life insurance matures"),
        pay(50, "in hospital fees"),
        pay(50, "in school fees"),
        collect(25, "in consultancy fees"),
        Card::Repairs {
            per_house: 40,
            per_hotel: 115,
        },
        collect(10, "for second prize in a beauty contest"),
        collect(100, "in inheritance"),
    ]
}
