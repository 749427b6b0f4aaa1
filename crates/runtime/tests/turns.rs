mod common;

use common::*;
use monopoly_core::{Card, DeckKind, DeedId, GameEvent, JailRelease};

#[test]
fn third_doubles_sends_player_to_jail_without_salary() {
    let mut sim = one_player(Scripted::passive(), &[(3, 3), (1, 1), (4, 4)], vec![], vec![])
        .build()
        .unwrap();

    let events = play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert_eq!(alice.position, 10);
    assert!(alice.in_jail);
    assert_eq!(alice.turns_left_in_jail, 3);
    assert_eq!(alice.money, 1500);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::SentToJail { .. })), 1);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::BankPaid { .. })), 0);
    // the third roll never moves the token forward
    assert_eq!(count(&events, |e| matches!(e, GameEvent::Landed { .. })), 2);
}

#[test]
fn snake_eyes_three_times_from_go() {
    let mut sim = one_player(
        Scripted::passive(),
        &[(1, 1), (1, 1), (1, 1)],
        vec![],
        vec![Card::Collect {
            amount: 10,
            reason: "for winning second prize".to_owned(),
        }],
    )
    .build()
    .unwrap();

    play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert!(alice.in_jail);
    assert_eq!(alice.position, 10);
    // 10 from the card, then 10% of 1510 on Income Tax
    assert_eq!(alice.money, 1510 - 151);
}

#[test]
fn doubles_grant_another_roll() {
    let mut sim = one_player(Scripted::passive(), &[(3, 3), (1, 2)], vec![], vec![])
        .build()
        .unwrap();

    let events = play_round(&mut sim);

    assert_eq!(position(&sim, ALICE), 9);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::DiceRolled { .. })), 2);
    assert_eq!(
        count(&events, |e| matches!(
            e,
            GameEvent::PurchaseDeclined { deed: DeedId::OrientalAvenue, .. }
        )),
        1
    );
}

#[test]
fn passing_go_pays_salary() {
    let mut sim = one_player(Scripted::passive(), &[(4, 5)], vec![], vec![])
        .build()
        .unwrap();
    sim.board_mut().player_mut(ALICE).unwrap().position = 35;

    let events = play_round(&mut sim);

    assert_eq!(position(&sim, ALICE), 4);
    // 200 salary, then 10% of 1700 in income tax
    assert_eq!(money(&sim, ALICE), 1700 - 170);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::Moved { from: 35, to: 4, passed_go: true, .. }
    )));
}

#[test]
fn go_to_jail_tile_skips_salary() {
    let mut sim = one_player(Scripted::passive(), &[(2, 3)], vec![], vec![])
        .build()
        .unwrap();
    sim.board_mut().player_mut(ALICE).unwrap().position = 25;

    play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert_eq!(alice.position, 10);
    assert!(alice.in_jail);
    assert_eq!(alice.money, 1500);
}

#[test]
fn paying_the_early_fee_releases_before_the_roll() {
    let mut sim = one_player(Scripted::paying_fee(), &[(2, 3)], vec![], vec![])
        .build()
        .unwrap();
    sim.board_mut().go_to_jail(ALICE).unwrap();

    let events = play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert!(!alice.in_jail);
    assert_eq!(alice.position, 15);
    assert_eq!(alice.money, 1450);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::ReleasedFromJail { release: JailRelease::EarlyFee, .. }
    )));
}

#[test]
fn jailed_player_leaves_on_doubles_without_another_roll() {
    let mut sim = one_player(Scripted::passive(), &[(2, 2), (3, 3)], vec![], vec![])
        .build()
        .unwrap();
    sim.board_mut().go_to_jail(ALICE).unwrap();

    play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert!(!alice.in_jail);
    assert_eq!(alice.position, 14);
    assert_eq!(alice.money, 1500);
    assert_eq!(sim.board_mut().dice_mut().pending_loaded(), 1);
}

#[test]
fn serving_the_full_term_forces_the_fee() {
    let mut sim = one_player(
        Scripted::passive(),
        &[(1, 2), (1, 2), (1, 2)],
        vec![],
        vec![],
    )
    .build()
    .unwrap();
    sim.board_mut().go_to_jail(ALICE).unwrap();

    for turns_left in [2, 1] {
        play_round(&mut sim);
        let alice = sim.board().player(ALICE).unwrap();
        assert!(alice.in_jail);
        assert_eq!(alice.position, 10);
        assert_eq!(alice.turns_left_in_jail, turns_left);
    }

    let events = play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert!(!alice.in_jail);
    assert_eq!(alice.position, 13);
    assert_eq!(alice.money, 1450);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::ReleasedFromJail { release: JailRelease::TimeServed, .. }
    )));
}

#[test]
fn rent_moves_from_visitor_to_owner() {
    let mut sim = two_players(&[(2, 4), (3, 5)], vec![], vec![])
        .build()
        .unwrap();
    grant_deed(&mut sim, BOB, DeedId::OrientalAvenue);

    let events = play_round(&mut sim);

    assert_eq!(money(&sim, ALICE), 1494);
    assert_eq!(money(&sim, BOB), 1506);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PlayerPaid { payer: ALICE, payee: BOB, amount: 6, .. }
    )));
    assert_eq!(position(&sim, BOB), 8);
}

#[test]
fn landing_on_own_deed_costs_nothing() {
    let mut sim = two_players(&[(2, 4), (1, 2)], vec![], vec![])
        .build()
        .unwrap();
    grant_deed(&mut sim, ALICE, DeedId::OrientalAvenue);

    let events = play_round(&mut sim);

    assert_eq!(money(&sim, ALICE), 1500);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::PlayerPaid { .. })), 0);
}

#[test]
fn unpayable_rent_bankrupts_to_the_creditor() {
    let mut sim = two_players(&[(1, 3), (1, 2)], vec![], vec![])
        .build()
        .unwrap();
    grant_deed(&mut sim, BOB, DeedId::ParkPlace);
    grant_deed(&mut sim, BOB, DeedId::Boardwalk);
    grant_deed(&mut sim, ALICE, DeedId::MediterraneanAvenue);
    {
        let alice = sim.board_mut().player_mut(ALICE).unwrap();
        alice.money = 30;
        alice.position = 35;
        alice.jail_free_cards.push(DeckKind::Chance);
    }

    let events = play_round(&mut sim);

    let alice = sim.board().player(ALICE).unwrap();
    assert!(alice.is_bankrupt());
    assert!(alice.deeds.is_empty());
    assert_eq!(alice.money, 0);
    // cash on hand plus the Mediterranean mortgage
    assert_eq!(money(&sim, BOB), 1560);
    assert!(sim.board().bank().holds(DeedId::MediterraneanAvenue));
    assert!(
        sim.board()
            .deck(DeckKind::Chance)
            .contains(&Card::GetOutOfJailFree(DeckKind::Chance))
    );
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::Bankrupt { player: ALICE, creditor: Some(BOB), forfeited: 60 }
    )));

    assert!(sim.is_finished());
    let report = sim.report();
    assert_eq!(report.winner.map(|w| w.name), Some("Bob".to_owned()));
    assert!(sim.step().is_err());
}
