//! One rejected play string per rule, driven through the processor.
//!
//! Every scenario sets up a game with accepted plays, then checks that
//! the offending play is rejected with the expected reason and that the
//! rejection leaves the game untouched.

use nocturne::protocol::StructuralError;
use nocturne::resolve::{DraculaMoveError, DraculaSuffixError, HunterMoveError, HunterSuffixError};
use nocturne::{GameMap, Location, Place, Player, Processor, Rules, Violation};

/// Hunters that stay out of the way in England and Spain.
const QUIET_HUNTERS: [&str; 4] = ["GLO....", "SPL....", "HAM....", "MMA...."];

/// Hunters that sit around Dracula's home ground without touching it.
const DISTANT_HUNTERS: [&str; 4] = ["GMA....", "SLS....", "HCA....", "MGR...."];

fn play_all(processor: &mut Processor<'_>, plays: &[&str]) {
    for play in plays {
        if let Err(e) = processor.process_turn(play) {
            panic!("setup play {play} rejected: {e}");
        }
    }
}

/// Plays `dracula` moves, each preceded by a full round of `hunters`,
/// then one more round of hunters.
fn rounds(hunters: &[&'static str; 4], dracula: &[&'static str]) -> Vec<&'static str> {
    let mut plays = Vec::new();
    for d in dracula {
        plays.extend_from_slice(hunters);
        plays.push(d);
    }
    plays.extend_from_slice(hunters);
    plays
}

/// Asserts `play` is rejected with `expected` and changes nothing.
fn assert_rejected(processor: &mut Processor<'_>, play: &str, expected: impl Into<Violation>) {
    let before = processor.snapshot();
    let turns = processor.history().len();
    let err = processor.process_turn(play).unwrap_err();
    assert_eq!(err.kind, expected.into(), "wrong reason for {play}: {err}");
    assert_eq!(processor.snapshot(), before, "{play} changed the state");
    assert_eq!(processor.history().len(), turns);
}

fn custom(hunter_max_health: i32) -> Rules {
    Rules { hunter_max_health, ..Rules::default() }
}

#[test]
fn structural_errors() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    assert_rejected(&mut p, "GMN...", StructuralError::InvalidLength { found: 6 });
    assert_rejected(&mut p, "GMN.....", StructuralError::InvalidLength { found: 8 });
    assert_rejected(&mut p, "", StructuralError::InvalidLength { found: 0 });
    assert_rejected(
        &mut p,
        "SMN....",
        StructuralError::WrongPlayer { expected: 'G', found: 'S' },
    );
    assert_rejected(
        &mut p,
        "DMN....",
        StructuralError::WrongPlayer { expected: 'G', found: 'D' },
    );
    p.process_turn("GMN....").unwrap();
}

#[test]
fn rejection_carries_round_and_player() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&QUIET_HUNTERS, &["DMN.V.."]));
    let err = p.process_turn("DLV....").unwrap_err();
    assert_eq!(err.round, 1);
    assert_eq!(err.player, Player::Dracula);
    assert!(err.to_string().starts_with("Round 1, Dracula: "));
    assert_eq!(err.reason(), "Dracula should have placed a trap in round 1.");
}

#[test]
fn hunter_move_codes() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    for code in ["HI", "D1", "TP"] {
        assert_rejected(
            &mut p,
            &format!("G{code}...."),
            HunterMoveError::DraculaOnlyMove(code.to_string()),
        );
    }
    assert_rejected(&mut p, "GC?....", HunterMoveError::UnknownMove("C?".into()));
    assert_rejected(&mut p, "GXX....", HunterMoveError::UnknownMove("XX".into()));
}

#[test]
fn hunter_cannot_outrun_the_rail_allowance() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &["GMR....", "SMR....", "HAM....", "MAM....", "DED.V.."]);
    // Godalming gets one rail hop in round 1, Seward two.
    assert_rejected(
        &mut p,
        "GCO....",
        HunterMoveError::Unreachable {
            hunter: Player::LordGodalming,
            from: Place::Marseilles,
            to: Place::Cologne,
        },
    );
    play_all(&mut p, &["GPA...."]);
    assert_rejected(
        &mut p,
        "SCO....",
        HunterMoveError::Unreachable {
            hunter: Player::DrSeward,
            from: Place::Marseilles,
            to: Place::Cologne,
        },
    );
    play_all(&mut p, &["SBU...."]);
}

#[test]
fn claims_against_an_empty_board() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    assert_rejected(
        &mut p,
        "GMNT...",
        HunterSuffixError::TrapsExcessive {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
            present: 0,
            claimed: 1,
        },
    );
    assert_rejected(
        &mut p,
        "GMNV...",
        HunterSuffixError::VampireAbsent {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
        },
    );
    assert_rejected(
        &mut p,
        "GMND...",
        HunterSuffixError::DraculaAbsent {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
        },
    );
    assert_rejected(&mut p, "GMNX...", HunterSuffixError::Impossible("X...".into()));
    assert_rejected(&mut p, "GMNDV..", HunterSuffixError::Impossible("DV..".into()));
}

#[test]
fn encounters_at_the_place_must_be_claimed() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&QUIET_HUNTERS, &["DMN.V.."])[..5]);
    assert_rejected(
        &mut p,
        "GMN....",
        HunterSuffixError::VampireMissed {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
        },
    );
    assert_rejected(
        &mut p,
        "GMNV...",
        HunterSuffixError::DraculaMissed {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
        },
    );
    let turn = p.process_turn("GMNVD..").unwrap();
    assert_eq!(turn.end().health(Player::LordGodalming), 5);
    assert_eq!(turn.end().health(Player::Dracula), 30);
}

#[test]
fn traps_must_be_claimed() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&QUIET_HUNTERS, &["DMN.V..", "DHIT..."])[..10]);
    assert_rejected(
        &mut p,
        "GMNVD..",
        HunterSuffixError::TrapsMissed {
            hunter: Player::LordGodalming,
            place: Place::Manchester,
            expected: 1,
            claimed: 0,
        },
    );
    let turn = p.process_turn("GMNTVD.").unwrap();
    assert_eq!(turn.end().health(Player::LordGodalming), 3);
}

#[test]
fn nothing_after_incapacitation() {
    let map = GameMap::standard();
    // One hit point: the first trap puts a hunter in hospital.
    let mut p = Processor::with_rules(&map, custom(1));
    play_all(&mut p, &rounds(&QUIET_HUNTERS, &["DMN.V..", "DHIT...", "DD2T..."])[..15]);

    let godalming = Player::LordGodalming;
    let manchester = Place::Manchester;
    assert_rejected(
        &mut p,
        "GMN....",
        HunterSuffixError::TrapsMissed {
            hunter: godalming,
            place: manchester,
            expected: 1,
            claimed: 0,
        },
    );
    assert_rejected(
        &mut p,
        "GMNTT..",
        HunterSuffixError::TrapsAfterIncapacitated {
            hunter: godalming,
            place: manchester,
            expected: 1,
            claimed: 2,
        },
    );
    assert_rejected(
        &mut p,
        "GMNTV..",
        HunterSuffixError::VampireAfterIncapacitated { hunter: godalming },
    );
    assert_rejected(
        &mut p,
        "GMNTD..",
        HunterSuffixError::DraculaAfterIncapacitated { hunter: godalming },
    );

    let turn = p.process_turn("GMNT...").unwrap();
    assert_eq!(turn.end().health(godalming), 0);
    assert_eq!(turn.end().location(godalming), Some(Place::StJosephAndStMary));
    assert_eq!(turn.end().score(), turn.start().score() - 6);
}

#[test]
fn dracula_cannot_be_fought_at_sea() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &["GED....", "SPL....", "HAM....", "MMA....", "DNS...."]);
    assert_rejected(
        &mut p,
        "GNSD...",
        HunterSuffixError::DraculaAtSea { hunter: Player::LordGodalming, place: Place::NorthSea },
    );
    let turn = p.process_turn("GNS....").unwrap();
    assert_eq!(turn.end().health(Player::Dracula), 38);
}

#[test]
fn dracula_move_codes() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &QUIET_HUNTERS);
    assert_rejected(&mut p, "DZZ....", DraculaMoveError::UnknownMove("ZZ".into()));
    assert_rejected(&mut p, "DC?.V..", DraculaMoveError::NotFullyRevealed);
    assert_rejected(&mut p, "DS?....", DraculaMoveError::NotFullyRevealed);
    assert_rejected(&mut p, "DJM.V..", DraculaMoveError::MovedToHospital(Place::StJosephAndStMary));
    assert_rejected(&mut p, "DHI....", DraculaMoveError::TooEarly(Location::Hide));
    assert_rejected(&mut p, "DD1....", DraculaMoveError::TooEarly(Location::DoubleBack(1)));
    assert_rejected(&mut p, "DTP....", DraculaMoveError::TooEarly(Location::Teleport));
}

#[test]
fn dracula_trail_rules() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&DISTANT_HUNTERS, &["DPA.V..", "DSTT...", "DHIT..."]));

    assert_rejected(&mut p, "DHIT...", DraculaMoveError::AlreadyInTrail(Location::Hide));
    assert_rejected(
        &mut p,
        "DSTT...",
        DraculaMoveError::AlreadyInTrail(Location::Place(Place::Strasbourg)),
    );
    assert_rejected(
        &mut p,
        "DMAT...",
        DraculaMoveError::NotAdjacent {
            play: Location::Place(Place::Madrid),
            from: Place::Strasbourg,
            to: Place::Madrid,
        },
    );
    assert_rejected(&mut p, "DD4T...", DraculaMoveError::TooEarly(Location::DoubleBack(4)));

    let turn = p.process_turn("DD2T...").unwrap();
    assert_eq!(turn.destination(), Place::Strasbourg);
    play_all(&mut p, &DISTANT_HUNTERS);
    assert_rejected(&mut p, "DD1T...", DraculaMoveError::DoubleBackInTrail);
}

#[test]
fn dracula_cannot_hide_at_sea() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&DISTANT_HUNTERS, &["DNS...."]));
    assert_rejected(&mut p, "DHI....", DraculaMoveError::HidingAtSea(Place::NorthSea));
}

#[test]
fn teleport_lists_the_moves_still_open() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &rounds(&DISTANT_HUNTERS, &["DKL.V.."]));
    let err = p.process_turn("DTP....").unwrap_err();
    let Violation::DraculaMove(DraculaMoveError::TeleportWithAlternatives { alternatives }) =
        err.kind
    else {
        panic!("expected teleport alternatives, got {}", err.kind);
    };
    assert!(alternatives.contains(&Location::Place(Place::Galatz)));
    assert!(alternatives.contains(&Location::Place(Place::CastleDracula)));
    assert!(alternatives.contains(&Location::Hide));
    assert!(alternatives.contains(&Location::DoubleBack(1)));
    assert!(!alternatives.contains(&Location::Place(Place::Klausenburg)));
}

/// Dracula boxed in at Castle Dracula with three traps already there.
fn hemmed_in() -> Vec<&'static str> {
    rounds(&DISTANT_HUNTERS, &["DKL.V..", "DGAT...", "DCDT...", "DHIT...", "DD1T..."])
}

#[test]
fn no_fourth_encounter_in_one_place() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &hemmed_in());
    assert_rejected(
        &mut p,
        "DTPT...",
        DraculaSuffixError::AlreadyThreeEncounters(Place::CastleDracula),
    );
    let turn = p.process_turn("DTP....").unwrap();
    assert_eq!(turn.destination(), Place::CastleDracula);
    assert_eq!(turn.end().health(Player::Dracula), 80);
}

#[test]
fn maturation_must_be_acknowledged() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    let mut plays = hemmed_in();
    plays.push("DTP....");
    plays.extend_from_slice(&DISTANT_HUNTERS);
    play_all(&mut p, &plays);

    assert_rejected(
        &mut p,
        "DKLT...",
        DraculaSuffixError::MissedMaturation { place: Place::Klausenburg, placed: 0 },
    );
    assert_rejected(&mut p, "DKL.VV.", DraculaSuffixError::VampireOnTrapRound { round: 6 });
    assert_rejected(
        &mut p,
        "DKL..V.",
        DraculaSuffixError::MissingPlacement { round: 6, vampire: false },
    );

    let score = p.snapshot().score();
    let turn = p.process_turn("DKLT.V.").unwrap();
    assert_eq!(turn.end().score(), score - 14);
    assert_eq!(turn.end().vampire_location(), None);
}

#[test]
fn malfunction_must_be_acknowledged() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    let mut plays = hemmed_in();
    plays.push("DTP....");
    plays.extend_from_slice(&DISTANT_HUNTERS);
    plays.push("DKLT.V.");
    plays.extend_from_slice(&DISTANT_HUNTERS);
    play_all(&mut p, &plays);

    assert_rejected(
        &mut p,
        "DGAT...",
        DraculaSuffixError::MissedMalfunction { place: Place::Galatz, placed: 1 },
    );
    assert_rejected(&mut p, "DGAT.V.", DraculaSuffixError::NoMaturationDue { round: 7 });
    let turn = p.process_turn("DGAT.M.").unwrap();
    assert_eq!(
        turn.end().trap_locations(),
        &[
            Place::CastleDracula,
            Place::CastleDracula,
            Place::CastleDracula,
            Place::Klausenburg,
            Place::Galatz,
        ]
    );
}

#[test]
fn placement_rules() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &DISTANT_HUNTERS);
    assert_rejected(&mut p, "DPAT...", DraculaSuffixError::TrapOnVampireRound { round: 0 });
    assert_rejected(
        &mut p,
        "DPA....",
        DraculaSuffixError::MissingPlacement { round: 0, vampire: true },
    );
    assert_rejected(&mut p, "DNS.V..", DraculaSuffixError::EncounterAtSea(Place::NorthSea));
    assert_rejected(&mut p, "DPA..M.", DraculaSuffixError::NoMalfunctionDue { round: 0 });
    assert_rejected(&mut p, "DPAX...", DraculaSuffixError::Impossible("X...".into()));
    p.process_turn("DPA.V..").unwrap();

    play_all(&mut p, &DISTANT_HUNTERS);
    assert_rejected(&mut p, "DST.V..", DraculaSuffixError::VampireOnTrapRound { round: 1 });
    assert_rejected(&mut p, "DST..V.", DraculaSuffixError::NoMaturationDue { round: 1 });
}

#[test]
fn retry_after_rejection() {
    let map = GameMap::standard();
    let mut p = Processor::new(&map);
    play_all(&mut p, &QUIET_HUNTERS);
    assert!(p.process_turn("DMN....").is_err());
    assert_eq!(p.current_player(), Player::Dracula);
    p.process_turn("DMN.V..").unwrap();
    assert_eq!(p.current_player(), Player::LordGodalming);
    assert_eq!(p.round(), 1);
}
