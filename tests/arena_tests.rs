#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rps_arena::simulation::arena::{self, Arena, Phase};
use rps_arena::simulation::entity::Entity;
use rps_arena::simulation::events::SimulationEvent;
use rps_arena::simulation::kind::Kind;
use rps_arena::simulation::params::Params;
use rps_arena::simulation::population::Population;
use std::ops::ControlFlow;

fn create_test_params() -> Params {
    Params {
        arena_width: 1000.0,
        arena_height: 1000.0,
        num_per_kind: 10,
        seed: 7,
        ..Params::default()
    }
}

fn still(id: u64, kind: Kind, x: f32, y: f32) -> Entity {
    Entity::new(id, kind, [x, y], [0.0, 0.0])
}

#[test]
fn test_arena_creation() {
    let params = create_test_params();
    let arena = Arena::new(params.clone()).expect("valid params");

    assert_eq!(arena.population().counts(), [10, 10, 10]);
    assert_eq!(arena.ticks(), 0);
    assert_eq!(arena.time(), 0.0);
    assert_eq!(arena.phase(), Phase::Running);
    assert!(arena.winner().is_none());
    assert_eq!(arena.params(), &params);
}

#[test]
fn test_new_population_rejects_zero_count() {
    assert!(arena::new_population(0, 800.0, 600.0, 1).is_err());
    assert!(arena::new_population(3, 30.0, 600.0, 1).is_err());
    let arena = arena::new_population(3, 800.0, 600.0, 1).expect("valid");
    assert_eq!(arena.population().len(), 9);
}

#[test]
fn test_tick_advances_clock() {
    let mut arena = Arena::new(create_test_params()).expect("valid params");

    arena::tick(&mut arena, 0.5);
    arena.step();

    assert_eq!(arena.ticks(), 2);
    assert!((arena.time() - 1.5).abs() < 1e-6);
}

#[test]
fn test_invalid_step_is_ignored() {
    let mut arena = Arena::new(create_test_params()).expect("valid params");
    arena.step();
    let before = arena.population().clone();
    let (ticks, time) = (arena.ticks(), arena.time());

    for dt in [f32::NAN, f32::INFINITY, 0.0, -1.0] {
        assert!(arena.tick(dt).is_empty());
        assert_eq!(arena.ticks(), ticks);
        assert_eq!(arena.time(), time);
        assert_eq!(arena.population(), &before);
        assert_eq!(arena.phase(), Phase::Running);
    }

    // A valid step afterwards still works.
    arena.step();
    assert_eq!(arena.ticks(), ticks + 1);
    assert!(arena.time().is_finite());
}

#[test]
fn test_frozen_arena_is_rejected() {
    let params = Params {
        max_speed: 0.0,
        ..create_test_params()
    };
    assert!(Arena::new(params).is_err());
}

#[test]
fn test_population_is_conserved() {
    let params = create_test_params();
    let mut arena = Arena::new(params.clone()).expect("valid params");
    let total = params.initial_population();

    for _ in 0..300 {
        arena.step();
        assert_eq!(arena.population().len(), total);
        if arena.is_finished() {
            break;
        }
    }
}

#[test]
fn test_entities_stay_inside_arena() {
    let params = create_test_params();
    let mut arena = Arena::new(params.clone()).expect("valid params");

    for _ in 0..300 {
        arena.tick(4.0);
        for entity in arena.population().iter() {
            assert!(entity.pos[0] >= 0.0);
            assert!(entity.pos[1] >= 0.0);
            assert!(entity.pos[0] + params.entity_size <= params.arena_width);
            assert!(entity.pos[1] + params.entity_size <= params.arena_height);
        }
    }
}

#[test]
fn test_same_seed_same_run() {
    let params = create_test_params();
    let mut a = Arena::new(params.clone()).expect("valid params");
    let mut b = Arena::new(params.clone()).expect("valid params");

    for _ in 0..100 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.population(), b.population());

    let mut c = Arena::new(Params { seed: 8, ..params }).expect("valid params");
    c.step();
    assert_ne!(a.population(), c.population());
}

#[test]
fn test_no_contact_changes_only_positions() {
    let params = create_test_params();
    let population = Population::from_entities(vec![
        Entity::new(0, Kind::Rock, [100.0, 100.0], [1.0, 0.0]),
        Entity::new(1, Kind::Paper, [400.0, 400.0], [0.0, 1.0]),
        Entity::new(2, Kind::Scissors, [700.0, 700.0], [-1.0, -1.0]),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    let events = arena.step();

    assert!(events.is_empty());
    assert_eq!(arena.population().counts(), [1, 1, 1]);
    let rock = arena.population().get(0).expect("rock survives");
    assert_eq!(rock.kind, Kind::Rock);
    assert_eq!(rock.pos.to_vec(), vec![101.0, 100.0]);
}

#[test]
fn test_paper_overlapping_rock_converts_it() {
    let params = create_test_params();
    let population = Population::from_entities(vec![
        still(0, Kind::Rock, 0.0, 0.0),
        still(1, Kind::Rock, 200.0, 0.0),
        still(2, Kind::Rock, 400.0, 0.0),
        still(3, Kind::Paper, 0.0, 0.0),
        still(4, Kind::Paper, 600.0, 600.0),
        still(5, Kind::Paper, 800.0, 800.0),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    let events = arena.step();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].new_kind, Kind::Paper);
    assert_eq!(events[0].defeated, Kind::Rock);
    assert_eq!(events[0].position, [0.0, 0.0]);
    assert_eq!(events[0].sound_cue(), "sound_paper");

    assert_eq!(arena.population().count(Kind::Rock), 2);
    assert_eq!(arena.population().count(Kind::Paper), 4);
    assert_eq!(arena.population().count(Kind::Scissors), 0);
    assert!(arena.population().get(0).is_none());
    assert_eq!(
        arena.population().get(events[0].id).map(|e| e.kind),
        Some(Kind::Paper)
    );
    assert!(arena::winner(&arena).is_none());
}

#[test]
fn test_monochrome_population_has_winner() {
    let params = create_test_params();
    let population = Population::from_entities(vec![
        still(0, Kind::Rock, 0.0, 0.0),
        still(1, Kind::Rock, 500.0, 500.0),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    let outcome = arena.winner().expect("all rocks");
    assert_eq!(outcome.winner, Kind::Rock);
    assert_eq!(outcome.ticks, 0);

    // Finished arenas are frozen.
    assert!(arena.step().is_empty());
    assert_eq!(arena.ticks(), 0);
}

#[test]
fn test_last_contact_ends_the_game() {
    let params = create_test_params();
    let population = Population::from_entities(vec![
        still(0, Kind::Rock, 100.0, 100.0),
        still(1, Kind::Scissors, 110.0, 110.0),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    let outcome = arena.run().expect("rock wins on first contact");

    assert_eq!(outcome.winner, Kind::Rock);
    assert_eq!(outcome.ticks, 1);
    assert_eq!(outcome.time, 1.0);
    assert!(matches!(
        arena.log().events().front().map(|logged| &logged.event),
        Some(SimulationEvent::Won {
            winner: Kind::Rock,
            ticks: 1
        })
    ));
}

#[test]
fn test_tick_limit_stops_run() {
    let params = Params {
        max_ticks: Some(10),
        ..create_test_params()
    };
    let population = Population::from_entities(vec![
        still(0, Kind::Rock, 0.0, 0.0),
        still(1, Kind::Paper, 500.0, 500.0),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    assert!(arena.run().is_none());
    assert_eq!(arena.ticks(), 10);
    assert_eq!(arena.phase(), Phase::Running);
    assert!(matches!(
        arena.log().events().front().map(|logged| &logged.event),
        Some(SimulationEvent::TickLimitReached { ticks: 10 })
    ));
}

#[test]
fn test_run_with_can_stop_between_ticks() {
    let params = create_test_params();
    let population = Population::from_entities(vec![
        still(0, Kind::Rock, 0.0, 0.0),
        still(1, Kind::Paper, 500.0, 500.0),
    ]);
    let mut arena = Arena::with_population(params, population).expect("valid params");

    let outcome = arena.run_with(|arena, _| {
        if arena.ticks() >= 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    assert!(outcome.is_none());
    assert_eq!(arena.ticks(), 3);
}

#[test]
fn test_full_run_is_consistent() {
    let params = Params {
        arena_width: 400.0,
        arena_height: 400.0,
        num_per_kind: 5,
        max_ticks: Some(5_000),
        ..Params::default()
    };
    let mut arena = Arena::new(params.clone()).expect("valid params");

    match arena.run() {
        Some(outcome) => {
            assert_eq!(outcome.ticks, arena.ticks());
            assert_eq!(
                arena.population().count(outcome.winner),
                params.initial_population()
            );
        }
        None => {
            assert_eq!(arena.ticks(), 5_000);
            assert!(arena.population().monochrome_kind().is_none());
        }
    }
}
