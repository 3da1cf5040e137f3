#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rps_arena::simulation::entity::Entity;
use rps_arena::simulation::kind::Kind;
use rps_arena::simulation::locatable::Locatable;

#[test]
fn test_entity_locatable() {
    let mut entity = Entity::new(0, Kind::Rock, [10.0, 20.0], [2.0, -3.0]);

    // Test pos accessor
    assert_eq!(entity.pos()[0], 10.0);
    assert_eq!(entity.pos()[1], 20.0);

    // Test update moves along the velocity
    entity.update(0.5);
    assert_eq!(entity.pos()[0], 11.0);
    assert_eq!(entity.pos()[1], 18.5);
    assert_eq!(entity.vel.to_vec(), vec![2.0, -3.0]);

    // Test pos_mut accessor
    entity.pos_mut()[0] = 15.0;
    assert_eq!(entity.pos()[0], 15.0);
}

#[test]
fn test_locatable_trait_objects() {
    let a = Entity::new(0, Kind::Paper, [5.0, 5.0], [0.0, 0.0]);
    let b = Entity::new(1, Kind::Scissors, [10.0, 10.0], [0.0, 0.0]);

    fn get_distance(a: &dyn Locatable, b: &dyn Locatable) -> f32 {
        let dx = a.pos()[0] - b.pos()[0];
        let dy = a.pos()[1] - b.pos()[1];
        (dx * dx + dy * dy).sqrt()
    }

    let distance = get_distance(&a, &b);
    assert!((distance - 7.071).abs() < 0.01);
}
