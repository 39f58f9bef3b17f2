use std::sync::Arc;

use field_core::{FieldConfig, FieldError, Obstacle, ObstacleKind, SplitMix64, Vec2, World};

fn empty_world(size: u32) -> World {
    World::from_parts(size, Vec::new(), None).expect("world")
}

#[test]
fn sampled_obstacles_stay_inside_the_world() {
    for seed in 0..200 {
        let mut rng = SplitMix64::new(seed);
        let world = World::create(32, true, &mut rng).expect("world");

        assert!((2..7).contains(&world.obstacles().len()));
        for o in world.obstacles() {
            let (min, max) = o.bounds();
            assert!(o.extent >= 0.0 && o.extent <= 8.0);
            assert!(min.x >= 0.0 && min.y >= 0.0, "{o:?}");
            assert!(max.x <= 32.0 && max.y <= 32.0, "{o:?}");
        }
        let agent = world.sampled_agent_position();
        assert!((0.0..32.0).contains(&agent.x));
        assert!((0.0..32.0).contains(&agent.y));
    }
}

#[test]
fn zero_size_is_rejected() {
    let mut rng = SplitMix64::new(1);
    assert!(matches!(
        World::create(0, true, &mut rng),
        Err(FieldError::InvalidSize(0))
    ));
    assert!(matches!(
        World::from_parts(0, Vec::new(), None),
        Err(FieldError::InvalidSize(0))
    ));
}

#[test]
fn negative_extent_is_rejected() {
    let obstacles = vec![
        Obstacle::new(ObstacleKind::Box, Vec2::new(1.0, 1.0), 1.0),
        Obstacle::new(ObstacleKind::Circle, Vec2::new(5.0, 5.0), -1.0),
    ];
    assert!(matches!(
        World::from_parts(10, obstacles, None),
        Err(FieldError::InvalidObstacle { index: 1, .. })
    ));
}

#[test]
fn same_seed_reproduces_the_same_world() {
    let a = World::create(24, true, &mut SplitMix64::new(99)).expect("world");
    let b = World::create(24, true, &mut SplitMix64::new(99)).expect("world");

    assert_eq!(a.obstacles(), b.obstacles());
    assert_eq!(a.sampled_agent_position(), b.sampled_agent_position());
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn agent_flag_does_not_change_the_random_stream() {
    let with = World::create(24, true, &mut SplitMix64::new(5)).expect("world");
    let without = World::create(24, false, &mut SplitMix64::new(5)).expect("world");

    assert_eq!(with.obstacles(), without.obstacles());
    assert_eq!(with.sampled_agent_position(), without.sampled_agent_position());
    assert!(with.agent_position().is_some());
    assert!(without.agent_position().is_none());
}

#[test]
fn empty_world_follows_the_center_gradient() {
    let world = empty_world(10);

    assert_eq!(world.value_at(Vec2::new(5.0, 5.0)), 30);
    assert_eq!(world.value_at(Vec2::new(0.0, 0.0)), 25);
    assert_eq!(world.value_at(Vec2::new(9.0, 2.0)), 26);
    // Out-of-range positions use the same formula.
    assert_eq!(world.value_at(Vec2::new(-40.0, 5.0)), -15);
}

#[test]
fn box_obstacle_adds_its_peak_at_the_center() {
    let obstacles = vec![Obstacle::new(ObstacleKind::Box, Vec2::new(5.0, 5.0), 3.0)];
    let world = World::from_parts(10, obstacles, None).expect("world");

    assert_eq!(world.value_at(Vec2::new(5.0, 5.0)), 100);
    // Chebyshev distance 2 from the box center, 2 from the world center.
    assert_eq!(world.value_at(Vec2::new(7.0, 3.0)), 28 + 66);
    // On the boundary the obstacle no longer applies.
    assert_eq!(world.value_at(Vec2::new(8.0, 5.0)), 27);
}

#[test]
fn circle_obstacle_uses_euclidean_distance() {
    let obstacles = vec![Obstacle::new(ObstacleKind::Circle, Vec2::new(5.0, 5.0), 3.0)];
    let world = World::from_parts(10, obstacles, None).expect("world");

    // (7.5, 7.5) is inside a box of half side 3 but outside the circle.
    assert_eq!(world.value_at(Vec2::new(7.5, 7.5)), 27);
    let sample = world.field_at(Vec2::new(6.0, 5.0));
    assert_eq!(sample.obstacle, 68.0);
}

#[test]
fn agent_term_only_applies_when_included() {
    let agent = Vec2::new(3.0, 3.0);
    let with = World::from_parts(10, Vec::new(), Some(agent)).expect("world");
    let without = empty_world(10);

    assert_eq!(with.value_at(agent), 28 + 50);
    assert_eq!(without.value_at(agent), 28);
    assert_eq!(with.value_at(Vec2::new(4.0, 3.0)), 28);
}

#[test]
fn grid_is_cached_and_matches_pointwise_evaluation() {
    let mut rng = SplitMix64::new(2024);
    let world = World::create(16, true, &mut rng).expect("world");

    let first = world.grid();
    let second = world.grid();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, &world.rasterize());

    for x in 0..16 {
        for y in 0..16 {
            let expected = world.value_at(Vec2::new(x as f64, y as f64));
            assert_eq!(first.get(x, y), Some(expected));
        }
    }
}

#[test]
fn derived_world_aliases_obstacles_and_moves_the_agent() {
    let mut rng = SplitMix64::new(77);
    let root = World::create(20, false, &mut rng).expect("world");
    let p = Vec2::new(-3.0, 40.0);

    let moved = root.with_agent_position(p);

    assert_eq!(moved.agent_position(), Some(p));
    assert!(moved.includes_agent());
    assert!(!root.includes_agent());
    assert_eq!(moved.size(), root.size());
    assert!(Arc::ptr_eq(root.shared_obstacles(), moved.shared_obstacles()));
    assert_ne!(root.sampled_agent_position(), p);
}

#[test]
fn derived_world_builds_its_own_grid() {
    let obstacles = vec![Obstacle::new(ObstacleKind::Box, Vec2::new(5.0, 5.0), 2.0)];
    let root = World::from_parts(10, obstacles, None).expect("world");
    let root_grid = root.grid().clone();

    let moved = root.with_agent_position(Vec2::new(1.0, 1.0));
    assert_eq!(moved.grid().get(1, 1), Some(26 + 50));
    assert_eq!(root.grid(), &root_grid);
    assert_eq!(root_grid.get(1, 1), Some(26));
}

#[test]
fn geometry_mirrors_the_scene() {
    let obstacles = vec![
        Obstacle::new(ObstacleKind::Box, Vec2::new(3.0, 3.0), 2.0),
        Obstacle::new(ObstacleKind::Circle, Vec2::new(7.0, 7.0), 1.5),
    ];
    let world = World::from_parts(10, obstacles, Some(Vec2::new(5.0, 5.0))).expect("world");
    let geometry = world.geometry();

    assert_eq!(geometry.boundary.area(), 100.0);
    assert_eq!(geometry.obstacles.len(), 2);
    assert_eq!(geometry.obstacles[0].polygon.area(), 16.0);
    assert!(geometry.obstacles[1].polygon.contains(Vec2::new(7.0, 7.0)));
    let agent = geometry.agent.as_ref().expect("agent shape");
    assert_eq!(agent.area(), 1.0);
    assert_eq!(geometry.shapes().count(), 4);
    assert!(std::ptr::eq(geometry, world.geometry()));
}

#[test]
fn custom_field_constants_replace_the_defaults() {
    let obstacles = vec![Obstacle::new(ObstacleKind::Box, Vec2::new(5.0, 5.0), 3.0)];
    let world = World::from_parts(10, obstacles, None).expect("world");
    assert_eq!(world.value_at(Vec2::new(6.0, 5.0)), 29 + 68);

    let field = FieldConfig {
        world_peak: 0.0,
        obstacle_peak: 10.0,
        obstacle_gradient: 1.0,
        ..FieldConfig::default()
    };
    let world = world.with_field_config(field);
    assert_eq!(world.field_config(), field);
    assert_eq!(world.value_at(Vec2::new(6.0, 5.0)), -1 + 9);
    assert_eq!(world.grid().get(6, 5), Some(8));
}
