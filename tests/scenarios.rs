use glam::Vec2;
use velocity_of_escape::sim::{
    AsteroidTier, Entity, EntityKind, GameEvent, GameState, Rules, TickInput, split_asteroid, tick,
};

fn vulnerable_session() -> GameState {
    let mut state = GameState::empty(Rules::default(), 2024);
    if let EntityKind::Ship(ship) = &mut state.ship.kind {
        ship.invulnerable_ticks = 0;
    }
    state
}

fn tiers(state: &GameState) -> Vec<AsteroidTier> {
    state.entities.asteroids().filter_map(|a| a.tier()).collect()
}

#[test]
fn large_asteroid_hitting_ship_costs_a_life_and_splits() {
    let mut state = vulnerable_session();
    let center = Vec2::new(400.0, 300.0);
    let rock = state.spawn_asteroid_with(AsteroidTier::Large, center, Vec2::ZERO, 0.0);

    tick(&mut state, &TickInput::default());

    assert_eq!(state.lives, 2);
    assert!(!state.game_over);
    assert!(!state.entities.contains(rock));
    assert_eq!(tiers(&state), vec![AsteroidTier::Medium; 3]);
    assert!(state.entities.asteroids().all(|a| a.pos == center));
    assert_eq!(state.score, 1);
    // Back at the center with fresh protection
    assert!(state.is_ship_invulnerable());
    assert_eq!(state.ship.pos, center);
}

#[test]
fn bullet_past_the_margin_is_removed() {
    let mut state = vulnerable_session();
    let id = state
        .entities
        .spawn(Entity::bullet(Vec2::new(1600.0, 300.0), Vec2::new(1.0, 0.0)));

    tick(&mut state, &TickInput::default());
    assert!(!state.entities.contains(id));
    assert_eq!(state.entities.bullet_count(), 0);
}

#[test]
fn bullet_inside_the_margin_survives() {
    let mut state = vulnerable_session();
    let id = state
        .entities
        .spawn(Entity::bullet(Vec2::new(1050.0, 300.0), Vec2::new(1.0, 0.0)));

    tick(&mut state, &TickInput::default());
    assert!(state.entities.contains(id));
}

#[test]
fn last_hit_ends_the_game_without_splitting() {
    let mut state = vulnerable_session();
    state.lives = 0;
    let rock = state.spawn_asteroid_with(
        AsteroidTier::Large,
        Vec2::new(400.0, 300.0),
        Vec2::ZERO,
        0.0,
    );

    tick(&mut state, &TickInput::default());

    assert!(state.game_over);
    assert!(state.entities.contains(rock));
    assert_eq!(state.asteroid_count(), 1);
    assert_eq!(state.score, 0);
    assert!(
        state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { score: 0 }))
    );

    // Frozen afterwards, except for the frame counter
    let frame = state.frame_count;
    tick(&mut state, &TickInput::default());
    assert_eq!(state.frame_count, frame + 1);
    assert!(state.game_over);
    assert_eq!(state.asteroid_count(), 1);
}

#[test]
fn invulnerable_ship_ignores_collisions() {
    let mut state = GameState::empty(Rules::default(), 9);
    state.spawn_asteroid_with(
        AsteroidTier::Large,
        Vec2::new(400.0, 300.0),
        Vec2::ZERO,
        0.0,
    );

    for _ in 0..10 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.lives, 3);
    assert_eq!(state.asteroid_count(), 1);
}

#[test]
fn medium_splits_into_three_small() {
    let mut state = vulnerable_session();
    let pos = Vec2::new(100.0, 500.0);
    let children = split_asteroid(&mut state, AsteroidTier::Medium, pos);

    assert_eq!(children.len(), 3);
    for id in children {
        let child = state.entities.get(id).unwrap();
        assert_eq!(child.tier(), Some(AsteroidTier::Small));
        assert_eq!(child.pos, pos);
    }
    assert_eq!(state.score, 1);
}

#[test]
fn bullet_breaks_large_asteroid() {
    let mut state = vulnerable_session();
    let rock = state.spawn_asteroid_with(
        AsteroidTier::Large,
        Vec2::new(600.0, 300.0),
        Vec2::ZERO,
        0.0,
    );
    let bullet = state
        .entities
        .spawn(Entity::bullet(Vec2::new(590.0, 300.0), Vec2::new(1.0, 0.0)));

    tick(&mut state, &TickInput::default());

    assert!(!state.entities.contains(bullet));
    assert!(!state.entities.contains(rock));
    assert_eq!(tiers(&state), vec![AsteroidTier::Medium; 3]);
    assert_eq!(state.score, 1);
    assert_eq!(state.lives, 3);
}

#[test]
fn bullet_breaks_small_asteroid_into_tiny_pieces() {
    let mut state = vulnerable_session();
    let pos = Vec2::new(600.0, 300.0);
    let rock = state.spawn_asteroid_with(AsteroidTier::Small, pos, Vec2::ZERO, 0.0);
    let bullet = state
        .entities
        .spawn(Entity::bullet(Vec2::new(590.0, 300.0), Vec2::new(1.0, 0.0)));

    tick(&mut state, &TickInput::default());

    assert!(!state.entities.contains(bullet));
    assert!(!state.entities.contains(rock));
    assert_eq!(tiers(&state), vec![AsteroidTier::Tiny; 3]);
    assert!(state.entities.asteroids().all(|a| a.pos == pos));
    assert_eq!(state.score, 1);
    assert!(state.drain_events().iter().any(|e| matches!(
        e,
        GameEvent::AsteroidDestroyed {
            tier: AsteroidTier::Small,
            ..
        }
    )));
}

#[test]
fn same_seed_same_session() {
    let input = TickInput {
        commands: Vec::new(),
        autopilot: true,
    };
    let mut a = GameState::new(77);
    let mut b = GameState::new(77);
    for _ in 0..600 {
        tick(&mut a, &input);
        tick(&mut b, &input);
    }
    assert_eq!(a.score, b.score);
    assert_eq!(a.lives, b.lives);
    let pa: Vec<_> = a.all_entities().map(|e| (e.id, e.pos)).collect();
    let pb: Vec<_> = b.all_entities().map(|e| (e.id, e.pos)).collect();
    assert_eq!(pa, pb);
}
