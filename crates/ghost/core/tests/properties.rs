mod common;

use std::time::Duration;

use common::{CountingPaths, World};
use ghost_core::{
    AStarPathfinder, Ghost, Heading, MazeOracle, Mode, PathOracle, Personality, PlayerView,
    TilePos,
};

/// Releases an agent at `tile` and walks it into chase mode.
fn chasing(world: &World, personality: Personality, tile: TilePos) -> Ghost {
    let env = world.env();
    let mut ghost = Ghost::released_at(personality, tile, &env);
    ghost.evaluate_mode(&env);
    world.clock.advance(env.config().scatter_interval());
    ghost
}

#[test]
fn pursuer_on_the_player_tile_holds() {
    let world = World::open();
    let env = world.env();
    let mut ghost = Ghost::released_at(Personality::Pursuer, TilePos::new(5, 5), &env);

    ghost
        .update_direction(&env, PlayerView::new(TilePos::new(5, 5), Some(Heading::Left)))
        .unwrap();
    assert_eq!(ghost.heading(), None);
    assert_eq!(ghost.tile(), TilePos::new(5, 5));
}

#[test]
fn close_ambusher_moves_like_the_pursuer() {
    let world = World::open();
    let env = world.env();
    // Distance 3, player running right: a projection would aim at (11, 6).
    let player = PlayerView::new(TilePos::new(7, 6), Some(Heading::Right));

    let mut pursuer = chasing(&world, Personality::Pursuer, TilePos::new(5, 5));
    let mut ambusher = chasing(&world, Personality::Ambusher, TilePos::new(5, 5));
    pursuer.update_direction(&env, player).unwrap();
    ambusher.update_direction(&env, player).unwrap();

    assert_eq!(pursuer.mode(), Mode::Chase);
    assert_eq!(ambusher.mode(), Mode::Chase);
    assert_eq!(ambusher.heading(), pursuer.heading());
    assert_eq!(ambusher.tile(), pursuer.tile());
}

#[test]
fn distant_ambusher_cuts_the_player_off() {
    let world = World::open();
    let env = world.env();
    // Player (10,10) running down; the ambusher aims at (10,14).
    let player = PlayerView::new(TilePos::new(10, 10), Some(Heading::Down));

    let mut pursuer = chasing(&world, Personality::Pursuer, TilePos::new(14, 12));
    let mut ambusher = chasing(&world, Personality::Ambusher, TilePos::new(14, 12));
    pursuer.update_direction(&env, player).unwrap();
    ambusher.update_direction(&env, player).unwrap();

    assert_eq!(pursuer.heading(), Some(Heading::Up));
    assert_eq!(ambusher.heading(), Some(Heading::Left));
}

#[test]
fn frightened_agent_never_backtracks_or_approaches() {
    let world = World::classic();
    let env = world.env();
    let player = PlayerView::new(TilePos::new(10, 20), None);

    let mut ghost = Ghost::released_at(Personality::Switcher, TilePos::new(1, 5), &env);
    ghost.evaluate_mode(&env);
    ghost.trigger_fear(true, &env);

    let layout = env.layout();
    for _ in 0..200 {
        let from = ghost.tile();
        let previous = ghost.heading();
        // Tunnel and overpass ticks keep the heading without evading.
        if from == player.tile
            || from.y == layout.tunnel.row
            || layout.corridor_lock.contains(from)
        {
            ghost.update_direction(&env, player).unwrap();
            continue;
        }

        let toward = AStarPathfinder.find_path(&world.grid, from, player.tile);
        let toward = Heading::ALL
            .into_iter()
            .find(|heading| toward.get(1).copied() == from.step(*heading));

        let preferred: Vec<Heading> = Heading::ALL
            .into_iter()
            .filter(|heading| world.grid.allows_step(from, *heading))
            .filter(|heading| Some(heading.reverse()) != previous)
            .filter(|heading| Some(*heading) != toward)
            .collect();

        ghost.update_direction(&env, player).unwrap();
        assert!(ghost.is_frightened());
        if !preferred.is_empty() {
            let chosen = ghost.heading().expect("a heading was available");
            assert!(
                preferred.contains(&chosen),
                "chose {chosen} at {from}, preferred {preferred:?}"
            );
        }
    }
}

#[test]
fn arrived_patrol_ignores_the_pathfinder() {
    let world = World::classic().with_paths(CountingPaths::default());
    let env = world.env();
    let player = PlayerView::new(TilePos::new(19, 25), None);

    let mut ghost = Ghost::released_at(Personality::Ambusher, TilePos::new(3, 1), &env);
    let mut headings = Vec::new();
    while ghost.patrol_arrival().is_none() {
        ghost.update_direction(&env, player).unwrap();
        assert!(headings.len() < 8, "never reached the corner");
        headings.push(ghost.heading());
    }
    assert_eq!(ghost.patrol_arrival(), Some(Some(Heading::Left)));

    let calls = world.paths.calls();
    for _ in 0..48 {
        ghost.update_direction(&env, player).unwrap();
        headings.push(ghost.heading());
    }
    assert_eq!(world.paths.calls(), calls);
    assert_eq!(ghost.mode(), Mode::Scatter);

    // A second run from the same state walks the same loop.
    let mut replay = Ghost::released_at(Personality::Ambusher, TilePos::new(3, 1), &env);
    let replayed: Vec<_> = (0..headings.len())
        .map(|_| {
            replay.update_direction(&env, player).unwrap();
            replay.heading()
        })
        .collect();
    assert_eq!(headings, replayed);
}

#[test]
fn chase_clears_the_patrol_and_resumes_pursuit() {
    let world = World::classic().with_paths(CountingPaths::default());
    let env = world.env();
    let player = PlayerView::new(TilePos::new(19, 25), None);

    let mut ghost = Ghost::released_at(Personality::Ambusher, TilePos::new(3, 1), &env);
    for _ in 0..6 {
        ghost.update_direction(&env, player).unwrap();
    }
    assert!(ghost.patrol_arrival().is_some());

    world.clock.advance(Duration::from_secs(7));
    let calls = world.paths.calls();
    ghost.update_direction(&env, player).unwrap();
    assert_eq!(ghost.mode(), Mode::Chase);
    assert_eq!(ghost.patrol_arrival(), None);
    assert!(world.paths.calls() > calls);
}

#[test]
fn mode_evaluation_is_idempotent_within_an_interval() {
    let world = World::open();
    let env = world.env();
    let mut ghost = Ghost::released_at(Personality::Opportunist, TilePos::new(5, 5), &env);

    ghost.evaluate_mode(&env);
    ghost.evaluate_mode(&env);
    assert_eq!(ghost.mode(), Mode::Scatter);

    world.clock.advance(Duration::from_secs(7));
    ghost.evaluate_mode(&env);
    ghost.evaluate_mode(&env);
    assert_eq!(ghost.mode(), Mode::Chase);

    world.clock.advance(Duration::from_secs(19));
    ghost.evaluate_mode(&env);
    assert_eq!(ghost.mode(), Mode::Chase);
}

#[test]
fn tunnel_carries_agents_across_the_board() {
    let world = World::classic();
    let env = world.env();
    // Frightened with the player due east: running west into the tunnel.
    let player = PlayerView::new(TilePos::new(6, 13), None);
    let mut ghost = Ghost::released_at(Personality::Pursuer, TilePos::new(4, 13), &env);
    ghost.evaluate_mode(&env);
    ghost.trigger_fear(true, &env);

    let mut tiles = Vec::new();
    for _ in 0..6 {
        ghost.update_direction(&env, player).unwrap();
        tiles.push(ghost.tile());
    }
    assert_eq!(
        tiles,
        vec![
            TilePos::new(3, 13),
            TilePos::new(2, 13),
            TilePos::new(1, 13),
            TilePos::new(0, 13),
            TilePos::new(20, 13),
            TilePos::new(19, 13),
        ]
    );
    assert!(ghost.in_tunnel());
}
