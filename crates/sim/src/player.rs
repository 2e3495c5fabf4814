//! Scripted stand-in for the player.
use ghost_core::{Heading, MazeOracle, PlayerView, RngOracle, TilePos, compute_seed};

use crate::config::PlayerConfig;

/// Rng actor id of the player; ghosts use their personality index.
const PLAYER_ACTOR: u32 = 16;
const ROLL_TURN: u32 = 0;
const ROLL_PICK: u32 = 1;

/// Wanders the open tiles one step every few frames.
///
/// It keeps its heading while it can, never turns back unless boxed in, and
/// at junctions occasionally takes a random side corridor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wanderer {
    start: TilePos,
    tile: TilePos,
    heading: Option<Heading>,
    step_every: u32,
    turn_percent: u32,
    countdown: u32,
    seed: u64,
    nonce: u64,
}

impl Wanderer {
    pub fn new(config: PlayerConfig, seed: u64) -> Self {
        Self {
            start: config.start,
            tile: config.start,
            heading: None,
            step_every: config.step_every.max(1),
            turn_percent: config.turn_percent.min(100),
            countdown: config.step_every.max(1),
            seed,
            nonce: 0,
        }
    }

    pub fn tile(&self) -> TilePos {
        self.tile
    }

    pub fn view(&self) -> PlayerView {
        PlayerView::new(self.tile, self.heading)
    }

    /// Back to the start tile with no heading. The step countdown keeps
    /// running.
    pub fn reset(&mut self) {
        self.tile = self.start;
        self.heading = None;
    }

    /// Advances one frame, stepping a tile when the countdown runs out.
    pub fn tick(&mut self, maze: &dyn MazeOracle, rng: &dyn RngOracle) {
        self.countdown -= 1;
        if self.countdown > 0 {
            return;
        }
        self.countdown = self.step_every;

        let heading = self.choose(maze, rng);
        if let Some(next) = heading.and_then(|heading| self.tile.step(heading)) {
            self.tile = next;
        }
        self.heading = heading;
    }

    fn choose(&mut self, maze: &dyn MazeOracle, rng: &dyn RngOracle) -> Option<Heading> {
        let reverse = self.heading.map(Heading::reverse);
        let mut options: Vec<Heading> = Heading::ALL
            .into_iter()
            .filter(|heading| Some(*heading) != reverse && maze.allows_step(self.tile, *heading))
            .collect();
        if options.is_empty() {
            options.extend(reverse.filter(|heading| maze.allows_step(self.tile, *heading)));
        }

        if let Some(current) = self.heading
            && options.contains(&current)
            && self.roll(rng, ROLL_TURN, 100) >= self.turn_percent as usize
        {
            return Some(current);
        }
        if options.is_empty() {
            return None;
        }
        let index = self.roll(rng, ROLL_PICK, options.len());
        Some(options[index])
    }

    fn roll(&mut self, rng: &dyn RngOracle, context: u32, len: usize) -> usize {
        let seed = compute_seed(self.seed, self.nonce, PLAYER_ACTOR, context);
        self.nonce += 1;
        rng.pick_index(seed, len)
    }
}

#[cfg(test)]
mod tests {
    use ghost_core::{PcgRng, TileGrid};

    use super::*;

    fn corridor() -> TileGrid {
        TileGrid::from_rows(&["#######", "#.....#", "#######"]).expect("grid")
    }

    #[test]
    fn steps_only_every_few_frames() {
        let grid = corridor();
        let config = PlayerConfig {
            start: TilePos::new(1, 1),
            step_every: 3,
            turn_percent: 0,
        };
        let mut player = Wanderer::new(config, 1);

        player.tick(&grid, &PcgRng);
        player.tick(&grid, &PcgRng);
        assert_eq!(player.tile(), TilePos::new(1, 1));
        player.tick(&grid, &PcgRng);
        assert_eq!(player.tile(), TilePos::new(2, 1));
        assert_eq!(player.view().heading, Some(Heading::Right));
    }

    #[test]
    fn turns_back_only_at_dead_ends() {
        let grid = corridor();
        let config = PlayerConfig {
            start: TilePos::new(1, 1),
            step_every: 1,
            turn_percent: 0,
        };
        let mut player = Wanderer::new(config, 5);

        let tiles: Vec<u32> = (0..8)
            .map(|_| {
                player.tick(&grid, &PcgRng);
                player.tile().x
            })
            .collect();
        assert_eq!(tiles, vec![2, 3, 4, 5, 4, 3, 2, 1]);

        player.reset();
        assert_eq!(player.view(), PlayerView::new(TilePos::new(1, 1), None));
    }

    #[test]
    fn stays_on_open_tiles() {
        let grid = TileGrid::from_rows(&["#####", "#...#", "#.#.#", "#...#", "#####"])
            .expect("grid");
        let config = PlayerConfig {
            start: TilePos::new(1, 1),
            step_every: 1,
            turn_percent: 50,
        };
        let mut player = Wanderer::new(config, 9);
        for _ in 0..100 {
            player.tick(&grid, &PcgRng);
            assert!(grid.is_passable(player.tile()), "{}", player.tile());
        }
    }
}
