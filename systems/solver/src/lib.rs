#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomised search system that plays a dungeon until an attempt passes.
//!
//! Every attempt starts from a fresh reset and is independent of the ones
//! before it. Moves are drawn uniformly from the in-bounds directions whose
//! target is not a [`Tile::BorderHazard`], falling back to every in-bounds
//! direction when all of them are hazards.

use orb_dungeon_core::{Direction, DungeonStatus, Tile};
use orb_dungeon_world::{self as world, query, Dungeon};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of tries between progress reports used by drivers by default.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Progress notification emitted while a search is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverProgress {
    /// One-based index of the attempt about to start.
    pub tries: u64,
}

/// Search driver that owns a dungeon and the random source used to explore it.
#[derive(Debug)]
pub struct Solver<R = ChaCha8Rng> {
    dungeon: Dungeon,
    rng: R,
    legal: Vec<Direction>,
    preferred: Vec<Direction>,
}

impl Solver<ChaCha8Rng> {
    /// Creates a solver whose random source is seeded once from OS entropy.
    #[must_use]
    pub fn new(dungeon: Dungeon) -> Self {
        Self::with_rng(dungeon, ChaCha8Rng::from_entropy())
    }
}

impl<R> Solver<R>
where
    R: Rng,
{
    /// Creates a solver that draws moves from the provided random source.
    #[must_use]
    pub fn with_rng(dungeon: Dungeon, rng: R) -> Self {
        Self {
            dungeon,
            rng,
            legal: Vec::with_capacity(Direction::ALL.len()),
            preferred: Vec::with_capacity(Direction::ALL.len()),
        }
    }

    /// Dungeon driven by the solver, in the state the last attempt left it.
    #[must_use]
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Consumes the solver, yielding the dungeon it owned.
    #[must_use]
    pub fn into_dungeon(self) -> Dungeon {
        self.dungeon
    }

    /// Plays up to `max_tries` attempts and returns the first winning move
    /// sequence.
    pub fn run(&mut self, max_tries: u64) -> Option<Vec<Direction>> {
        self.run_with_progress(max_tries, 0, |_| {})
    }

    /// Same as [`Solver::run`], additionally invoking `on_progress` before
    /// every `interval`-th attempt. An interval of zero disables reporting.
    pub fn run_with_progress<F>(
        &mut self,
        max_tries: u64,
        interval: u64,
        mut on_progress: F,
    ) -> Option<Vec<Direction>>
    where
        F: FnMut(SolverProgress),
    {
        world::reset(&mut self.dungeon);

        for tries in 1..=max_tries {
            if interval != 0 && tries % interval == 0 {
                on_progress(SolverProgress { tries });
            }

            if self.attempt() {
                return Some(query::move_history(&self.dungeon).to_vec());
            }
        }
        None
    }

    fn attempt(&mut self) -> bool {
        world::reset(&mut self.dungeon);

        while query::status(&self.dungeon) == DungeonStatus::Running {
            let Some(direction) = self.choose_direction() else {
                break;
            };
            let moved = world::move_player(&mut self.dungeon, direction);
            debug_assert!(moved.is_ok(), "chosen move was rejected: {moved:?}");
            if moved.is_err() {
                break;
            }
            if query::tile_under_player(&self.dungeon) == Tile::Sanctuary {
                let _ = world::attack(&mut self.dungeon);
            }
        }

        query::status(&self.dungeon) == DungeonStatus::Passed
    }

    fn choose_direction(&mut self) -> Option<Direction> {
        self.legal.clear();
        self.preferred.clear();

        let grid = query::grid(&self.dungeon);
        for direction in Direction::ALL {
            let Some(target) = query::target_of(&self.dungeon, direction) else {
                continue;
            };
            self.legal.push(direction);
            if grid.tile(target) != Some(Tile::BorderHazard) {
                self.preferred.push(direction);
            }
        }

        let candidates = if self.preferred.is_empty() {
            &self.legal
        } else {
            &self.preferred
        };
        candidates.choose(&mut self.rng).copied()
    }
}
