#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative dungeon state management for Orb Dungeon.
//!
//! A [`Dungeon`] owns the live grid, the player, the attempt status and the
//! move history, plus the initial snapshot it returns to on [`reset`]. All
//! mutation goes through [`reset`], [`move_player`], [`attack`] or the
//! command-driven [`apply`] entry point. Read access lives in [`query`].

use orb_dungeon_core::{
    AttackOutcome, AttackRejection, Command, Direction, DungeonStatus, Event, GridCoord,
    MoveError, PlayerSnapshot, Tile, ATTACK_ORB_THRESHOLD, BORDER_HAZARD_DAMAGE,
    MOVE_HEALTH_COST, ORB_SOURCE_DAMAGE, SMALL_BOON_HEAL, SMALL_BOON_ORB_COST, START_COORD,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const MIN_DUNGEON_SIZE: u32 = 2;

/// Parameters fixed when a dungeon is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DungeonConfig {
    /// Side length of the square grid.
    pub size: u32,
    /// Orb target advertised to players. Attacks are gated by
    /// [`ATTACK_ORB_THRESHOLD`] instead.
    pub desired_orb_count: u32,
    /// Health the player starts every attempt with.
    pub initial_health: i32,
}

impl DungeonConfig {
    /// Grid size used when none is provided.
    pub const DEFAULT_SIZE: u32 = 3;

    /// Orb target used when none is provided.
    pub const DEFAULT_DESIRED_ORB_COUNT: u32 = 10;

    /// Creates a configuration with the default size and orb target.
    #[must_use]
    pub const fn with_initial_health(initial_health: i32) -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            desired_orb_count: Self::DEFAULT_DESIRED_ORB_COUNT,
            initial_health,
        }
    }

    /// Checks the size and returns the number of tiles the grid holds.
    fn validate(&self) -> Result<usize, DungeonError> {
        if self.size < MIN_DUNGEON_SIZE {
            return Err(DungeonError::InvalidSize { size: self.size });
        }
        Grid::capacity(self.size).ok_or(DungeonError::TooLarge { size: self.size })
    }
}

/// Errors that can occur while constructing a dungeon.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    /// The grid must be large enough to contain the start tile at (1, 1).
    #[error("dungeon size must be at least 2 (received {size})")]
    InvalidSize {
        /// Size that failed validation.
        size: u32,
    },
    /// The grid holds more tiles than the platform can address.
    #[error("dungeon size {size} is too large for this platform")]
    TooLarge {
        /// Size that failed validation.
        size: u32,
    },
    /// An explicit layout has the wrong number of rows.
    #[error("layout has {rows} rows but the dungeon size is {size}")]
    RowCountMismatch {
        /// Configured side length.
        size: u32,
        /// Number of rows supplied.
        rows: usize,
    },
    /// An explicit layout row has the wrong number of tiles.
    #[error("layout row {row} has {length} tiles but the dungeon size is {size}")]
    RowLengthMismatch {
        /// Index of the offending row.
        row: usize,
        /// Number of tiles supplied in that row.
        length: usize,
        /// Configured side length.
        size: u32,
    },
    /// An explicit layout does not start the player on a sanctuary.
    #[error("start tile (1, 1) must be a sanctuary but holds {found:?}")]
    StartTileNotSanctuary {
        /// Tile found at the start coordinate.
        found: Tile,
    },
}

/// Represents the authoritative Orb Dungeon state.
#[derive(Clone, Debug)]
pub struct Dungeon {
    config: DungeonConfig,
    initial: Snapshot,
    grid: Grid,
    player: Player,
    status: DungeonStatus,
    history: Vec<Direction>,
}

impl Dungeon {
    /// Creates a dungeon with a randomly generated grid seeded from OS entropy.
    pub fn new(
        size: u32,
        desired_orb_count: u32,
        initial_health: i32,
    ) -> Result<Self, DungeonError> {
        let config = DungeonConfig {
            size,
            desired_orb_count,
            initial_health,
        };
        Self::generate(config, &mut ChaCha8Rng::from_entropy())
    }

    /// Creates a dungeon whose tiles are drawn uniformly from `rng`.
    ///
    /// The start tile is forced to [`Tile::Sanctuary`] after generation.
    pub fn generate<R>(config: DungeonConfig, rng: &mut R) -> Result<Self, DungeonError>
    where
        R: Rng + ?Sized,
    {
        let capacity = config.validate()?;
        let mut grid = Grid::generate(config.size, capacity, rng);
        grid.set(START_COORD, Tile::Sanctuary);
        Ok(Self::from_grid(config, grid))
    }

    /// Creates a dungeon from an explicit row-major layout.
    pub fn with_layout(config: DungeonConfig, rows: &[Vec<Tile>]) -> Result<Self, DungeonError> {
        let capacity = config.validate()?;
        let grid = Grid::from_rows(config.size, capacity, rows)?;
        match grid.tile(START_COORD) {
            Some(Tile::Sanctuary) => {}
            Some(found) => return Err(DungeonError::StartTileNotSanctuary { found }),
            None => return Err(DungeonError::InvalidSize { size: config.size }),
        }
        Ok(Self::from_grid(config, grid))
    }

    fn from_grid(config: DungeonConfig, grid: Grid) -> Self {
        let player = Player::spawn(config.initial_health);
        Self {
            config,
            initial: Snapshot {
                grid: grid.clone(),
                player,
            },
            grid,
            player,
            status: DungeonStatus::Running,
            history: Vec::new(),
        }
    }
}

/// Restores the dungeon to the snapshot captured at construction.
pub fn reset(dungeon: &mut Dungeon) {
    dungeon.grid.clone_from(&dungeon.initial.grid);
    dungeon.player = dungeon.initial.player;
    dungeon.status = DungeonStatus::Running;
    dungeon.history.clear();
}

/// Moves the player one tile, cycling every other tile and applying the
/// landing effect.
///
/// Rejected moves leave the dungeon untouched.
pub fn move_player(dungeon: &mut Dungeon, direction: Direction) -> Result<(), MoveError> {
    if dungeon.status.is_terminal() {
        return Err(MoveError::Finished {
            status: dungeon.status,
        });
    }

    let from = dungeon.player.position;
    let grid = &dungeon.grid;
    let Some((to, index, target)) = from.step(direction, grid.size).and_then(|to| {
        let index = grid.index(to)?;
        let target = *grid.tiles.get(index)?;
        Some((to, index, target))
    }) else {
        return Err(MoveError::OutOfBounds { from, direction });
    };

    // The landing tile is exempt from cycling, so `target` stays current.
    dungeon.grid.advance_all_except(index);
    dungeon.player.land_on(to, target);
    dungeon.history.push(direction);

    if dungeon.player.health < 0 {
        dungeon.status = DungeonStatus::Dead;
    }
    Ok(())
}

/// Attempts to pass the dungeon from the player's current tile.
pub fn attack(dungeon: &mut Dungeon) -> AttackOutcome {
    if dungeon.status.is_terminal() {
        return AttackOutcome::Rejected(AttackRejection::Finished);
    }
    if dungeon.player.standing_on != Tile::Sanctuary {
        return AttackOutcome::Rejected(AttackRejection::NotOnSanctuary);
    }
    if dungeon.player.orb_count < ATTACK_ORB_THRESHOLD {
        return AttackOutcome::NoEffect;
    }

    dungeon.status = DungeonStatus::Passed;
    AttackOutcome::Succeeded
}

/// Applies the provided command to the dungeon and reports what happened.
pub fn apply(dungeon: &mut Dungeon, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Reset => {
            reset(dungeon);
            out_events.push(Event::DungeonReset);
        }
        Command::Move { direction } => {
            let from = dungeon.player.position;
            match move_player(dungeon, direction) {
                Ok(()) => {
                    let to = dungeon.player.position;
                    out_events.push(Event::PlayerMoved {
                        from,
                        to,
                        landed_on: dungeon.player.standing_on,
                    });
                    if dungeon.status == DungeonStatus::Dead {
                        out_events.push(Event::PlayerDied {
                            health: dungeon.player.health,
                        });
                    }
                }
                Err(reason) => out_events.push(Event::MoveRejected { reason }),
            }
        }
        Command::Attack => {
            let outcome = attack(dungeon);
            out_events.push(Event::AttackResolved { outcome });
            if outcome == AttackOutcome::Succeeded {
                out_events.push(Event::DungeonPassed {
                    moves: dungeon.history.len(),
                });
            }
        }
    }
}

/// Query functions that provide read-only access to the dungeon state.
pub mod query {
    use super::{Dungeon, DungeonConfig, Grid};
    use orb_dungeon_core::{Direction, DungeonStatus, GridCoord, PlayerSnapshot, Tile};

    /// Reports whether the current attempt is running, dead or passed.
    #[must_use]
    pub fn status(dungeon: &Dungeon) -> DungeonStatus {
        dungeon.status
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn size(dungeon: &Dungeon) -> u32 {
        dungeon.config.size
    }

    /// Orb target the dungeon was configured with.
    #[must_use]
    pub fn desired_orb_count(dungeon: &Dungeon) -> u32 {
        dungeon.config.desired_orb_count
    }

    /// Configuration the dungeon was constructed with.
    #[must_use]
    pub fn config(dungeon: &Dungeon) -> DungeonConfig {
        dungeon.config
    }

    /// Captures the player's position, health and orbs.
    #[must_use]
    pub fn player(dungeon: &Dungeon) -> PlayerSnapshot {
        dungeon.player.snapshot()
    }

    /// Exposes a read-only view of the live grid.
    #[must_use]
    pub fn grid(dungeon: &Dungeon) -> GridView<'_> {
        GridView {
            grid: &dungeon.grid,
        }
    }

    /// Exposes a read-only view of the grid every attempt starts from.
    #[must_use]
    pub fn initial_grid(dungeon: &Dungeon) -> GridView<'_> {
        GridView {
            grid: &dungeon.initial.grid,
        }
    }

    /// Directions taken during the current attempt, oldest first.
    #[must_use]
    pub fn move_history(dungeon: &Dungeon) -> &[Direction] {
        &dungeon.history
    }

    /// Tile the player is standing on.
    #[must_use]
    pub fn tile_under_player(dungeon: &Dungeon) -> Tile {
        dungeon.player.standing_on
    }

    /// Tile a move in `direction` would land on, if the move stays in bounds.
    #[must_use]
    pub fn target_of(dungeon: &Dungeon, direction: Direction) -> Option<GridCoord> {
        dungeon.player.position.step(direction, dungeon.grid.size)
    }

    /// Directions whose target lies within the grid, in [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_directions(dungeon: &Dungeon) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| target_of(dungeon, *direction).is_some())
            .collect()
    }

    /// Read-only view into a dungeon grid.
    #[derive(Clone, Copy, Debug)]
    pub struct GridView<'a> {
        grid: &'a Grid,
    }

    impl<'a> GridView<'a> {
        /// Returns the tile at the provided coordinate, if it lies within the grid.
        #[must_use]
        pub fn tile(&self, coord: GridCoord) -> Option<Tile> {
            self.grid.tile(coord)
        }

        /// Side length of the grid.
        #[must_use]
        pub fn size(&self) -> u32 {
            self.grid.size
        }

        /// Iterates over the grid rows from top to bottom.
        pub fn rows(&self) -> impl Iterator<Item = &'a [Tile]> + 'a {
            let width = usize::try_from(self.grid.size).unwrap_or(0).max(1);
            self.grid.tiles.chunks(width)
        }

        /// Copies the grid into owned rows.
        #[must_use]
        pub fn to_rows(&self) -> Vec<Vec<Tile>> {
            self.rows().map(<[Tile]>::to_vec).collect()
        }
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    grid: Grid,
    player: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Player {
    position: GridCoord,
    health: i32,
    orb_count: u32,
    standing_on: Tile,
}

impl Player {
    fn spawn(health: i32) -> Self {
        Self {
            position: START_COORD,
            health,
            orb_count: 0,
            standing_on: Tile::Sanctuary,
        }
    }

    fn land_on(&mut self, position: GridCoord, tile: Tile) {
        self.position = position;
        self.standing_on = tile;
        self.health = self.health.saturating_sub(MOVE_HEALTH_COST);
        match tile {
            Tile::SmallBoon => {
                self.health = self.health.saturating_add(SMALL_BOON_HEAL);
                self.orb_count = self.orb_count.saturating_sub(SMALL_BOON_ORB_COST);
            }
            Tile::BorderHazard => {
                self.health = self.health.saturating_sub(BORDER_HAZARD_DAMAGE);
            }
            Tile::OrbSource => {
                self.health = self.health.saturating_sub(ORB_SOURCE_DAMAGE);
                self.orb_count = self.orb_count.saturating_add(1);
            }
            Tile::Sanctuary => {}
        }
    }

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position,
            health: self.health,
            orb_count: self.orb_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Grid {
    size: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    fn generate<R>(size: u32, capacity: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tiles = (0..capacity).map(|_| rng.gen::<Tile>()).collect();
        Self { size, tiles }
    }

    fn from_rows(size: u32, capacity: usize, rows: &[Vec<Tile>]) -> Result<Self, DungeonError> {
        let width = usize::try_from(size).unwrap_or(usize::MAX);
        if rows.len() != width {
            return Err(DungeonError::RowCountMismatch {
                size,
                rows: rows.len(),
            });
        }

        let mut tiles = Vec::with_capacity(capacity);
        for (row, tiles_in_row) in rows.iter().enumerate() {
            if tiles_in_row.len() != width {
                return Err(DungeonError::RowLengthMismatch {
                    row,
                    length: tiles_in_row.len(),
                    size,
                });
            }
            tiles.extend_from_slice(tiles_in_row);
        }
        Ok(Self { size, tiles })
    }

    fn capacity(size: u32) -> Option<usize> {
        usize::try_from(u64::from(size) * u64::from(size)).ok()
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.row() < self.size && coord.column() < self.size {
            let row = usize::try_from(coord.row()).ok()?;
            let column = usize::try_from(coord.column()).ok()?;
            let width = usize::try_from(self.size).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    fn tile(&self, coord: GridCoord) -> Option<Tile> {
        self.index(coord).and_then(|index| self.tiles.get(index).copied())
    }

    fn set(&mut self, coord: GridCoord, tile: Tile) {
        if let Some(slot) = self.index(coord).and_then(|index| self.tiles.get_mut(index)) {
            *slot = tile;
        }
    }

    fn advance_all_except(&mut self, exempt: usize) {
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            if index != exempt {
                *tile = tile.advanced();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_dungeon_core::Tile::{
        BorderHazard as H, OrbSource as O, Sanctuary as S, SmallBoon as B,
    };

    fn layout() -> Vec<Vec<Tile>> {
        vec![vec![O, H, B], vec![O, S, O], vec![S, B, H]]
    }

    fn dungeon_with_health(initial_health: i32) -> Dungeon {
        Dungeon::with_layout(DungeonConfig::with_initial_health(initial_health), &layout())
            .expect("valid layout")
    }

    #[test]
    fn player_starts_on_sanctuary_with_no_orbs() {
        let dungeon = dungeon_with_health(100);
        let player = query::player(&dungeon);

        assert_eq!(player.position, START_COORD);
        assert_eq!(player.health, 100);
        assert_eq!(player.orb_count, 0);
        assert_eq!(query::tile_under_player(&dungeon), Tile::Sanctuary);
        assert_eq!(query::status(&dungeon), DungeonStatus::Running);
    }

    #[test]
    fn landing_on_orb_source_costs_fifty_five_health() {
        let mut dungeon = dungeon_with_health(100);

        move_player(&mut dungeon, Direction::Right).expect("move stays in bounds");

        let player = query::player(&dungeon);
        assert_eq!(player.position, GridCoord::new(1, 2));
        assert_eq!(player.health, 45);
        assert_eq!(player.orb_count, 1);
        assert_eq!(query::move_history(&dungeon), &[Direction::Right]);
    }

    #[test]
    fn occupied_tile_is_exempt_from_cycling() {
        let mut dungeon = dungeon_with_health(100);

        move_player(&mut dungeon, Direction::Right).expect("move stays in bounds");

        let grid = query::grid(&dungeon);
        assert_eq!(grid.tile(GridCoord::new(1, 2)), Some(O));
        assert_eq!(
            grid.to_rows(),
            vec![vec![S, O, H], vec![S, B, O], vec![B, H, O]]
        );
    }

    #[test]
    fn small_boon_heals_and_saturates_orbs() {
        let mut dungeon = dungeon_with_health(100);
        dungeon.player.orb_count = 3;

        move_player(&mut dungeon, Direction::Down).expect("move stays in bounds");

        let player = query::player(&dungeon);
        assert_eq!(player.health, 75);
        assert_eq!(player.orb_count, 0);
    }

    #[test]
    fn small_boon_removes_exactly_five_orbs() {
        let mut dungeon = dungeon_with_health(100);
        dungeon.player.orb_count = 12;

        move_player(&mut dungeon, Direction::Down).expect("move stays in bounds");

        assert_eq!(query::player(&dungeon).orb_count, 7);
    }

    #[test]
    fn border_hazard_is_fatal_for_ordinary_health() {
        let mut dungeon = dungeon_with_health(100);

        move_player(&mut dungeon, Direction::Up).expect("move stays in bounds");

        assert_eq!(query::player(&dungeon).health, 100 - 30 - 500);
        assert_eq!(query::status(&dungeon), DungeonStatus::Dead);
    }

    #[test]
    fn health_of_zero_keeps_running_and_minus_one_dies() {
        let rows = vec![vec![O, S, B], vec![O, S, O], vec![S, B, H]];
        let config = DungeonConfig::with_initial_health(30);
        let mut surviving = Dungeon::with_layout(config, &rows).expect("valid layout");
        move_player(&mut surviving, Direction::Up).expect("move stays in bounds");
        assert_eq!(query::player(&surviving).health, 0);
        assert_eq!(query::status(&surviving), DungeonStatus::Running);

        let config = DungeonConfig::with_initial_health(29);
        let mut dying = Dungeon::with_layout(config, &rows).expect("valid layout");
        move_player(&mut dying, Direction::Up).expect("move stays in bounds");
        assert_eq!(query::player(&dying).health, -1);
        assert_eq!(query::status(&dying), DungeonStatus::Dead);
    }

    #[test]
    fn attack_with_nine_orbs_has_no_effect() {
        let mut dungeon = dungeon_with_health(100);
        dungeon.player.orb_count = ATTACK_ORB_THRESHOLD - 1;

        assert_eq!(attack(&mut dungeon), AttackOutcome::NoEffect);
        assert_eq!(query::status(&dungeon), DungeonStatus::Running);
        assert_eq!(query::player(&dungeon).orb_count, ATTACK_ORB_THRESHOLD - 1);
    }

    #[test]
    fn attack_with_ten_orbs_passes() {
        let mut dungeon = dungeon_with_health(100);
        dungeon.player.orb_count = ATTACK_ORB_THRESHOLD;

        assert_eq!(attack(&mut dungeon), AttackOutcome::Succeeded);
        assert_eq!(query::status(&dungeon), DungeonStatus::Passed);
    }

    #[test]
    fn attack_off_sanctuary_is_rejected() {
        let mut dungeon = dungeon_with_health(100);
        move_player(&mut dungeon, Direction::Right).expect("move stays in bounds");
        dungeon.player.orb_count = ATTACK_ORB_THRESHOLD;

        assert_eq!(
            attack(&mut dungeon),
            AttackOutcome::Rejected(AttackRejection::NotOnSanctuary)
        );
        assert_eq!(query::status(&dungeon), DungeonStatus::Running);
    }

    #[test]
    fn terminal_status_blocks_moves_and_attacks() {
        let mut dungeon = dungeon_with_health(100);
        dungeon.player.orb_count = ATTACK_ORB_THRESHOLD;
        assert_eq!(attack(&mut dungeon), AttackOutcome::Succeeded);

        let before = query::player(&dungeon);
        let grid_before = query::grid(&dungeon).to_rows();

        assert_eq!(
            move_player(&mut dungeon, Direction::Right),
            Err(MoveError::Finished {
                status: DungeonStatus::Passed
            })
        );
        assert_eq!(
            attack(&mut dungeon),
            AttackOutcome::Rejected(AttackRejection::Finished)
        );
        assert_eq!(query::player(&dungeon), before);
        assert_eq!(query::grid(&dungeon).to_rows(), grid_before);
        assert_eq!(query::status(&dungeon), DungeonStatus::Passed);
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let mut dungeon = dungeon_with_health(100);
        move_player(&mut dungeon, Direction::Right).expect("move stays in bounds");
        move_player(&mut dungeon, Direction::Up).expect("move stays in bounds");

        reset(&mut dungeon);

        assert_eq!(query::grid(&dungeon).to_rows(), layout());
        assert_eq!(query::player(&dungeon).position, START_COORD);
        assert_eq!(query::player(&dungeon).health, 100);
        assert!(query::move_history(&dungeon).is_empty());
        assert_eq!(query::status(&dungeon), DungeonStatus::Running);
    }

    #[test]
    fn apply_reports_moves_rejections_and_victory() {
        let mut dungeon = dungeon_with_health(100);
        let mut events = Vec::new();

        apply(
            &mut dungeon,
            Command::Move {
                direction: Direction::Right,
            },
            &mut events,
        );
        apply(
            &mut dungeon,
            Command::Move {
                direction: Direction::Right,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::PlayerMoved {
                    from: GridCoord::new(1, 1),
                    to: GridCoord::new(1, 2),
                    landed_on: Tile::OrbSource,
                },
                Event::MoveRejected {
                    reason: MoveError::OutOfBounds {
                        from: GridCoord::new(1, 2),
                        direction: Direction::Right,
                    },
                },
            ]
        );

        events.clear();
        apply(&mut dungeon, Command::Reset, &mut events);
        dungeon.player.orb_count = ATTACK_ORB_THRESHOLD;
        apply(&mut dungeon, Command::Attack, &mut events);

        assert_eq!(
            events,
            vec![
                Event::DungeonReset,
                Event::AttackResolved {
                    outcome: AttackOutcome::Succeeded,
                },
                Event::DungeonPassed { moves: 0 },
            ]
        );
    }

    #[test]
    fn apply_reports_death() {
        let mut dungeon = dungeon_with_health(100);
        let mut events = Vec::new();

        apply(
            &mut dungeon,
            Command::Move {
                direction: Direction::Up,
            },
            &mut events,
        );

        assert_eq!(
            events.last(),
            Some(&Event::PlayerDied {
                health: 100 - 30 - 500
            })
        );
    }

    #[test]
    fn validation_reports_tile_capacity() {
        assert_eq!(Grid::capacity(3), Some(9));
        assert_eq!(DungeonConfig::with_initial_health(1).validate(), Ok(9));
        assert_eq!(
            DungeonConfig {
                size: 1,
                desired_orb_count: 10,
                initial_health: 1,
            }
            .validate(),
            Err(DungeonError::InvalidSize { size: 1 })
        );
    }

    #[test]
    fn tile_lookups_outside_the_grid_are_none() {
        let dungeon = dungeon_with_health(100);

        assert_eq!(dungeon.grid.tile(GridCoord::new(1, 1)), Some(S));
        assert_eq!(dungeon.grid.tile(GridCoord::new(3, 0)), None);
        assert_eq!(dungeon.grid.tile(GridCoord::new(0, u32::MAX)), None);
    }
}
