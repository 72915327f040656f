#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Orb Dungeon engine.
//!
//! This crate defines the vocabulary that connects drivers, the authoritative
//! dungeon, and the solver. Drivers submit [`Command`] values describing the
//! desired mutation, the world executes those commands via its `apply` entry
//! point, and then broadcasts [`Event`] values describing what happened. The
//! rule constants that govern health and orb accounting live here so every
//! crate agrees on them.

use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};

/// Health deducted by every accepted move before the landing tile applies.
pub const MOVE_HEALTH_COST: i32 = 30;

/// Health restored when landing on [`Tile::SmallBoon`].
pub const SMALL_BOON_HEAL: i32 = 5;

/// Orbs removed when landing on [`Tile::SmallBoon`], saturating at zero.
pub const SMALL_BOON_ORB_COST: u32 = 5;

/// Health removed when landing on [`Tile::BorderHazard`].
pub const BORDER_HAZARD_DAMAGE: i32 = 500;

/// Health removed when landing on [`Tile::OrbSource`].
pub const ORB_SOURCE_DAMAGE: i32 = 25;

/// Orbs required for an attack from a sanctuary to pass the dungeon.
pub const ATTACK_ORB_THRESHOLD: u32 = 10;

/// Number of distinct tiles in the cycle.
pub const TILE_CYCLE_LENGTH: u8 = 4;

/// Tile the player starts on. It is always a sanctuary after construction and reset.
pub const START_COORD: GridCoord = GridCoord::new(1, 1);

/// Kinds of tiles that make up the dungeon grid, listed in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tile {
    /// Heals a little but costs orbs.
    SmallBoon,
    /// Large health penalty that is fatal for ordinary health pools.
    BorderHazard,
    /// Grants an orb at the cost of health.
    OrbSource,
    /// Neutral tile and the only place an attack can be attempted.
    Sanctuary,
}

impl Tile {
    /// Every tile in cycle order.
    pub const ALL: [Tile; 4] = [
        Tile::SmallBoon,
        Tile::BorderHazard,
        Tile::OrbSource,
        Tile::Sanctuary,
    ];

    /// Numeric value of the tile within the cycle.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::SmallBoon => 0,
            Self::BorderHazard => 1,
            Self::OrbSource => 2,
            Self::Sanctuary => 3,
        }
    }

    /// Converts a numeric cycle value back into a tile.
    pub const fn from_value(value: u8) -> Result<Self, InvalidTileValue> {
        match value {
            0 => Ok(Self::SmallBoon),
            1 => Ok(Self::BorderHazard),
            2 => Ok(Self::OrbSource),
            3 => Ok(Self::Sanctuary),
            _ => Err(InvalidTileValue { value }),
        }
    }

    /// Returns the tile that follows this one in the cycle.
    #[must_use]
    pub const fn advanced(self) -> Self {
        match self {
            Self::SmallBoon => Self::BorderHazard,
            Self::BorderHazard => Self::OrbSource,
            Self::OrbSource => Self::Sanctuary,
            Self::Sanctuary => Self::SmallBoon,
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = InvalidTileValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.value()
    }
}

impl Distribution<Tile> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::ALL[rng.gen_range(0..Tile::ALL.len())]
    }
}

/// Reports a numeric tile value outside the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tile value {value} is outside the tile cycle 0..=3")]
pub struct InvalidTileValue {
    /// Value that failed conversion.
    pub value: u8,
}

/// Cardinal directions the player can move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in the order the solver enumerates them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-character token used by drivers and move histories.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Human-readable name of the direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'u' => Ok(Self::Up),
            'd' => Ok(Self::Down),
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            _ => Err(ParseDirectionError {
                token: symbol.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(ParseDirectionError {
                token: token.to_owned(),
            }),
        }
    }
}

/// Reports a driver token that does not name a direction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction token '{token}'")]
pub struct ParseDirectionError {
    /// Token that failed to parse.
    pub token: String,
}

/// Location of a single grid tile expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    row: u32,
    column: u32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the tile.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the tile.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the neighbouring coordinate in `direction` when it lies within a
    /// square grid of side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, size: u32) -> Option<Self> {
        let (row, column) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.column),
            Direction::Down => (self.row.checked_add(1)?, self.column),
            Direction::Left => (self.row, self.column.checked_sub(1)?),
            Direction::Right => (self.row, self.column.checked_add(1)?),
        };
        (row < size && column < size).then_some(Self::new(row, column))
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Lifecycle state of a dungeon attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonStatus {
    /// The attempt is still in progress.
    #[default]
    Running,
    /// Health dropped below zero. Absorbing until reset.
    Dead,
    /// An attack succeeded. Absorbing until reset.
    Passed,
}

impl DungeonStatus {
    /// Reports whether the status only changes through a reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead | Self::Passed)
    }
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Tile currently occupied by the player.
    pub position: GridCoord,
    /// Remaining health. Negative only once the dungeon reports [`DungeonStatus::Dead`].
    pub health: i32,
    /// Orbs collected during the current attempt.
    pub orb_count: u32,
}

/// Reasons a move request may be rejected by the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    /// The target tile lies outside the grid.
    #[error("ERROR - Move out of bound!! ({direction} from {from})")]
    OutOfBounds {
        /// Tile the player occupied when the move was requested.
        from: GridCoord,
        /// Direction of the rejected move.
        direction: Direction,
    },
    /// The attempt already reached a terminal status.
    #[error("ERROR - The dungeon is already {status:?}")]
    Finished {
        /// Terminal status that blocked the move.
        status: DungeonStatus,
    },
}

/// Reasons an attack request may be rejected by the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackRejection {
    /// The player is not standing on a [`Tile::Sanctuary`].
    NotOnSanctuary,
    /// The attempt already reached a terminal status.
    Finished,
}

/// Result of an attack request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The attack was not allowed and nothing changed.
    Rejected(AttackRejection),
    /// The attack was allowed but the player lacked orbs, so nothing changed.
    NoEffect,
    /// The attack passed the dungeon.
    Succeeded,
}

/// Commands that express all permissible dungeon mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Restores the dungeon to its initial snapshot.
    Reset,
    /// Requests that the player move one tile.
    Move {
        /// Direction of travel.
        direction: Direction,
    },
    /// Requests an attack from the player's current tile.
    Attack,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the dungeon returned to its initial snapshot.
    DungeonReset,
    /// Confirms that the player moved between two tiles.
    PlayerMoved {
        /// Tile the player occupied before moving.
        from: GridCoord,
        /// Tile the player occupies after moving.
        to: GridCoord,
        /// Kind of tile the player landed on.
        landed_on: Tile,
    },
    /// Reports that a move request was rejected.
    MoveRejected {
        /// Specific reason the move failed.
        reason: MoveError,
    },
    /// Announces that the player's health dropped below zero.
    PlayerDied {
        /// Health after the fatal move.
        health: i32,
    },
    /// Reports how an attack request resolved.
    AttackResolved {
        /// Outcome of the attack.
        outcome: AttackOutcome,
    },
    /// Announces that the dungeon was passed.
    DungeonPassed {
        /// Number of moves taken during the winning attempt.
        moves: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn tile_values_follow_cycle_order() {
        for (index, tile) in Tile::ALL.iter().enumerate() {
            assert_eq!(usize::from(tile.value()), index);
            assert_eq!(Tile::from_value(tile.value()), Ok(*tile));
        }
    }

    #[test]
    fn tile_from_value_rejects_out_of_range() {
        assert_eq!(Tile::try_from(4), Err(InvalidTileValue { value: 4 }));
    }

    #[test]
    fn sanctuary_wraps_to_small_boon() {
        assert_eq!(Tile::Sanctuary.advanced(), Tile::SmallBoon);
    }

    #[test]
    fn direction_symbols_parse_back() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.symbol()), Ok(direction));
            assert_eq!(direction.symbol().to_string().parse(), Ok(direction));
        }
    }

    #[test]
    fn direction_parsing_rejects_unknown_tokens() {
        assert!("a".parse::<Direction>().is_err());
        assert!("up".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert_eq!(
            Direction::try_from('x'),
            Err(ParseDirectionError {
                token: "x".to_owned()
            })
        );
    }

    #[test]
    fn step_rejects_underflow_and_overflow() {
        let corner = GridCoord::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Down, 3), Some(GridCoord::new(1, 0)));

        let far = GridCoord::new(2, 2);
        assert_eq!(far.step(Direction::Down, 3), None);
        assert_eq!(far.step(Direction::Right, 3), None);
        assert_eq!(far.step(Direction::Left, 3), Some(GridCoord::new(2, 1)));
    }

    #[test]
    fn only_dead_and_passed_are_terminal() {
        assert!(!DungeonStatus::Running.is_terminal());
        assert!(DungeonStatus::Dead.is_terminal());
        assert!(DungeonStatus::Passed.is_terminal());
    }

    #[test]
    fn move_error_round_trips_through_bincode() {
        assert_round_trip(&MoveError::OutOfBounds {
            from: GridCoord::new(0, 2),
            direction: Direction::Up,
        });
    }

    #[test]
    fn attack_outcome_round_trips_through_bincode() {
        assert_round_trip(&AttackOutcome::Rejected(AttackRejection::NotOnSanctuary));
    }

    proptest! {
        #[test]
        fn advancing_four_times_returns_to_start(value in 0u8..TILE_CYCLE_LENGTH) {
            let tile = Tile::from_value(value).expect("in range");
            let cycled = tile.advanced().advanced().advanced().advanced();
            prop_assert_eq!(cycled, tile);
        }

        #[test]
        fn advancing_adds_one_modulo_cycle(value in 0u8..TILE_CYCLE_LENGTH) {
            let tile = Tile::from_value(value).expect("in range");
            prop_assert_eq!(tile.advanced().value(), (value + 1) % TILE_CYCLE_LENGTH);
        }
    }
}
