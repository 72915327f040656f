#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use orb_dungeon_core::{InvalidTileValue, Tile};
use orb_dungeon_world::{query, Dungeon, DungeonConfig};
use serde::{Deserialize, Serialize};

const LAYOUT_DOMAIN: &str = "dungeon";
const LAYOUT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded layout payload.
pub(crate) const LAYOUT_HEADER: &str = "dungeon:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Starting conditions of a dungeon captured for transfer between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DungeonLayout {
    /// Side length of the square grid.
    pub size: u32,
    /// Orb goal recorded alongside the layout.
    pub desired_orb_count: u32,
    /// Health the player starts every attempt with.
    pub initial_health: i32,
    /// Tiles of the initial grid in row-major order.
    pub tiles: Vec<Tile>,
}

impl DungeonLayout {
    /// Captures the initial snapshot of the provided dungeon.
    #[must_use]
    pub(crate) fn capture(dungeon: &Dungeon) -> Self {
        let config = query::config(dungeon);
        Self {
            size: config.size,
            desired_orb_count: config.desired_orb_count,
            initial_health: config.initial_health,
            tiles: query::initial_grid(dungeon)
                .rows()
                .flatten()
                .copied()
                .collect(),
        }
    }

    /// Configuration the layout was captured with.
    #[must_use]
    pub(crate) fn config(&self) -> DungeonConfig {
        DungeonConfig {
            size: self.size,
            desired_orb_count: self.desired_orb_count,
            initial_health: self.initial_health,
        }
    }

    /// Splits the captured tiles into grid rows.
    #[must_use]
    pub(crate) fn rows(&self) -> Vec<Vec<Tile>> {
        let width = usize::try_from(self.size).unwrap_or(usize::MAX).max(1);
        self.tiles.chunks(width).map(<[Tile]>::to_vec).collect()
    }

    /// Encodes the layout into a single-line string suitable for copying.
    pub(crate) fn encode(&self) -> Result<String, LayoutTransferError> {
        let payload = SerializableLayout {
            desired_orb_count: self.desired_orb_count,
            initial_health: self.initial_health,
            tiles: self.tiles.iter().map(|tile| tile.value()).collect(),
        };
        let json = serde_json::to_vec(&payload).map_err(LayoutTransferError::InvalidPayload)?;
        let encoded = STANDARD_NO_PAD.encode(json);
        Ok(format!(
            "{LAYOUT_HEADER}:{size}x{size}:{encoded}",
            size = self.size
        ))
    }

    /// Decodes a layout from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, LayoutTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LayoutTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(LayoutTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(LayoutTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(LayoutTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(LayoutTransferError::MissingPayload)?;

        if domain != LAYOUT_DOMAIN {
            return Err(LayoutTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != LAYOUT_VERSION {
            return Err(LayoutTransferError::UnsupportedVersion(version.to_owned()));
        }

        let size = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(LayoutTransferError::InvalidEncoding)?;
        let decoded: SerializableLayout =
            serde_json::from_slice(&bytes).map_err(LayoutTransferError::InvalidPayload)?;

        let expected = u64::from(size) * u64::from(size);
        if decoded.tiles.len() as u64 != expected {
            return Err(LayoutTransferError::TileCountMismatch {
                expected,
                found: decoded.tiles.len(),
            });
        }
        let tiles = decoded
            .tiles
            .into_iter()
            .map(Tile::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(LayoutTransferError::InvalidTile)?;

        Ok(Self {
            size,
            desired_orb_count: decoded.desired_orb_count,
            initial_health: decoded.initial_health,
            tiles,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializableLayout {
    desired_orb_count: u32,
    initial_health: i32,
    tiles: Vec<u8>,
}

/// Errors that can occur while encoding or decoding layout transfer strings.
#[derive(Debug)]
pub(crate) enum LayoutTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded layout.
    MissingPrefix,
    /// The encoded layout did not contain a version segment.
    MissingVersion,
    /// The encoded layout did not include grid dimensions.
    MissingDimensions,
    /// The encoded layout did not include the payload segment.
    MissingPayload,
    /// The encoded layout used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded layout used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions were malformed or not square.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The payload could not be serialised or deserialised.
    InvalidPayload(serde_json::Error),
    /// The payload held a different number of tiles than the dimensions imply.
    TileCountMismatch {
        /// Number of tiles implied by the dimensions.
        expected: u64,
        /// Number of tiles present in the payload.
        found: usize,
    },
    /// The payload held a number outside the tile cycle.
    InvalidTile(InvalidTileValue),
}

impl fmt::Display for LayoutTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "layout code was empty"),
            Self::MissingPrefix => write!(f, "layout string is missing the prefix"),
            Self::MissingVersion => write!(f, "layout string is missing the version"),
            Self::MissingDimensions => write!(f, "layout string is missing the grid dimensions"),
            Self::MissingPayload => write!(f, "layout string is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "layout prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "layout version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse square grid dimensions '{dimensions}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode layout payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not process layout payload: {error}")
            }
            Self::TileCountMismatch { expected, found } => {
                write!(f, "layout payload holds {found} tiles but {expected} were expected")
            }
            Self::InvalidTile(error) => write!(f, "layout payload is invalid: {error}"),
        }
    }
}

impl Error for LayoutTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            Self::InvalidTile(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(dimensions: &str) -> Result<u32, LayoutTransferError> {
    let invalid = || LayoutTransferError::InvalidDimensions(dimensions.to_owned());
    let (columns, rows) = dimensions.split_once(['x', 'X']).ok_or_else(invalid)?;

    let columns = columns.trim().parse::<u32>().map_err(|_| invalid())?;
    let rows = rows.trim().parse::<u32>().map_err(|_| invalid())?;

    if columns == 0 || columns != rows {
        return Err(invalid());
    }

    Ok(columns)
}
