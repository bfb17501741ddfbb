use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BoardError;

/// Player ids as they appear on the wire and in captured tiles.
pub type PlayerId = u32;

/// The decoded meaning of a raw tile.
///
/// Raw tiles are short strings. Captured tiles carry the id of their owner
/// as a `-<id>` suffix, see [`owner_of()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// `" "`
    Empty,
    /// `"W"`
    Asteroids,
    /// `"%"`
    Planet,
    /// `"$"`
    Blitzium,
    /// `"!"`
    BlackHole,
    /// `"C-<id>"`
    Conquered,
    /// `"%-<id>"`
    ConqueredPlanet,
}

const CONQUERED_PREFIX: &str = "C-";
const CONQUERED_PLANET_PREFIX: &str = "%-";

impl TileType {
    /// Decodes a raw tile.
    ///
    /// The captured prefixes are checked before the literal tiles, so `"%-2"`
    /// is a conquered planet and not a planet.
    pub fn classify(tile: &str) -> Result<Self, BoardError> {
        if tile.starts_with(CONQUERED_PREFIX) {
            return Ok(TileType::Conquered);
        }
        if tile.starts_with(CONQUERED_PLANET_PREFIX) {
            return Ok(TileType::ConqueredPlanet);
        }
        match tile {
            " " => Ok(TileType::Empty),
            "W" => Ok(TileType::Asteroids),
            "%" => Ok(TileType::Planet),
            "$" => Ok(TileType::Blitzium),
            "!" => Ok(TileType::BlackHole),
            _ => Err(BoardError::InvalidTile {
                tile: String::from(tile),
            }),
        }
    }

    /// Whether tiles of this type belong to a player.
    pub fn is_captured(self) -> bool {
        matches!(self, TileType::Conquered | TileType::ConqueredPlanet)
    }
}

impl FromStr for TileType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s)
    }
}

/// The id of the player owning a raw tile.
///
/// This only looks for the `-` separator and does not classify the tile
/// first: any tile without a separator is not captured. The part after the
/// first `-` must be a non-negative integer.
pub fn owner_of(tile: &str) -> Result<PlayerId, BoardError> {
    let (_, suffix) = tile
        .split_once('-')
        .ok_or_else(|| BoardError::TileNotCaptured {
            tile: String::from(tile),
        })?;
    let invalid = || BoardError::InvalidTile {
        tile: String::from(tile),
    };
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    suffix.parse().map_err(|_| invalid())
}
