use crate::Position;

/// The error type for tile decoding and board queries.
///
/// None of these are fatal: a bot probing many cells is expected to handle
/// them one cell at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The raw tile matches no rule of the tile grammar.
    InvalidTile { tile: String },
    /// An owner was requested for a tile without a `-` separator.
    TileNotCaptured { tile: String },
    /// The position lies outside of the `size` x `size` board.
    OutOfBounds { position: Position, size: usize },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidTile { tile } => write!(f, "Tile '{}' is not a valid tile", tile),
            BoardError::TileNotCaptured { tile } => {
                write!(f, "Tile '{}' is not captured by any player", tile)
            }
            BoardError::OutOfBounds { position, size } => write!(
                f,
                "Position {} is out of bounds, both coordinates must be in 0..{}",
                position, size
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = BoardError::InvalidTile {
            tile: String::from("?"),
        };
        assert_eq!(err.to_string(), "Tile '?' is not a valid tile");

        let err = BoardError::OutOfBounds {
            position: Position::new(5, 0),
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Position (5, 0) is out of bounds, both coordinates must be in 0..5"
        );
    }
}
