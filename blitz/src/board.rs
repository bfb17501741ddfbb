use crate::{owner_of, BoardError, PlayerId, Position, TileType};

/// The map of one tick, as a grid of raw tiles.
///
/// Tiles are only decoded when queried, so a single malformed tile does not
/// prevent using the rest of the board.
//
// The board is assumed to be square: its size is the number of rows, and
// both coordinates are checked against it. A rectangular map would be
// validated against the wrong bound on the x axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Row-major, `rows[y][x]`.
    rows: Vec<Vec<String>>,
}

impl Board {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// The side length of the board, i.e. the number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The raw tiles, row by row.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Checks that both coordinates are in `0..size()`.
    pub fn validate(&self, position: Position) -> Result<(), BoardError> {
        let size = self.size();
        let in_range = |c: i32| usize::try_from(c).map_or(false, |c| c < size);
        if in_range(position.x) && in_range(position.y) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { position, size })
        }
    }

    /// The undecoded tile at `position`.
    pub fn raw_tile_at(&self, position: Position) -> Result<&str, BoardError> {
        self.validate(position)?;
        // Both coordinates are non-negative after validation. A row that is
        // shorter than the others is reported like any other out of bounds
        // access.
        self.rows[position.y as usize]
            .get(position.x as usize)
            .map(String::as_str)
            .ok_or(BoardError::OutOfBounds {
                position,
                size: self.size(),
            })
    }

    pub fn tile_type_at(&self, position: Position) -> Result<TileType, BoardError> {
        TileType::classify(self.raw_tile_at(position)?)
    }

    /// The owner of the tile at `position`.
    ///
    /// Check that the tile is [captured](TileType::is_captured) before
    /// calling this, otherwise you will get [`BoardError::TileNotCaptured`].
    pub fn owner_at(&self, position: Position) -> Result<PlayerId, BoardError> {
        owner_of(self.raw_tile_at(position)?)
    }

    /// All cells with their raw tile, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), tile.as_str()))
        })
    }

    /// The positions of all tiles of the given type.
    ///
    /// Tiles that cannot be decoded are skipped.
    pub fn positions_of(&self, tile_type: TileType) -> Vec<Position> {
        self.iter()
            .filter(|&(_, tile)| TileType::classify(tile) == Ok(tile_type))
            .map(|(position, _)| position)
            .collect()
    }

    /// How many tiles are owned by `player_id`, including conquered planets.
    pub fn count_owned_by(&self, player_id: PlayerId) -> usize {
        self.iter()
            .filter(|&(_, tile)| owner_of(tile) == Ok(player_id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{board_from, BoundsProbe};

    quickcheck! {
        fn validate_accepts_exactly_the_square(probe: BoundsProbe) -> bool {
            let board = Board::new(vec![vec![String::from(" "); probe.size]; probe.size]);
            let expected = probe.x >= 0
                && probe.y >= 0
                && (probe.x as usize) < probe.size
                && (probe.y as usize) < probe.size;
            board.validate(Position::new(probe.x, probe.y)).is_ok() == expected
        }
    }

    #[test]
    fn validate_edges() {
        let board = Board::new(vec![vec![String::from(" "); 5]; 5]);
        assert_eq!(board.size(), 5);
        for (x, y) in [(5, 0), (-1, 2), (0, 5)] {
            let position = Position::new(x, y);
            assert_eq!(
                board.validate(position),
                Err(BoardError::OutOfBounds { position, size: 5 })
            );
        }
        assert_eq!(board.validate(Position::new(4, 4)), Ok(()));
        assert_eq!(board.validate(Position::new(0, 0)), Ok(()));
    }

    #[test]
    fn x_is_the_column_and_y_is_the_row() {
        let board = board_from(&[&["W", " "], &[" ", "%"]]);
        assert_eq!(board.tile_type_at(Position::new(0, 0)), Ok(TileType::Asteroids));
        assert_eq!(board.tile_type_at(Position::new(1, 0)), Ok(TileType::Empty));
        assert_eq!(board.tile_type_at(Position::new(0, 1)), Ok(TileType::Empty));
        assert_eq!(board.tile_type_at(Position::new(1, 1)), Ok(TileType::Planet));
    }

    #[test]
    fn bounds_are_checked_before_decoding() {
        let board = board_from(&[&["?", "C-1"], &["W", "W"]]);
        let outside = Position::new(2, 0);
        assert!(matches!(
            board.tile_type_at(outside),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.owner_at(outside),
            Err(BoardError::OutOfBounds { .. })
        ));
        // A bad tile does not affect its neighbours
        assert!(matches!(
            board.tile_type_at(Position::new(0, 0)),
            Err(BoardError::InvalidTile { .. })
        ));
        assert_eq!(board.owner_at(Position::new(1, 0)), Ok(1));
        assert!(matches!(
            board.owner_at(Position::new(0, 1)),
            Err(BoardError::TileNotCaptured { .. })
        ));
    }

    #[test]
    fn short_rows_are_out_of_bounds() {
        let board = board_from(&[&["W", "W"], &["W"]]);
        assert_eq!(board.raw_tile_at(Position::new(1, 0)), Ok("W"));
        assert_eq!(
            board.raw_tile_at(Position::new(1, 1)),
            Err(BoardError::OutOfBounds {
                position: Position::new(1, 1),
                size: 2
            })
        );
    }

    #[test]
    fn non_square_boards_use_the_row_count_for_both_axes() {
        // Two rows of three tiles: the third column is unreachable.
        let board = board_from(&[&["W", "W", "$"], &["W", "W", "$"]]);
        assert!(board.raw_tile_at(Position::new(2, 0)).is_err());
    }

    #[test]
    fn ownership_summaries() {
        let board = board_from(&[&["C-0", "%-0", "C-1"], &["%", " ", "!"], &["$", "C-0", "?"]]);
        assert_eq!(board.count_owned_by(0), 3);
        assert_eq!(board.count_owned_by(1), 1);
        assert_eq!(board.count_owned_by(2), 0);
        assert_eq!(
            board.positions_of(TileType::Conquered),
            vec![Position::new(0, 0), Position::new(2, 0), Position::new(1, 2)]
        );
        assert_eq!(board.positions_of(TileType::Blitzium), vec![Position::new(0, 2)]);
        assert_eq!(board.iter().count(), 9);
    }
}
