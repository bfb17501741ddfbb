use quickcheck::Arbitrary;

use crate::{Board, Direction, Player, PlayerId, Position};

/// A board size with a coordinate pair near (or on) the board.
#[derive(Clone, Debug)]
pub struct BoundsProbe {
    pub size: usize,
    pub x: i32,
    pub y: i32,
}

impl Arbitrary for BoundsProbe {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::from(u8::arbitrary(g) % 13);
        // Coordinates up to 3 cells past either edge
        let span = size as i32 + 7;
        let x = i32::from(u8::arbitrary(g)) % span - 3;
        let y = i32::from(u8::arbitrary(g)) % span - 3;
        BoundsProbe { size, x, y }
    }
}

pub fn board_from(rows: &[&[&str]]) -> Board {
    Board::new(
        rows.iter()
            .map(|row| row.iter().map(|&tile| String::from(tile)).collect())
            .collect(),
    )
}

/// A freshly spawned player, with only its head in the tail.
pub fn player_at(id: PlayerId, name: &str, x: i32, y: i32) -> Player {
    let position = Position::new(x, y);
    Player {
        id,
        name: String::from(name),
        score: 0.0,
        active: true,
        killed: false,
        direction: Direction::Up,
        position,
        spawn_position: position,
        spawn_direction: Some(Direction::Up),
        tail: vec![position],
        stats: serde_json::Map::new(),
        history: Vec::new(),
    }
}
