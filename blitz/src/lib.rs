pub use board::*;
pub use errors::*;
pub use game_tick::*;
pub use players::*;
pub use position::*;
pub use protocol::*;
pub use tile::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game_tick;
mod players;
mod position;
mod protocol;
mod tile;
mod visualization;
