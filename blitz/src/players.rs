use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Direction, PlayerId, Position};

/// A player as seen in one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: f64,
    /// False once the player has left the game.
    pub active: bool,
    /// True while the player waits to respawn.
    pub killed: bool,
    pub direction: Direction,
    pub position: Position,
    pub spawn_position: Position,
    #[serde(default)]
    pub spawn_direction: Option<Direction>,
    /// The cells trailed since leaving conquered ground, oldest first.
    ///
    /// The last entry is the most recently occupied cell.
    #[serde(default)]
    pub tail: Vec<Position>,
    /// Counters kept by the server, e.g. `"number_of_kills"`.
    ///
    /// The server may add keys at any time, so they are kept as raw JSON.
    #[serde(default)]
    pub stats: serde_json::Map<String, serde_json::Value>,
    /// Recent events for this player, newest first.
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

/// One event in a [`Player`]'s history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub tick: u32,
    pub message: String,
    /// ISO 8601, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Player {
    /// The most recent cell of the tail.
    pub fn head(&self) -> Option<Position> {
        self.tail.last().copied()
    }

    /// Looks up a counter in [`Self::stats`], treating missing counters as zero.
    pub fn stat(&self, name: &str) -> u64 {
        self.stats
            .get(name)
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }
}

/// The players of one tick, indexed by id.
///
/// If an id appears more than once, lookups return the last player with
/// that id. Iteration still yields every player in the original order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    /// Maps ids to indices into `players`.
    by_id: BTreeMap<PlayerId, usize>,
}

impl PlayerRegistry {
    pub fn new(players: Vec<Player>) -> Self {
        let mut by_id = BTreeMap::new();
        for (idx, player) in players.iter().enumerate() {
            by_id.insert(player.id, idx);
        }
        Self { players, by_id }
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.by_id.get(&id).map(|&idx| &self.players[idx])
    }

    /// All players, in the order they were received.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// The number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<Player> for PlayerRegistry {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
