use serde::{Deserialize, Serialize};

use crate::{Move, Player, PlayerId};

/// A tick as sent by the server.
///
/// Decode this with `serde_json`, or use
/// [`GameTick::from_json()`](crate::GameTick::from_json) to get the
/// indexed snapshot directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMessage {
    /// Always `"tick"` for the messages a bot receives.
    #[serde(rename = "type")]
    pub message_type: String,
    pub game: Game,
    pub players: Vec<Player>,
}

/// The game part of a [`GameMessage`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The raw tiles, row by row.
    pub map: Vec<Vec<String>>,
    /// The id of the player receiving this message.
    pub player_id: PlayerId,
    pub tick: u32,
    pub ticks_left: u32,
    /// A human-readable rendering of the map. Only useful for debugging,
    /// and expensive to print.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty_map: Option<String>,
}

/// A message from a bot to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BotMessage {
    /// Sent once, when connecting.
    ///
    /// Exactly one of the two fields should be set; use
    /// [`BotMessage::register()`] to construct it.
    Register {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },
    /// The answer to the tick with the same number.
    Move { action: Move, tick: u32 },
}

impl BotMessage {
    /// Registers with the token if there is one, otherwise with the name.
    pub fn register(name: &str, token: Option<&str>) -> Self {
        match token {
            Some(token) => BotMessage::Register {
                name: None,
                token: Some(String::from(token)),
            },
            None => BotMessage::Register {
                name: Some(String::from(name)),
                token: None,
            },
        }
    }
}
