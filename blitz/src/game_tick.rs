use crate::{
    Board, BoardError, BotMessage, GameMessage, Move, Player, PlayerId, PlayerRegistry, Position,
    TileType,
};

/// An immutable snapshot of the game for a single tick.
///
/// A new one is built for every message from the server. Nothing is carried
/// over from earlier ticks; compare two snapshots to find out what changed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameTick {
    message_type: String,
    tick: u32,
    ticks_left: u32,
    own_player_id: PlayerId,
    board: Board,
    registry: PlayerRegistry,
    pretty_map: Option<String>,
}

impl GameTick {
    pub fn new(message: GameMessage) -> Self {
        let GameMessage {
            message_type,
            game,
            players,
        } = message;
        Self {
            message_type,
            tick: game.tick,
            ticks_left: game.ticks_left,
            own_player_id: game.player_id,
            board: Board::new(game.map),
            registry: PlayerRegistry::new(players),
            pretty_map: game.pretty_map,
        }
    }

    /// Decodes a tick message as sent by the server.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<GameMessage>(json).map(Self::new)
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    pub fn own_player_id(&self) -> PlayerId {
        self.own_player_id
    }

    /// The player this tick was sent to.
    ///
    /// `None` if that player is not in this tick's player list.
    pub fn own_player(&self) -> Option<&Player> {
        self.registry.get(self.own_player_id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.registry.get(id)
    }

    /// All players, in the order the server sent them.
    pub fn players(&self) -> &[Player] {
        self.registry.players()
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pretty_map(&self) -> Option<&str> {
        self.pretty_map.as_deref()
    }

    pub fn raw_tile_at(&self, position: Position) -> Result<&str, BoardError> {
        self.board.raw_tile_at(position)
    }

    pub fn tile_type_at(&self, position: Position) -> Result<TileType, BoardError> {
        self.board.tile_type_at(position)
    }

    pub fn owner_at(&self, position: Position) -> Result<PlayerId, BoardError> {
        self.board.owner_at(position)
    }

    /// The message answering this tick with `action`.
    pub fn move_message(&self, action: Move) -> BotMessage {
        BotMessage::Move {
            action,
            tick: self.tick,
        }
    }
}

impl From<GameMessage> for GameTick {
    fn from(message: GameMessage) -> Self {
        Self::new(message)
    }
}
