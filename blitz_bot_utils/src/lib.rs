use std::io::{BufRead, Write};

use anyhow::Context;
use blitz::{BotMessage, GameTick, Move};
use tracing::{debug, trace};

/// A trait to simplify writing bots.
pub trait Bot {
    /// Picks the move for this tick.
    ///
    /// The answer must reach the server before the next tick, otherwise
    /// the move is lost.
    fn next_move(&mut self, tick: &GameTick) -> Move;

    /// Registers, then answers every tick until the server goes away.
    ///
    /// Communication happens through stdin/stdout, one JSON message per
    /// line. The process connecting to the game server forwards messages
    /// between the socket and these pipes. Stderr can be used for logging.
    fn run(&mut self, registration: &BotMessage) -> anyhow::Result<()> {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        play(self, registration, stdin, stdout)
    }
}

/// The message loop behind [`Bot::run()`], for arbitrary readers and writers.
///
/// Returns when `reader` reaches EOF, or on the first message that cannot be
/// decoded.
pub fn play<B, R, W>(
    bot: &mut B,
    registration: &BotMessage,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    B: Bot + ?Sized,
    R: BufRead,
    W: Write,
{
    send(&mut writer, registration)?;

    let mut buf = String::new();
    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = reader.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the game is over.
            break Ok(());
        }
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        trace!(name: "Received tick", payload = %line);

        let tick = GameTick::from_json(line).context("Could not decode tick message")?;
        debug!(
            tick = tick.tick(),
            ticks_left = tick.ticks_left(),
            alive = tick.own_player().map_or(false, |p| !p.killed),
            "Decoded tick"
        );

        let action = bot.next_move(&tick);
        send(&mut writer, &tick.move_message(action))?;
    }
}

fn send<W: Write>(writer: &mut W, msg: &BotMessage) -> anyhow::Result<()> {
    let json = serde_json::to_string(msg)?;
    trace!(name: "Sending message", payload = %json);
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
