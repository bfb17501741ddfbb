use blitz::{BotMessage, GameTick, Move};
use blitz_bot_utils::Bot;
use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Name to register with, if no token is given
    #[arg(long, default_value = "MyBot")]
    name: String,

    /// Registration token, takes precedence over the name
    #[arg(long, env = "TOKEN")]
    token: Option<String>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    let registration = BotMessage::register(&args.name, args.token.as_deref());
    RandomBot { rng }.run(&registration)
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is reserved for messages to the server
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn next_move(&mut self, tick: &GameTick) -> Move {
        if let Some(me) = tick.own_player() {
            debug!(
                tick = tick.tick(),
                position = %me.position,
                direction = ?me.direction,
                tail_len = me.tail.len()
            );
        }
        *Move::ALL.choose(&mut self.rng).unwrap_or(&Move::Forward)
    }
}
