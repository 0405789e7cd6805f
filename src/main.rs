//! Rank-sum draw poker against the dealer, on the terminal.

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};
use rankdraw::{Console, Session, SessionOptions, Style};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Rank-sum draw poker against the dealer")]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Card replacements allowed per session.
    #[arg(long, default_value_t = 3)]
    max_replacements: usize,

    /// Cards dealt to each side.
    #[arg(long, default_value_t = 2)]
    hand_size: usize,

    /// Keep the deck and the replacement count from one round to the next.
    #[arg(long)]
    carry_over: bool,

    /// Print without colors.
    #[arg(long)]
    plain: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn options(&self) -> SessionOptions {
        SessionOptions::default()
            .with_max_replacements(self.max_replacements)
            .with_hand_size(self.hand_size)
            .with_carry_over(self.carry_over)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, "starting session");

    let style = if args.plain || !io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Ansi
    };

    let mut session = Session::new(args.options(), seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), style);

    match console.run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
