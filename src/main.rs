//! Fair RPS
//!
//! Terminal front end: collects move names, relays the human's choice to
//! the game session, and prints the reveal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fair_rps::{
    menu::{parse_choice, render_menu, MenuChoice},
    proof::verify_hex,
    GameConfig, GameSession, MoveSet, Outcome, PayoffMatrix, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "fair-rps", version = VERSION, about = "Rock-paper-scissors with a provably fixed computer move")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one round
    Play {
        /// Odd number (3 or more) of distinct move names
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final reveal as JSON
        #[arg(long)]
        json: bool,

        /// Secret key length in bytes (minimum 32)
        #[arg(long)]
        key_bytes: Option<usize>,
    },

    /// Print the payoff table
    Table {
        /// Odd number (3 or more) of distinct move names
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Recompute an HMAC from a disclosed key and move
    Verify {
        /// Disclosed key (hex)
        #[arg(long)]
        key: String,

        /// Code printed before the round (hex)
        #[arg(long)]
        hmac: String,

        /// Move the computer claims it played
        #[arg(value_name = "MOVE")]
        move_name: String,
    },
}

fn main() -> ExitCode {
    // Initialize logging on stderr; stdout carries the game.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let cli = Cli::parse();
    debug!("Fair RPS v{}", VERSION);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = GameConfig::from_env();

    match cli.command {
        Command::Play { moves, json, key_bytes } => {
            if let Some(n) = key_bytes {
                config.key_bytes = n;
            }
            let moves = parse_moves(moves)?;
            play(moves, &config, json)
        }
        Command::Table { moves } => {
            let moves = parse_moves(moves)?;
            print!("{}", PayoffMatrix::new(&moves, &config.corner_label).render());
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { key, hmac, move_name } => {
            if verify_hex(&key, &move_name, &hmac).context("cannot verify")? {
                println!("OK: HMAC matches move '{}'", move_name);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("MISMATCH: HMAC does not match move '{}'", move_name);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn parse_moves(moves: Vec<String>) -> Result<MoveSet> {
    MoveSet::new(moves).context(
        "provide an odd number (3 or more) of distinct moves, e.g. `fair-rps play rock paper scissors`",
    )
}

fn play(moves: MoveSet, config: &GameConfig, json: bool) -> Result<ExitCode> {
    let session = GameSession::start(moves, config).context("cannot start session")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_menu(session.moves(), session.commitment()))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let human_move = loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(ExitCode::SUCCESS);
        };
        let line = line.context("failed to read input")?;

        match parse_choice(&line, session.move_count()) {
            MenuChoice::Move(index) => break index,
            MenuChoice::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(ExitCode::SUCCESS);
            }
            MenuChoice::Help => {
                let table = PayoffMatrix::new(session.moves(), &config.corner_label);
                write!(out, "{}", table.render())?;
            }
            MenuChoice::Invalid => {
                debug!(input = %line.trim(), "Rejected menu input");
                writeln!(out, "Invalid move, please try again.")?;
            }
        }
    };

    let reveal = session.play(human_move)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reveal)?)?;
    } else {
        writeln!(out, "Your move: {}", reveal.human_move)?;
        writeln!(out, "Computer move: {}", reveal.computer_move)?;
        let verdict = match reveal.outcome() {
            Outcome::Win => "You win!",
            Outcome::Lose => "Computer wins!",
            Outcome::Draw => "Draw",
        };
        writeln!(out, "{}", verdict)?;
        writeln!(out, "HMAC key: {}", reveal.key.to_hex())?;
    }

    Ok(ExitCode::SUCCESS)
}
