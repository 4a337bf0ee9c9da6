use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use snake_ladder::render::{Renderer, TextRenderer};
use snake_ladder::{GameSession, SessionConfig};

/// Play Snake & Ladder for two players in the terminal.
#[derive(Parser)]
#[command(name = "snake-ladder", about = "Two-player Snake & Ladder")]
struct Cli {
    /// Fixed dice seed (default: seeded from the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML session configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the dice spin animation
    #[arg(long)]
    no_spin: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load_or_default(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_spin {
        config = config.without_spin();
    }

    let mut session = GameSession::from_config(config);
    let mut renderer = TextRenderer::new(io::stdout(), session.engine().jumps().clone());

    println!("Snake & Ladder (seed {})", session.seed());
    println!("ENTER rolls, r restarts, q quits.\n");
    renderer.render(&session.snapshot()).context("drawing board")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading input")?;
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => session.restart(),
            "" => roll(&mut session, &mut renderer)?,
            other => {
                println!("Unknown command '{other}'. ENTER rolls, r restarts, q quits.");
                continue;
            }
        }
        println!();
        renderer.render(&session.snapshot()).context("drawing board")?;
    }

    Ok(())
}

fn roll(session: &mut GameSession, renderer: &mut TextRenderer<io::Stdout>) -> Result<()> {
    if session.is_finished() {
        return Ok(());
    }

    let interval = session.config().spin_interval();
    let spin: Vec<u8> = session.spin().collect();
    if !spin.is_empty() {
        for face in spin {
            renderer.spin_frame(face).context("drawing dice")?;
            thread::sleep(interval);
        }
        println!();
    }

    session.request_roll().context("applying roll")?;
    Ok(())
}
