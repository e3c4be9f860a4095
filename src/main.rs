use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_connect_four::config::AppConfig;
use minimax_connect_four::controller::{GameMode, RenderSink, TurnController, TurnState};
use minimax_connect_four::game::{GameOutcome, Mark, Player, WIDTH};

/// Play Connect Four in the terminal, against a friend or the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a negamax opponent")]
struct Cli {
    /// Game mode: local or ai
    #[arg(long)]
    mode: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Override the computer's color: red or black
    #[arg(long)]
    ai_player: Option<String>,

    /// Override the pause before the computer moves, in milliseconds
    #[arg(long)]
    min_latency_ms: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Writes game events to stdout as plain text.
struct TextSink;

impl RenderSink for TextSink {
    fn on_chip_placed(&mut self, column: usize, row: usize, mark: Mark) {
        println!("{mark:?} drops into column {column} (row {row})");
    }

    fn on_turn_changed(&mut self, player: Player) {
        println!("{player}'s turn");
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(player) => println!("{player} wins!"),
            GameOutcome::Draw => println!("Draw!"),
        }
    }

    fn on_ai_thinking(&mut self, player: Player) {
        println!("{player} is thinking...");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = &cli.mode {
        config.game.mode = mode.parse::<GameMode>().map_err(anyhow::Error::msg)?;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(color) = &cli.ai_player {
        config.game.ai_player = color.parse()?;
    }
    if let Some(latency) = cli.min_latency_ms {
        config.search.min_latency_ms = latency;
    }
    config.validate().context("invalid configuration")?;

    if config.game.mode == GameMode::Online {
        bail!("online play needs a transport; the terminal client supports 'local' and 'ai'");
    }

    let mut controller = TurnController::from_config(&config, TextSink);
    controller.start()?;
    run(&mut controller)
}

fn run(controller: &mut TurnController<TextSink>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        controller.process_events()?;

        let prompt = match controller.turn_state() {
            TurnState::WaitingForAIMove => {
                controller.wait_for_event(Duration::from_millis(100))?;
                continue;
            }
            TurnState::WaitingForLocalMove => format!(
                "{} to move [0-{}, r = restart, q = quit]: ",
                controller.game().current_player(),
                WIDTH - 1
            ),
            TurnState::GameOver => "r = play again, q = quit: ".to_string(),
            state => bail!("unexpected turn state {state:?}"),
        };

        println!("\n{}\n", controller.game().grid());
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "q" => return Ok(()),
            "r" => controller.reset()?,
            input => match input.parse::<usize>() {
                Ok(column) => {
                    if let Err(err) = controller.submit_local_move(column) {
                        println!("{err}");
                    }
                }
                Err(_) => println!("enter a column number, 'r' or 'q'"),
            },
        }
    }
}
