use asteroid_rage::{bench_step, run_game, GameConfig, GameSession};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asteroid_rage", about = "Eat the planets before gravity eats you")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "asteroid_rage.yaml")]
    file_name: String,

    /// Time the physics step instead of starting the game
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(file_name: &str) -> Result<GameConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    GameConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let cfg = load_config(&args.file_name)?;
    let session = GameSession::from_config(&cfg);
    run_game(session);

    Ok(())
}
