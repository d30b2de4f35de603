use anyhow::Result;
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::{GameConfig, Speed};

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Arcade snake on a full-viewport terminal surface")]
struct Cli {
    /// Initial speed level (1 = slowest, 9 = fastest)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=9))]
    speed: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::default();
    let speed = Speed::from_level(cli.speed);

    let mut app = App::new(config, speed);
    app.run().await?;

    Ok(())
}
