use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, AiPlayer, ConsoleTerminal, FleetGenerator, Game, HumanPlayer};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer on a 6x6 board", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = seeded_rng(cli.seed);
    let ai_rng = seeded_rng(cli.seed.map(|s| s.wrapping_add(1)));

    let mut game = Game::setup(
        &FleetGenerator::default(),
        &mut rng,
        Box::new(HumanPlayer::new()),
        Box::new(AiPlayer::new(ai_rng)),
    )?;
    let mut terminal = ConsoleTerminal::stdio();
    game.run(&mut terminal)?;
    Ok(())
}
