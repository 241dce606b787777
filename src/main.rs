#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, ui, BoardGenerator, CliMoveSource, MoveSource, RandomMoveSource, Side,
    TurnEngine, AI_THINK_DELAY_MS, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = AI_THINK_DELAY_MS, help = "Pause before each computer move")]
    ai_delay_ms: u64,
    #[arg(long, help = "Let the computer play your side as well")]
    autoplay: bool,
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let generator = BoardGenerator::default();
    let mut board_rng = seeded_rng(cli.seed, 0);
    let user_board = generator.generate(&mut board_rng)?;
    let mut computer_board = generator.generate(&mut board_rng)?;
    computer_board.set_concealed(true);

    let delay = Duration::from_millis(cli.ai_delay_ms);
    let computer = RandomMoveSource::with_rng(seeded_rng(cli.seed, 1), BOARD_SIZE).with_delay(delay);
    let user: Box<dyn MoveSource> = if cli.autoplay {
        Box::new(RandomMoveSource::with_rng(seeded_rng(cli.seed, 2), BOARD_SIZE).with_delay(delay))
    } else {
        Box::new(CliMoveSource::stdio())
    };

    let me = Side::First;
    let mut engine = TurnEngine::new(user_board, user, computer_board, Box::new(computer));

    ui::print_greeting();
    let winner = loop {
        if let Some(winner) = engine.winner() {
            break winner;
        }
        ui::print_boards(&engine, me);
        let side = engine.active_side();
        ui::print_turn_banner(side, me);
        let report = engine.play_turn()?;
        if side != me || cli.autoplay {
            ui::print_shot(&report, me);
        }
    };

    ui::print_boards(&engine, me);
    ui::print_winner(winner, me);
    Ok(())
}
