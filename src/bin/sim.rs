use sea_battle::{BoardGenerator, RandomMoveSource, Side, TurnEngine, BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    ships_lost: usize,
}

#[derive(Serialize)]
struct Summary {
    winner: &'static str,
    player1: SideSummary,
    player2: SideSummary,
}

fn summarize(engine: &TurnEngine, side: Side) -> SideSummary {
    SideSummary {
        shots: engine.shots_fired(side),
        ships_lost: engine.board(side).destroyed_count(),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let generator = BoardGenerator::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let board1 = generator.generate(&mut rng1)?;
    let board2 = generator.generate(&mut rng2)?;

    let mut engine = TurnEngine::new(
        board1,
        Box::new(RandomMoveSource::with_rng(rng1, BOARD_SIZE)),
        board2,
        Box::new(RandomMoveSource::with_rng(rng2, BOARD_SIZE)),
    );
    let winner = engine.run()?;

    let result = Summary {
        winner: match winner {
            Side::First => "player1",
            Side::Second => "player2",
        },
        player1: summarize(&engine, Side::First),
        player2: summarize(&engine, Side::Second),
    };
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
