#![cfg(feature = "std")]

use crate::engine::{Side, TurnEngine, TurnReport};

/// Print the greeting and the input format.
pub fn print_greeting() {
    std::println!("     -------------------");
    std::println!("       Welcome to the   ");
    std::println!("         sea battle     ");
    std::println!("     -------------------");
    std::println!("      input format: x y ");
    std::println!("      x - row number    ");
    std::println!("      y - column number ");
}

/// Display both boards, `user` side first.
pub fn print_boards(engine: &TurnEngine, user: Side) {
    std::println!("{}", "-".repeat(27));
    std::println!("     Your board:\n{}", engine.board(user));
    std::println!("{}", "-".repeat(27));
    std::println!("     Computer's board:\n{}", engine.board(user.opponent()));
}

/// Announce whose move it is.
pub fn print_turn_banner(side: Side, user: Side) {
    std::println!("{}", "-".repeat(20));
    if side == user {
        std::println!("Your move!");
    } else {
        std::println!("Computer's move!");
    }
}

/// One line describing a shot, named after whoever fired it.
pub fn shot_line(report: &TurnReport, user: Side) -> String {
    let shooter = if report.side == user { "You fire" } else { "Computer fires" };
    format!("{} at: {} -> {:?}", shooter, report.target, report.outcome)
}

/// Echo an automated shot the way a player would have typed it.
pub fn print_shot(report: &TurnReport, user: Side) {
    std::println!("{}", shot_line(report, user));
}

pub fn print_winner(winner: Side, user: Side) {
    std::println!("{}", "-".repeat(20));
    if winner == user {
        std::println!("You win!");
    } else {
        std::println!("The computer wins!");
    }
}
