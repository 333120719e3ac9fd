//! Verify command - exhaustive checks of the computer's play

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    analysis::{verify_solver_agreement, verify_unbeatable},
    cli::output::{create_spinner, format_number, print_kv, print_section},
    search::Solver,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Check that the computer never loses")]
pub struct VerifyArgs {
    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let show_progress = !args.no_progress;

    let spinner = create_spinner("Playing every human strategy...", show_progress);
    let mut solver = Solver::with_cache();
    let unbeatable = verify_unbeatable(&mut solver)?;
    spinner.finish_and_clear();

    print_section("Computer as O against every X strategy");
    print_kv("Games", &format_number(unbeatable.games));
    print_kv("Computer wins", &format_number(unbeatable.computer_wins));
    print_kv("Ties", &format_number(unbeatable.ties));
    print_kv("Computer losses", &format_number(unbeatable.computer_losses));
    print_kv("Nodes searched", &format_number(solver.stats().nodes as usize));

    let spinner = create_spinner("Comparing cached and exhaustive search...", show_progress);
    let mut agreement = Vec::new();
    for side in [Player::X, Player::O] {
        agreement.push((side, verify_solver_agreement(side)?));
    }
    spinner.finish_and_clear();

    print_section("Cached search against exhaustive search");
    for (side, report) in &agreement {
        print_kv(
            &format!("{side} to move"),
            &format!(
                "{} positions, {} disagreements",
                format_number(report.positions),
                report.disagreements.len()
            ),
        );
    }

    if let Some(moves) = &unbeatable.first_loss {
        bail!("the computer lost a game: {moves:?}");
    }
    if let Some((side, report)) = agreement.iter().find(|(_, r)| !r.agrees()) {
        bail!(
            "cached search disagrees with exhaustive search for {side} on {}",
            report.disagreements.join(", ")
        );
    }

    println!("\nAll checks passed.");
    Ok(())
}
