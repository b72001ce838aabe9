//! Courtside CLI
//!
//! Interactive terminal scoreboard: renders the match state and feeds
//! point/undo/reset events into the scoring engine. All scoring rules live
//! in `court_core`; this binary only parses input and prints state.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use court_core::{
    display_score, score_summary, MatchConfig, MatchEngine, MatchState, TeamSide,
};

#[derive(Parser)]
#[command(name = "court_cli")]
#[command(about = "Drive a tennis match scoreboard from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive match
    Play {
        /// Home team name
        #[arg(long, default_value = "Home")]
        home: String,

        /// Away team name
        #[arg(long, default_value = "Away")]
        away: String,

        /// Home team color (hex, carried in the state for UI consumers)
        #[arg(long, default_value = "#FF0000")]
        home_color: String,

        /// Away team color
        #[arg(long, default_value = "#0000FF")]
        away_color: String,

        /// Best-of sets; must be a positive odd number
        #[arg(long, default_value = "5")]
        best_of: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { home, away, home_color, away_color, best_of } => {
            let engine = MatchEngine::new(MatchConfig {
                home_name: home,
                home_color,
                away_name: away,
                away_color,
                best_of_sets: best_of,
            })?;
            run_session(engine)
        }
    }
}

fn run_session(mut engine: MatchEngine) -> Result<()> {
    println!(
        "Best of {} sets. Commands: h/a point to home/away, u undo, r reset, s history, q quit.",
        engine.state().best_of_sets
    );
    render(engine.state());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match line?.trim() {
            "h" | "home" => score(&mut engine, TeamSide::Home),
            "a" | "away" => score(&mut engine, TeamSide::Away),
            "u" | "undo" => match engine.undo() {
                Ok(state) => {
                    println!("Action undone!");
                    render(state);
                }
                Err(err) => println!("{err}"),
            },
            "r" | "reset" => {
                engine.reset();
                println!("Match has been reset!");
                render(engine.state());
            }
            "s" | "history" => render_history(engine.state()),
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown command '{other}'. Use h, a, u, r, s or q."),
        }
    }

    Ok(())
}

fn score(engine: &mut MatchEngine, side: TeamSide) {
    if engine.state().is_complete() {
        println!("Match is already complete");
        return;
    }
    engine.award_point(side);
    render(engine.state());
}

fn render(state: &MatchState) {
    if let Some(winner) = state.set_winner {
        println!("Match winner: {}", state.team(winner).name);
    }

    let leader = state.leader();
    println!("  {:<12} {:>4} {:>5} {:>9}", "", "Sets", "Games", "Points");
    for side in [TeamSide::Home, TeamSide::Away] {
        let team = state.team(side);
        let opponent = state.team(side.opponent());
        let marker = if leader == Some(side) { "*" } else { " " };
        println!(
            "{} {:<12} {:>4} {:>5} {:>9}",
            marker,
            team.name,
            team.sets,
            team.games,
            display_score(team.points, opponent.points)
        );
    }
}

fn render_history(state: &MatchState) {
    if state.history.is_empty() {
        println!("No actions yet");
        return;
    }

    println!("{} actions recorded", state.history.len());
    for entry in state.history.iter().rev() {
        println!(
            "  [{}] {} | {} {} / {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.action,
            entry.home.name,
            score_summary(&entry.home, &entry.away),
            entry.away.name,
            score_summary(&entry.away, &entry.home),
        );
    }
}
