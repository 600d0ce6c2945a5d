//! Interactive two-player chess, played in the terminal until a king falls.
//!
//! This binary is a thin shell around `regicide_engine`: it renders the
//! board, reads identity keys and destinations from stdin, and relays the
//! engine's answers. All legality decisions live in the engine.

mod cli;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use regicide_engine::api::{
    apply_move, current_player, is_game_over, legal_destinations, new_game, winner,
};
use regicide_engine::types::Color;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();
    let mut game = new_game(args.primary);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !args.no_clear {
            render::clear_screen();
        }
        print!("{}", render::render(&game));
        let player = current_player(&game);
        println!("Current player: {}", player_name(player));

        print!("Piece to move (e.g. Wp4): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let piece_id = line?.trim().to_string();
        if piece_id.is_empty() {
            continue;
        }

        if !piece_id.starts_with(player.letter()) {
            warn!(piece = %piece_id, "piece does not belong to the current player");
            println!("Wrong player!");
            continue;
        }

        let destinations = match legal_destinations(&game, &piece_id) {
            Ok(destinations) => destinations,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        println!("Possible destinations: {}", format_destinations(&destinations));

        print!("Destination (e.g. 5a): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let input = line?.trim().to_string();
        let Some(dest) = parse_destination(&input) else {
            println!("Invalid move");
            continue;
        };

        match apply_move(&mut game, &piece_id, dest) {
            Ok(Some(captured)) => {
                info!(piece = %piece_id, captured = %captured.id(), "capture");
                println!("Captured {}", captured.id());
                if is_game_over(&game) {
                    if let Some(side) = winner(&game) {
                        println!("*************");
                        println!("{} player won", player_name(side));
                    }
                    break;
                }
            }
            Ok(None) => {
                info!(piece = %piece_id, row = dest.0, file = %dest.1, "moved");
            }
            Err(err) => {
                warn!(%err, "move rejected");
                println!("{err}");
            }
        }
    }

    Ok(())
}

fn player_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn format_destinations(destinations: &[(i8, char)]) -> String {
    destinations
        .iter()
        .map(|(row, file)| format!("{row}{file}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse input like `5a` into a (row, file) destination. The engine decides
/// whether the square is actually reachable.
fn parse_destination(input: &str) -> Option<(i8, char)> {
    let mut chars = input.chars();
    let row = chars.next()?.to_digit(10)? as i8;
    let file = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some((row, file))
}
