//! Command-line arguments

use clap::Parser;
use regicide_engine::Color;

/// Two-player chess in the terminal, played until a king is captured.
#[derive(Parser, Debug)]
#[command(name = "regicide", version, about)]
pub struct Cli {
    /// Side seated at the near edge of the board (rows 6-7): w or b
    #[arg(long, default_value = "w", value_parser = parse_side)]
    pub primary: Color,

    /// Leave previous output on screen instead of clearing between turns
    #[arg(long)]
    pub no_clear: bool,
}

fn parse_side(s: &str) -> Result<Color, String> {
    match s {
        "w" | "W" => Ok(Color::White),
        "b" | "B" => Ok(Color::Black),
        _ => Err(format!("expected 'w' or 'b', got '{s}'")),
    }
}
