//! Terminal front end. Cells are clicked by typing `row col`.
//!
//! Other commands: `cancel`, `reset`, `quit`. Logging goes to stderr and is
//! controlled with `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use circles::board::Board;
use circles::game::{ClickOutcome, Game, Players};
use circles::piece::Color;
use circles::position::{Position, COLS, ROWS};
use circles::record::MatchRecord;
use clap::Parser;
use tracing::{info, warn};

/// Two-player circles game on a 5x4 board
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the blue player
    #[arg(long, default_value = "Blue")]
    blue: String,

    /// Name of the red player
    #[arg(long, default_value = "Red")]
    red: String,

    /// Seed for choosing who moves first
    #[arg(long)]
    seed: Option<u64>,

    /// Where the result of a finished game is written
    #[arg(short, long, default_value = "data.json")]
    output: PathBuf,

    /// Do not write a result file
    #[arg(long)]
    no_export: bool,
}

fn new_board(seed: Option<u64>) -> Board {
    match seed {
        Some(seed) => Board::seeded(seed),
        None => Board::new(),
    }
}

fn parse_cell(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some(Position::new(row, col)),
        _ => None,
    }
}

fn render(game: &Game, out: &mut impl Write) -> io::Result<()> {
    let board = game.board();
    for row in 0..ROWS {
        write!(out, "{row} ")?;
        for col in 0..COLS {
            let pos = Position::new(row, col);
            let color = board.circle_at(pos).and_then(|id| board.color_of(id).ok());
            let ch = match (color, game.selectable().contains(&pos)) {
                (Some(Color::Blue), false) => 'B',
                (Some(Color::Red), false) => 'R',
                (Some(Color::Blue), true) => 'b',
                (Some(Color::Red), true) => 'r',
                (None, true) => '*',
                (None, false) => '.',
            };
            write!(out, "{ch} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "  0 1 2 3")?;
    writeln!(out, "{}", game.status_line())
}

fn export(cli: &Cli, game: &Game) {
    let Some(record) = game.record_today() else {
        return;
    };
    info!(%record, "match finished");
    if cli.no_export {
        return;
    }
    match record.save(&cli.output) {
        Ok(()) => match MatchRecord::load(&cli.output) {
            Ok(read_back) => info!(path = %cli.output.display(), %read_back, "result exported"),
            Err(err) => warn!(%err, "result written but could not be read back"),
        },
        Err(err) => warn!(%err, path = %cli.output.display(), "could not export result"),
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut game = Game::with_board(new_board(cli.seed), Players::new(cli.blue.clone(), cli.red.clone()));
    info!(first = game.active_player(), "game started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(&game, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" => break,
            "reset" => game.reset_with(new_board(cli.seed)),
            "cancel" => game.cancel_selection(),
            _ => match parse_cell(line) {
                Some(pos) => {
                    if let ClickOutcome::Won { .. } = game.click(pos) {
                        export(&cli, &game);
                    }
                }
                None => writeln!(stdout, "expected `row col`, `cancel`, `reset` or `quit`")?,
            },
        }
        render(&game, &mut stdout)?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_integers() {
        assert_eq!(parse_cell("2 3"), Some(Position::new(2, 3)));
        assert_eq!(parse_cell("  0   1 "), Some(Position::new(0, 1)));
    }

    #[test]
    fn rejects_malformed_cells() {
        assert_eq!(parse_cell("2"), None);
        assert_eq!(parse_cell("a b"), None);
        assert_eq!(parse_cell("1 2 3"), None);
    }

    #[test]
    fn render_marks_selectable_cells() {
        let game = Game::with_board(Board::with_first_turn(1), Players::default());
        let mut out = Vec::new();
        render(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("0 b R b R \n"));
        assert!(text.ends_with("Blue turns\n"));
    }

    #[test]
    fn render_marks_destinations() {
        let mut game = Game::with_board(Board::with_first_turn(1), Players::default());
        game.click(Position::new(0, 0));
        let mut out = Vec::new();
        render(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0 B R B R ");
        assert_eq!(lines[1], "1 * . . . ");
        assert_eq!(lines[4], "4 R B R B ");
    }
}
