//! Command-line sudoku solver.
//!
//! Reads a puzzle (9 rows of 9 characters, digits `1`-`9` for givens and any
//! other character for blanks) from a file or standard input, solves it, and
//! prints the resulting grid followed by `OK` or `FAILED`.
//!
//! # Usage
//!
//! ```sh
//! sudoq --file puzzle.txt
//! sudoq --pretty < puzzle.txt
//! sudoq --depth 4 --file hard.txt
//! ```
//!
//! Exit codes: 0 on success, 1 when the puzzle is reported unsolved, 2 on
//! malformed or contradictory input.

use std::{
    fs,
    io::{self, IsTerminal as _},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use sudoq_core::Board;
use sudoq_solver::{DEFAULT_GUESS_DEPTH, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Print the decorated candidate view instead of the compact grid.
    #[arg(long)]
    pretty: bool,

    /// Load the puzzle from a file (default: standard input).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum number of nested guesses once propagation stalls.
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_GUESS_DEPTH)]
    depth: u32,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let board = match Board::from_rows(&rows) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let start = Instant::now();
    let mut solver = Solver::with_guess_depth(board, args.depth);
    let solved = solver.solve();
    log::info!(
        "solve finished in {:.2?} (guess depth {})",
        start.elapsed(),
        args.depth
    );

    let board = solver.board();
    if args.pretty {
        println!("{}", board.pretty());
    } else {
        println!("{board}");
    }
    println!("{}", if solved { "OK" } else { "FAILED" });
    if !solved {
        process::exit(1);
    }
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", path.display()))),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Enter board (9x9 characters):");
            }
            io::read_to_string(io::stdin())
        }
    }
}
