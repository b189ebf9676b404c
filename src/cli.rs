//! Command-line interface for acme_katas.

use acme_tictactoe::Coordinate;
use clap::{Parser, Subcommand};

/// Acme Katas - FizzBuzz and tic-tac-toe from the terminal
#[derive(Parser, Debug)]
#[command(name = "acme_katas")]
#[command(about = "Play the FizzBuzz and tic-tac-toe katas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a round of FizzBuzz, one label per line
    Fizzbuzz {
        /// First number (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Last number, inclusive (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,

        /// Print a JSON array instead of lines
        #[arg(long)]
        json: bool,
    },

    /// Play moves on a fresh board and print it
    Tictactoe {
        /// Moves as `row,col`, applied in order starting with X
        #[arg(value_name = "ROW,COL")]
        moves: Vec<Coordinate>,

        /// Print the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz_accepts_negative_start() {
        let cli = Cli::try_parse_from(["acme_katas", "fizzbuzz", "--start", "-5", "--end", "5"])
            .expect("negative start is allowed");
        match cli.command {
            Command::Fizzbuzz { start, end, json } => {
                assert_eq!(start, Some(-5));
                assert_eq!(end, Some(5));
                assert!(!json);
            }
            other => panic!("Expected fizzbuzz, got {:?}", other),
        }
    }

    #[test]
    fn test_fizzbuzz_flags_default_to_none() {
        let cli = Cli::try_parse_from(["acme_katas", "--config", "katas.toml", "fizzbuzz"])
            .expect("flags are optional");
        assert_eq!(cli.config, Some(std::path::PathBuf::from("katas.toml")));
        assert!(matches!(
            cli.command,
            Command::Fizzbuzz {
                start: None,
                end: None,
                json: false
            }
        ));
    }

    #[test]
    fn test_tictactoe_parses_moves() {
        let cli = Cli::try_parse_from(["acme_katas", "tictactoe", "0,0", "1,2", "--json"])
            .expect("valid moves");
        match cli.command {
            Command::Tictactoe { moves, json } => {
                assert!(json);
                let pairs: Vec<_> = moves.iter().map(|c| (c.row(), c.col())).collect();
                assert_eq!(pairs, vec![(0, 0), (1, 2)]);
            }
            other => panic!("Expected tictactoe, got {:?}", other),
        }
    }

    #[test]
    fn test_tictactoe_rejects_off_board_move() {
        assert!(Cli::try_parse_from(["acme_katas", "tictactoe", "0,3"]).is_err());
        assert!(Cli::try_parse_from(["acme_katas", "tictactoe", "zero"]).is_err());
    }
}
