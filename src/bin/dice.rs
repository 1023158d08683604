use clap::Parser;
use dice_algebra::{DiceError, Evaluation, RollContext};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

const LOG_ENV_NAME: &str = "DICE_LOG";

/// Rolls a dice algebra expression such as `4d6h3 + (d8 - 1) * 2`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Print every die rolled before the result.
    #[arg(short, long, visible_alias = "v")]
    verbose: bool,

    /// Seed for the random generator, for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// Fail instead of rolling more than this many dice.
    #[arg(long)]
    max_rolls: Option<usize>,

    /// Expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn read_line(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn read_expression() -> io::Result<String> {
    print!("Please enter a dice algebra expression: ");
    io::stdout().flush()?;
    read_line(io::stdin().lock())
}

fn evaluate(cli: &Cli, input: &str) -> Result<Evaluation, DiceError> {
    match cli.seed {
        Some(seed) => dice_algebra::roll_with(input, &mut RollContext::seeded(seed, cli.max_rolls)),
        None => dice_algebra::roll_with(input, &mut RollContext::with_limit(cli.max_rolls)),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = match &cli.expression {
        Some(expression) => expression.clone(),
        None => read_expression()?,
    };
    let evaluation = evaluate(cli, &input)?;

    if cli.verbose {
        print!("{}", evaluation.description);
    }
    println!("\nYour result is: {}", evaluation.result);
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_NAME)
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let status = exit_status(&e);
            if status == 1 {
                println!("Error: {}", e);
            } else {
                println!("An unexpected error has occurred!\n{}", e);
            }
            ExitCode::from(status)
        }
    }
}

/// 1 for a problem with the expression, 2 for anything else.
fn exit_status(error: &CliError) -> u8 {
    match error {
        CliError::Dice(e) if e.is_domain_error() => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn status_of(input: &str) -> u8 {
        let cli = Cli::try_parse_from(["dice", input]).unwrap();
        exit_status(&run(&cli).unwrap_err())
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["dice", "--v", "--seed", "7", "2d6"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.expression.as_deref(), Some("2d6"));

        let cli = Cli::try_parse_from(["dice", "-v", "--max-rolls", "3"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.max_rolls, Some(3));
        assert_eq!(cli.expression, None);

        assert!(!Cli::try_parse_from(["dice", "d6"]).unwrap().verbose);
    }

    #[test]
    fn test_read_line_trims_line_ending() {
        assert_eq!(read_line(&b"2d6 + 1\r\n"[..]).unwrap(), "2d6 + 1");
        assert_eq!(read_line(&b"d20\n"[..]).unwrap(), "d20");
        assert_eq!(read_line(&b""[..]).unwrap(), "");
    }

    #[test]
    fn test_domain_errors_exit_1() {
        for input in ["", "(1", "2d", "x", "1 / 0"] {
            assert_eq!(status_of(input), 1, "{:?}", input);
        }

        let cli = Cli::try_parse_from(["dice", "--max-rolls", "2", "3d6"]).unwrap();
        assert_eq!(exit_status(&run(&cli).unwrap_err()), 1);
    }

    #[test]
    fn test_unexpected_errors_exit_2() {
        assert_eq!(status_of("99999999999999999999"), 2);
        assert_eq!(status_of("9223372036854775807 + 1"), 2);

        let io = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        assert_eq!(exit_status(&CliError::from(io)), 2);
    }

    #[test]
    fn test_run_succeeds() {
        let cli = Cli::try_parse_from(["dice", "--seed", "1", "4d1h2 * (7 - 2)"]).unwrap();
        assert!(run(&cli).is_ok());
    }
}
