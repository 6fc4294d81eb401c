use anyhow::Context as _;
use arith::{parser, Config};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject unclosed parentheses and trailing input.
    #[arg(long)]
    strict: bool,

    /// Print the parsed syntax tree before evaluating it.
    #[arg(long)]
    dump_ast: bool,

    /// The expression to evaluate. Read from stdin when omitted.
    expression: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::trace!("CLI args = {:?}", args);

    let expression = match args.expression {
        Some(ref expression) => expression.clone(),
        None => prompt_expression()?,
    };

    let config = if args.strict {
        Config::strict()
    } else {
        Config::default()
    };

    // Failures are reported but never turned into a non-zero exit status.
    match evaluate(&expression, config, args.dump_ast) {
        Ok(value) => println!("Evaluated! Result is {}", value),
        Err(err) => {
            eprintln!("Occurred error during evaluating expression");
            eprintln!("{}", err);
        }
    }

    Ok(())
}

fn evaluate(expression: &str, config: Config, dump_ast: bool) -> Result<i64, arith::Error> {
    if dump_ast {
        let expr = parser::parse_with(expression, config)?;
        println!("parsed: {}", expr);
        return expr.evaluate();
    }
    arith::evaluate_expression_with(expression, config)
}

fn prompt_expression() -> anyhow::Result<String> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "enter expression:").context("failed to write prompt")?;
    stdout.flush().context("failed to flush stdout")?;

    read_expression(io::stdin().lock()).context("failed to read from stdin")
}

// Reads the first whitespace-delimited word, skipping blank lines.
//
// Bytes that are not valid UTF-8 become U+FFFD, which the lexer treats as noise.
fn read_expression(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(String::new());
        }
        if let Some(word) = String::from_utf8_lossy(&line).split_whitespace().next() {
            return Ok(word.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_first_word() {
        let input: &[u8] = b"\n   \n  2+3 4*5\n6\n";
        assert_eq!(read_expression(input).unwrap(), "2+3");
    }

    #[test]
    fn read_without_trailing_newline() {
        let input: &[u8] = b"7*6";
        assert_eq!(read_expression(input).unwrap(), "7*6");
    }

    #[test]
    fn read_empty_input() {
        let input: &[u8] = b"  \n\t\n";
        assert_eq!(read_expression(input).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_noise() {
        let input: &[u8] = b"2+\xff3\n";
        let expression = read_expression(input).unwrap();
        assert_eq!(arith::evaluate_expression(&expression), Ok(5));
    }
}
