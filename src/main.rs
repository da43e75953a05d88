mod debug_report;

use postal_grammar::{AddressParser, Country};
use std::io::{self, IsTerminal, Read};

const DEFAULT_COUNTRY: &str = "us";

fn main() {
    pretty_env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let parser = match AddressParser::for_country(config.country) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let (location, details) = parser.parse_location_verbose(&config.input);
    debug_report::print_run(&config.input, parser.country(), &location, &details, config.color);
}

struct CliConfig {
    input: String,
    country: Country,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut country = parse_country(DEFAULT_COUNTRY)?;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("postal-grammar {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--country" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --country expects a value".to_string())?;
                country = parse_country(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--country=") => {
                country = parse_country(arg.trim_start_matches("--country="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, country, color })
}

fn parse_country(value: &str) -> Result<Country, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "postal-grammar {version}

Parse a free-form US or Canadian address and show how the grammar matched it.

Usage:
  postal-grammar [OPTIONS] [--] <address...>
  postal-grammar [OPTIONS] --input <text>

Options:
  -c, --country <id>         Country grammar to use: us or ca.
                             Default: {default_country}
  -i, --input <text>         Address to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG=postal_grammar=trace   Log every rule attempt.

Exit codes:
  0  Success (including input no rule matched).
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_country = DEFAULT_COUNTRY
    )
}
