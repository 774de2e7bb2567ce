//! Glossa CLI entry point.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use glossa_runtime::{Command, RawsDirectory, RuntimeConfig, generate_names, parse_args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match parse_args(args)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("glossa {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let lexicon = RawsDirectory::new(&config.raws)
        .load_global(&config.loader_config())
        .map_err(describe)?;

    if config.dump {
        let stdout = io::stdout().lock();
        lexicon.write_words(stdout).map_err(|e| describe(&e))?;
        return Ok(());
    }

    print_names(lexicon, &config)
}

fn print_names(
    lexicon: &glossa_lexicon::Lexicon,
    config: &RuntimeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    for name in generate_names(lexicon, config).map_err(|e| describe(&e))? {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}

/// Renders an error with its location, if it has one.
fn describe(err: &glossa_foundation::Error) -> String {
    match &err.context {
        Some(ctx) => format!("{err} ({ctx})"),
        None => err.to_string(),
    }
}

fn print_help() {
    println!(
        "\x1b[1mGlossa\x1b[0m - Compound name generator for language raws

\x1b[1mUSAGE:\x1b[0m
    glossa [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -r, --raws DIR        Raws root containing objects/language_*.txt [default: raws]
    -c, --culture NAME    dwarf, human, goblin or elf [default: dwarf]
    -n, --count N         Number of names to generate [default: 1]
    -s, --seed N          Seed for reproducible output
    --strict              Reject compound flags on empty word forms
    --dump                Print the loaded word definitions as raws and exit

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG              Log filter, e.g. RUST_LOG=glossa_lexicon=debug

\x1b[1mEXAMPLES:\x1b[0m
    glossa -r ~/df/raw -n 10          Ten dwarven names
    glossa -c elf -s 7 -n 3           Three reproducible elven names
    glossa --strict --dump            Validate and re-emit word definitions"
    );
}
