//! Command-line interface for nestflat
//! Flattens a nested JSON or YAML array and prints the leaves in depth-first order.
//!
//! Usage:
//!   nestflat                                  - Flatten the built-in demo sample
//!   nestflat `<path>` [--format `<format>`]       - Flatten a JSON (.json) or YAML (.yaml/.yml) file
//!   nestflat - [--format `<format>`]            - Flatten JSON read from stdin
//!   nestflat --list-formats                   - List all available output formats

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use nestflat::{flatten_with, Traversal};
use nestflat::nestflat::config::{Loader, NestflatConfig};
use nestflat::nestflat::demo;
use nestflat::nestflat::formats::FormatRegistry;
use nestflat::nestflat::input::{self, InputFormat};
use serde_json::Value;
use std::io::Read;
use tracing::{debug, trace};

fn main() {
    let matches = Command::new("nestflat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten arbitrarily nested arrays into a single sequence")
        .arg(
            Arg::new("path")
                .help("JSON or YAML file holding a nested array ('-' reads JSON from stdin); omit to run the demo")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (list, json, json-pretty, lines)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("traversal")
                .long("traversal")
                .short('t')
                .help("Traversal strategy (iterative, recursive)")
                .value_parser(|s: &str| s.parse::<Traversal>()),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    init_logging(&config, matches.get_count("verbose"));
    debug!(?config, "configuration loaded");

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return Ok(());
    }

    let leaves: Vec<Value> = match matches.get_one::<String>("path").map(String::as_str) {
        None => {
            debug!("no input path given, flattening the demo sample");
            flatten_with(&demo::sample(), config.traversal.strategy)
                .into_iter()
                .map(Value::from)
                .collect()
        }
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            let sequence = input::parse_str(&text, InputFormat::Json)?;
            flatten_with(&sequence, config.traversal.strategy)
        }
        Some(path) => {
            let sequence = input::read_path(path)?;
            flatten_with(&sequence, config.traversal.strategy)
        }
    };

    let rendered = FormatRegistry::shared().render(&leaves, &config.output.format)?;
    println!("{}", rendered);
    Ok(())
}

/// Layer the optional config file and CLI flags over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<NestflatConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(traversal) = matches.get_one::<Traversal>("traversal") {
        loader = loader.set_override("traversal.strategy", traversal.name())?;
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(config: &NestflatConfig, verbose: u8) {
    let filter = match verbose {
        0 => config.logging.filter.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::shared();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {:<12} {}", name, formatter.description());
        }
    }
}
