//! Command-line interface for bru files
//!
//! Usage:
//!   bru parse `<path>` [--format `<format>`] [--config `<file>`]  - Print the parsed document
//!   bru check `<path>`                                          - Report whether a file parses
//!   bru blocks `<path>`                                         - List the blocks of a file

use bru_lang::bru::ast::SourceLocation;
use bru_lang::bru::config::{load_defaults, BruConfig, Loader};
use bru_lang::bru::formats::{render, OutputFormat};
use bru_lang::{parse_blocks, parse_document_with, ParseError};
use clap::{Arg, ArgMatches, Command};
use std::error::Error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path_arg = || {
        Arg::new("path")
            .help("Path to the bru file")
            .required(true)
            .index(1)
    };
    let config_arg = || {
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Configuration file layered over the built-in defaults")
    };

    let matches = Command::new("bru")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting bru request files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the document")
                .arg(path_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (json, json-compact or yaml)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether a file parses")
                .arg(path_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("blocks")
                .about("List the blocks found in a file")
                .arg(path_arg())
                .arg(config_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("blocks", blocks_matches)) => handle_blocks_command(blocks_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<BruConfig, Box<dyn Error>> {
    let config_path = matches.get_one::<String>("config");
    let format = matches.try_get_one::<String>("format").ok().flatten();
    if config_path.is_none() && format.is_none() {
        return Ok(load_defaults()?);
    }

    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        // Validate here so a typo is reported by name
        let format: OutputFormat = format.parse()?;
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

fn read_source(matches: &ArgMatches) -> Result<(String, String), Box<dyn Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("missing path")?
        .clone();
    let source = std::fs::read_to_string(&path).map_err(|e| format!("reading {}: {}", path, e))?;
    Ok((path, source))
}

fn report(path: &str, error: &ParseError) -> String {
    format!(
        "{}:{}:{}: {}: {}",
        path,
        error.line() + 1,
        error.column() + 1,
        error.kind,
        error.message
    )
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config(matches)?;
    let (path, source) = read_source(matches)?;
    let doc = parse_document_with(&source, &config.parser).map_err(|e| report(&path, &e))?;
    println!("{}", render(&doc, &config.output)?);
    Ok(())
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config(matches)?;
    let (path, source) = read_source(matches)?;
    parse_document_with(&source, &config.parser).map_err(|e| report(&path, &e))?;
    println!("{}: ok", path);
    Ok(())
}

/// Handle the blocks command
fn handle_blocks_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config(matches)?;
    let (path, source) = read_source(matches)?;
    let blocks = parse_blocks(&source, &config.parser).map_err(|e| report(&path, &e))?;

    let location = SourceLocation::new(&source);
    for block in &blocks {
        let span = location.range_to_span(&block.span);
        println!(
            "{:<22} lines {}-{}",
            block.keyword.as_str(),
            span.start.line + 1,
            span.end.line + 1
        );
    }
    Ok(())
}
