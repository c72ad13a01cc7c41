//! Command-line interface for conflang
//! Reads conflang source from a file or standard input and prints the translated document.
//!
//! Usage:
//!   conflang [`<path>`] [--format `<format>`] [--indent `<n>`] [--order `<order>`]  - Translate
//!   conflang --tokens [`<path>`]                                              - Dump the token stream
//!   conflang --list-formats                                                 - List output formats

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use conflang::config::{ConflangConfig, Loader};
use conflang::formats::FormatRegistry;
use conflang::lexing::tokenize_with_order;
use conflang::logging;
use conflang::translator::Translator;
use std::fmt::Display;
use std::io::Read;
use tracing::level_filters::LevelFilter;

/// Picked up from the working directory when `--config` is not given
const LOCAL_CONFIG: &str = "conflang.toml";

fn main() {
    let matches = Command::new("conflang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate conflang configuration files to XML")
        .arg(
            Arg::new("path")
                .help("Path to the conflang file ('-' or absent reads standard input)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'xml', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level; 0 keeps the output on one line")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .help("How token passes are combined")
                .value_parser(["pattern-priority", "source"]),
        )
        .arg(
            Arg::new("declaration")
                .long("declaration")
                .help("Prefix XML output with an XML declaration")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults (./conflang.toml if present)"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON instead of translating")
                .action(ArgAction::SetTrue),
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
                .help("Log more on standard error (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| fail(e));
    init_logging(&config, matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches.get_one::<String>("path").map(String::as_str);
    let source = read_source(path).unwrap_or_else(|e| fail(e));

    if matches.get_flag("tokens") {
        handle_tokens_command(&source, &config);
    } else {
        handle_translate_command(&source, &config);
    }
}

/// Layer the config file and command-line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<ConflangConfig, config::ConfigError> {
    let mut loader = Loader::new();
    loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(LOCAL_CONFIG),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(indent) = matches.get_one::<u16>("indent") {
        loader = loader.set_override("output.indent", i64::from(*indent))?;
    }
    if let Some(order) = matches.get_one::<String>("order") {
        loader = loader.set_override("lexer.order", order.as_str())?;
    }
    if matches.get_flag("declaration") {
        loader = loader.set_override("output.declaration", true)?;
    }
    loader.build()
}

fn init_logging(config: &ConflangConfig, verbosity: u8) {
    let base = logging::parse_level(&config.logging.level).unwrap_or(LevelFilter::WARN);
    logging::init(logging::bump_level(base, verbosity));
}

fn read_source(path: Option<&str>) -> Result<String, String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("cannot read standard input: {}", e))?;
            Ok(source)
        }
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))
        }
    }
}

/// Handle the default translate command
fn handle_translate_command(source: &str, config: &ConflangConfig) {
    let translator = Translator::from_config(config).unwrap_or_else(|e| fail(e));
    let output = translator.translate(source).unwrap_or_else(|e| fail(e));
    emit(&output);
}

/// Handle --tokens
fn handle_tokens_command(source: &str, config: &ConflangConfig) {
    let tokens = tokenize_with_order(source, config.lexer.order);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| fail(e));
    emit(&json);
}

/// Handle --list-formats
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}

fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
