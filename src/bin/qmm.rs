//! Command-line interface for quickmm
//! Parses markup and prints the resulting component tree.
//!
//! Usage:
//!   qmm parse [`<markup>`] [--file `<path>`] [--format `<format>`] [--config `<path>`] [--locale `<tag>`] [-v]
//!   qmm palettes                                   - List the preset palettes known to `<pride>`
//!
//! Markup is taken from the argument, then `--file`, then stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{Level, Metadata, Record};
use quickmm::markup::color::palette_names;
use quickmm::markup::config::{Loader, OutputFormat, QuickConfig};
use quickmm::markup::formats::{FormatRegistry, TreevizFormatter};
use quickmm::markup::MarkupParser;
use std::io::Read;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("quickmm")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn install_logger(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::Debug,
        _ => Level::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

fn main() {
    let matches = Command::new("qmm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse tag markup into a component tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse markup and print the result")
                .arg(
                    Arg::new("markup")
                        .help("Markup to parse (reads stdin when neither this nor --file is given)")
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Read markup from a file")
                        .conflicts_with("markup"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format, overriding the configuration")
                        .value_parser(OutputFormat::ALL.map(OutputFormat::name)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .help("Locale passed to tag resolvers"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Log parser decisions to stderr (repeat for more)")
                        .action(ArgAction::Count),
                ),
        )
        .subcommand(Command::new("palettes").about("List preset palette names"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            install_logger(parse_matches.get_count("verbose"));
            handle_parse_command(parse_matches);
        }
        Some(("palettes", _)) => {
            for name in palette_names() {
                println!("{}", name);
            }
        }
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> QuickConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| {
                eprintln!("Invalid format: {}", e);
                std::process::exit(2);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(2);
    })
}

fn read_markup(matches: &ArgMatches) -> String {
    if let Some(markup) = matches.get_one::<String>("markup") {
        return markup.clone();
    }
    if let Some(path) = matches.get_one::<String>("file") {
        return std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        });
    }
    let mut markup = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut markup) {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    }
    markup
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let markup = read_markup(matches);

    let mut builder = MarkupParser::builder().config(config.parser.clone());
    if let Some(locale) = matches.get_one::<String>("locale") {
        builder = builder.locale(locale.as_str());
    }
    let parser = builder.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    });

    let component = parser.deserialize(markup.trim_end_matches('\n'));

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(config.output.show_styles));
    let output = registry
        .serialize(&component, config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
