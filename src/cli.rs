use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::io::Format;

// Exit Codes for different types of errors
pub const ERR_READ_INPUT: i32 = 1;
pub const ERR_LAYOUT: i32 = 2;
pub const ERR_MANIFEST: i32 = 3;
pub const ERR_WRITE_OUTPUT: i32 = 4;

pub fn print_errs(errs: &[String]) {
    for e in errs {
        eprintln!("{}", e);
    }
}

pub fn configure_cli() -> clap::App<'static, 'static> {
    let app = App::new("SPL Variable Allocator")
        .version("0.1.0")
        .author("Erich Ess")
        .about("Assigns stack frame offsets to the parameters and local variables of a type checked SPL program")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("Compilation unit to lay out: the program and its populated symbol table, as YAML or JSON (by file extension)"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false)
                .help("File the layout manifest will be written to. Written to stdout when not given."),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .possible_values(&["yaml", "json"])
                .takes_value(true)
                .help("Format of the layout manifest (default: yaml)"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .takes_value(true)
                .help("Writes log messages at or above the given level to stderr.  Use trace to see every offset as it is assigned."),
        );
    app
}

pub fn get_format(args: &ArgMatches) -> Format {
    args.value_of("format")
        .and_then(Format::from_name)
        .unwrap_or(Format::Yaml)
}

pub fn get_log_level(args: &ArgMatches) -> Option<LevelFilter> {
    match args.value_of("log-level")? {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Log messages go to stderr so they never mix with a manifest written to
/// stdout.
pub fn configure_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    WriteLogger::init(level, Config::default(), std::io::stderr())
}
