//! `sort` command line front end
//!
//! Sorts each input file into `<file>.sorted` (or `--output`), or checks
//! whether it is already sorted with `--check`.

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::warn;

use line_sort::{
    config::{ColumnKind, SortConfig, SortConfigBuilder},
    error::{SortError, SortResult},
    logging::{init_logging, LogConfig},
    sort, SortArgs,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    init_logging(&LogConfig::from_debug_flag(matches.get_flag("debug")));

    let config = parse_config_from_matches(&matches)?;
    if config.has_ignored_kind_flags() {
        warn!("-n, -h, -M and --sort only apply to a column; ignored without --key");
    }

    let args = parse_args_from_matches(&matches)?;
    sort(&config, &args)
}

fn build_cli() -> Command {
    Command::new("sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("sort [OPTION]... FILE...")
        .about("Sort lines of text files")
        .long_about("Sort lines of text files by whole line or by one column.\n\nEach FILE is sorted into FILE.sorted unless --output is given. With --check nothing is written; each FILE is reported as sorted or not.")
        .disable_help_flag(true) // -h is the suffixed-number sort
        .disable_version_flag(true)

        // Input files
        .arg(Arg::new("files")
            .help("Input files to sort")
            .num_args(1..)
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .value_name("FILE"))

        // Column selection
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by column N (1-based); 0 sorts by the whole line")
            .value_name("N")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64))
            .default_value("0"))
        .arg(Arg::new("field-separator")
            .short('t')
            .long("field-separator")
            .help("Use SEP instead of runs of whitespace to split columns")
            .value_name("SEP"))

        // Column kinds
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare the column as an integer")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare the column as a number with suffix (e.g., 9 10k 10m)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare the column as a month name (Jan < ... < Dec); requires --key")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("sort")
            .long("sort")
            .help("Compare the column according to KIND; requires --key")
            .long_help("Compare the column according to KIND: text, numeric -n, human-numeric -h, month -M. The single-letter flags take precedence when both are given.")
            .value_name("KIND")
            .value_parser(["text", "numeric", "human-numeric", "month"]))
        .arg(Arg::new("month-case-sensitive")
            .long("month-case-sensitive")
            .help("Only accept month names spelled Jan, Feb, ...")
            .action(ArgAction::SetTrue))

        // Modifiers
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the sorted output")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Output only the first occurrence of each line")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-trailing-blanks")
            .short('b')
            .long("ignore-trailing-blanks")
            .help("Ignore trailing spaces and tabs when comparing")
            .action(ArgAction::SetTrue))

        // Operation modes
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check for sorted input; do not sort")
            .action(ArgAction::SetTrue))

        // Output and execution
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of INPUT.sorted (single input only)")
            .value_parser(clap::value_parser!(PathBuf))
            .value_name("FILE"))
        .arg(Arg::new("parallel")
            .long("parallel")
            .help("Process up to N files concurrently")
            .value_parser(clap::value_parser!(usize))
            .value_name("N"))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log the resolved sort mode and per-file progress to stderr")
            .action(ArgAction::SetTrue))

        // Add explicit help and version options since we disabled the automatic ones
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    if let Some(&column) = matches.get_one::<i64>("key") {
        builder = builder.column(column);
    }

    if let Some(kind) = matches.get_one::<String>("sort") {
        builder = builder.kind(kind.parse::<ColumnKind>()?);
    }
    if matches.get_flag("numeric-sort") {
        builder = builder.numeric();
    }
    if matches.get_flag("human-numeric-sort") {
        builder = builder.numeric_suffix();
    }
    if matches.get_flag("month-sort") {
        builder = builder.month();
    }
    if matches.get_flag("month-case-sensitive") {
        builder = builder.month_case_sensitive();
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("unique") {
        builder = builder.unique();
    }
    if matches.get_flag("ignore-trailing-blanks") {
        builder = builder.ignore_trailing_whitespace();
    }
    if matches.get_flag("check") {
        builder = builder.check();
    }

    if let Some(sep_str) = matches.get_one::<String>("field-separator") {
        let mut chars = sep_str.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) => builder = builder.field_separator(sep),
            _ => return Err(SortError::invalid_field_separator(sep_str)),
        }
    }

    builder.build()
}

/// Parse file-level options from command line matches
fn parse_args_from_matches(matches: &ArgMatches) -> SortResult<SortArgs> {
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    let args = SortArgs::new(files)
        .with_output(matches.get_one::<PathBuf>("output").cloned())
        .with_parallel_threads(matches.get_one::<usize>("parallel").copied());

    args.validate()?;
    Ok(args)
}
