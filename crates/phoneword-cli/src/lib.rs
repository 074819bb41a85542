// phoneword-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use phoneword::{LogObserver, Translator};
use phoneword_core::character::is_separator;

/// Dictionary file name looked up inside search directories.
const DICT_FILE: &str = "dictionary.txt";

/// Environment variable naming a dictionary file or a directory containing one.
const DICT_ENV: &str = "PHONEWORD_DICT_PATH";

/// Search for a dictionary file and create a Translator.
///
/// Search order:
/// 1. `dict_path` argument (if provided; file, or directory with `dictionary.txt`)
/// 2. `PHONEWORD_DICT_PATH` environment variable (same rules)
/// 3. `~/.phoneword/dictionary.txt`
/// 4. Current working directory (`./dictionary.txt`)
pub fn load_translator(dict_path: Option<&str>) -> Result<Translator, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            log::info!("loading dictionary from {}", path.display());
            return Translator::from_path_observed(path, Arc::new(LogObserver))
                .map_err(|e| format!("failed to load dictionary: {e}"));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        push_file_or_dir(&mut paths, Path::new(p));
    }

    // 2. Environment variable
    if let Ok(env_path) = std::env::var(DICT_ENV) {
        push_file_or_dir(&mut paths, Path::new(&env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".phoneword").join(DICT_FILE));
    }

    // 4. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

fn push_file_or_dir(paths: &mut Vec<PathBuf>, p: &Path) {
    paths.push(p.to_path_buf());
    paths.push(p.join(DICT_FILE));
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", "-d")
}

/// Parse a `--input=PATH` or `-i PATH` argument from command line args.
///
/// Returns `(input_path, remaining_args)`.
pub fn parse_input_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--input", "-i")
}

fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Split args at the first `--`. Everything after it is positional.
///
/// Returns `(option_args, positional_args)`.
pub fn split_positional(args: &[String]) -> (Vec<String>, Vec<String>) {
    match args.iter().position(|a| a == "--") {
        Some(i) => (args[..i].to_vec(), args[i + 1..].to_vec()),
        None => (args.to_vec(), Vec::new()),
    }
}

/// Whether `arg` consists only of digits and separators, so it is a phone
/// number even when it starts with dashes.
pub fn is_phone_number(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit() || is_separator(c))
}

/// Count `-v`/`--verbose` flags (`-vv` counts twice) and detect `-q`/`--quiet`.
///
/// Returns `(verbosity, quiet, remaining_args)`.
pub fn parse_log_flags(args: &[String]) -> (u8, bool, Vec<String>) {
    let mut verbosity: u8 = 0;
    let mut quiet = false;
    let mut remaining = Vec::new();

    for arg in args {
        if arg == "--verbose" {
            verbosity = verbosity.saturating_add(1);
        } else if arg == "-q" || arg == "--quiet" {
            quiet = true;
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') {
            verbosity = verbosity.saturating_add((arg.len() - 1) as u8);
        } else {
            remaining.push(arg.clone());
        }
    }

    (verbosity, quiet, remaining)
}

/// Map a verbosity count to a log level.
///
/// `0` means "use `default`"; otherwise 1 error, 2 warn, 3 info, 4 debug,
/// 5+ trace.
pub fn log_level(verbosity: u8, default: u8) -> log::LevelFilter {
    let level = if verbosity > 0 { verbosity } else { default };
    match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize stderr logging.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), String> {
    let level = match log_level(verbosity, 2) {
        log::LevelFilter::Off => stderrlog::LogLevelNum::Off,
        log::LevelFilter::Error => stderrlog::LogLevelNum::Error,
        log::LevelFilter::Warn => stderrlog::LogLevelNum::Warn,
        log::LevelFilter::Info => stderrlog::LogLevelNum::Info,
        log::LevelFilter::Debug => stderrlog::LogLevelNum::Debug,
        log::LevelFilter::Trace => stderrlog::LogLevelNum::Trace,
    };

    stderrlog::new()
        .quiet(quiet)
        .verbosity(level)
        .init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
