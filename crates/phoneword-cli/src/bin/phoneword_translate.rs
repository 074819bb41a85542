// phoneword-translate: Translate phone numbers into dictionary words.
//
// Prints one "NUMBER: TRANSLATION" line per translation found. Numbers with
// no translation print nothing.
//
// Usage:
//   phoneword-translate [-d DICT_PATH] [OPTIONS] [NUMBER...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (or directory containing dictionary.txt)
//   -i, --input PATH       Read phone numbers from a file (one per line)
//   --demo                 Use the built-in sample dictionary and phone numbers
//   --max N                Print at most N translations per number
//   -v, --verbose          Increase log verbosity (repeatable)
//   -q, --quiet            Suppress all log output
//   -h, --help             Print help
//   --                     Treat all following args as phone numbers

use std::io::{self, BufRead, BufWriter, Write};
use std::sync::Arc;

use phoneword::{LogObserver, Translation, Translator, sample};

fn print_help() {
    println!("phoneword-translate: Translate phone numbers into dictionary words.");
    println!();
    println!("Usage: phoneword-translate [-d DICT_PATH] [OPTIONS] [NUMBER...]");
    println!();
    println!("If NUMBER arguments are given, translates each number.");
    println!("Otherwise reads numbers from --input, or from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH   Dictionary file or directory containing dictionary.txt");
    println!("  -i, --input PATH       Read phone numbers from a file");
    println!("  --demo                 Use the built-in sample dictionary and numbers");
    println!("  --max N                Print at most N translations per number");
    println!("  -v, --verbose          Increase log verbosity (repeatable)");
    println!("  -q, --quiet            Suppress all log output");
    println!("  -h, --help             Print this help");
    println!("  --                     Treat all following args as phone numbers");
}

fn emit(out: &mut impl Write, translation: &Translation) {
    for line in translation.lines() {
        if let Err(e) = writeln!(out, "{line}") {
            phoneword_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (args, positional) = phoneword_cli::split_positional(&args);

    if phoneword_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (verbosity, quiet, args) = phoneword_cli::parse_log_flags(&args);
    let (dict_path, args) = phoneword_cli::parse_dict_path(&args);
    let (input_path, args) = phoneword_cli::parse_input_path(&args);

    if let Err(e) = phoneword_cli::setup_logging(verbosity, quiet) {
        phoneword_cli::fatal(&e);
    }

    let mut demo = false;
    let mut max_results: Option<usize> = None;
    let mut numbers: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--demo" => demo = true,
            "--max" => {
                if i + 1 < args.len() {
                    max_results = Some(
                        args[i + 1]
                            .parse()
                            .unwrap_or_else(|_| phoneword_cli::fatal("invalid number for --max")),
                    );
                    skip_next = true;
                } else {
                    phoneword_cli::fatal("--max requires a value");
                }
            }
            s if phoneword_cli::is_phone_number(s) => numbers.push(arg.clone()),
            s if s.starts_with("--") => phoneword_cli::fatal(&format!("unknown option: {s}")),
            _ => numbers.push(arg.clone()),
        }
    }
    numbers.extend(positional);

    let mut translator = if demo && dict_path.is_none() {
        Translator::new(sample::DICTIONARY.iter().copied()).with_observer(Arc::new(LogObserver))
    } else {
        phoneword_cli::load_translator(dict_path.as_deref())
            .unwrap_or_else(|e| phoneword_cli::fatal(&e))
    };
    translator.set_max_results(max_results);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !numbers.is_empty() {
        for number in &numbers {
            emit(&mut out, &translator.translate(number));
        }
    } else if let Some(path) = input_path {
        let translations = translator
            .translate_file(&path)
            .unwrap_or_else(|e| phoneword_cli::fatal(&e.to_string()));
        for translation in &translations {
            emit(&mut out, translation);
        }
    } else if demo {
        for number in sample::PHONE_NUMBERS {
            emit(&mut out, &translator.translate(number));
        }
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| {
                phoneword_cli::fatal(&format!("error reading phone number input: {e}"))
            });
            if line.trim().is_empty() {
                continue;
            }
            emit(&mut out, &translator.translate(&line));
            // Flush per number so interactive use sees output promptly.
            if let Err(e) = out.flush() {
                phoneword_cli::fatal(&format!("failed to write output: {e}"));
            }
        }
    }

    if let Err(e) = out.flush() {
        phoneword_cli::fatal(&format!("failed to write output: {e}"));
    }
}
