#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::mod_module_files)]

use std::process;

use isbninfo::{Error, ErrorKind, Isbn};

use clap::Parser;
use log::{debug, trace};

fn main() {
    let Cli {
        isbn,
        verbosity,
        quiet,
    } = Cli::parse();

    if let Err(err) = setup_errlog(usize::from(verbosity), quiet) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }

    if let Err(err) = run(&isbn) {
        debug!("{err}");
        for line in error_lines(&err) {
            println!("{line}");
        }
        process::exit(1);
    }
}

fn run(raw: &str) -> Result<(), Error> {
    trace!("'isbn' argument used with value of '{raw}'");
    let isbn = Isbn::parse(raw)?;
    let report = isbninfo::report_by_isbn(&isbn)?;
    print!("{report}");
    Ok(())
}

fn error_lines(err: &Error) -> Vec<String> {
    let message = match err.kind() {
        ErrorKind::Invalid => {
            return vec!["error: not a valid SBN, ISBN-10 or ISBN-13 number".to_owned()];
        }
        ErrorKind::NoValue => "unable to find entry",
        ErrorKind::IO => "unable to fetch entry",
        ErrorKind::Deserialize => "unexpected error",
    };

    let mut lines = vec![format!("error: {message}")];
    if let Some(detail) = err.detail() {
        lines.push(format!("\t{:?}: {detail}", err.kind()));
    }
    lines
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "isbn")]
#[clap(about = "Look up an SBN, ISBN-10 or ISBN-13 number in the Open Library catalog")]
#[clap(version, author)]
struct Cli {
    /// SBN, ISBN-10 or ISBN-13 number to search, any non-digit characters are ignored
    isbn: String,

    /// How chatty the program is on stderr
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only show errors on stderr.
    #[clap(short, long)]
    quiet: bool,
}

#[test]
fn not_found_and_fetch_errors_are_distinguishable() {
    let not_found = Error::new(ErrorKind::NoValue, "missing key 'records'");
    let fetch = Error::new(ErrorKind::IO, "connection refused");

    assert_eq!(
        vec!["error: unable to find entry", "\tNoValue: missing key 'records'"],
        error_lines(&not_found)
    );
    assert_eq!(
        vec!["error: unable to fetch entry", "\tIO: connection refused"],
        error_lines(&fetch)
    );
}

#[test]
fn malformed_response_is_an_unexpected_error() {
    let err = Error::new(ErrorKind::Deserialize, "Expected 'records' to be a JSON object");

    assert_eq!(
        vec![
            "error: unexpected error",
            "\tDeserialize: Expected 'records' to be a JSON object"
        ],
        error_lines(&err)
    );
}

#[test]
fn invalid_identifier_has_no_detail() {
    let err = Isbn::parse("123").unwrap_err();
    assert_eq!(
        vec!["error: not a valid SBN, ISBN-10 or ISBN-13 number"],
        error_lines(&err)
    );
}
