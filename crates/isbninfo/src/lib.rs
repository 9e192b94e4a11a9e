#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! # isbninfo
//!
//! isbninfo validates SBN, ISBN-10 and ISBN-13 numbers, looks them up in the Open Library
//! catalog and summarises the matching [`record::Record`] as an aligned text [`report::Report`].

mod api;
mod error;
pub mod fields;
pub mod isbn;
pub mod record;
pub mod report;

pub use error::{Error, ErrorKind};
pub use isbn::Isbn;

use log::trace;
use record::Record;
use report::Report;

type Client = reqwest::blocking::Client;

/// Look up the catalog record of `isbn` using the Open Library API.
///
/// # Errors
///
/// An `Err` with [`ErrorKind::IO`] is returned when the request fails.
/// An `Err` with [`ErrorKind::NoValue`] is returned when no record is found for the `isbn`.
/// An `Err` with [`ErrorKind::Deserialize`] is returned when the response has an unexpected
/// shape.
#[inline]
pub fn record_by_isbn(isbn: &Isbn) -> Result<Record, Error> {
    trace!("Search record by ISBN of '{isbn}'");
    api::open_library::get_record_by_isbn::<Client>(isbn)
}

/// Look up `isbn` and build the summary of its catalog record.
///
/// # Errors
///
/// The same as [`record_by_isbn`].
#[inline]
pub fn report_by_isbn(isbn: &Isbn) -> Result<Report, Error> {
    record_by_isbn(isbn).map(|record| Report::new(&record, isbn))
}
