use log::{debug, info, trace};
use serde_json::Value;

use crate::{isbn::Isbn, record::Record, Error, ErrorKind};

use super::Client;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/api/volumes/brief/isbn/";

pub(crate) fn url_for(isbn: &Isbn) -> String {
    let mut url = OPEN_LIBRARY_URL.to_owned();
    url.push_str(isbn.as_str());
    url.push_str(".json");
    url
}

pub(crate) fn get_record_by_isbn<C: Client>(isbn: &Isbn) -> Result<Record, Error> {
    info!("Searching for ISBN '{isbn}' using the Open Library API");
    let url = url_for(isbn);

    let client = C::default();
    let body: Value = client.get_json(&url)?;

    trace!("Request was successful");

    first_record(body, isbn).and_then(Record::try_from)
}

/// Takes the first record of a brief lookup response, in the order the service returned them.
///
/// The service answers an unknown identifier with an empty list (or an empty object), so anything
/// without a `records` mapping is treated as not found.
fn first_record(body: Value, isbn: &Isbn) -> Result<Value, Error> {
    let Value::Object(mut body) = body else {
        return Err(no_records(isbn));
    };

    match body.remove("records") {
        None => Err(Error::new(ErrorKind::NoValue, "missing key 'records'")),
        Some(Value::Null) => Err(no_records(isbn)),
        Some(Value::Object(records)) => {
            debug!("{} record(s) found", records.len());
            records
                .into_iter()
                .next()
                .map(|(_, r)| r)
                .ok_or_else(|| no_records(isbn))
        }
        Some(_) => Err(Error::new(
            ErrorKind::Deserialize,
            "Expected 'records' to be a JSON object",
        )),
    }
}

fn no_records(isbn: &Isbn) -> Error {
    Error::new(ErrorKind::NoValue, format!("no records for '{isbn}'"))
}
