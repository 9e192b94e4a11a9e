//! Extractors that pull single report fields out of a [`Record`].
//!
//! Every extractor is independent of the others and yields `None` when the data it looks for is
//! absent. A field that is present but empty yields a [`Field`] without values, which renders as
//! nothing.

use serde_json::Value;

use crate::{
    isbn::Isbn,
    record::{display_value, pluck, Record},
};

/// How the values of a [`Field`] are laid out when rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One value per line.
    Lines,
    /// Values are packed into a few comma separated lines, shortest first.
    Packed,
}

/// A header with the values to show next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    header: &'static str,
    values: Vec<String>,
    layout: Layout,
}

impl Field {
    /// A field rendered with one value per line.
    #[must_use]
    pub const fn new(header: &'static str, values: Vec<String>) -> Self {
        Self {
            header,
            values,
            layout: Layout::Lines,
        }
    }

    /// A field whose values are packed into comma separated lines.
    #[must_use]
    pub const fn packed(header: &'static str, values: Vec<String>) -> Self {
        Self {
            header,
            values,
            layout: Layout::Packed,
        }
    }

    /// The label shown in the header column.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        self.header
    }

    /// The values in the order they were found, not yet trimmed.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// How the values are laid out.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }
}

/// Languages that are shown by name instead of by their three letter code.
const LANGUAGES: [(&str, &str); 20] = [
    ("ara", "Arabic"),
    ("chi", "Chinese"),
    ("cze", "Czech"),
    ("dan", "Danish"),
    ("dut", "Dutch"),
    ("eng", "English"),
    ("fin", "Finnish"),
    ("fre", "French"),
    ("ger", "German"),
    ("gre", "Greek"),
    ("hin", "Hindi"),
    ("ita", "Italian"),
    ("jpn", "Japanese"),
    ("lat", "Latin"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("rus", "Russian"),
    ("spa", "Spanish"),
    ("swe", "Swedish"),
    ("tur", "Turkish"),
];

type Accessor<T> = fn(&Record) -> Option<T>;

/// Tries each accessor in order and returns the first value found.
fn first_of<T>(record: &Record, accessors: &[Accessor<T>]) -> Option<T> {
    accessors.iter().find_map(|accessor| accessor(record))
}

/// Uppercases the first character only, the rest is left as is.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Expands a known language code to its English name, otherwise returns the code unchanged.
#[must_use]
pub fn expand_language(code: &str) -> String {
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map_or_else(|| code.to_owned(), |(_, name)| (*name).to_owned())
}

fn values_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(display_value).collect(),
        other => display_value(other).into_iter().collect(),
    }
}

fn names_of(list: &Value) -> Option<Vec<String>> {
    pluck(list, "name").map(|names| names.into_iter().filter_map(display_value).collect())
}

fn keyed(record: &Record, header: &'static str, key: &str) -> Option<Field> {
    let values = match record.detail(key)? {
        Value::String(s) => vec![capitalize(s)],
        other => values_of(other),
    };
    Some(Field::new(header, values))
}

/// The `title`.
#[must_use]
pub fn title(record: &Record) -> Option<Field> {
    keyed(record, "Title", "title")
}

/// The `edition_name`.
#[must_use]
pub fn edition(record: &Record) -> Option<Field> {
    keyed(record, "Edition", "edition_name")
}

/// The `physical_format`, such as paperback.
#[must_use]
pub fn format(record: &Record) -> Option<Field> {
    keyed(record, "Format", "physical_format")
}

/// The `number_of_pages`.
#[must_use]
pub fn pages(record: &Record) -> Option<Field> {
    keyed(record, "Pages", "number_of_pages")
}

/// The `weight`.
#[must_use]
pub fn weight(record: &Record) -> Option<Field> {
    keyed(record, "Weight", "weight")
}

/// The `publish_date`.
#[must_use]
pub fn date(record: &Record) -> Option<Field> {
    keyed(record, "Date", "publish_date")
}

/// The `publishers`, one per line.
#[must_use]
pub fn publisher(record: &Record) -> Option<Field> {
    keyed(record, "Publisher", "publishers")
}

/// The `series`.
#[must_use]
pub fn series(record: &Record) -> Option<Field> {
    keyed(record, "Series", "series")
}

/// The `publish_places`, one per line.
#[must_use]
pub fn location(record: &Record) -> Option<Field> {
    keyed(record, "Location", "publish_places")
}

/// The subtitle followed by each part of the `by_statement`.
#[must_use]
pub fn subtitle(record: &Record) -> Option<Field> {
    let subtitle = record.detail("subtitle");
    let by_statement = record.detail("by_statement");
    if subtitle.is_none() && by_statement.is_none() {
        return None;
    }

    let mut values: Vec<String> = subtitle.and_then(display_value).into_iter().collect();
    if let Some(by_statement) = by_statement.and_then(display_value) {
        values.extend(by_statement.split(" ;").map(str::to_owned));
    }

    Some(Field::new("Subtitle", values))
}

fn detail_authors(record: &Record) -> Option<Vec<String>> {
    record.detail("authors").and_then(names_of)
}

fn data_authors(record: &Record) -> Option<Vec<String>> {
    record.datum("authors").and_then(names_of)
}

const AUTHORS: [Accessor<Vec<String>>; 2] = [detail_authors, data_authors];

/// Author names from the details, falling back to the `data` mapping.
#[must_use]
pub fn author(record: &Record) -> Option<Field> {
    first_of(record, &AUTHORS).map(|names| Field::new("Author", names))
}

fn detail_revision(record: &Record) -> Option<Vec<String>> {
    record.detail("revision").map(values_of)
}

fn latest_revision(record: &Record) -> Option<Vec<String>> {
    record.detail("latest_revision").map(values_of)
}

const REVISIONS: [Accessor<Vec<String>>; 2] = [detail_revision, latest_revision];

/// The `revision`, falling back to `latest_revision`.
#[must_use]
pub fn revision(record: &Record) -> Option<Field> {
    first_of(record, &REVISIONS).map(|r| Field::new("Revision", r))
}

/// Languages from their `/languages/<code>` keys, expanded to names where the code is known.
#[must_use]
pub fn language(record: &Record) -> Option<Field> {
    let keys = pluck(record.detail("languages")?, "key")?;
    let languages = keys
        .into_iter()
        .filter_map(display_value)
        .map(|key| {
            let code = key.rsplit('/').next().unwrap_or_default();
            expand_language(&capitalize(code))
        })
        .collect();

    Some(Field::new("Language", languages))
}

fn detail_subjects(record: &Record) -> Option<Vec<String>> {
    record.detail("subjects").map(values_of)
}

fn data_subjects(record: &Record) -> Option<Vec<String>> {
    record.datum("subjects").and_then(names_of)
}

const SUBJECTS: [Accessor<Vec<String>>; 2] = [detail_subjects, data_subjects];

/// Subjects from the details, falling back to the names in the `data` mapping.
#[must_use]
pub fn subjects(record: &Record) -> Option<Field> {
    first_of(record, &SUBJECTS).map(|s| Field::packed("Subject", s))
}

/// The label an identifier of this length is shown with.
#[must_use]
pub fn isbn_label(isbn: &str) -> Option<&'static str> {
    match isbn.chars().count() {
        9 => Some("SBN"),
        10 => Some("ISBN-10"),
        13 => Some("ISBN-13"),
        _ => None,
    }
}

/// All identifiers of the record together with the one that was searched for, shortest first.
///
/// Identifiers that are not 9, 10 or 13 characters long are left out.
#[must_use]
pub fn isbns(record: &Record, queried: &Isbn) -> Vec<Field> {
    let mut isbns = record.isbns().map(values_of).unwrap_or_default();
    if !isbns.iter().any(|isbn| isbn == queried.as_str()) {
        isbns.push(queried.to_string());
    }
    isbns.sort_by_key(|isbn| isbn.chars().count());

    isbns
        .into_iter()
        .filter_map(|isbn| isbn_label(&isbn).map(|label| Field::new(label, vec![isbn])))
        .collect()
}
