//! Rendering of extracted fields into aligned terminal text.

use std::fmt;

use log::trace;

use crate::{
    fields::{self, Field, Layout},
    isbn::Isbn,
    record::Record,
};

/// Width of the header column.
pub const JUSTIFY: usize = 10;
/// Characters per line that packed fields are fitted into.
pub const LINE_LEN: usize = 80;
/// Most lines a packed field may use, further values are dropped.
pub const MAX_SUBJECT_LINES: usize = 3;

const SEPARATOR: &str = " : ";
const SUBJECT_JOIN: &str = ", ";
const ELLIPSIS: &str = "...";

/// Extractors in the order their fields are presented.
const EXTRACTORS: [fn(&Record) -> Option<Field>; 14] = [
    fields::title,
    fields::subtitle,
    fields::author,
    fields::language,
    fields::format,
    fields::pages,
    fields::weight,
    fields::location,
    fields::date,
    fields::publisher,
    fields::edition,
    fields::series,
    fields::revision,
    fields::subjects,
];

/// The summary of a single catalog record.
///
/// The whole report is built before anything is written so a failure never leaves a partial
/// report behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    fields: Vec<Field>,
}

impl Report {
    /// Extracts every field of `record`, followed by its identifiers including `isbn`.
    #[must_use]
    pub fn new(record: &Record, isbn: &Isbn) -> Self {
        let mut fields: Vec<Field> = EXTRACTORS
            .iter()
            .filter_map(|extract| extract(record))
            .collect();
        fields.extend(fields::isbns(record, isbn));
        trace!("{} field(s) extracted", fields.len());

        Self { fields }
    }

    /// The extracted fields in presentation order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// All rendered lines of the report.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.fields.iter().flat_map(render_field).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders a field as `<header> : <value>` with further values aligned under the first.
#[must_use]
pub fn render_field(field: &Field) -> Vec<String> {
    let values = match field.layout() {
        Layout::Lines => field.values().to_vec(),
        Layout::Packed => wrap_subjects(field.values(), usable_width()),
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i == 0 {
                format!(
                    "{:<width$}{SEPARATOR}{}",
                    field.header(),
                    value.trim(),
                    width = JUSTIFY
                )
            } else {
                format!(
                    "{:width$}{}",
                    "",
                    value.trim(),
                    width = JUSTIFY + SEPARATOR.len()
                )
            }
        })
        .collect()
}

/// Characters left for values once the header column is taken off a line.
#[must_use]
pub const fn usable_width() -> usize {
    LINE_LEN - JUSTIFY - SEPARATOR.len()
}

/// Packs subjects into at most [`MAX_SUBJECT_LINES`] comma separated lines shorter than `width`.
///
/// Subjects are taken shortest first and a subject that does not fit on a line by itself is cut
/// short with an ellipsis. Once the last line is full the remaining subjects are dropped.
#[must_use]
pub fn wrap_subjects(subjects: &[String], width: usize) -> Vec<String> {
    let mut subjects: Vec<&str> = subjects.iter().map(String::as_str).collect();
    subjects.sort_by_key(|s| s.chars().count());

    let mut lines: Vec<String> = Vec::new();
    for subject in subjects {
        let subject = truncate(subject, width);

        let Some(line) = lines.last_mut() else {
            lines.push(subject);
            continue;
        };

        if line.chars().count() + SUBJECT_JOIN.len() + subject.chars().count() < width {
            line.push_str(SUBJECT_JOIN);
            line.push_str(&subject);
        } else if lines.len() < MAX_SUBJECT_LINES {
            lines.push(subject);
        } else {
            break;
        }
    }
    lines
}

fn truncate(subject: &str, width: usize) -> String {
    if subject.chars().count() >= width {
        let mut cut: String = subject
            .chars()
            .take(width.saturating_sub(ELLIPSIS.len()))
            .collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        subject.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn usable_width_leaves_room_for_header() {
        assert_eq!(67, usable_width());
    }

    #[test]
    fn single_value_is_aligned() {
        let field = Field::new("Title", strings(&["  Programming in Rust "]));
        assert_eq!(vec!["Title      : Programming in Rust"], render_field(&field));
    }

    #[test]
    fn continuation_values_align_under_first() {
        let field = Field::new("Location", strings(&["New York", " London "]));
        assert_eq!(
            vec!["Location   : New York", "             London"],
            render_field(&field)
        );
    }

    #[test]
    fn empty_field_renders_nothing() {
        let field = Field::new("Author", vec![]);
        assert!(render_field(&field).is_empty());
    }

    #[test]
    fn subjects_are_packed_shortest_first() {
        let subjects = strings(&["Machine learning", "AI", "Robotics"]);
        assert_eq!(
            vec!["AI, Robotics, Machine learning"],
            wrap_subjects(&subjects, usable_width())
        );
    }

    #[test]
    fn oversized_subject_is_truncated() {
        let long =
            "A very long subject string exceeding the usable width of a single line of output";
        let subjects = strings(&["AI", "Machine learning", long]);
        let lines = wrap_subjects(&subjects, usable_width());

        assert_eq!(2, lines.len());
        assert_eq!("AI, Machine learning", lines[0]);
        assert_eq!(67, lines[1].chars().count());
        assert!(lines[1].ends_with("..."));
        assert!(lines[1].starts_with("A very long subject"));

        let field = Field::packed("Subject", subjects);
        for line in render_field(&field) {
            assert!(line.chars().count() <= LINE_LEN, "{line}");
        }
    }

    #[test]
    fn packing_stops_at_line_cap() {
        let subjects: Vec<String> = (0..40).map(|i| format!("Subject number {i:02}")).collect();
        let lines = wrap_subjects(&subjects, usable_width());

        assert_eq!(MAX_SUBJECT_LINES, lines.len());
        for line in &lines {
            assert!(line.chars().count() < usable_width(), "{line}");
        }
    }

    #[test]
    fn line_is_broken_when_join_reaches_width() {
        // "aaaa, bbbb" is exactly 10 characters which is not under the width
        let subjects = strings(&["aaaa", "bbbb"]);
        assert_eq!(vec!["aaaa", "bbbb"], wrap_subjects(&subjects, 10));
        assert_eq!(vec!["aaaa, bbbb"], wrap_subjects(&subjects, 11));
    }

    #[test]
    fn report_follows_presentation_order() {
        let body: serde_json::Value =
            serde_json::from_str(include_str!("../tests/data/open_library_brief.json")).unwrap();
        let entry = body["records"]["/books/OL24381036M"].clone();
        let record = Record::try_from(entry).unwrap();
        let isbn = Isbn::parse("9780306406157").unwrap();

        let report = Report::new(&record, &isbn);
        let expected = "\
Title      : Programming in Rust
Subtitle   : a practical introduction
             Jane Example
             with a foreword by John Sample.
Author     : Jane Example
Language   : English
             Xyz
Format     : Paperback
Pages      : 320
Weight     : 1.2 pounds
Location   : New York
             London
Date       : 2009
Publisher  : Example Press
Edition    : 2nd ed.
Series     : Systems programming series
Revision   : 5
Subject    : Systems programming, Computer programming
             Rust (Computer program language)
ISBN-10    : 0306406152
ISBN-13    : 9780306406157
";
        assert_eq!(expected, report.to_string());
    }

    #[test]
    fn report_uses_data_fallbacks() {
        let record = Record::try_from(json!({
            "details": { "details": { "title": "untitled" } },
            "data": {
                "authors": [{ "name": "Anon" }],
                "subjects": [{ "name": "Poetry" }]
            },
            "isbns": []
        }))
        .unwrap();
        let isbn = Isbn::parse("0306406152").unwrap();

        assert_eq!(
            vec![
                "Title      : Untitled",
                "Author     : Anon",
                "Subject    : Poetry",
                "ISBN-10    : 0306406152",
            ],
            Report::new(&record, &isbn).lines()
        );
    }
}
