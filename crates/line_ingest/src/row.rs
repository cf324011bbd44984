use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use time::{macros::format_description, Date, Month};

use crate::defaults::{DEFAULT_COMMENT_MARKER, FIELD_DELIMITER};
use crate::error::RowError;
use crate::intern::Interner;
use crate::summary::RunSummary;

/// Per-format field extraction.
///
/// Implementors only describe their columns: [`RowDecoder::arity`] and
/// [`RowDecoder::build`]. Blank-line handling, comment skipping, counting,
/// field-count validation and diagnostics are shared by every format through
/// the provided [`RowDecoder::decode`].
pub trait RowDecoder: Send + Sync {
    type Record: Send + 'static;

    /// Exact number of delimiter-separated columns a data line must have.
    fn arity(&self) -> usize;

    /// Lines that are counted in `records_total` but carry no data.
    fn is_skippable(&self, line: &str) -> bool {
        line.starts_with(DEFAULT_COMMENT_MARKER)
    }

    /// Coerces the columns of a line already known to have [`RowDecoder::arity`] fields.
    fn build(&self, fields: &mut Fields<'_>) -> Result<Self::Record, RowError>;

    /// Decodes one line, updating `summary` along the way.
    ///
    /// - whitespace-only lines return `None` and are not counted at all;
    /// - comments and headers count towards `records_total` only;
    /// - a wrong field count or a failed coercion adds one diagnostic.
    fn decode(&self, line: &str, summary: &mut RunSummary) -> Option<Self::Record> {
        if line.chars().all(char::is_whitespace) {
            return None;
        }
        summary.records_total += 1;
        if self.is_skippable(line) {
            return None;
        }
        summary.records_found += 1;

        let found = Fields::count(line);
        if found != self.arity() {
            summary.record_malformed(line);
            return None;
        }

        match self.build(&mut Fields::new(line)) {
            Ok(record) => Some(record),
            Err(err) => {
                summary.record_row_error(&err);
                None
            }
        }
    }
}

/// Cursor over the tab-separated columns of one line.
///
/// Accessors consume columns left to right and take the column name so a
/// failed coercion can say which column was wrong.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    parts: std::str::Split<'a, char>,
    position: usize,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            parts: line.split(FIELD_DELIMITER),
            position: 0,
        }
    }

    pub fn count(line: &str) -> usize {
        line.split(FIELD_DELIMITER).count()
    }

    /// Zero-based index of the next column.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&mut self, field: &'static str) -> Result<&'a str, RowError> {
        match self.parts.next() {
            Some(raw) => {
                self.position += 1;
                Ok(raw)
            }
            None => Err(RowError::coerce(
                field,
                "",
                format!("missing column {}", self.position + 1),
            )),
        }
    }

    pub fn owned(&mut self, field: &'static str) -> Result<String, RowError> {
        self.text(field).map(str::to_string)
    }

    /// Empty columns become `None`.
    pub fn optional_owned(&mut self, field: &'static str) -> Result<Option<String>, RowError> {
        let raw = self.text(field)?;
        Ok((!raw.is_empty()).then(|| raw.to_string()))
    }

    pub fn interned(
        &mut self,
        field: &'static str,
        interner: &dyn Interner,
    ) -> Result<Arc<str>, RowError> {
        self.text(field).map(|raw| interner.intern(raw))
    }

    pub fn parse<T>(&mut self, field: &'static str) -> Result<T, RowError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(field)?;
        raw.parse::<T>()
            .map_err(|err| RowError::coerce(field, raw, err))
    }

    /// Like [`Fields::parse`], but an empty column is `None` rather than an error.
    pub fn optional<T>(&mut self, field: &'static str) -> Result<Option<T>, RowError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(field)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<T>()
            .map(Some)
            .map_err(|err| RowError::coerce(field, raw, err))
    }

    /// `true` only for the literal `1`.
    pub fn flag(&mut self, field: &'static str) -> Result<bool, RowError> {
        self.text(field).map(|raw| raw == "1")
    }

    /// Optional date column. Values in neither `YYYY` nor `YYYY-MM-DD` form,
    /// such as the free-form periods in alternate names, are `None` and keep
    /// the row.
    pub fn date(&mut self, field: &'static str) -> Result<Option<Date>, RowError> {
        let raw = self.text(field)?;
        Ok(parse_date(raw).unwrap_or(None))
    }

    /// Applies a custom conversion to the next column.
    pub fn map<T>(
        &mut self,
        field: &'static str,
        convert: impl FnOnce(&'a str) -> Result<T, String>,
    ) -> Result<T, RowError> {
        let raw = self.text(field)?;
        convert(raw).map_err(|reason| RowError::coerce(field, raw, reason))
    }
}

/// Parses `YYYY` (as January 1st) or `YYYY-MM-DD`. Blank input is `None`.
pub fn parse_date(raw: &str) -> Result<Option<Date>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = raw.parse().map_err(|err| format!("{err}"))?;
        return Date::from_calendar_date(year, Month::January, 1)
            .map(Some)
            .map_err(|err| err.to_string());
    }

    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::NoInterning;

    struct Pair;

    #[derive(Debug, PartialEq)]
    struct PairRecord {
        name: String,
        count: i64,
    }

    impl RowDecoder for Pair {
        type Record = PairRecord;

        fn arity(&self) -> usize {
            2
        }

        fn build(&self, fields: &mut Fields<'_>) -> Result<PairRecord, RowError> {
            Ok(PairRecord {
                name: fields.owned("name")?,
                count: fields.parse("count")?,
            })
        }
    }

    #[test]
    fn blank_lines_are_not_counted() {
        let mut summary = RunSummary::new();
        assert!(Pair.decode("   \t ", &mut summary).is_none());
        assert!(Pair.decode("", &mut summary).is_none());
        assert_eq!(summary, RunSummary::new());
    }

    #[test]
    fn comments_count_towards_total_only() {
        let mut summary = RunSummary::new();
        assert!(Pair.decode("# header", &mut summary).is_none());
        assert_eq!(summary.records_total, 1);
        assert_eq!(summary.records_found, 0);
        assert!(summary.error_messages.is_empty());
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let mut summary = RunSummary::new();
        assert!(Pair.decode("only-one", &mut summary).is_none());
        assert_eq!(summary.records_found, 1);
        assert_eq!(summary.error_messages.len(), 1);
        assert!(summary.error_messages[0].contains("malformed"));
        assert!(summary.error_messages[0].contains("only-one"));
    }

    #[test]
    fn coercion_failure_names_the_column() {
        let mut summary = RunSummary::new();
        assert!(Pair.decode("x\tmany", &mut summary).is_none());
        assert_eq!(summary.error_messages.len(), 1);
        assert!(summary.error_messages[0].starts_with("Skipping error parsing row: 1"));
        assert!(summary.error_messages[0].contains("`count`"));
    }

    #[test]
    fn valid_line_builds_a_record() {
        let mut summary = RunSummary::new();
        let record = Pair.decode("x\t42", &mut summary).unwrap();
        assert_eq!(
            record,
            PairRecord {
                name: "x".to_string(),
                count: 42
            }
        );
        assert!(summary.is_clean());
    }

    #[test]
    fn accessors_follow_column_conventions() {
        let mut fields = Fields::new("1\t0\t\t2024\t2020-02-29\tIT");
        assert!(fields.flag("a").unwrap());
        assert!(!fields.flag("b").unwrap());
        assert_eq!(fields.optional::<i64>("c").unwrap(), None);
        assert_eq!(
            fields.date("d").unwrap(),
            Some(Date::from_calendar_date(2024, Month::January, 1).unwrap())
        );
        assert_eq!(
            fields.date("e").unwrap(),
            Some(Date::from_calendar_date(2020, Month::February, 29).unwrap())
        );
        assert_eq!(&*fields.interned("f", &NoInterning).unwrap(), "IT");
        assert!(fields.text("g").is_err());
    }

    #[test]
    fn unrecognised_date_forms_are_absent() {
        let mut fields = Fields::new("1850s\t2021-13-01\tyesterday");
        assert_eq!(fields.date("from").unwrap(), None);
        assert_eq!(fields.date("to").unwrap(), None);
        assert_eq!(fields.date("other").unwrap(), None);
    }

    #[test]
    fn flags_only_accept_literal_one() {
        for raw in ["0", "true", "", "01"] {
            assert!(!Fields::new(raw).flag("flag").unwrap(), "{raw:?}");
        }
    }

    #[test]
    fn parse_date_rejects_invalid_calendar_values() {
        assert!(parse_date("2021-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
        assert_eq!(parse_date(" ").unwrap(), None);
    }
}
