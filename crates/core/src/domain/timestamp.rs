//! Timestamps with a fixed UTC offset.
//!
//! Decoding tries an ordered table of layouts and keeps the first match.
//! Layouts naming the zone by abbreviation, and layouts with no zone at all,
//! are read as UTC. Layouts without a year land in year 0.

use std::borrow::Cow;
use std::fmt;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

/// Output format: RFC 3339 with a colon offset and second precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// How a layout carries its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    /// Trailing `+hhmm`
    Offset,
    /// Trailing `+hh:mm`
    OffsetColon,
    /// Trailing `Z` or `+hhmm`
    OffsetOrZulu,
    /// Trailing `Z` or `+hh:mm`
    OffsetColonOrZulu,
    /// `+hhmm` somewhere inside the text
    Inline,
    /// Zone abbreviation, read as UTC
    Abbreviation,
    /// No zone, read as UTC
    Absent,
}

/// Date fields a layout leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Missing {
    Nothing,
    Year,
    Date,
}

/// One accepted timestamp layout.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    name: &'static str,
    pattern: &'static str,
    zone: Zone,
    missing: Missing,
}

impl Layout {
    const fn new(name: &'static str, pattern: &'static str, zone: Zone, missing: Missing) -> Self {
        Layout {
            name,
            pattern,
            zone,
            missing,
        }
    }

    /// Layout name, as reported in errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// strftime pattern
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    fn parse(&self, text: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
        let text = self.normalize(text)?;
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, &text, StrftimeItems::new(self.pattern))
            .map_err(|e| e.to_string())?;
        match self.missing {
            Missing::Nothing => {}
            Missing::Year => parsed.set_year(0).map_err(|e| e.to_string())?,
            Missing::Date => {
                parsed.set_year(0).map_err(|e| e.to_string())?;
                parsed.set_month(1).map_err(|e| e.to_string())?;
                parsed.set_day(1).map_err(|e| e.to_string())?;
            }
        }
        let offset = match self.zone {
            Zone::Abbreviation | Zone::Absent => Utc.fix(),
            _ => parsed.to_fixed_offset().map_err(|e| e.to_string())?,
        };
        let local = parsed
            .to_naive_datetime_with_offset(offset.local_minus_utc())
            .map_err(|e| e.to_string())?;
        offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| "ambiguous local time".to_string())
    }

    /// Check the trailing offset form and rewrite `Z` as a numeric offset.
    fn normalize<'a>(&self, text: &'a str) -> std::result::Result<Cow<'a, str>, String> {
        let utc = match self.zone {
            Zone::OffsetOrZulu => Some("+0000"),
            Zone::OffsetColonOrZulu => Some("+00:00"),
            _ => None,
        };
        if let (Some(utc), Some(head)) = (utc, text.strip_suffix('Z')) {
            return Ok(Cow::Owned(format!("{}{}", head, utc)));
        }
        match self.zone {
            Zone::Offset | Zone::OffsetOrZulu if !ends_with_offset(text, false) => {
                Err("expected trailing offset like +0700".to_string())
            }
            Zone::OffsetColon | Zone::OffsetColonOrZulu if !ends_with_offset(text, true) => {
                Err("expected trailing offset like +07:00".to_string())
            }
            Zone::Abbreviation if text.split_whitespace().any(is_numeric_offset) => {
                Err("numeric offset where a zone name was expected".to_string())
            }
            _ => Ok(Cow::Borrowed(text)),
        }
    }
}

fn is_numeric_offset(token: &str) -> bool {
    token.starts_with(['+', '-']) && token.len() > 1
}

fn ends_with_offset(text: &str, colon: bool) -> bool {
    let tail = text.as_bytes();
    let width = if colon { 6 } else { 5 };
    if tail.len() < width {
        return false;
    }
    let tail = &tail[tail.len() - width..];
    let digits_ok = |range: &[u8]| range.iter().all(u8::is_ascii_digit);
    matches!(tail[0], b'+' | b'-')
        && if colon {
            digits_ok(&tail[1..3]) && tail[3] == b':' && digits_ok(&tail[4..6])
        } else {
            digits_ok(&tail[1..5])
        }
}

/// Accepted layouts, in priority order.
pub const TIMESTAMP_LAYOUTS: &[Layout] = &[
    Layout::new("rfc3339-offset", "%Y-%m-%dT%H:%M:%S%.f%z", Zone::Offset, Missing::Nothing),
    Layout::new("rfc3339-colon", "%Y-%m-%dT%H:%M:%S%.f%:z", Zone::OffsetColon, Missing::Nothing),
    Layout::new("rfc3339-zulu", "%Y-%m-%dT%H:%M:%S%.f%z", Zone::OffsetOrZulu, Missing::Nothing),
    Layout::new("rfc822", "%d %b %y %H:%M %Z", Zone::Abbreviation, Missing::Nothing),
    Layout::new("rfc822z", "%d %b %y %H:%M %z", Zone::Offset, Missing::Nothing),
    Layout::new("ansic", "%a %b %e %H:%M:%S%.f %Y", Zone::Absent, Missing::Nothing),
    Layout::new("unix-date", "%a %b %e %H:%M:%S%.f %Z %Y", Zone::Abbreviation, Missing::Nothing),
    Layout::new("ruby-date", "%a %b %d %H:%M:%S%.f %z %Y", Zone::Inline, Missing::Nothing),
    Layout::new("rfc850", "%A, %d-%b-%y %H:%M:%S%.f %Z", Zone::Abbreviation, Missing::Nothing),
    Layout::new("rfc1123", "%a, %d %b %Y %H:%M:%S%.f %Z", Zone::Abbreviation, Missing::Nothing),
    Layout::new("rfc1123z", "%a, %d %b %Y %H:%M:%S%.f %z", Zone::Offset, Missing::Nothing),
    Layout::new("rfc3339", "%Y-%m-%dT%H:%M:%S%.f%:z", Zone::OffsetColonOrZulu, Missing::Nothing),
    Layout::new("kitchen", "%I:%M%p", Zone::Absent, Missing::Date),
    Layout::new("stamp", "%b %e %H:%M:%S", Zone::Absent, Missing::Year),
    Layout::new("stamp-milli", "%b %e %H:%M:%S%.3f", Zone::Absent, Missing::Year),
    Layout::new("stamp-micro", "%b %e %H:%M:%S%.6f", Zone::Absent, Missing::Year),
    Layout::new("stamp-nano", "%b %e %H:%M:%S%.9f", Zone::Absent, Missing::Year),
    Layout::new("slash-offset", "%Y/%m/%dT%H:%M:%S%.f%z", Zone::Offset, Missing::Nothing),
    Layout::new("slash-local", "%Y/%m/%d %H:%M:%S%.f", Zone::Absent, Missing::Nothing),
];

/// Parse timestamp text against the layout table.
///
/// Returns the instant and the name of the layout that matched. When nothing
/// matches, the error carries the first layout's failure.
pub fn parse_timestamp(text: &str) -> Result<(DateTime<FixedOffset>, &'static str)> {
    let mut first_failure = None;
    for layout in TIMESTAMP_LAYOUTS {
        match layout.parse(text) {
            Ok(ts) => return Ok((ts, layout.name)),
            Err(reason) => {
                first_failure.get_or_insert((layout.name, reason));
            }
        }
    }
    let (layout, reason) = first_failure.unwrap_or(("none", "no layouts configured".into()));
    Err(ValueError::TimeFormat {
        input: text.to_string(),
        layout,
        reason,
    })
}

fn utc_epoch_zero() -> DateTime<FixedOffset> {
    let day_one = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
    Utc.fix()
        .from_utc_datetime(&NaiveDateTime::new(day_one, NaiveTime::default()))
}

impl sealed::Sealed for DateTime<FixedOffset> {}

impl Domain for DateTime<FixedOffset> {
    const KIND: Kind = Kind::Timestamp;

    fn zero() -> Self {
        utc_epoch_zero()
    }

    fn zero_literal() -> &'static str {
        "\"\""
    }

    fn decode(lit: &[u8]) -> Result<Option<Self>> {
        let text = literal::unquote(lit)
            .map_err(|e| ValueError::validation(Kind::Timestamp, lit, e.to_string()))?;
        if text.is_empty() {
            return Ok(None);
        }
        parse_timestamp(&text).map(|(ts, _)| Some(ts))
    }

    fn encode(&self) -> Result<String> {
        literal::quote(&self.format(TIMESTAMP_FORMAT).to_string())
            .map_err(|e| ValueError::encode(Kind::Timestamp, e))
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(TIMESTAMP_FORMAT))
    }

    fn to_datum(&self) -> Datum {
        Datum::Timestamp(*self)
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::Timestamp(v) => Ok(v),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Timestamp(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Timestamp(v) => Some(v),
            _ => None,
        }
    }
}

impl Nullable<DateTime<FixedOffset>> {
    /// Re-express the held instant in UTC. State flags are untouched.
    pub fn set_to_utc(&mut self) {
        self.value = self.value.with_timezone(&Utc.fix());
    }
}
