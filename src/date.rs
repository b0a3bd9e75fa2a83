use std::borrow::Cow;

use time::{format_description::well_known::Iso8601, Date};

use crate::error::ValueError;

/// Language used for weekday and month names.
///
/// Only English exists. The locale is still spelled out so the output never
/// depends on the environment the program runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
}

/// Parse an ISO-8601 date or date-time, keeping only the calendar date.
///
/// A space is accepted in place of the `T` separator, as in
/// `2021-07-06 07:00:00`.
pub fn parse_iso_date(iso: &str) -> Result<Date, ValueError> {
    let normalized: Cow<'_, str> = match (iso.get(..10), iso.get(11..)) {
        (Some(date), Some(time)) if iso.as_bytes()[10] == b' ' => {
            Cow::Owned(format!("{date}T{time}"))
        }
        _ => Cow::Borrowed(iso),
    };
    Date::parse(&normalized, &Iso8601::DEFAULT).map_err(|source| ValueError::InvalidDate {
        input: iso.to_string(),
        source,
    })
}

/// `2021-07-06` becomes `Tuesday 06 July 2021`.
pub fn convert_date(iso: &str) -> Result<String, ValueError> {
    convert_date_in(iso, Locale::default())
}

pub fn convert_date_in(iso: &str, locale: Locale) -> Result<String, ValueError> {
    let date = parse_iso_date(iso)?;
    Ok(match locale {
        Locale::English => format!(
            "{} {:02} {} {:04}",
            date.weekday(),
            date.day(),
            date.month(),
            date.year()
        ),
    })
}
