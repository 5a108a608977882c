use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{PersonModel, ResultModel};

/// Whole years elapsed from `from` to `to`. Never negative.
///
/// A Feb 29 anniversary falls on Feb 28 in non-leap years.
pub fn full_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut years = to.year() - from.year();
    let anniversary = from
        .with_year(to.year())
        .or_else(|| NaiveDate::from_ymd_opt(to.year(), 2, 28));
    if anniversary.is_some_and(|anniversary| to < anniversary) {
        years -= 1;
    }
    years.max(0) as u32
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Death date as `<Month> <day-ordinal> <year>`, e.g. `April 1st 1976`.
pub fn format_death_date(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Derive display fields for `person` as of `today`.
///
/// The age of a living person depends on `today`, so results are never
/// reused across calls.
pub fn format(person: &PersonModel, today: NaiveDate) -> ResultModel {
    let age = person.date_of_birth.map(|born| {
        let until = person.date_of_death.unwrap_or(today);
        full_years_between(born, until)
    });

    ResultModel {
        name: person.name.clone(),
        age,
        has_dob: person.has_dob(),
        is_dead: person.is_dead(),
        date_of_death: person.date_of_death.map(format_death_date),
        url: person.url.clone(),
        custom_message: person.custom_message.clone(),
    }
}

/// [`format`] against the current UTC date.
pub fn format_now(person: &PersonModel) -> ResultModel {
    format(person, Utc::now().date_naive())
}
