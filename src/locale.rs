//! Libellés d'interface (ukrainien / anglais).

use crate::model::Language;
use chrono::{Datelike, NaiveDate, Weekday};

const UK_WEEKDAYS: [&str; 7] = [
    "понеділок",
    "вівторок",
    "середа",
    "четвер",
    "пʼятниця",
    "субота",
    "неділя",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const UK_WEEKDAYS_SHORT: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"];
const EN_WEEKDAYS_SHORT: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const UK_MONTHS: [&str; 12] = [
    "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень", "Липень", "Серпень",
    "Вересень", "Жовтень", "Листопад", "Грудень",
];
// génitif, pour « 5 січня 2026 »
const UK_MONTHS_GENITIVE: [&str; 12] = [
    "січня", "лютого", "березня", "квітня", "травня", "червня", "липня", "серпня", "вересня",
    "жовтня", "листопада", "грудня",
];
const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn title(language: Language) -> &'static str {
    match language {
        Language::Primary => "Графік змін",
        Language::Secondary => "Shift schedule",
    }
}

/// Nom affiché quand l'hôte ne fournit pas d'utilisateur.
pub fn fallback_user(language: Language) -> &'static str {
    match language {
        Language::Primary => "Користувач",
        Language::Secondary => "User",
    }
}

/// Texte affiché à la place de la plage horaire un jour de repos.
pub fn rest_hint(language: Language) -> &'static str {
    match language {
        Language::Primary => "Відпочинь добре 😊",
        Language::Secondary => "Have a good rest 😊",
    }
}

pub fn reminder_label(language: Language) -> &'static str {
    match language {
        Language::Primary => "Нагадування про зміну",
        Language::Secondary => "Shift reminder",
    }
}

pub fn greeting(language: Language, user: &str, supervisor: &str) -> String {
    match language {
        Language::Primary => format!("Привіт, {user}! Ти з зміни {supervisor}"),
        Language::Secondary => format!("Hi, {user}! You are on {supervisor}'s shift"),
    }
}

pub fn weekday_name(language: Language, weekday: Weekday) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match language {
        Language::Primary => UK_WEEKDAYS[idx],
        Language::Secondary => EN_WEEKDAYS[idx],
    }
}

pub fn weekday_short(language: Language, weekday: Weekday) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match language {
        Language::Primary => UK_WEEKDAYS_SHORT[idx],
        Language::Secondary => EN_WEEKDAYS_SHORT[idx],
    }
}

/// Nom du mois (nominatif), `month` dans 1..=12.
pub fn month_name(language: Language, month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    match language {
        Language::Primary => UK_MONTHS.get(idx).copied(),
        Language::Secondary => EN_MONTHS.get(idx).copied(),
    }
}

/// Date longue : `понеділок, 5 січня 2026 р.` / `Monday, 5 January 2026`.
pub fn format_long_date(language: Language, date: NaiveDate) -> String {
    let idx = date.month0() as usize;
    let weekday = weekday_name(language, date.weekday());
    match language {
        Language::Primary => format!(
            "{weekday}, {} {} {} р.",
            date.day(),
            UK_MONTHS_GENITIVE[idx],
            date.year()
        ),
        Language::Secondary => format!(
            "{weekday}, {} {} {}",
            date.day(),
            EN_MONTHS[idx],
            date.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_in_both_languages() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            format_long_date(Language::Primary, date),
            "понеділок, 5 січня 2026 р."
        );
        assert_eq!(
            format_long_date(Language::Secondary, date),
            "Monday, 5 January 2026"
        );
    }

    #[test]
    fn month_name_bounds() {
        assert_eq!(month_name(Language::Secondary, 1), Some("January"));
        assert_eq!(month_name(Language::Primary, 12), Some("Грудень"));
        assert_eq!(month_name(Language::Primary, 0), None);
        assert_eq!(month_name(Language::Secondary, 13), None);
    }
}
