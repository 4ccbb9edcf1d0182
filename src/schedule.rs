//! Vues calculées : plage de dates, grille mensuelle, équipe du jour.

use crate::locale;
use crate::model::{Language, ShiftAssignment};
use crate::rotation::{Rotation, RotationError};
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Ligne de planning : une date, un chef, son affectation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub supervisor: String,
    pub assignment: ShiftAssignment,
}

impl ScheduleEntry {
    fn build(
        rotation: &Rotation,
        date: NaiveDate,
        supervisor: usize,
        language: Language,
    ) -> Result<Self, RotationError> {
        let assignment = rotation.compute_shift(date, supervisor, language)?;
        Ok(Self {
            date,
            weekday: locale::weekday_short(language, date.weekday()).to_string(),
            supervisor: rotation.supervisor(supervisor)?.name.clone(),
            assignment,
        })
    }
}

/// Une entrée par jour de `from` à `to` inclus.
pub fn schedule_range(
    rotation: &Rotation,
    supervisor: usize,
    from: NaiveDate,
    to: NaiveDate,
    language: Language,
) -> Result<Vec<ScheduleEntry>, RotationError> {
    if to < from {
        return Err(RotationError::InvalidRange { from, to });
    }
    rotation.supervisor(supervisor)?;

    let mut out = Vec::new();
    let mut current = from;
    loop {
        out.push(ScheduleEntry::build(rotation, current, supervisor, language)?);
        if current == to {
            break;
        }
        current = current.succ_opt().ok_or(RotationError::DateOutOfRange)?;
    }
    Ok(out)
}

/// Affectation de chaque chef pour une date donnée.
pub fn day_roster(
    rotation: &Rotation,
    date: NaiveDate,
    language: Language,
) -> Result<Vec<ScheduleEntry>, RotationError> {
    (0..rotation.supervisors().len())
        .map(|idx| ScheduleEntry::build(rotation, date, idx, language))
        .collect()
}

/// Grille d'un mois, semaines commençant le lundi.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub supervisor: String,
    pub language: Language,
    /// Jours hors du mois à `None`.
    pub weeks: Vec<[Option<ShiftAssignment>; 7]>,
}

pub fn month_grid(
    rotation: &Rotation,
    supervisor: usize,
    year: i32,
    month: u32,
    language: Language,
) -> Result<MonthGrid, RotationError> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(RotationError::InvalidMonth { year, month })?;
    let name = rotation.supervisor(supervisor)?.name.clone();

    let mut weeks = Vec::new();
    let mut week: [Option<ShiftAssignment>; 7] = Default::default();
    let mut current = first;

    while current.month() == month {
        let col = current.weekday().num_days_from_monday() as usize;
        week[col] = Some(rotation.compute_shift(current, supervisor, language)?);
        if current.weekday() == Weekday::Sun {
            weeks.push(std::mem::take(&mut week));
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    Ok(MonthGrid {
        year,
        month,
        supervisor: name,
        language,
        weeks,
    })
}

impl MonthGrid {
    /// Rendu texte compact : numéro du jour suivi de la marque du créneau.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let month = locale::month_name(self.language, self.month).unwrap_or("?");
        let _ = writeln!(out, "{month} {} · {}", self.year, self.supervisor);

        let header: String = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .iter()
        .map(|w| format!("{:<4}", locale::weekday_short(self.language, *w)))
        .collect();
        let _ = writeln!(out, "{}", header.trim_end());

        for week in &self.weeks {
            let line: String = week
                .iter()
                .map(|cell| match cell {
                    Some(a) => format!("{:>2}{} ", a.date.day(), a.mark()),
                    None => "    ".to_string(),
                })
                .collect();
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}
