use crate::locale;
use crate::model::{Language, ShiftAssignment, Supervisor};
use crate::rotation::Rotation;
use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate};

/// Représente un rappel généré pour un chef d'équipe.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub supervisor: String,
    pub date: NaiveDate,
    pub assignment: ShiftAssignment,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, message bot, etc.).
pub trait ReminderRenderer {
    fn render(
        &self,
        supervisor: &Supervisor,
        assignment: &ShiftAssignment,
        language: Language,
    ) -> String;
}

/// Gabarit texte simple.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(
        &self,
        supervisor: &Supervisor,
        assignment: &ShiftAssignment,
        language: Language,
    ) -> String {
        let date = locale::format_long_date(language, assignment.date);
        match language {
            Language::Primary => format!(
                "{label}\n\nЗміна {chief}: {shift} ({time})\n{date}\n",
                label = locale::reminder_label(language),
                chief = supervisor.name,
                shift = assignment.name,
                time = assignment.time,
            ),
            Language::Secondary => format!(
                "{label}\n\n{chief}'s team: {shift} ({time})\n{date}\n",
                label = locale::reminder_label(language),
                chief = supervisor.name,
                shift = assignment.name,
                time = assignment.time,
            ),
        }
    }
}

/// Prépare un rappel pour le prochain jour travaillé à partir de `today` (inclus).
pub fn prepare_reminder(
    rotation: &Rotation,
    supervisor: usize,
    today: NaiveDate,
    horizon_days: i64,
    language: Language,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    if horizon_days < 0 {
        bail!("horizon_days must be positive");
    }
    let chief = rotation.supervisor(supervisor)?;

    for offset in 0..=horizon_days {
        let Some(date) = today.checked_add_signed(Duration::days(offset)) else {
            break;
        };
        let assignment = rotation.compute_shift(date, supervisor, language)?;
        if assignment.is_rest() {
            continue;
        }
        let content = renderer.render(chief, &assignment, language);
        return Ok(Reminder {
            supervisor: chief.name.clone(),
            date,
            assignment,
            content,
        });
    }

    bail!(
        "no working day for {} within {horizon_days} day(s) of {today}",
        chief.name
    )
}
