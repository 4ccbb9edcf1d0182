mod calc;
pub mod defaults;
mod types;

pub use calc::{calendar_date, days_since, is_weekend, slot_index, week_index, DAYS_PER_WEEK};
pub use types::RotationError;

use crate::model::{
    AssignmentKind, Language, RestDefinition, ShiftAssignment, ShiftDefinition, Supervisor,
};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Rotation : configuration figée (chefs, créneaux, lundi de référence).
///
/// Aucun état mutable ; la langue et le chef sélectionnés sont passés à
/// chaque appel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    reference: NaiveDate,
    supervisors: Vec<Supervisor>,
    shifts: Vec<ShiftDefinition>,
    rest: RestDefinition,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            reference: defaults::reference_monday(),
            supervisors: defaults::supervisors(),
            shifts: defaults::shifts(),
            rest: defaults::rest(),
        }
    }
}

impl Rotation {
    /// Construit une rotation en validant sa cohérence.
    pub fn new(
        reference: NaiveDate,
        supervisors: Vec<Supervisor>,
        shifts: Vec<ShiftDefinition>,
        rest: RestDefinition,
    ) -> Result<Self, RotationError> {
        let rotation = Self {
            reference,
            supervisors,
            shifts,
            rest,
        };
        rotation.validate()?;
        Ok(rotation)
    }

    /// Rotation intégrée, partagée par tout le processus.
    pub fn builtin() -> &'static Rotation {
        static BUILTIN: OnceLock<Rotation> = OnceLock::new();
        BUILTIN.get_or_init(Rotation::default)
    }

    fn validate(&self) -> Result<(), RotationError> {
        let invalid = |msg: String| Err(RotationError::InvalidConfig(msg));

        if self.reference.weekday() != Weekday::Mon {
            return invalid(format!("reference date {} is not a Monday", self.reference));
        }
        if self.shifts.is_empty() {
            return invalid("at least one shift is required".into());
        }
        if self.supervisors.is_empty() {
            return invalid("at least one supervisor is required".into());
        }
        if self.supervisors.len() > self.shifts.len() {
            return invalid(format!(
                "{} supervisors cannot rotate over {} shifts",
                self.supervisors.len(),
                self.shifts.len()
            ));
        }

        let mut seen = HashSet::new();
        for s in &self.supervisors {
            let name = s.name.trim();
            if name.is_empty() {
                return invalid("supervisor name cannot be empty".into());
            }
            if !seen.insert(name.to_lowercase()) {
                return invalid(format!("duplicate supervisor name: {name}"));
            }
        }

        let mut keys = HashSet::new();
        for shift in &self.shifts {
            if shift.key.trim().is_empty() || shift.name.is_blank() {
                return invalid("shift key and names cannot be empty".into());
            }
            if !keys.insert(shift.key.as_str()) {
                return invalid(format!("duplicate shift key: {}", shift.key));
            }
        }

        // la grille mensuelle affiche la première lettre du nom ; `-` = repos
        for language in [Language::Primary, Language::Secondary] {
            let mut marks = HashSet::from(['-']);
            for shift in &self.shifts {
                let name = shift.name.get(language);
                let Some(mark) = name.chars().next() else {
                    continue;
                };
                if !marks.insert(mark) {
                    return invalid(format!(
                        "shift name {name:?} ({language}) reuses grid mark {mark:?}"
                    ));
                }
            }
        }

        if self.rest.name.is_blank() {
            return invalid("rest label cannot be empty".into());
        }
        Ok(())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }
    pub fn supervisors(&self) -> &[Supervisor] {
        &self.supervisors
    }
    pub fn shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }
    pub fn rest(&self) -> &RestDefinition {
        &self.rest
    }

    pub fn supervisor(&self, index: usize) -> Result<&Supervisor, RotationError> {
        self.supervisors
            .get(index)
            .ok_or(RotationError::UnknownSupervisor {
                index,
                count: self.supervisors.len(),
            })
    }

    /// Recherche exacte (insensible à la casse) d'un chef par son nom.
    pub fn find_supervisor(&self, name: &str) -> Option<usize> {
        let needle = name.trim().to_lowercase();
        self.supervisors
            .iter()
            .position(|s| s.name.trim().to_lowercase() == needle)
    }

    /// Rang du créneau pour ce chef, `None` le week-end.
    pub fn slot_for(
        &self,
        date: NaiveDate,
        supervisor: usize,
    ) -> Result<Option<usize>, RotationError> {
        self.supervisor(supervisor)?;
        if is_weekend(date) {
            return Ok(None);
        }
        let days = days_since(self.reference, date);
        let week = week_index(days);
        Ok(Some(slot_index(week, supervisor, self.shifts.len())))
    }

    /// Calcule l'affectation d'un chef pour une date, libellés dans `language`.
    pub fn compute_shift(
        &self,
        date: NaiveDate,
        supervisor: usize,
        language: Language,
    ) -> Result<ShiftAssignment, RotationError> {
        let assignment = match self.slot_for(date, supervisor)? {
            None => ShiftAssignment {
                date,
                supervisor,
                kind: AssignmentKind::Rest,
                name: self.rest.name.get(language).to_string(),
                time: String::new(),
                color: self.rest.color.clone(),
            },
            Some(slot) => {
                let def = &self.shifts[slot];
                ShiftAssignment {
                    date,
                    supervisor,
                    kind: AssignmentKind::Working { slot },
                    name: def.name.get(language).to_string(),
                    time: def.time.clone(),
                    color: def.color.clone(),
                }
            }
        };

        #[cfg(feature = "logging")]
        tracing::debug!(
            %date,
            supervisor,
            slot = ?assignment.slot(),
            "computed shift"
        );

        Ok(assignment)
    }
}

/// Raccourci sur la rotation intégrée.
pub fn compute_shift(
    date: NaiveDate,
    supervisor: usize,
    language: Language,
) -> Result<ShiftAssignment, RotationError> {
    Rotation::builtin().compute_shift(date, supervisor, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocalizedText;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn anchor_monday_is_first_slot() {
        let a = compute_shift(d(2026, 1, 5), 0, Language::Primary).unwrap();
        assert_eq!(a.slot(), Some(0));
        assert_eq!(a.name, "Ранкова");
        assert_eq!(a.time, "06:00 – 14:00");
        assert_eq!(a.color, "#4CAF50");
    }

    #[test]
    fn weekend_is_rest_with_empty_time() {
        let a = compute_shift(d(2026, 1, 10), 2, Language::Secondary).unwrap();
        assert!(a.is_rest());
        assert_eq!(a.name, "Day off");
        assert!(a.time.is_empty());
        assert_eq!(a.color, "#757575");
    }

    #[test]
    fn unknown_supervisor_fails_fast_even_on_weekend() {
        let err = compute_shift(d(2026, 1, 10), 3, Language::Primary).unwrap_err();
        assert_eq!(err, RotationError::UnknownSupervisor { index: 3, count: 3 });
    }

    #[test]
    fn second_week_advances_by_one() {
        let rot = Rotation::builtin();
        assert_eq!(rot.slot_for(d(2026, 1, 12), 0).unwrap(), Some(1));
        assert_eq!(rot.slot_for(d(2026, 1, 19), 0).unwrap(), Some(2));
        assert_eq!(rot.slot_for(d(2026, 1, 26), 0).unwrap(), Some(0));
        assert_eq!(rot.slot_for(d(2026, 1, 5), 1).unwrap(), Some(1));
        assert_eq!(rot.slot_for(d(2026, 1, 5), 2).unwrap(), Some(2));
    }

    #[test]
    fn rejects_reference_not_on_monday() {
        let err = Rotation::new(
            d(2026, 1, 6),
            defaults::supervisors(),
            defaults::shifts(),
            defaults::rest(),
        )
        .unwrap_err();
        assert!(matches!(err, RotationError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_more_supervisors_than_shifts() {
        let mut people = defaults::supervisors();
        people.push(Supervisor::new("Ivan"));
        let err = Rotation::new(d(2026, 1, 5), people, defaults::shifts(), defaults::rest())
            .unwrap_err();
        assert!(err.to_string().contains("4 supervisors"));
    }

    #[test]
    fn rejects_duplicate_supervisor_names() {
        let people = vec![Supervisor::new("Tono"), Supervisor::new("tono")];
        let result = Rotation::new(d(2026, 1, 5), people, defaults::shifts(), defaults::rest());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_blank_rest_label() {
        let rest = RestDefinition {
            name: LocalizedText::new("", "Off"),
            color: "#000".into(),
        };
        let result = Rotation::new(
            d(2026, 1, 5),
            defaults::supervisors(),
            defaults::shifts(),
            rest,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_shifts_sharing_a_grid_mark() {
        let mut shifts = defaults::shifts();
        // « Daytime » et « Day » donnent tous deux `D` en anglais
        shifts[0].name = LocalizedText::new("Ранкова", "Daytime");
        let err = Rotation::new(
            d(2026, 1, 5),
            defaults::supervisors(),
            shifts,
            defaults::rest(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("grid mark 'D'"));
    }

    #[test]
    fn rejects_shift_marked_like_rest() {
        let mut shifts = defaults::shifts();
        shifts[1].name = LocalizedText::new("-нічна", "Night");
        let result = Rotation::new(
            d(2026, 1, 5),
            defaults::supervisors(),
            shifts,
            defaults::rest(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn find_supervisor_is_case_insensitive() {
        let rot = Rotation::builtin();
        assert_eq!(rot.find_supervisor("boris"), Some(1));
        assert_eq!(rot.find_supervisor(" STANO "), Some(2));
        assert_eq!(rot.find_supervisor("Bor"), None);
    }
}
