use crate::model::{LocalizedText, RestDefinition, ShiftDefinition, Supervisor};
use chrono::NaiveDate;

pub const SUPERVISOR_NAMES: [&str; 3] = ["Tono", "Boris", "Stano"];

/// Lundi de référence : semaine 0 de la rotation.
pub fn reference_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).expect("2026-01-05 is a valid date")
}

pub fn supervisors() -> Vec<Supervisor> {
    SUPERVISOR_NAMES.iter().map(|n| Supervisor::new(*n)).collect()
}

/// Ordre fixe : matin, nuit, jour.
pub fn shifts() -> Vec<ShiftDefinition> {
    vec![
        ShiftDefinition::new(
            "morning",
            LocalizedText::new("Ранкова", "Morning"),
            "06:00 – 14:00",
            "#4CAF50",
        ),
        ShiftDefinition::new(
            "night",
            LocalizedText::new("Нічна", "Night"),
            "22:00 – 06:00",
            "#FF5722",
        ),
        ShiftDefinition::new(
            "day",
            LocalizedText::new("Денна", "Day"),
            "14:00 – 22:00",
            "#2196F3",
        ),
    ]
}

pub fn rest() -> RestDefinition {
    RestDefinition {
        name: LocalizedText::new("Вихідний", "Day off"),
        color: "#757575".to_string(),
    }
}
