#![forbid(unsafe_code)]
//! Brigada — planning tournant de trois équipes (matin / nuit / jour).
//!
//! - Calcul pur : (date, chef, langue) → affectation.
//! - Rotation hebdomadaire ancrée sur un lundi de référence.
//! - Repos le week-end.
//! - Dates calendaires uniquement ; aucun fuseau horaire dans le calcul.

#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod identity;
#[cfg(feature = "serde")]
pub mod io;
pub mod locale;
pub mod model;
pub mod notification;
pub mod rotation;
pub mod schedule;

#[cfg(feature = "serde")]
pub use config::{ConfigStore, JsonConfigStore, RotationConfig};
#[cfg(feature = "serde")]
pub use identity::{HostInitData, HostUser, Selection};
pub use model::{
    AssignmentKind, Language, LocalizedText, RestDefinition, ShiftAssignment, ShiftDefinition,
    Supervisor,
};
pub use notification::{prepare_reminder, Reminder, ReminderRenderer, TextReminder};
pub use rotation::{compute_shift, Rotation, RotationError};
pub use schedule::{day_roster, month_grid, schedule_range, MonthGrid, ScheduleEntry};
