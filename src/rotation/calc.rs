use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

pub const DAYS_PER_WEEK: i64 = 7;

/// Samedi ou dimanche, d'après les champs calendaires de la date elle-même.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Nombre de jours calendaires entiers de `reference` à `date` (négatif avant la référence).
pub fn days_since(reference: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(reference).num_days()
}

/// Semaine écoulée depuis la référence, arrondie vers -∞.
pub fn week_index(days: i64) -> i64 {
    days.div_euclid(DAYS_PER_WEEK)
}

/// Rang du créneau, ramené dans `[0, slots)` même pour une somme négative.
pub fn slot_index(week: i64, supervisor: usize, slots: usize) -> usize {
    debug_assert!(slots > 0);
    let slots = slots as i64;
    (week + supervisor as i64).rem_euclid(slots) as usize
}

/// Tronque un horodatage à sa date calendaire locale.
///
/// Tout calcul de distance se fait ensuite sur des `NaiveDate` : l'heure et
/// le décalage horaire (heure d'été comprise) n'interviennent plus.
pub fn calendar_date<Tz: TimeZone>(at: &DateTime<Tz>) -> NaiveDate {
    at.date_naive()
}
