use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Langue d'affichage. `Primary` = ukrainien, `Secondary` = anglais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "uk"))]
    Primary,
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    Secondary,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Primary => "uk",
            Language::Secondary => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" | "ua" | "primary" => Ok(Language::Primary),
            "en" | "secondary" => Ok(Language::Secondary),
            other => Err(format!("unsupported language: {other} (expected uk or en)")),
        }
    }
}

/// Libellé décliné dans les deux langues.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizedText {
    pub uk: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new<U: Into<String>, E: Into<String>>(uk: U, en: E) -> Self {
        Self {
            uk: uk.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Primary => &self.uk,
            Language::Secondary => &self.en,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.uk.trim().is_empty() || self.en.trim().is_empty()
    }
}

/// Chef d'équipe (brigade), référencé par son rang dans la rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Supervisor {
    pub name: String,
}

impl Supervisor {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Créneau tournant (matin, nuit, jour).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftDefinition {
    pub key: String,
    pub name: LocalizedText,
    /// Plage horaire affichée telle quelle, ex. `06:00 – 14:00`.
    pub time: String,
    pub color: String,
}

impl ShiftDefinition {
    pub fn new<K, T, C>(key: K, name: LocalizedText, time: T, color: C) -> Self
    where
        K: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        Self {
            key: key.into(),
            name,
            time: time.into(),
            color: color.into(),
        }
    }
}

/// Repos du week-end : pas de plage horaire, couleur neutre.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestDefinition {
    pub name: LocalizedText,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum AssignmentKind {
    Working { slot: usize },
    Rest,
}

/// Résultat calculé pour un couple (date, chef). Jamais stocké.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftAssignment {
    pub date: NaiveDate,
    pub supervisor: usize,
    pub kind: AssignmentKind,
    pub name: String,
    pub time: String,
    pub color: String,
}

impl ShiftAssignment {
    pub fn is_rest(&self) -> bool {
        self.kind == AssignmentKind::Rest
    }

    /// Rang du créneau dans la rotation, `None` pour un jour de repos.
    pub fn slot(&self) -> Option<usize> {
        match self.kind {
            AssignmentKind::Working { slot } => Some(slot),
            AssignmentKind::Rest => None,
        }
    }

    /// Marque d'une lettre pour les vues compactes (`-` au repos).
    pub fn mark(&self) -> char {
        match self.kind {
            AssignmentKind::Rest => '-',
            AssignmentKind::Working { .. } => self.name.chars().next().unwrap_or('?'),
        }
    }
}
