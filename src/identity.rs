//! Données d'identité fournies par l'hôte (Mini App).
//!
//! Traitées comme de l'affichage non fiable : aucune validation ni
//! authentification. La correspondance de nom ne sert qu'à présélectionner
//! un chef, jamais à autre chose.

use crate::locale;
use crate::model::{Language, Supervisor};
use crate::rotation::Rotation;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInitData {
    #[serde(default)]
    pub user: Option<HostUser>,
}

pub fn parse_init_data(json: &str) -> anyhow::Result<HostInitData> {
    serde_json::from_str(json).context("parsing host init data")
}

/// Sélection par défaut déduite de l'hôte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub display_name: String,
    pub supervisor: usize,
    pub language: Language,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// `username`, sinon `first_name`, sinon un libellé générique.
pub fn display_name(user: Option<&HostUser>, language: Language) -> String {
    user.and_then(|u| non_blank(&u.username).or_else(|| non_blank(&u.first_name)))
        .unwrap_or_else(|| locale::fallback_user(language))
        .to_string()
}

/// `en*` → anglais, tout le reste (absence comprise) → ukrainien.
pub fn language_from_tag(tag: Option<&str>) -> Language {
    match tag.map(|t| t.trim().to_ascii_lowercase()) {
        Some(t) if t == "en" || t.starts_with("en-") || t.starts_with("en_") => Language::Secondary,
        _ => Language::Primary,
    }
}

/// Premier chef dont le nom contient `name` ou est contenu dans `name`.
pub fn match_supervisor(name: &str, supervisors: &[Supervisor]) -> Option<usize> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    supervisors.iter().position(|s| {
        let chief = s.name.trim().to_lowercase();
        !chief.is_empty() && (name.contains(&chief) || chief.contains(&name))
    })
}

/// `preferred` (langue choisie explicitement) l'emporte sur la langue de l'hôte.
pub fn resolve_selection(
    init: &HostInitData,
    rotation: &Rotation,
    preferred: Option<Language>,
) -> Selection {
    let user = init.user.as_ref();
    let language = preferred
        .unwrap_or_else(|| language_from_tag(user.and_then(|u| u.language_code.as_deref())));
    let display_name = display_name(user, language);
    let supervisor = user
        .map(|_| display_name.as_str())
        .and_then(|name| match_supervisor(name, rotation.supervisors()))
        .unwrap_or(0);

    #[cfg(feature = "logging")]
    tracing::debug!(supervisor, language = %language, "resolved host selection");

    Selection {
        display_name,
        supervisor,
        language,
    }
}
