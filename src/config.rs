use crate::model::{RestDefinition, ShiftDefinition, Supervisor};
use crate::rotation::{defaults, Rotation, RotationError};
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fichier de configuration d'une rotation (JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub reference_date: NaiveDate,
    pub supervisors: Vec<Supervisor>,
    pub shifts: Vec<ShiftDefinition>,
    pub rest: RestDefinition,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            reference_date: defaults::reference_monday(),
            supervisors: defaults::supervisors(),
            shifts: defaults::shifts(),
            rest: defaults::rest(),
        }
    }
}

impl RotationConfig {
    pub fn into_rotation(self) -> Result<Rotation, RotationError> {
        Rotation::new(self.reference_date, self.supervisors, self.shifts, self.rest)
    }
}

impl From<&Rotation> for RotationConfig {
    fn from(rotation: &Rotation) -> Self {
        Self {
            reference_date: rotation.reference_date(),
            supervisors: rotation.supervisors().to_vec(),
            shifts: rotation.shifts().to_vec(),
            rest: rotation.rest().clone(),
        }
    }
}

pub trait ConfigStore {
    /// Charge et valide une rotation.
    fn load(&self) -> anyhow::Result<Rotation>;
    /// Sauvegarde de manière atomique.
    fn save(&self, rotation: &Rotation) -> anyhow::Result<()>;
}

pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> anyhow::Result<Rotation> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let config: RotationConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        let rotation = config
            .into_rotation()
            .with_context(|| format!("validating {}", self.path.display()))?;

        #[cfg(feature = "logging")]
        tracing::info!(
            path = %self.path.display(),
            supervisors = rotation.supervisors().len(),
            "loaded rotation config"
        );

        Ok(rotation)
    }

    fn save(&self, rotation: &Rotation) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(&RotationConfig::from(rotation))?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_keeps_rotation() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::open(dir.path().join("rotation.json")).unwrap();
        store.save(Rotation::builtin()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(&loaded, Rotation::builtin());
    }

    #[test]
    fn load_rejects_invalid_reference() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rotation.json");
        let mut config = RotationConfig::default();
        config.reference_date = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let err = JsonConfigStore::open(&path).unwrap().load().unwrap_err();
        assert!(format!("{err:#}").contains("not a Monday"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = JsonConfigStore::open(&path).unwrap().load().unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
