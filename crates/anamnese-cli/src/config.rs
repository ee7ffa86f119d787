use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use anamnese_core::draft_keys::DEFAULT_DRAFT_KEY;
use anamnese_core::models::patient::PatientType;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnamneseConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Root directory of the draft store.
    pub data_dir: PathBuf,
    /// Added in v1; older configs get [`DEFAULT_DRAFT_KEY`].
    pub draft_key: String,
    pub default_patient_type: PatientType,
    pub created_at: jiff::Timestamp,
}

impl AnamneseConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            draft_key: DEFAULT_DRAFT_KEY.to_string(),
            default_patient_type: PatientType::Adult,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Apply command-line overrides on top of the stored values.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, draft_key: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(key) = draft_key {
            self.draft_key = key;
        }
        self
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("anamnese"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("anamnese"))
}

/// Load the config in `dir`, or `None` if none has been saved yet.
pub fn load_config(dir: &Path) -> eyre::Result<Option<AnamneseConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let config: AnamneseConfig = serde_json::from_value(migrated)?;
    Ok(Some(config))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Anamnese."
        ));
    }

    // v0 → v1: add draft_key
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("draft_key")
            .or_insert(serde_json::Value::String(DEFAULT_DRAFT_KEY.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added draft_key)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &AnamneseConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// The stored config, or a fresh one written to `dir` on first run.
pub fn load_or_init(dir: &Path) -> eyre::Result<AnamneseConfig> {
    if let Some(config) = load_config(dir)? {
        return Ok(config);
    }
    let config = AnamneseConfig::new(default_data_dir()?);
    save_config(dir, &config)?;
    Ok(config)
}
