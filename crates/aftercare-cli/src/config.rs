use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_PHRASING_TIMEOUT_MS: u64 = 8_000;

/// Setting this switches phrasing to Bedrock with the given model.
pub const MODEL_ID_ENV: &str = "AFTERCARE_MODEL_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AftercareConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub phrasing: PhrasingBackend,
    /// Upper bound on a single phrasing call. Added in v1.
    #[serde(default = "default_phrasing_timeout_ms")]
    pub phrasing_timeout_ms: u64,
    #[serde(default)]
    pub credentials: CredentialSource,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhrasingBackend {
    /// Tone phrase plus the literal question; no model.
    #[default]
    Canned,
    Bedrock {
        model_id: String,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    #[default]
    DefaultChain,
}

impl Default for AftercareConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: default_region(),
            phrasing: PhrasingBackend::default(),
            phrasing_timeout_ms: DEFAULT_PHRASING_TIMEOUT_MS,
            credentials: CredentialSource::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl AftercareConfig {
    pub fn phrasing_timeout(&self) -> Duration {
        Duration::from_millis(self.phrasing_timeout_ms)
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_phrasing_timeout_ms() -> u64 {
    DEFAULT_PHRASING_TIMEOUT_MS
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("aftercare").join("config.json"))
}

/// Load the config from `path`, or from the default location.
///
/// An explicit path must exist. A missing file at the default location means
/// defaults. The model-id environment variable is applied last.
pub fn load_config(path: Option<&Path>) -> eyre::Result<AftercareConfig> {
    let mut config = match path {
        Some(path) => load_config_from(path)?,
        None => {
            let path = default_config_path()?;
            if path.exists() {
                load_config_from(&path)?
            } else {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                AftercareConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config, std::env::var(MODEL_ID_ENV).ok());
    Ok(config)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AftercareConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AftercareConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// A non-empty model id from the environment forces Bedrock phrasing.
pub fn apply_env_overrides(config: &mut AftercareConfig, model_id: Option<String>) {
    if let Some(model_id) = model_id.filter(|m| !m.trim().is_empty()) {
        tracing::info!(model = %model_id, "model id taken from environment");
        config.phrasing = PhrasingBackend::Bedrock { model_id };
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update aftercare."
        ));
    }

    // v0 → v1: add phrasing_timeout_ms
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("phrasing_timeout_ms")
            .or_insert(serde_json::Value::from(DEFAULT_PHRASING_TIMEOUT_MS));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added phrasing_timeout_ms)");
    }

    Ok(json)
}

pub fn save_config(config: &AftercareConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// One-line description of the config that is safe to log.
pub fn describe(config: &AftercareConfig) -> String {
    let phrasing = match &config.phrasing {
        PhrasingBackend::Canned => "canned".to_string(),
        PhrasingBackend::Bedrock { model_id } => format!("bedrock ({model_id})"),
    };
    let credentials = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let kind = if session_token.is_some() {
                "temporary"
            } else {
                "inline"
            };
            format!("{kind} {}", redact_access_key(access_key_id))
        }
        CredentialSource::Profile { profile_name } => format!("profile {profile_name}"),
        CredentialSource::DefaultChain => "default chain".to_string(),
    };

    format!(
        "region={} phrasing={phrasing} timeout={}ms credentials={credentials}",
        config.region, config.phrasing_timeout_ms
    )
}

fn redact_access_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
