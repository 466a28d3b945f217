//! Virtual peripheral configuration files.
//!
//! `.json` files are read with `serde_json`, `.yaml`/`.yml` with
//! `serde_yaml`. Any other extension is rejected.

use std::fs;
use std::path::Path;

use padbridge_hid::VirtualPeripheralConfig;
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn load_peripheral_config(path: &Path) -> Result<VirtualPeripheralConfig, CliError> {
    let invalid = |reason: String| CliError::InvalidConfiguration {
        path: path.to_path_buf(),
        reason,
    };

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| invalid("expected a .json, .yaml or .yml file".to_string()))?;
    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;

    let config = match format {
        ConfigFormat::Json => serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?,
        ConfigFormat::Yaml => serde_yaml::from_str(&text).map_err(|e| invalid(e.to_string()))?,
    };
    debug!(path = %path.display(), ?format, "loaded peripheral config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("pad.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("pad.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("pad.toml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("pad")), None);
    }

    #[test]
    fn unsupported_extension_is_config_error() {
        let result = load_peripheral_config(&PathBuf::from("pad.toml"));
        assert!(matches!(
            result,
            Err(CliError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn missing_file_is_config_error() {
        let result = load_peripheral_config(Path::new("/nonexistent/padctl/pad.json"));
        assert!(matches!(
            result,
            Err(CliError::InvalidConfiguration { .. })
        ));
    }
}
