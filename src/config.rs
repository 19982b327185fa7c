use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "snapshop.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub image_limits: ImageLimits,
    /// Show failed saves in the status bar and an error window.
    /// Failures are logged either way.
    pub surface_save_errors: bool,
    /// Re-present the Open dialog right after a file fails to decode.
    pub reopen_on_decode_failure: bool,
    /// Fallback `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_limits: ImageLimits::default(),
            surface_save_errors: true,
            reopen_on_decode_failure: true,
            log_filter: "info".to_string(),
        }
    }
}

/// Where the active configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Defaults,
    File(PathBuf),
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub origin: ConfigOrigin,
    /// Files that exist but failed to parse, with the parser message.
    pub rejected: Vec<(PathBuf, String)>,
}

impl LoadedConfig {
    pub fn log_summary(&self) {
        for (path, err) in &self.rejected {
            tracing::warn!(path = %path.display(), "failed to parse config: {err}");
        }
        match &self.origin {
            ConfigOrigin::File(path) => tracing::info!(path = %path.display(), "loaded config"),
            ConfigOrigin::Defaults => tracing::info!("no config file found, using defaults"),
        }
    }
}

impl AppConfig {
    /// Read the first parseable config file; files that fail to parse are skipped.
    pub fn load() -> LoadedConfig {
        let mut rejected = Vec::new();
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::from_toml(&contents) {
                    Ok(config) => {
                        return LoadedConfig {
                            config,
                            origin: ConfigOrigin::File(path),
                            rejected,
                        };
                    }
                    Err(err) => rejected.push((path, err.to_string())),
                }
            }
        }
        LoadedConfig {
            config: Self::default(),
            origin: ConfigOrigin::Defaults,
            rejected,
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(contents)
    }

    pub fn effective_image_limits(&self) -> ImageLimits {
        self.image_limits.sanitized()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "SnapShop", "SnapShop") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("snapshop").join(CONFIG_FILE_NAME));
        }

        paths
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub image_dim: u32,
    pub total_pixels: u64,
    pub alloc_bytes: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image_dim: 12_000,
            total_pixels: 80_000_000,       // ~80 MP
            alloc_bytes: 512 * 1024 * 1024, // 512 MiB
        }
    }
}

impl ImageLimits {
    pub fn sanitized(&self) -> Self {
        // Clamp to reasonable operating bounds to avoid pathological configs.
        let dim = self.image_dim.clamp(64, 100_000);
        let pixels = self.total_pixels.clamp(1_000_000, 5_000_000_000); // 1 MP .. 5 GP
        let alloc = self
            .alloc_bytes
            .clamp(8 * 1024 * 1024, 8 * 1024 * 1024 * 1024); // 8 MiB .. 8 GiB
        Self {
            image_dim: dim,
            total_pixels: pixels,
            alloc_bytes: alloc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").expect("parse");
        assert!(cfg.surface_save_errors);
        assert!(cfg.reopen_on_decode_failure);
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.image_limits, ImageLimits::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
surface_save_errors = false
log_filter = "snapshop=debug"

[image_limits]
image_dim = 4096
"#,
        )
        .expect("parse");
        assert!(!cfg.surface_save_errors);
        assert!(cfg.reopen_on_decode_failure);
        assert_eq!(cfg.log_filter, "snapshop=debug");
        assert_eq!(cfg.image_limits.image_dim, 4096);
        assert_eq!(
            cfg.image_limits.total_pixels,
            ImageLimits::default().total_pixels
        );
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(AppConfig::from_toml("surface_save_errors = \"yes\"").is_err());
    }

    #[test]
    fn limits_are_clamped() {
        let limits = ImageLimits {
            image_dim: 1,
            total_pixels: u64::MAX,
            alloc_bytes: 0,
        }
        .sanitized();
        assert_eq!(limits.image_dim, 64);
        assert_eq!(limits.total_pixels, 5_000_000_000);
        assert_eq!(limits.alloc_bytes, 8 * 1024 * 1024);
    }
}
