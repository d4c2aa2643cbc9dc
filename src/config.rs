use std::{env, path::Path, path::PathBuf};

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

// First path segments already routed by the web module.
const RESERVED_SEGMENTS: [&str; 3] = ["hotels", "images", "uploads"];

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub http_bind_address: String,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub room_images_dir: PathBuf,
    pub public_base_url: String,
    pub room_image_path: String,
    pub max_gallery_uploads: usize,
    pub max_upload_bytes: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            http_bind_address: "0.0.0.0:5000".to_string(),
            data_dir: PathBuf::from("data"),
            upload_dir: PathBuf::from("upload"),
            room_images_dir: PathBuf::from("public/roomImages"),
            public_base_url: "http://localhost:5000".to_string(),
            room_image_path: "/roomImages".to_string(),
            max_gallery_uploads: 10,
            max_upload_bytes: 20 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn hotels_dir(&self) -> PathBuf {
        self.data_dir.join("hotels")
    }

    /// Prefix of the URLs handed out for gallery uploads.
    pub fn gallery_url_prefix(&self) -> String {
        format!("{}/uploads", self.public_base_url.trim_end_matches('/'))
    }

    /// `room_image_path` as a route: one leading slash and no trailing one.
    pub fn room_image_route(&self) -> String {
        format!("/{}", self.room_image_path.trim().trim_matches('/'))
    }

    /// Rejects settings the router cannot mount.
    pub fn validate(&self) -> Result<()> {
        let route = self.room_image_route();
        if route == "/" {
            bail!(
                "room_image_path {:?} must name a sub-path such as /roomImages",
                self.room_image_path
            );
        }
        if route.contains([':', '*', '{', '}']) {
            bail!("room_image_path {:?} may not contain route captures", route);
        }
        let first_segment = route[1..].split('/').next().unwrap_or_default();
        if RESERVED_SEGMENTS.contains(&first_segment) {
            bail!("room_image_path {:?} clashes with the /{} routes", route, first_segment);
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// A config rooted in `root`, for tests.
pub fn create_test_config(root: &Path) -> Config {
    Config {
        http_bind_address: "127.0.0.1:0".to_string(),
        data_dir: root.join("data"),
        upload_dir: root.join("upload"),
        room_images_dir: root.join("public").join("roomImages"),
        public_base_url: "http://localhost:5000".to_string(),
        log_level: "debug".to_string(),
        ..Config::default()
    }
}

/// Reads the TOML file named by `CONFIG_PATH` (a `.env` file is honoured),
/// or falls back to defaults when the variable is unset.
pub fn read_config() -> Result<Config> {
    dotenv().ok();

    let Ok(config_path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config file {config_path}"))?;
    toml::from_str(&contents).with_context(|| format!("invalid config file {config_path}"))
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            http_bind_address = "127.0.0.1:8080"
            max_gallery_uploads = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.http_bind_address, "127.0.0.1:8080");
        assert_eq!(config.max_gallery_uploads, 4);
        assert_eq!(config.room_image_path, "/roomImages");
        assert_eq!(config.hotels_dir(), std::path::PathBuf::from("data/hotels"));
    }

    #[test]
    fn gallery_prefix_ignores_trailing_slash() {
        let config = Config {
            public_base_url: "https://stays.example/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.gallery_url_prefix(), "https://stays.example/uploads");
    }

    #[test]
    fn room_image_path_is_normalized() {
        for raw in ["roomImages", "/roomImages/", " roomImages/ ", "//roomImages"] {
            let config = Config {
                room_image_path: raw.to_string(),
                ..Config::default()
            };
            assert_eq!(config.room_image_route(), "/roomImages", "{raw:?}");
            assert!(config.validate().is_ok());
        }

        let nested = Config {
            room_image_path: "static/rooms/".to_string(),
            ..Config::default()
        };
        assert_eq!(nested.room_image_route(), "/static/rooms");
    }

    #[test]
    fn unmountable_room_image_paths_are_rejected() {
        for raw in ["", "/", "//", "/uploads", "images/rooms", "/rooms/:id", "/rooms/*rest"] {
            let config = Config {
                room_image_path: raw.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "{raw:?} was accepted");
        }
        assert!(Config::default().validate().is_ok());
    }
}
