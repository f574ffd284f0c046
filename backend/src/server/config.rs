//! Startup settings and the HTTP server configuration object.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use chirpy::domain::{HitCounter, Platform};
use chirpy::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8888;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_APP_ROOT: &str = ".";
const DEFAULT_ASSETS_ROOT: &str = "assets";

/// A required setting was not supplied by any source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{setting} must be set (environment variable {env_var})")]
pub struct MissingSetting {
    pub setting: &'static str,
    pub env_var: &'static str,
}

/// Process settings loaded from CLI flags, `CHIRPY_*` environment variables
/// and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CHIRPY")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub db_url: Option<String>,
    /// Deployment mode; `dev` enables the admin reset.
    pub platform: Option<String>,
    /// Listener port.
    pub port: Option<u16>,
    /// Listener address.
    pub host: Option<IpAddr>,
    /// Directory served under `/app`.
    pub app_root: Option<PathBuf>,
    /// Directory served under `/assets`.
    pub assets_root: Option<PathBuf>,
}

impl AppSettings {
    /// Return the database URL.
    ///
    /// # Errors
    /// Returns [`MissingSetting`] when no source supplied it.
    pub fn db_url(&self) -> Result<&str, MissingSetting> {
        self.db_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(MissingSetting {
                setting: "db_url",
                env_var: "CHIRPY_DB_URL",
            })
    }

    /// Return the deployment mode.
    ///
    /// # Errors
    /// Returns [`MissingSetting`] when no source supplied it.
    pub fn platform(&self) -> Result<Platform, MissingSetting> {
        self.platform
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(Platform::from_setting)
            .ok_or(MissingSetting {
                setting: "platform",
                env_var: "CHIRPY_PLATFORM",
            })
    }

    /// Return the socket address to bind, defaulting to `0.0.0.0:8888`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Return the `/app` root, defaulting to the working directory.
    pub fn app_root(&self) -> PathBuf {
        self.app_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_ROOT))
    }

    /// Return the `/assets` root, defaulting to `assets`.
    pub fn assets_root(&self) -> PathBuf {
        self.assets_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_ROOT))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) platform: Platform,
    pub(crate) db_pool: DbPool,
    pub(crate) app_root: PathBuf,
    pub(crate) assets_root: PathBuf,
    pub(crate) hits: Arc<HitCounter>,
}

impl ServerConfig {
    /// Construct a configuration serving the default static roots.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, platform: Platform, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            platform,
            db_pool,
            app_root: PathBuf::from(DEFAULT_APP_ROOT),
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            hits: Arc::new(HitCounter::new()),
        }
    }

    /// Serve `/app` from `root`.
    #[must_use]
    pub fn with_app_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.app_root = root.into();
        self
    }

    /// Serve `/assets` from `root`.
    #[must_use]
    pub fn with_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.assets_root = root.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "CHIRPY_DB_URL",
        "CHIRPY_PLATFORM",
        "CHIRPY_PORT",
        "CHIRPY_HOST",
        "CHIRPY_APP_ROOT",
        "CHIRPY_ASSETS_ROOT",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("chirpy")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_optional_settings_are_missing() {
        let _guard = lock_env(VARS.map(|var| (var, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "0.0.0.0:8888".parse().expect("addr"));
        assert_eq!(settings.app_root(), PathBuf::from("."));
        assert_eq!(settings.assets_root(), PathBuf::from("assets"));
    }

    #[rstest]
    fn required_settings_report_their_variable() {
        let _guard = lock_env(VARS.map(|var| (var, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.db_url(),
            Err(MissingSetting {
                setting: "db_url",
                env_var: "CHIRPY_DB_URL",
            })
        );
        assert_eq!(
            settings.platform().expect_err("platform missing").env_var,
            "CHIRPY_PLATFORM"
        );
    }

    #[rstest]
    #[case("dev", Platform::Development)]
    #[case("production", Platform::Production)]
    #[case("DEV", Platform::Production)]
    fn environment_overrides_are_respected(#[case] platform: &str, #[case] expected: Platform) {
        let _guard = lock_env([
            ("CHIRPY_DB_URL", Some("postgres://localhost/chirpy".to_owned())),
            ("CHIRPY_PLATFORM", Some(platform.to_owned())),
            ("CHIRPY_PORT", Some("9000".to_owned())),
            ("CHIRPY_HOST", Some("127.0.0.1".to_owned())),
            ("CHIRPY_APP_ROOT", Some("/srv/chirpy".to_owned())),
            ("CHIRPY_ASSETS_ROOT", Some("/srv/chirpy/assets".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.db_url(), Ok("postgres://localhost/chirpy"));
        assert_eq!(settings.platform(), Ok(expected));
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(settings.app_root(), PathBuf::from("/srv/chirpy"));
        assert_eq!(settings.assets_root(), PathBuf::from("/srv/chirpy/assets"));
    }
}
