use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::CatalogService;
use crate::infrastructure::ApiAdapter;
use crate::ports::outbound::{CatalogPort, PlatformPort};
use crate::ui::presentation::Services;

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    use crate::infrastructure::http_client::{
        DEFAULT_CATALOG_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    use crate::ports::outbound::DEFAULT_CATALOG_LIMIT;
    use crate::ui::ShellKind;

    pub const CATALOG_URL_VAR: &str = "POKEFORM_CATALOG_URL";
    pub const CATALOG_LIMIT_VAR: &str = "POKEFORM_CATALOG_LIMIT";
    pub const REQUEST_TIMEOUT_VAR: &str = "POKEFORM_REQUEST_TIMEOUT_SECS";
    pub const SHELL_VAR: &str = "POKEFORM_SHELL";

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        pub catalog_url: String,
        pub catalog_limit: u32,
        pub request_timeout_secs: u64,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                catalog_url: DEFAULT_CATALOG_BASE_URL.to_string(),
                catalog_limit: DEFAULT_CATALOG_LIMIT,
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            }
        }
    }

    impl RunnerConfig {
        /// Read the process environment. Unset or unparsable values keep
        /// their defaults.
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let mut config = Self::default();

            if let Some(url) = lookup(CATALOG_URL_VAR) {
                let url = url.trim().trim_end_matches('/');
                if url.is_empty() {
                    tracing::warn!(var = CATALOG_URL_VAR, "Empty catalog URL, using default");
                } else {
                    config.catalog_url = url.to_string();
                }
            }
            if let Some(limit) = parse_var::<u32>(&lookup, CATALOG_LIMIT_VAR) {
                if limit == 0 {
                    tracing::warn!(var = CATALOG_LIMIT_VAR, "Catalog limit must be positive, using default");
                } else {
                    config.catalog_limit = limit;
                }
            }
            if let Some(secs) = parse_var::<u64>(&lookup, REQUEST_TIMEOUT_VAR) {
                config.request_timeout_secs = secs;
            }
            if let Some(shell) = parse_var::<ShellKind>(&lookup, SHELL_VAR) {
                config.shell = shell;
            }

            config
        }
    }

    fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = lookup(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(var = key, value = %raw, error = %e, "Ignoring invalid setting");
                None
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn config_from(pairs: &[(&str, &str)]) -> RunnerConfig {
            let vars: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            RunnerConfig::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn empty_environment_gives_defaults() {
            let config = config_from(&[]);
            assert_eq!(config, RunnerConfig::default());
            assert_eq!(config.catalog_url, "https://pokeapi.co/api/v2");
            assert_eq!(config.catalog_limit, 151);
            assert_eq!(config.request_timeout_secs, 30);
            assert_eq!(config.shell, ShellKind::Desktop);
        }

        #[test]
        fn overrides_are_applied() {
            let config = config_from(&[
                (CATALOG_URL_VAR, "http://localhost:8080/api/v2/"),
                (CATALOG_LIMIT_VAR, "20"),
                (REQUEST_TIMEOUT_VAR, "5"),
                (SHELL_VAR, " Mobile "),
            ]);
            assert_eq!(config.catalog_url, "http://localhost:8080/api/v2");
            assert_eq!(config.catalog_limit, 20);
            assert_eq!(config.request_timeout_secs, 5);
            assert_eq!(config.shell, ShellKind::Mobile);
        }

        #[test]
        fn invalid_values_fall_back_to_defaults() {
            let config = config_from(&[
                (CATALOG_URL_VAR, "   "),
                (CATALOG_LIMIT_VAR, "0"),
                (REQUEST_TIMEOUT_VAR, "soon"),
                (SHELL_VAR, "tablet"),
            ]);
            assert_eq!(config, RunnerConfig::default());
        }

        #[test]
        fn shell_kind_parse_rejects_unknown() {
            assert_eq!("desktop".parse::<ShellKind>(), Ok(ShellKind::Desktop));
            assert!("tv".parse::<ShellKind>().is_err());
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Arc<dyn PlatformPort>,
    pub config: RunnerConfig,
}

/// Wire the adapters into services and hand control to Dioxus.
pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, config } = deps;

    tracing::info!(
        catalog_url = %config.catalog_url,
        catalog_limit = config.catalog_limit,
        shell = ?config.shell,
        "Starting Pokeform Player"
    );

    let raw_api = Arc::new(ApiAdapter::with_timeout(
        &config.catalog_url,
        config.request_timeout_secs,
    ));
    let api = Api::new(raw_api);
    let catalog: Arc<dyn CatalogPort> = Arc::new(CatalogService::new(api));
    let services = Services::new(catalog).with_catalog_limit(config.catalog_limit);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title(crate::ui::PAGE_TITLE));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config.shell)
        .with_context(services)
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(&css_path).unwrap_or_else(|e| {
        tracing::warn!(path = %css_path.display(), error = %e, "Stylesheet not found");
        FALLBACK_CSS.to_string()
    })
}
