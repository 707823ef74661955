//! Pokeform Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokeform_player::ports::outbound::PlatformPort;
use pokeform_player::runner::{self, config::RunnerConfig, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine; real env vars still apply.
        let dotenv = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pokeform_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        if let Ok(path) = dotenv {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    #[allow(unused_mut)]
    let mut config = RunnerConfig::from_env();

    // Shell kind (desktop vs mobile layout) follows the viewport in the browser
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        config.shell = if width < 768.0 {
            pokeform_player::ui::ShellKind::Mobile
        } else {
            pokeform_player::ui::ShellKind::Desktop
        };
    }

    // Platform
    let platform = pokeform_player::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    runner::run(RunnerDeps { platform, config });
}
