use account::config::{AccountConfig, BASE_URL_ENV, MODE_ENV};
use dioxus::prelude::*;
use std::env;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    {
        let dotenv = account::config::load_dotenv();
        init_tracing();
        match dotenv {
            Ok(Some(path)) => tracing::info!("startup: loaded {}", path.display()),
            Ok(None) => {}
            Err(e) => tracing::warn!("startup: failed to load .env: {e}"),
        }
    }

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    tracing::info!("startup: IP={ip} PORT={port}");

    // Account settings are compiled in; runtime values for them are ignored.
    match AccountConfig::from_build_env() {
        Ok(config) => tracing::info!(
            "startup: mode={:?} {BASE_URL_ENV}={}",
            config.mode,
            redact_url(config.base_url())
        ),
        Err(e) => tracing::warn!("startup: account config invalid: {e:#}"),
    }

    log_ignored_runtime_envs(&[MODE_ENV, BASE_URL_ENV]);
}

/// Hide userinfo credentials embedded in a URL.
fn redact_url(value: &str) -> String {
    if let Some((prefix, rest)) = value.split_once("://") {
        if let Some((creds, host)) = rest.split_once('@') {
            let user = creds.split(':').next().unwrap_or("user");
            return format!("{prefix}://{user}:***@{host}");
        }
        return value.to_string();
    }

    format!("<invalid {BASE_URL_ENV}>")
}

fn log_ignored_runtime_envs(keys: &[&str]) {
    let set: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).is_ok())
        .collect();
    if set.is_empty() {
        return;
    }

    tracing::warn!(
        "startup: {} set at runtime; account settings come from the build environment",
        set.join(", ")
    );
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AccountConfig::from_build_env().map_err(|e| format!("{e:#}")));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AppTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::LangSwitch {}
                match config {
                    Ok(config) => rsx! { ui::AuthForm { config } },
                    Err(err) => rsx! { ConfigError { message: err } },
                }
            }
        }
    }
}

#[component]
fn ConfigError(message: String) -> Element {
    let lang = ui::use_lang()();
    rsx! {
        div { class: "auth_container",
            p { class: "error", {format!("{} {message}", ui::t(lang, "config.error_prefix"))} }
        }
    }
}
