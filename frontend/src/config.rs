use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_FLASH_TIMEOUT_MS: u64 = 3000;

/// Raw configuration as published by `env.js`, `window.__PEOPLEDESK_CONFIG`
/// or `./config.json`. Every field is optional; missing values fall back to
/// the defaults above.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "FLASH_TIMEOUT_MS")]
    pub flash_timeout_ms: Option<u64>,
}

impl RuntimeConfig {
    /// Field-wise merge where `self` wins over `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
            flash_timeout_ms: self.flash_timeout_ms.or(fallback.flash_timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub flash_timeout_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: Tz::UTC,
            flash_timeout_ms: DEFAULT_FLASH_TIMEOUT_MS,
        }
    }
}

impl From<RuntimeConfig> for ResolvedConfig {
    fn from(raw: RuntimeConfig) -> Self {
        let defaults = ResolvedConfig::default();
        let time_zone = match raw.time_zone.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone '{}' in runtime config, using UTC", name);
                Tz::UTC
            }),
            _ => defaults.time_zone,
        };
        let api_base_url = raw
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        Self {
            api_base_url,
            time_zone,
            flash_timeout_ms: raw.flash_timeout_ms.unwrap_or(defaults.flash_timeout_ms),
        }
    }
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

/// Returns the resolved configuration, or defaults before `init` finished.
pub fn current() -> ResolvedConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    current().time_zone
}

pub fn flash_timeout_ms() -> u64 {
    current().flash_timeout_ms
}

pub async fn resolve() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    // window.__PEOPLEDESK_ENV (env.js) takes precedence over everything else.
    let from_globals = browser::snapshot_from_globals();
    let raw = match from_globals {
        Some(cfg) if cfg.api_base_url.is_some() => cfg,
        partial => {
            let fetched = browser::fetch_runtime_config().await.unwrap_or_default();
            partial.unwrap_or_default().or(fetched)
        }
    };
    let resolved = ResolvedConfig::from(raw);
    let _ = CONFIG.set(resolved.clone());
    CONFIG.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    resolve().await.api_base_url
}

pub async fn init() {
    let cfg = resolve().await;
    log::debug!(
        "api_base_url={} time_zone={} flash_timeout_ms={}",
        cfg.api_base_url,
        cfg.time_zone,
        cfg.flash_timeout_ms
    );
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
        serde_json::from_str(&json)
            .map_err(|err| log::warn!("Ignoring malformed {}: {}", name, err))
            .ok()
    }

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        match (
            read_global("__PEOPLEDESK_ENV"),
            read_global("__PEOPLEDESK_CONFIG"),
        ) {
            (Some(env), Some(cfg)) => Some(env.or(cfg)),
            (env, cfg) => env.or(cfg),
        }
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::debug!("No config.json published (status {})", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        None
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_defaults_when_nothing_is_published() {
        let resolved = ResolvedConfig::from(RuntimeConfig::default());
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn accepts_upper_case_keys_and_trims_trailing_slash() {
        let raw: RuntimeConfig = serde_json::from_value(serde_json::json!({
            "API_BASE_URL": "https://hr.example.com/api/",
            "TIME_ZONE": "Asia/Tokyo",
            "FLASH_TIMEOUT_MS": 1500
        }))
        .unwrap();
        let resolved = ResolvedConfig::from(raw);
        assert_eq!(resolved.api_base_url, "https://hr.example.com/api");
        assert_eq!(resolved.time_zone, chrono_tz::Asia::Tokyo);
        assert_eq!(resolved.flash_timeout_ms, 1500);
    }

    #[test]
    fn unknown_time_zone_falls_back_to_utc() {
        let resolved = ResolvedConfig::from(RuntimeConfig {
            time_zone: Some("Mars/Olympus".into()),
            ..RuntimeConfig::default()
        });
        assert_eq!(resolved.time_zone, Tz::UTC);
    }

    #[test]
    fn env_values_win_over_config_values() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env".into()),
            ..RuntimeConfig::default()
        };
        let cfg = RuntimeConfig {
            api_base_url: Some("https://cfg".into()),
            time_zone: Some("Europe/Berlin".into()),
            flash_timeout_ms: None,
        };
        let merged = env.or(cfg);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env"));
        assert_eq!(merged.time_zone.as_deref(), Some("Europe/Berlin"));
    }
}
