use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_ROOT: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "ACCOUNTS_URL")]
    pub accounts_url: Option<String>,
    #[serde(default, alias = "REPORTS_URL")]
    pub reports_url: Option<String>,
    #[serde(default, alias = "CORE_URL")]
    pub core_url: Option<String>,
}

impl RuntimeConfig {
    fn is_empty(&self) -> bool {
        self.api_base_url.is_none()
            && self.accounts_url.is_none()
            && self.reports_url.is_none()
            && self.core_url.is_none()
    }
}

/// Base URLs of the three backend API groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub accounts: String,
    pub reports: String,
    pub core: String,
}

impl ApiEndpoints {
    pub fn from_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            accounts: format!("{}/accounts", root),
            reports: format!("{}/relatorios", root),
            core: format!("{}/candidaturas", root),
        }
    }

    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        let root = cfg
            .api_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_ROOT);
        let defaults = Self::from_root(root);
        let pick = |explicit: &Option<String>, fallback: String| {
            explicit
                .as_deref()
                .map(|url| url.trim().trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        Self {
            accounts: pick(&cfg.accounts_url, defaults.accounts),
            reports: pick(&cfg.reports_url, defaults.reports),
            core: pick(&cfg.core_url, defaults.core),
        }
    }
}

static API_ENDPOINTS: OnceLock<ApiEndpoints> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_config(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let read = |key: &str, alt: &str| {
        js_sys::Reflect::get(&any, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&any, &alt.into()).ok())
            .and_then(|v| v.as_string())
    };
    let cfg = RuntimeConfig {
        api_base_url: read("api_base_url", "API_BASE_URL"),
        accounts_url: read("accounts_url", "ACCOUNTS_URL"),
        reports_url: read("reports_url", "REPORTS_URL"),
        core_url: read("core_url", "CORE_URL"),
    };
    (!cfg.is_empty()).then_some(cfg)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global_config(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__RESIDENCIAS_ENV (env.js) takes precedence over window.__RESIDENCIAS_CONFIG
    read_global_config("__RESIDENCIAS_ENV").or_else(|| read_global_config("__RESIDENCIAS_CONFIG"))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>()
        .await
        .ok()
        .filter(|cfg| !cfg.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://127.0.0.1/config.json".to_string()
}

fn cache_endpoints(endpoints: ApiEndpoints) -> ApiEndpoints {
    API_ENDPOINTS.get_or_init(|| endpoints).clone()
}

pub async fn await_api_endpoints() -> ApiEndpoints {
    if let Some(cached) = API_ENDPOINTS.get() {
        return cached.clone();
    }
    if let Some(cfg) = snapshot_from_globals() {
        return cache_endpoints(ApiEndpoints::from_config(&cfg));
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache_endpoints(ApiEndpoints::from_config(&cfg));
    }
    log::warn!("No runtime config found, using {}", DEFAULT_API_ROOT);
    cache_endpoints(ApiEndpoints::from_root(DEFAULT_API_ROOT))
}

pub async fn init() {
    let endpoints = await_api_endpoints().await;
    log::info!(
        "API endpoints: accounts={} reports={} core={}",
        endpoints.accounts,
        endpoints.reports,
        endpoints.core
    );
}
