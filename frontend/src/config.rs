use crate::error::FrontendError;
use serde::Deserialize;
use std::sync::OnceLock;

/// Name of the optional global the hosting page can define before the wasm
/// bundle loads, e.g. `window.__ISSUEWATCH_CONFIG = { filter_debounce_ms: 500 }`.
pub const CONFIG_GLOBAL: &str = "__ISSUEWATCH_CONFIG";

pub const DEFAULT_FILTER_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 1023;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub filter_debounce_ms: u32,
    /// Widest viewport, inclusive, that still gets the mobile layout.
    pub mobile_breakpoint_px: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            filter_debounce_ms: DEFAULT_FILTER_DEBOUNCE_MS,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn runtime_config() -> RuntimeConfig {
    *RUNTIME_CONFIG.get_or_init(load_runtime_config)
}

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, FrontendError> {
    Ok(serde_json::from_str(raw)?)
}

fn load_runtime_config() -> RuntimeConfig {
    match read_window_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => RuntimeConfig::default(),
        Err(err) => {
            log::warn!("ignoring {CONFIG_GLOBAL}: {err}");
            RuntimeConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Result<Option<RuntimeConfig>, FrontendError> {
    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    let value =
        js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()).map_err(FrontendError::dom)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let raw: String = js_sys::JSON::stringify(&value)
        .map_err(FrontendError::dom)?
        .into();
    parse_runtime_config(&raw).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_config() -> Result<Option<RuntimeConfig>, FrontendError> {
    Ok(None)
}
