use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid runtime config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl FrontendError {
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
