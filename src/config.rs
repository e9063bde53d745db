//! Build-time Configuration
//!
//! `DASHBOARD_CONFIG` (a JSON document) and `STUDENT_API_URL` are read when
//! the wasm bundle is compiled; anything unset keeps its default.

use student_core::DashboardConfig;

pub fn load_config() -> DashboardConfig {
    let mut config = match option_env!("DASHBOARD_CONFIG") {
        Some(json) => DashboardConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("[Config] {}, using defaults", e);
            DashboardConfig::default()
        }),
        None => DashboardConfig::default(),
    };
    if let Some(url) = option_env!("STUDENT_API_URL") {
        config = config.with_api_base_url(url);
    }
    log::debug!("[Config] API base: {}", config.api_base_url);
    config
}
