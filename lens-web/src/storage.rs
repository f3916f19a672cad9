//! Local storage helpers

use lens_ui::ImageSearchConfig;

/// Key holding a JSON override for the widget config
pub const CONFIG_KEY: &str = "lens.config";

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Widget config: defaults, overlaid with the stored JSON if it parses
pub fn load_config() -> ImageSearchConfig {
    let Some(json) = get_string(CONFIG_KEY) else {
        return ImageSearchConfig::default();
    };
    match ImageSearchConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring malformed {CONFIG_KEY}: {e}");
            ImageSearchConfig::default()
        }
    }
}
