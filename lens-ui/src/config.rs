//! Display strings and picker settings for the widget

use serde::{Deserialize, Serialize};

/// Widget configuration
///
/// Every field has a default, so hosts can override any subset from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    /// Placeholder for the text field
    pub placeholder: String,
    /// Accessible label for the text field
    pub search_input_aria_label: String,
    /// Accessible label for the text search button
    pub search_aria_label: String,
    /// Accessible label for the button that opens the dialog
    pub image_search_aria_label: String,
    pub dialog_title: String,
    /// Prompt shown in the drop zone before the upload link
    pub drop_prompt: String,
    /// Text of the inline link that opens the file picker
    pub upload_label: String,
    /// `accept` filter for the file picker
    pub accept: String,
    pub submit_label: String,
    pub cancel_label: String,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search Google Maps".to_string(),
            search_input_aria_label: "search google maps".to_string(),
            search_aria_label: "search".to_string(),
            image_search_aria_label: "search by image".to_string(),
            dialog_title: "Tìm bằng hình ảnh qua Google Ống kính".to_string(),
            drop_prompt: "Kéo hình ảnh vào đây hoặc".to_string(),
            upload_label: "tải tệp lên".to_string(),
            accept: "image/*".to_string(),
            submit_label: "Tìm kiếm".to_string(),
            cancel_label: "Hủy".to_string(),
        }
    }
}

impl ImageSearchConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_images_only() {
        let config = ImageSearchConfig::default();
        assert_eq!(config.accept, "image/*");
        assert_eq!(config.upload_label, "tải tệp lên");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ImageSearchConfig::from_json(r#"{"placeholder": "Search", "accept": "image/png"}"#)
                .unwrap();
        assert_eq!(config.placeholder, "Search");
        assert_eq!(config.accept, "image/png");
        assert_eq!(config.dialog_title, ImageSearchConfig::default().dialog_title);
    }

    #[test]
    fn text_field_label_is_independent_of_placeholder() {
        let config = ImageSearchConfig::from_json(r#"{"placeholder": "Tìm trên bản đồ"}"#).unwrap();
        assert_eq!(config.search_input_aria_label, "search google maps");

        let config =
            ImageSearchConfig::from_json(r#"{"search_input_aria_label": "map search"}"#).unwrap();
        assert_eq!(config.search_input_aria_label, "map search");
        assert_eq!(config.placeholder, ImageSearchConfig::default().placeholder);
    }

    #[test]
    fn empty_object_is_default() {
        let config = ImageSearchConfig::from_json("{}").unwrap();
        assert_eq!(config, ImageSearchConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(ImageSearchConfig::from_json("{\"placeholder\": 3}").is_err());
        assert!(ImageSearchConfig::from_json("not json").is_err());
    }
}
