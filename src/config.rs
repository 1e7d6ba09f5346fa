use crate::{
    domain::{Constraints, IdStrategy, RandomIdGenerator},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Validation rules for the three form fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            title: Constraints::required().with_min_length(3),
            description: Constraints::required().with_min_length(5),
            people: Constraints::required().with_min(1.0).with_max(10.0),
        }
    }
}

/// Element ids, class names and form rules used by the board
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host_id: String,
    pub input_template_id: String,
    pub list_template_id: String,
    pub item_template_id: String,
    pub form_element_id: String,
    pub droppable_class: String,
    pub drag_mime: String,
    pub invalid_input_message: String,
    pub id_strategy: IdStrategy,
    pub max_random_id: u32,
    pub rules: FieldRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host_id: "app".to_string(),
            input_template_id: "project-input".to_string(),
            list_template_id: "project-list".to_string(),
            item_template_id: "single-project".to_string(),
            form_element_id: "user-input".to_string(),
            droppable_class: "droppable".to_string(),
            drag_mime: "text/plain".to_string(),
            invalid_input_message: "Invalid User Input".to_string(),
            id_strategy: IdStrategy::default(),
            max_random_id: RandomIdGenerator::DEFAULT_UPPER_BOUND,
            rules: FieldRules::default(),
        }
    }
}

impl AppConfig {
    /// Parses a JSON config, filling missing keys with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::ConfigError(e.to_string()))
    }

    /// Loads a JSON config file. A missing file yields the defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
