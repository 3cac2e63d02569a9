use crate::domain::ColorMode;
use serde::{Deserialize, Serialize};

/// Session state persisted between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Colour mode the user last picked explicitly.
    #[serde(default, rename = "notiflow-theme", skip_serializing_if = "Option::is_none")]
    pub theme: Option<ColorMode>,
}
