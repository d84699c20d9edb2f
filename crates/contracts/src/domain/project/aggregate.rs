use crate::shared::features::{resolve_features, FeatureDescriptor};
use serde::{Deserialize, Serialize};

// ============================================================================
// Project record
// ============================================================================

/// Project as served by the project service (`GET /api/projects/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,

    /// Methodology: "scrum", "kanban", "waterfall", ...
    #[serde(rename = "templateType", default)]
    pub template_type: String,

    /// Backend-declared feature names; overrides the template catalog when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ProjectRecord {
    /// Ordered feature list for this project
    pub fn resolve_features(&self) -> Vec<FeatureDescriptor> {
        resolve_features(&self.template_type, self.features.as_deref())
    }
}

/// Short project row for the project list (`GET /api/projects`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "templateType", default)]
    pub template_type: String,
}
