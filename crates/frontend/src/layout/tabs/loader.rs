//! Loads the feature list of a project from the project service.
//!
//! The fetch is bounded by a timeout. On failure or timeout the features are
//! resolved from what the host already knows about the project (its template
//! type, if any), so navigation still has something to show.

use crate::projects::api::ApiError;
use crate::shared::config::NavigationConfig;
use contracts::domain::project::aggregate::ProjectRecord;
use contracts::shared::features::{resolve_features_with_source, FeatureDescriptor, FeatureSource};
use futures::future::{select, Either};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureLoadError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("project service did not answer within {0:?}")]
    Timeout(Duration),
}

/// What the host knows about a project before its record is fetched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectHint {
    pub project_id: String,
    pub name: Option<String>,
    pub template_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPolicy {
    pub timeout: Duration,
    pub substitute_defaults_on_failure: bool,
}

impl From<&NavigationConfig> for LoadPolicy {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            timeout: config.feature_fetch_timeout(),
            substitute_defaults_on_failure: config.substitute_defaults_on_failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureLoad {
    pub project_name: String,
    pub template_type: String,
    pub features: Vec<FeatureDescriptor>,
    /// `None` when the fetch failed and no fallback was substituted
    pub source: Option<FeatureSource>,
    pub error: Option<FeatureLoadError>,
}

/// Fetches the project record and resolves its features.
///
/// `fetch` is the project service call and `timer` completes when
/// `policy.timeout` has elapsed; whichever finishes first wins.
pub async fn load_features<F, T>(hint: &ProjectHint, fetch: F, timer: T, policy: &LoadPolicy) -> FeatureLoad
where
    F: Future<Output = Result<ProjectRecord, ApiError>>,
    T: Future<Output = ()>,
{
    let fetched = match select(pin!(fetch), pin!(timer)).await {
        Either::Left((result, _)) => result.map_err(FeatureLoadError::from),
        Either::Right(((), _)) => Err(FeatureLoadError::Timeout(policy.timeout)),
    };

    match fetched {
        Ok(project) => {
            let (features, source) =
                resolve_features_with_source(&project.template_type, project.features.as_deref());
            log::info!(
                "project '{}': {} features ({})",
                project.id,
                features.len(),
                source.as_str()
            );
            FeatureLoad {
                project_name: project.name,
                template_type: project.template_type,
                features,
                source: Some(source),
                error: None,
            }
        }
        Err(error) => {
            log::warn!(
                "feature list for project '{}' unavailable: {}",
                hint.project_id,
                error
            );
            let template_type = hint.template_type.clone().unwrap_or_default();
            let (features, source) = if policy.substitute_defaults_on_failure {
                let (features, source) = resolve_features_with_source(&template_type, None);
                (features, Some(source))
            } else {
                (Vec::new(), None)
            };
            FeatureLoad {
                project_name: hint.name.clone().unwrap_or_else(|| hint.project_id.clone()),
                template_type,
                features,
                source,
                error: Some(error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    fn hint(template: Option<&str>) -> ProjectHint {
        ProjectHint {
            project_id: "p1".to_string(),
            name: Some("Apollo".to_string()),
            template_type: template.map(str::to_string),
        }
    }

    fn policy(substitute: bool) -> LoadPolicy {
        LoadPolicy {
            timeout: Duration::from_secs(10),
            substitute_defaults_on_failure: substitute,
        }
    }

    fn project(template: &str, features: Option<Vec<&str>>) -> ProjectRecord {
        ProjectRecord {
            id: "p1".to_string(),
            name: "Apollo (remote)".to_string(),
            template_type: template.to_string(),
            features: features.map(|f| f.into_iter().map(str::to_string).collect()),
        }
    }

    #[test]
    fn test_fetched_project_wins() {
        let load = block_on(load_features(
            &hint(None),
            ready(Ok(project("scrum", None))),
            pending(),
            &policy(true),
        ));
        assert!(load.error.is_none());
        assert_eq!(load.source, Some(FeatureSource::Catalog("scrum")));
        assert_eq!(load.project_name, "Apollo (remote)");
        assert!(load.features.iter().any(|f| f.id == "sprint_board"));
    }

    #[test]
    fn test_explicit_backend_features() {
        let load = block_on(load_features(
            &hint(Some("scrum")),
            ready(Ok(project("scrum", Some(vec!["Summary", "Custom Thing"])))),
            pending(),
            &policy(true),
        ));
        assert_eq!(load.source, Some(FeatureSource::Explicit));
        assert_eq!(load.features.len(), 2);
        assert_eq!(load.features[1].id, "custom_thing");
    }

    #[test]
    fn test_fetch_failure_uses_template_hint() {
        let load = block_on(load_features(
            &hint(Some("kanban")),
            ready(Err(ApiError::Status(500))),
            pending(),
            &policy(true),
        ));
        assert_eq!(load.error, Some(FeatureLoadError::Api(ApiError::Status(500))));
        assert_eq!(load.source, Some(FeatureSource::Catalog("kanban")));
        assert_eq!(load.project_name, "Apollo");
        assert_eq!(load.template_type, "kanban");
    }

    #[test]
    fn test_timeout_falls_back_to_default_pair() {
        let load = block_on(load_features(&hint(None), pending(), ready(()), &policy(true)));
        assert_eq!(
            load.error,
            Some(FeatureLoadError::Timeout(Duration::from_secs(10)))
        );
        assert_eq!(load.source, Some(FeatureSource::Default));
        let ids: Vec<&str> = load.features.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["summary", "board"]);
    }

    #[test]
    fn test_no_substitution_leaves_nothing() {
        let load = block_on(load_features(
            &hint(Some("scrum")),
            ready(Err(ApiError::Request("offline".to_string()))),
            pending(),
            &policy(false),
        ));
        assert!(load.features.is_empty());
        assert!(load.source.is_none());
        assert_eq!(
            load.error.map(|e| e.to_string()),
            Some("Request failed: offline".to_string())
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = NavigationConfig {
            feature_fetch_timeout_ms: 1500,
            substitute_defaults_on_failure: false,
        };
        let policy = LoadPolicy::from(&config);
        assert_eq!(policy.timeout, Duration::from_millis(1500));
        assert!(!policy.substitute_defaults_on_failure);
    }
}
