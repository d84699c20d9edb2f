use crate::layout::tabs::loader::ProjectHint;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query-string form of the route: `?project=<id>&feature=<route segment>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
}

impl RouteQuery {
    /// Parses a `location.search` value. Malformed queries yield an empty route.
    pub fn parse(search: &str) -> Self {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        let mut route: Self = serde_qs::from_str(query).unwrap_or_default();
        route.project = route.project.filter(|p| !p.trim().is_empty());
        route.feature = route.feature.filter(|f| !f.trim().is_empty());
        // a feature without a project has nothing to select
        if route.project.is_none() {
            route.feature = None;
        }
        route
    }

    /// `?project=..&feature=..`, or an empty string for the project list
    pub fn to_search(&self) -> String {
        if self.project.is_none() {
            return String::new();
        }
        let query = serde_qs::to_string(self).unwrap_or_default();
        format!("?{}", query)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Project currently open; `None` shows the project list
    pub project: RwSignal<Option<ProjectHint>>,
    /// Route value of the selected feature (route segment or id)
    pub feature: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            project: RwSignal::new(None),
            feature: RwSignal::new(None),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let route = RouteQuery::parse(&search);
        if let Some(project_id) = route.project {
            leptos::logging::log!("route: project='{}' feature={:?}", project_id, route.feature);
            self.project.set(Some(ProjectHint {
                project_id,
                ..ProjectHint::default()
            }));
            self.feature.set(route.feature);
        }

        let this = *self;
        Effect::new(move |_| {
            let route = RouteQuery {
                project: this.project.with(|p| p.as_ref().map(|p| p.project_id.clone())),
                feature: this.feature.get(),
            };
            let new_search = route.to_search();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_search {
                if let Some(w) = window() {
                    let url = if new_search.is_empty() {
                        w.location().pathname().unwrap_or_else(|_| "/".to_string())
                    } else {
                        new_search
                    };
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_project(&self, hint: ProjectHint) {
        leptos::logging::log!("open_project: id='{}'", hint.project_id);
        let same = self.project.with_untracked(|current| {
            current.as_ref().map(|p| p.project_id.as_str()) == Some(hint.project_id.as_str())
        });
        if !same {
            self.feature.set(None);
        }
        self.project.set(Some(hint));
    }

    /// Records the selected feature in the route.
    pub fn set_feature(&self, route_value: &str) {
        let changed = self
            .feature
            .with_untracked(|current| current.as_deref() != Some(route_value));
        if changed {
            self.feature.set(Some(route_value.to_string()));
        }
    }

    pub fn close_project(&self) {
        leptos::logging::log!("close_project");
        self.feature.set(None);
        self.project.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
