//! ViewModel for the project navigation

use super::dispatcher::{Dispatched, Dispatcher, ViewContext};
use super::loader::{load_features, LoadPolicy, ProjectHint};
use super::selection::{NavigationState, SelectionToken};
use crate::layout::global_context::AppGlobalContext;
use crate::projects::api;
use crate::shared::config::config;
use crate::views::{view_registry, ViewFn};
use gloo_timers::future::sleep;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Signals of one open project. All async work writes back through `try_*`
/// so completions after the project was closed are dropped silently.
#[derive(Clone, Copy)]
pub struct NavigationVm {
    /// Selection state machine
    pub state: RwSignal<NavigationState>,
    /// Context handed to every view; set once features are loaded
    pub context: RwSignal<Option<ViewContext>>,
    /// View resolved for the latest selection
    pub rendered: RwSignal<Option<Dispatched<ViewFn>>>,
    hint: StoredValue<ProjectHint>,
    route: AppGlobalContext,
}

impl NavigationVm {
    pub fn new(hint: ProjectHint, route: AppGlobalContext) -> Self {
        Self {
            state: RwSignal::new(NavigationState::new()),
            context: RwSignal::new(None),
            rendered: RwSignal::new(None),
            hint: StoredValue::new(hint),
            route,
        }
    }

    pub fn project_id(&self) -> String {
        self.hint.with_value(|h| h.project_id.clone())
    }

    /// Starts (or retries) loading the feature list.
    pub fn load(&self) {
        if !self.state.try_update(|s| s.begin_loading()).unwrap_or(false) {
            return;
        }

        let this = *self;
        let hint = self.hint.get_value();
        spawn_local(async move {
            let policy = LoadPolicy::from(&config().navigation);
            let fetch = api::fetch_project(&hint.project_id);
            let loaded = load_features(&hint, fetch, sleep(policy.timeout), &policy).await;

            let notice = loaded.error.as_ref().map(|e| e.to_string());
            let _ = this.context.try_set(Some(ViewContext {
                project_id: hint.project_id.clone(),
                project_name: loaded.project_name,
                template_type: loaded.template_type,
                tasks: None,
            }));

            let route_feature = this.route.feature.try_get_untracked().flatten();
            let token = this
                .state
                .try_update(|s| s.finish_loading(loaded.features, notice, route_feature.as_deref()))
                .flatten();

            match token {
                Some(token) => {
                    this.sync_route();
                    this.dispatch(token);
                }
                None => log!("project '{}': no feature to open", hint.project_id),
            }
        });
    }

    /// Selects a feature by id (tab click).
    pub fn select(&self, feature_id: &str) {
        let token = self.state.try_update(|s| s.select(feature_id)).flatten();
        if let Some(token) = token {
            self.sync_route();
            self.dispatch(token);
        }
    }

    /// Applies a route change (route segment or id).
    pub fn follow_route(&self, route_value: &str) {
        let token = self.state.try_update(|s| s.follow_route(route_value)).flatten();
        if let Some(token) = token {
            self.dispatch(token);
        }
    }

    fn sync_route(&self) {
        let segment = self
            .state
            .try_with_untracked(|s| s.active_feature().map(|f| f.route_segment.clone()))
            .flatten();
        if let Some(segment) = segment {
            self.route.set_feature(&segment);
        }
    }

    /// Resolves the view of the active feature for `token`. A stale result
    /// (the user moved on while the view was loading) is discarded.
    fn dispatch(&self, token: SelectionToken) {
        let Some(feature) = self
            .state
            .try_with_untracked(|s| s.active_feature().cloned())
            .flatten()
        else {
            return;
        };

        let state = self.state;
        let rendered = self.rendered;
        spawn_local(async move {
            let dispatcher = Dispatcher::new(view_registry());
            let is_current = |t| state.try_with_untracked(|s| s.is_current(t)).unwrap_or(false);
            if let Some(dispatched) = dispatcher.dispatch(&feature, token, is_current).await {
                let _ = rendered.try_set(Some(dispatched));
            }
        });
    }
}
