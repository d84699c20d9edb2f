//! Navigation selection state machine for one project view.
//!
//! ```text
//! Uninitialized ──► Loading ──► Ready(active) ──► Ready(active') ...
//!                      │  ▲
//!                      ▼  │ retry
//!                     Error
//! ```
//!
//! Every selection change advances a [`SelectionToken`]. Async work started
//! for a selection compares its token with [`NavigationState::is_current`]
//! when it completes and drops its result if the selection moved on.

use contracts::shared::features::{find_feature, FeatureDescriptor};

/// Monotonically increasing marker of a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(u64);

impl SelectionToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationPhase {
    Uninitialized,
    Loading,
    Ready { active_feature_id: String },
    Error { message: String },
}

/// Data-free view of [`NavigationPhase`], cheap to compare in reactive code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Uninitialized,
    Loading,
    Ready,
    Error,
}

impl NavigationPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Uninitialized => PhaseKind::Uninitialized,
            Self::Loading => PhaseKind::Loading,
            Self::Ready { .. } => PhaseKind::Ready,
            Self::Error { .. } => PhaseKind::Error,
        }
    }
}

pub const NO_FEATURES_MESSAGE: &str = "No features are available for this project.";

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    phase: NavigationPhase,
    features: Vec<FeatureDescriptor>,
    load_error: Option<String>,
    token: SelectionToken,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            phase: NavigationPhase::Uninitialized,
            features: Vec::new(),
            load_error: None,
            token: SelectionToken::default(),
        }
    }

    pub fn phase(&self) -> &NavigationPhase {
        &self.phase
    }

    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Why the feature source fell back (kept in `Ready` for an informational notice)
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn token(&self) -> SelectionToken {
        self.token
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.token == token
    }

    pub fn active_feature_id(&self) -> Option<&str> {
        match &self.phase {
            NavigationPhase::Ready { active_feature_id } => Some(active_feature_id),
            _ => None,
        }
    }

    pub fn active_feature(&self) -> Option<&FeatureDescriptor> {
        let id = self.active_feature_id()?;
        self.features.iter().find(|f| f.id == id)
    }

    /// `Uninitialized → Loading`, or `Error → Loading` on retry.
    /// Returns false when a load is already running or finished.
    pub fn begin_loading(&mut self) -> bool {
        match self.phase {
            NavigationPhase::Uninitialized | NavigationPhase::Error { .. } => {
                self.phase = NavigationPhase::Loading;
                self.load_error = None;
                true
            }
            NavigationPhase::Loading | NavigationPhase::Ready { .. } => false,
        }
    }

    /// `Loading → Ready` with the initial selection, or `Loading → Error` when
    /// no feature is available.
    ///
    /// The initial selection is the feature named by `route_feature` (route
    /// segment or id) when it exists, otherwise the first feature.
    pub fn finish_loading(
        &mut self,
        features: Vec<FeatureDescriptor>,
        load_error: Option<String>,
        route_feature: Option<&str>,
    ) -> Option<SelectionToken> {
        if self.phase != NavigationPhase::Loading {
            log::warn!("finish_loading ignored in phase {:?}", self.phase.kind());
            return None;
        }

        let initial = route_feature
            .and_then(|value| find_feature(&features, value))
            .or_else(|| features.first())
            .map(|f| f.id.clone());

        self.features = features;
        self.load_error = load_error;

        match initial {
            Some(active_feature_id) => {
                if let Some(requested) = route_feature {
                    if self.find(requested).is_none() {
                        log::info!(
                            "route feature '{}' not found, opening '{}'",
                            requested,
                            active_feature_id
                        );
                    }
                }
                self.phase = NavigationPhase::Ready { active_feature_id };
                Some(self.advance())
            }
            None => {
                let message = self
                    .load_error
                    .clone()
                    .unwrap_or_else(|| NO_FEATURES_MESSAGE.to_string());
                self.phase = NavigationPhase::Error { message };
                None
            }
        }
    }

    /// `Ready → Ready(feature_id)`. Returns the new token, or `None` when the
    /// state is not ready, the feature is unknown, or it is already active.
    pub fn select(&mut self, feature_id: &str) -> Option<SelectionToken> {
        let current = self.active_feature_id()?;
        if current == feature_id {
            return None;
        }
        if !self.features.iter().any(|f| f.id == feature_id) {
            log::debug!("ignoring selection of unknown feature '{}'", feature_id);
            return None;
        }

        self.phase = NavigationPhase::Ready {
            active_feature_id: feature_id.to_string(),
        };
        Some(self.advance())
    }

    /// Applies a route change. The value may be a route segment or an id;
    /// values that match no feature leave the selection unchanged.
    pub fn follow_route(&mut self, route_value: &str) -> Option<SelectionToken> {
        let id = self.find(route_value)?.id.clone();
        self.select(&id)
    }

    fn find(&self, route_value: &str) -> Option<&FeatureDescriptor> {
        find_feature(&self.features, route_value)
    }

    fn advance(&mut self) -> SelectionToken {
        self.token = self.token.next();
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::features::{default_features, resolve_features};

    fn loading() -> NavigationState {
        let mut state = NavigationState::new();
        assert!(state.begin_loading());
        state
    }

    #[test]
    fn test_initial_selection_is_first_feature() {
        let mut state = loading();
        let token = state.finish_loading(resolve_features("scrum", None), None, None);
        assert!(token.is_some());
        assert_eq!(state.active_feature_id(), Some("summary"));
        assert_eq!(state.phase().kind(), PhaseKind::Ready);
    }

    #[test]
    fn test_initial_selection_follows_route() {
        let mut state = loading();
        state.finish_loading(resolve_features("scrum", None), None, Some("sprint-board"));
        assert_eq!(state.active_feature_id(), Some("sprint_board"));
        assert_eq!(state.active_feature().map(|f| f.view_key.as_str()), Some("board"));
    }

    #[test]
    fn test_unknown_route_feature_falls_back_to_first() {
        let mut state = loading();
        let token = state.finish_loading(resolve_features("kanban", None), None, Some("nope"));
        assert!(token.is_some());
        assert_eq!(state.active_feature_id(), Some("summary"));
        assert!(state.load_error().is_none());
    }

    #[test]
    fn test_select_advances_token() {
        let mut state = loading();
        let first = state.finish_loading(resolve_features("kanban", None), None, None).unwrap();

        let second = state.select("board").unwrap();
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
        assert_eq!(state.active_feature_id(), Some("board"));

        // same feature again or an unknown one: no change
        assert!(state.select("board").is_none());
        assert!(state.select("retrospective").is_none());
        assert_eq!(state.token(), second);
    }

    #[test]
    fn test_follow_route() {
        let mut state = loading();
        state.finish_loading(resolve_features("scrum", None), None, None);

        assert!(state.follow_route("product-backlog").is_some());
        assert_eq!(state.active_feature_id(), Some("product_backlog"));

        assert!(state.follow_route("missing").is_none());
        assert_eq!(state.active_feature_id(), Some("product_backlog"));
    }

    #[test]
    fn test_fallback_features_are_ready_with_notice() {
        let mut state = loading();
        state.finish_loading(default_features(), Some("timeout".to_string()), None);
        assert_eq!(state.phase().kind(), PhaseKind::Ready);
        assert_eq!(state.load_error(), Some("timeout"));
        assert_eq!(state.features().len(), 2);
    }

    #[test]
    fn test_no_features_is_error_and_retryable() {
        let mut state = loading();
        let token = state.finish_loading(Vec::new(), Some("HTTP error: 503".to_string()), None);
        assert!(token.is_none());
        assert_eq!(
            state.phase(),
            &NavigationPhase::Error {
                message: "HTTP error: 503".to_string()
            }
        );
        assert!(state.select("summary").is_none());

        assert!(state.begin_loading());
        assert_eq!(state.phase(), &NavigationPhase::Loading);
        assert!(state.load_error().is_none());

        state.finish_loading(default_features(), None, None);
        assert_eq!(state.active_feature_id(), Some("summary"));
    }

    #[test]
    fn test_empty_list_without_error_uses_informational_message() {
        let mut state = loading();
        state.finish_loading(Vec::new(), None, None);
        assert_eq!(
            state.phase(),
            &NavigationPhase::Error {
                message: NO_FEATURES_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_transitions_out_of_order_are_ignored() {
        let mut state = NavigationState::new();
        assert!(state.finish_loading(default_features(), None, None).is_none());
        assert_eq!(state.phase(), &NavigationPhase::Uninitialized);
        assert!(state.select("summary").is_none());

        state.begin_loading();
        assert!(!state.begin_loading());
        state.finish_loading(default_features(), None, None);
        assert!(!state.begin_loading());
    }
}
