//! View dispatcher: feature → resolved view → invocation with a fixed context.
//!
//! The dispatcher never looks inside the context. Every view, the placeholder
//! included, receives the same [`ViewContext`].

use super::registry::{Placeholder, ResolvedView, ViewRegistry};
use super::selection::SelectionToken;
use contracts::domain::task::aggregate::Task;
use contracts::shared::features::FeatureDescriptor;
use std::rc::Rc;

/// Everything a view is given when it is invoked
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub project_id: String,
    pub project_name: String,
    pub template_type: String,
    /// Tasks already fetched by the host; views fetch their own when `None`
    pub tasks: Option<Vec<Task>>,
}

/// A renderable unit bound to a view key
pub trait ViewUnit: Clone + 'static {
    type Output;

    fn render(&self, context: ViewContext) -> Self::Output;

    fn render_placeholder(placeholder: &Placeholder, context: ViewContext) -> Self::Output;
}

/// Invokes a resolved view. The context is passed through unchanged.
pub fn invoke<V: ViewUnit>(view: &ResolvedView<V>, context: ViewContext) -> V::Output {
    match view {
        ResolvedView::Registered { view, .. } => view.render(context),
        ResolvedView::Placeholder(placeholder) => V::render_placeholder(placeholder, context),
    }
}

/// A view resolved for one particular selection
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched<V> {
    pub token: SelectionToken,
    pub feature_id: String,
    pub view: ResolvedView<V>,
}

pub struct Dispatcher<V> {
    registry: Rc<ViewRegistry<V>>,
}

impl<V> Clone for Dispatcher<V> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<V: Clone + 'static> Dispatcher<V> {
    pub fn new(registry: Rc<ViewRegistry<V>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ViewRegistry<V> {
        &self.registry
    }

    /// Resolves the view for `feature` on behalf of the selection `token`.
    ///
    /// Returns `None` when `is_current(token)` is false once loading has
    /// finished: a newer selection was made and this result is stale.
    pub async fn dispatch<F>(
        &self,
        feature: &FeatureDescriptor,
        token: SelectionToken,
        is_current: F,
    ) -> Option<Dispatched<V>>
    where
        F: Fn(SelectionToken) -> bool,
    {
        let view = self.registry.resolve(&feature.view_key).await.titled(&feature.name);

        if !is_current(token) {
            log::debug!(
                "discarding stale view '{}' for feature '{}' ({:?})",
                view.view_key(),
                feature.id,
                token
            );
            return None;
        }

        Some(Dispatched {
            token,
            feature_id: feature.id.clone(),
            view,
        })
    }
}
