//! Feature views and the registry that maps view keys to them.
//!
//! Every view is a plain function of [`ViewContext`]. Features whose view key
//! is not registered here render [`PlaceholderView`].

pub mod backlog;
pub mod board;
pub mod list;
pub mod reports;
pub mod summary;
pub mod task_source;
pub mod timeline;

use crate::layout::tabs::dispatcher::{ViewContext, ViewUnit};
use crate::layout::tabs::placeholder::PlaceholderView;
use crate::layout::tabs::registry::{Placeholder, ViewRegistration, ViewRegistry};
use leptos::prelude::*;
use std::rc::Rc;

/// A registered view: renders the feature content for a project
#[derive(Clone, Copy)]
pub struct ViewFn(pub fn(ViewContext) -> AnyView);

impl ViewUnit for ViewFn {
    type Output = AnyView;

    fn render(&self, context: ViewContext) -> AnyView {
        (self.0)(context)
    }

    fn render_placeholder(placeholder: &Placeholder, context: ViewContext) -> AnyView {
        view! { <PlaceholderView placeholder=placeholder.clone() context=context /> }.into_any()
    }
}

fn registrations() -> Vec<ViewRegistration<ViewFn>> {
    vec![
        ViewRegistration::ready("summary", ViewFn(summary::render))
            .with_aliases(&["overview", "dashboard"]),
        ViewRegistration::ready("board", ViewFn(board::render))
            .with_aliases(&["scrum_board", "kanban_board", "sprint_board"]),
        ViewRegistration::ready("backlog", ViewFn(backlog::render))
            .with_aliases(&["product_backlog", "sprint_backlog"]),
        ViewRegistration::ready("list", ViewFn(list::render)).with_aliases(&["tasks"]),
        ViewRegistration::ready("timeline", ViewFn(timeline::render))
            .with_aliases(&["gantt", "roadmap"]),
        ViewRegistration::ready("reports", ViewFn(reports::render))
            .with_aliases(&["metrics", "burndown"]),
    ]
}

thread_local! {
    static VIEW_REGISTRY: Rc<ViewRegistry<ViewFn>> = Rc::new(ViewRegistry::new(registrations()));
}

/// The application-wide view registry
pub fn view_registry() -> Rc<ViewRegistry<ViewFn>> {
    VIEW_REGISTRY.with(Rc::clone)
}
