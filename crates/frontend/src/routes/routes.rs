use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::ProjectNavigation;
use crate::layout::Shell;
use crate::projects::ProjectList;
use leptos::prelude::*;

/// Project list when no project is open, the project's feature navigation
/// otherwise. Switching projects rebuilds the navigation from scratch.
#[component]
fn MainContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let open_project_id =
        Memo::new(move |_| ctx.project.with(|p| p.as_ref().map(|p| p.project_id.clone())));

    move || match open_project_id.get() {
        Some(_) => match ctx.project.get_untracked() {
            Some(hint) => view! { <ProjectNavigation hint=hint /> }.into_any(),
            None => view! { <ProjectList /> }.into_any(),
        },
        None => view! { <ProjectList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=|| view! { <MainContent /> }.into_any() />
    }
}
