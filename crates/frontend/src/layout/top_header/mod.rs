//! TopHeader component - application top bar.
//!
//! Shows the application title and, while a project is open, its id with a
//! button back to the project list.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let open_project = move || {
        ctx.project
            .with(|p| p.as_ref().map(|p| p.name.clone().unwrap_or_else(|| p.project_id.clone())))
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Project Hub"</span>
                {move || open_project().map(|name| view! {
                    <span class="top-header__crumb">" / "{name}</span>
                })}
            </div>

            <div class="top-header__actions">
                <Show when=move || open_project().is_some()>
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| ctx.close_project()
                        title="All projects"
                    >
                        {icon("folder-open")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
