//! Fallback view for features without a working view

use super::dispatcher::ViewContext;
use super::registry::{Placeholder, PlaceholderReason};
use crate::shared::icons::icon;
use contracts::shared::features::template_label;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PlaceholderView(placeholder: Placeholder, context: ViewContext) -> impl IntoView {
    let Placeholder {
        view_key,
        title,
        reason,
    } = placeholder;

    let template = if context.template_type.trim().is_empty() {
        None
    } else {
        Some(template_label(&context.template_type))
    };

    let data_view_key = view_key.clone();

    view! {
        <div class="placeholder-view" data-view-key=data_view_key>
            <div class="placeholder-view__icon">{icon("construction")}</div>
            <h2 class="placeholder-view__title">{title}</h2>
            <p class="placeholder-view__text">"This feature is under development."</p>
            {match reason {
                PlaceholderReason::NotRegistered => None,
                PlaceholderReason::LoadFailed(error) => Some(view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <span>"The view could not be loaded: "{error}</span>
                    </MessageBar>
                }),
            }}
            <dl class="placeholder-view__meta">
                <dt>"View"</dt>
                <dd>{view_key}</dd>
                <dt>"Project"</dt>
                <dd>{context.project_name}" ("{context.project_id}")"</dd>
                {template.map(|t| view! {
                    <dt>"Template"</dt>
                    <dd>{t}</dd>
                })}
            </dl>
        </div>
    }
}
