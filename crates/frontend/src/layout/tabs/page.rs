//! TabPage component - content area of the active feature
//!
//! Shows the view resolved for the current selection. While the view of a
//! newer selection is still loading, a spinner is shown instead of the
//! previous feature's content.

use super::dispatcher::invoke;
use super::view_model::NavigationVm;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TabPage(vm: NavigationVm) -> impl IntoView {
    let project_id = vm.project_id();
    log!("TabPage CREATED for project '{}'", project_id);
    on_cleanup(move || {
        log!("TabPage DESTROYED for project '{}'", project_id);
    });

    // Re-render only when a different selection is delivered
    let current = Memo::new(move |_| {
        let token = vm.state.with(|s| s.token());
        vm.rendered.with(|r| {
            r.as_ref()
                .filter(|d| d.token == token)
                .map(|d| (d.token, d.feature_id.clone()))
        })
    });

    move || match current.get() {
        Some((_, feature_id)) => {
            let content = vm.rendered.with_untracked(|r| r.as_ref().map(|d| d.view.clone()));
            let context = vm.context.get_untracked();
            match (content, context) {
                (Some(view), Some(context)) => view! {
                    <div class="tabs__item" data-feature-id=feature_id>
                        {invoke(&view, context)}
                    </div>
                }
                .into_any(),
                _ => view! { <div class="tabs__item"></div> }.into_any(),
            }
        }
        None => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                <Spinner />
                <span>"Loading view..."</span>
            </Flex>
        }
        .into_any(),
    }
}
