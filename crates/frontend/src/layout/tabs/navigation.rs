use super::loader::ProjectHint;
use super::page::TabPage;
use super::selection::{NavigationPhase, PhaseKind};
use super::tab_bar::TabBar;
use super::view_model::NavigationVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::features::template_label;
use leptos::prelude::*;
use thaw::*;

/// Feature navigation of one project: tab bar plus the active feature view.
///
/// Loads the feature list on mount and follows `?feature=` route changes.
#[component]
pub fn ProjectNavigation(hint: ProjectHint) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let vm = NavigationVm::new(hint, ctx);
    vm.load();

    // Route → selection (back/forward, edited URL)
    Effect::new(move |_| {
        if let Some(route_value) = ctx.feature.get() {
            vm.follow_route(&route_value);
        }
    });

    let phase = Memo::new(move |_| vm.state.with(|s| s.phase().kind()));
    let notice = move || vm.state.with(|s| s.load_error().map(str::to_string));
    let title = move || {
        vm.context
            .with(|c| c.as_ref().map(|c| c.project_name.clone()))
            .unwrap_or_else(|| vm.project_id())
    };
    let subtitle = Signal::derive(move || {
        vm.context
            .with(|c| c.as_ref().map(|c| template_label(&c.template_type)))
            .filter(|t| !t.is_empty())
    });

    view! {
        <div class="project-nav">
            <div class="project-nav__header">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.close_project()>
                    {icon("chevron-left")}
                    "Projects"
                </Button>
                {move || view! { <PageHeader title=title() subtitle=subtitle>{()}</PageHeader> }}
            </div>

            {move || match phase.get() {
                PhaseKind::Uninitialized | PhaseKind::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                        <Spinner />
                        <span>"Loading features..."</span>
                    </Flex>
                }
                .into_any(),
                PhaseKind::Error => {
                    let message = vm.state.with_untracked(|s| match s.phase() {
                        NavigationPhase::Error { message } => message.clone(),
                        _ => String::new(),
                    });
                    view! {
                        <div class="project-nav__empty">
                            <p>{message}</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.load()>
                                "Retry"
                            </Button>
                        </div>
                    }
                    .into_any()
                }
                PhaseKind::Ready => view! {
                    {move || notice().map(|n| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <span>"Showing the default features for this project: "{n}</span>
                        </MessageBar>
                    })}
                    <TabBar vm=vm />
                    <div class="project-nav__content">
                        <TabPage vm=vm />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
