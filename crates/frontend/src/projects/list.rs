//! Project picker shown when no project is open

use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::loader::ProjectHint;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::project::aggregate::ProjectSummary;
use contracts::shared::features::template_label;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl From<&ProjectSummary> for ProjectHint {
    fn from(project: &ProjectSummary) -> Self {
        Self {
            project_id: project.id.clone(),
            name: Some(project.name.clone()),
            template_type: Some(project.template_type.clone()).filter(|t| !t.trim().is_empty()),
        }
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let projects = RwSignal::new(Vec::<ProjectSummary>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_projects().await {
                Ok(list) => {
                    let _ = projects.try_set(list);
                }
                Err(e) => {
                    log!("Failed to load projects: {}", e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    load();

    view! {
        <div class="project-list">
            <PageHeader title="Projects">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Refresh"
                </Button>
            </PageHeader>

            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                            <Spinner />
                            <span>"Loading projects..."</span>
                        </Flex>
                    }.into_any()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="view__error">
                            <strong>"Error: "</strong>{err}
                        </div>
                    }.into_any()
                } else if projects.with(|p| p.is_empty()) {
                    view! { <div class="project-list__empty">"No projects yet"</div> }.into_any()
                } else {
                    view! {
                        <div class="project-list__grid">
                            <For
                                each=move || projects.get()
                                key=|project| project.id.clone()
                                children=move |project: ProjectSummary| {
                                    let hint = ProjectHint::from(&project);
                                    let template = template_label(&project.template_type);
                                    view! {
                                        <div
                                            class="project-card"
                                            on:click=move |_| ctx.open_project(hint.clone())
                                        >
                                            <span class="project-card__icon">{icon("folder-open")}</span>
                                            <span class="project-card__name">{project.name}</span>
                                            <span class="project-card__template">{template}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
