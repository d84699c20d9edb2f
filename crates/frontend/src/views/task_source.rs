//! Task loading shared by the feature views

use crate::layout::tabs::dispatcher::ViewContext;
use crate::projects::api;
use contracts::domain::task::aggregate::Task;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskLoad {
    Loading,
    Loaded(Vec<Task>),
    Failed(String),
}

/// Tasks of the project in `context`: taken from the context when the host
/// already has them, fetched from the task service otherwise.
pub fn use_project_tasks(context: &ViewContext) -> RwSignal<TaskLoad> {
    if let Some(tasks) = &context.tasks {
        return RwSignal::new(TaskLoad::Loaded(tasks.clone()));
    }

    let load = RwSignal::new(TaskLoad::Loading);
    let project_id = context.project_id.clone();
    spawn_local(async move {
        let next = match api::fetch_tasks(&project_id).await {
            Ok(tasks) => TaskLoad::Loaded(tasks),
            Err(e) => {
                log!("Failed to load tasks for '{}': {}", project_id, e);
                TaskLoad::Failed(e.to_string())
            }
        };
        // the view may already be gone
        let _ = load.try_set(next);
    });
    load
}

/// Spinner while loading, an error box on failure, `render` once tasks are in.
pub fn render_task_load<F>(load: RwSignal<TaskLoad>, render: F) -> impl IntoView
where
    F: Fn(Vec<Task>) -> AnyView + Send + Sync + 'static,
{
    move || match load.get() {
        TaskLoad::Loading => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                <Spinner />
                <span>"Loading tasks..."</span>
            </Flex>
        }
        .into_any(),
        TaskLoad::Failed(err) => view! {
            <div class="view__error">
                <strong>"Error: "</strong>{err}
            </div>
        }
        .into_any(),
        TaskLoad::Loaded(tasks) => render(tasks),
    }
}
