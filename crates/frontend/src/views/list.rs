//! Flat task list with search and column sorting

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput, Searchable, Sortable,
};
use contracts::domain::task::aggregate::{Task, TaskStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

fn status_rank(status: &TaskStatus) -> usize {
    TaskStatus::COLUMNS
        .iter()
        .position(|s| s == status)
        .unwrap_or(TaskStatus::COLUMNS.len())
}

/// `None` sorts after any value
fn cmp_optional<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Searchable for Task {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.title.to_lowercase().contains(&filter)
            || self
                .assignee
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(&filter))
    }
}

impl Sortable for Task {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => status_rank(&self.status).cmp(&status_rank(&other.status)),
            "assignee" => cmp_optional(&self.assignee, &other.assignee),
            "due" => cmp_optional(&self.due_date, &other.due_date),
            _ => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
        }
    }
}

#[component]
fn TaskTable(tasks: Vec<Task>) -> impl IntoView {
    let tasks = StoredValue::new(tasks);
    let filter = RwSignal::new(String::new());
    let sort_field = RwSignal::new("title".to_string());
    let sort_ascending = RwSignal::new(true);

    let rows = move || {
        let mut items = filter_list(tasks.get_value(), &filter.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="list__sortable" on:click=create_sort_toggle(field, sort_field, sort_ascending)>
                {label}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <div class="list__toolbar">
            <SearchInput
                value=filter
                on_change=Callback::new(move |value: String| filter.set(value))
                placeholder="Search tasks..."
            />
            <span class="list__count">{move || format!("{} tasks", rows().len())}</span>
        </div>
        <table class="list__table">
            <thead>
                <tr>
                    {header("title", "Title")}
                    {header("status", "Status")}
                    {header("assignee", "Assignee")}
                    {header("due", "Due")}
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|task| task.id.clone()
                    children=move |task: Task| {
                        let title = task.title.clone();
                        view! {
                            <tr>
                                <td>{move || highlight_matches(&title, &filter.get())}</td>
                                <td>{task.status.label().to_string()}</td>
                                <td>{task.assignee.clone().unwrap_or_default()}</td>
                                <td>{task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);

    view! {
        <div class="view view--list">
            {render_task_load(load, |tasks| view! { <TaskTable tasks=tasks /> }.into_any())}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(title: &str, status: TaskStatus, assignee: Option<&str>, due: Option<u32>) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            status,
            assignee: assignee.map(str::to_string),
            priority: None,
            sprint_id: None,
            start_date: None,
            due_date: due.and_then(|d| NaiveDate::from_ymd_opt(2024, 5, d)),
            order: None,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_status_follows_workflow() {
        let mut tasks = vec![
            task("a", TaskStatus::Done, None, None),
            task("b", TaskStatus::Other("blocked".into()), None, None),
            task("c", TaskStatus::Todo, None, None),
            task("d", TaskStatus::InReview, None, None),
        ];
        sort_list(&mut tasks, "status", true);
        assert_eq!(titles(&tasks), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_sort_by_due_puts_unscheduled_last() {
        let mut tasks = vec![
            task("late", TaskStatus::Todo, None, Some(20)),
            task("never", TaskStatus::Todo, None, None),
            task("soon", TaskStatus::Todo, None, Some(3)),
        ];
        sort_list(&mut tasks, "due", true);
        assert_eq!(titles(&tasks), vec!["soon", "late", "never"]);
    }

    #[test]
    fn test_search_covers_assignee() {
        let tasks = vec![
            task("Write docs", TaskStatus::Todo, Some("Morgan"), None),
            task("Fix login", TaskStatus::Todo, Some("Sam"), None),
        ];
        let found = filter_list(tasks, "morg");
        assert_eq!(titles(&found), vec!["Write docs"]);
    }
}
