//! Backlog view: open work in rank order, split by sprint assignment

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use contracts::domain::task::aggregate::Task;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Ranked tasks first (lower `order` first), unranked after them by title
fn rank(a: &Task, b: &Task) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Backlog {
    /// Open tasks already planned into a sprint
    pub planned: Vec<Task>,
    /// Open tasks not in any sprint
    pub unplanned: Vec<Task>,
}

pub fn build_backlog(tasks: &[Task]) -> Backlog {
    let (mut planned, mut unplanned): (Vec<Task>, Vec<Task>) = tasks
        .iter()
        .filter(|t| !t.status.is_done())
        .cloned()
        .partition(|t| t.sprint_id.is_some());
    planned.sort_by(rank);
    unplanned.sort_by(rank);
    Backlog { planned, unplanned }
}

fn backlog_section(title: &'static str, tasks: Vec<Task>) -> impl IntoView {
    let count = tasks.len();
    view! {
        <section class="backlog__section">
            <h3>{title}" ("{count}")"</h3>
            {if tasks.is_empty() {
                view! { <div class="backlog__empty">"Nothing here"</div> }.into_any()
            } else {
                view! {
                    <ol class="backlog__items">
                        {tasks
                            .into_iter()
                            .map(|t| view! {
                                <li class="backlog__item">
                                    <span class="backlog__title">{t.title}</span>
                                    <span class="backlog__status">{t.status.label().to_string()}</span>
                                    {t.sprint_id.map(|s| view! { <span class="backlog__sprint">{s}</span> })}
                                </li>
                            })
                            .collect_view()}
                    </ol>
                }.into_any()
            }}
        </section>
    }
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);

    view! {
        <div class="view view--backlog">
            {render_task_load(load, |tasks| {
                let backlog = build_backlog(&tasks);
                view! {
                    {backlog_section("In sprint", backlog.planned)}
                    {backlog_section("Backlog", backlog.unplanned)}
                }
                .into_any()
            })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::task::aggregate::TaskStatus;

    fn task(title: &str, order: Option<i64>, sprint: Option<&str>, status: TaskStatus) -> Task {
        Task {
            id: title.to_lowercase(),
            title: title.to_string(),
            status,
            assignee: None,
            priority: None,
            sprint_id: sprint.map(str::to_string),
            start_date: None,
            due_date: None,
            order,
        }
    }

    #[test]
    fn test_done_tasks_leave_the_backlog() {
        let tasks = vec![
            task("Shipped", Some(1), None, TaskStatus::Done),
            task("Open", None, None, TaskStatus::Todo),
        ];
        let backlog = build_backlog(&tasks);
        assert!(backlog.planned.is_empty());
        assert_eq!(backlog.unplanned.len(), 1);
        assert_eq!(backlog.unplanned[0].title, "Open");
    }

    #[test]
    fn test_rank_order_then_title() {
        let tasks = vec![
            task("Zeta", None, None, TaskStatus::Todo),
            task("Beta", Some(2), None, TaskStatus::Todo),
            task("Alpha", None, None, TaskStatus::Todo),
            task("Gamma", Some(1), None, TaskStatus::InProgress),
            task("Sprint item", Some(5), Some("s1"), TaskStatus::Todo),
        ];
        let backlog = build_backlog(&tasks);
        let titles: Vec<&str> = backlog.unplanned.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Gamma", "Beta", "Alpha", "Zeta"]);
        assert_eq!(backlog.planned.len(), 1);
    }
}
