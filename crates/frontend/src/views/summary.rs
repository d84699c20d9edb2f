//! Project summary: task totals, progress and overdue work

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use crate::shared::components::stat_card::{format_percent, StatCard, StatTone};
use chrono::NaiveDate;
use contracts::domain::task::aggregate::{Task, TaskStatus};
use contracts::shared::features::template_label;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub overdue: usize,
    /// Done / total, 0.0 for an empty project
    pub completion: f64,
}

pub fn summarize(tasks: &[Task], today: NaiveDate) -> SummaryStats {
    let total = tasks.len();
    let done = tasks.iter().filter(|t| t.status.is_done()).count();
    let in_progress = tasks
        .iter()
        .filter(|t| matches!(t.status, TaskStatus::InProgress | TaskStatus::InReview))
        .count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.status.is_done() && t.due_date.is_some_and(|due| due < today))
        .count();
    let completion = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64
    };

    SummaryStats {
        total,
        done,
        in_progress,
        overdue,
        completion,
    }
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);
    let template = template_label(&context.template_type);

    view! {
        <div class="view view--summary">
            <div class="view__caption">
                <h2>{context.project_name.clone()}</h2>
                <span class="view__badge">{template}</span>
            </div>
            {render_task_load(load, |tasks| {
                let today = chrono::Local::now().date_naive();
                let stats = summarize(&tasks, today);
                let overdue_tone = if stats.overdue > 0 { StatTone::Bad } else { StatTone::Good };
                view! {
                    <div class="stat-grid">
                        <StatCard label="Tasks" icon_name="list" value=stats.total.to_string() />
                        <StatCard
                            label="Completed"
                            icon_name="list-checks"
                            value=stats.done.to_string()
                            tone=StatTone::Good
                            subtitle=format_percent(stats.completion)
                        />
                        <StatCard label="In progress" icon_name="activity" value=stats.in_progress.to_string() />
                        <StatCard
                            label="Overdue"
                            icon_name="calendar"
                            value=stats.overdue.to_string()
                            tone=overdue_tone
                        />
                    </div>
                    <div class="progress">
                        <div
                            class="progress__bar"
                            style=format!("width: {}", format_percent(stats.completion))
                        ></div>
                    </div>
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

    fn task(id: &str, status: TaskStatus, due: Option<(i32, u32, u32)>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            status,
            assignee: None,
            priority: None,
            sprint_id: None,
            start_date: None,
            due_date: due.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            order: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_empty_project() {
        let stats = summarize(&[], today());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion, 0.0);
    }

    #[test]
    fn test_counts() {
        let tasks = vec![
            task("1", TaskStatus::Done, Some((2024, 6, 1))),
            task("2", TaskStatus::InProgress, Some((2024, 6, 9))),
            task("3", TaskStatus::InReview, Some((2024, 6, 10))),
            task("4", TaskStatus::Todo, None),
        ];
        let stats = summarize(&tasks, today());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.in_progress, 2);
        // done tasks and tasks due today are not overdue
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion, 0.25);
    }
}
