//! Reports view: status distribution and per-assignee workload

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use crate::shared::components::stat_card::format_percent;
use contracts::domain::task::aggregate::Task;
use leptos::prelude::*;

pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq)]
pub struct StatusShare {
    pub label: String,
    pub count: usize,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    pub assignee: String,
    pub open: usize,
    pub done: usize,
}

/// Share of each status present in `tasks`, largest first
pub fn status_distribution(tasks: &[Task]) -> Vec<StatusShare> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for task in tasks {
        let label = task.status.label();
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    let total = tasks.len().max(1) as f64;
    let mut shares: Vec<StatusShare> = counts
        .into_iter()
        .map(|(label, count)| StatusShare {
            label,
            count,
            share: count as f64 / total,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    shares
}

/// Open and done counts per assignee, busiest (most open) first
pub fn workload(tasks: &[Task]) -> Vec<Workload> {
    let mut rows: Vec<Workload> = Vec::new();
    for task in tasks {
        let name = task
            .assignee
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(UNASSIGNED);
        let idx = match rows.iter().position(|r| r.assignee == name) {
            Some(idx) => idx,
            None => {
                rows.push(Workload {
                    assignee: name.to_string(),
                    open: 0,
                    done: 0,
                });
                rows.len() - 1
            }
        };
        if task.status.is_done() {
            rows[idx].done += 1;
        } else {
            rows[idx].open += 1;
        }
    }
    rows.sort_by(|a, b| b.open.cmp(&a.open).then_with(|| a.assignee.cmp(&b.assignee)));
    rows
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);

    view! {
        <div class="view view--reports">
            {render_task_load(load, |tasks| {
                let distribution = status_distribution(&tasks);
                let workload = workload(&tasks);
                view! {
                    <section class="reports__section">
                        <h3>"Status distribution"</h3>
                        {distribution
                            .into_iter()
                            .map(|s| {
                                let width = format!("width: {}", format_percent(s.share));
                                view! {
                                    <div class="reports__bar-row">
                                        <span class="reports__bar-label">{s.label}</span>
                                        <div class="reports__bar"><div class="reports__bar-fill" style=width></div></div>
                                        <span class="reports__bar-value">{s.count}" ("{format_percent(s.share)}")"</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>
                    <section class="reports__section">
                        <h3>"Workload"</h3>
                        <table class="reports__table">
                            <thead>
                                <tr><th>"Assignee"</th><th>"Open"</th><th>"Done"</th></tr>
                            </thead>
                            <tbody>
                                {workload
                                    .into_iter()
                                    .map(|w| view! {
                                        <tr><td>{w.assignee}</td><td>{w.open}</td><td>{w.done}</td></tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </section>
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

    fn task(status: TaskStatus, assignee: Option<&str>) -> Task {
        Task {
            id: String::new(),
            title: String::new(),
            status,
            assignee: assignee.map(str::to_string),
            priority: None,
            sprint_id: None,
            start_date: None,
            due_date: None,
            order: None,
        }
    }

    #[test]
    fn test_status_distribution() {
        let tasks = vec![
            task(TaskStatus::Done, None),
            task(TaskStatus::Todo, None),
            task(TaskStatus::Done, None),
            task(TaskStatus::Done, None),
        ];
        let shares = status_distribution(&tasks);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].label, "Done");
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].share, 0.75);
        assert!(status_distribution(&[]).is_empty());
    }

    #[test]
    fn test_workload_groups_unassigned() {
        let tasks = vec![
            task(TaskStatus::Todo, Some("Ana")),
            task(TaskStatus::Done, Some("Ana")),
            task(TaskStatus::InProgress, None),
            task(TaskStatus::Todo, Some("  ")),
            task(TaskStatus::Todo, Some("Bo")),
        ];
        let rows = workload(&tasks);
        assert_eq!(
            rows,
            vec![
                Workload { assignee: UNASSIGNED.to_string(), open: 2, done: 0 },
                Workload { assignee: "Ana".to_string(), open: 1, done: 1 },
                Workload { assignee: "Bo".to_string(), open: 1, done: 0 },
            ]
        );
    }
}
