//! Board view: tasks grouped into workflow columns

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use contracts::domain::task::aggregate::{Task, TaskStatus};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Standard columns in workflow order (always present, possibly empty),
/// followed by one column per unknown status in order of first appearance.
pub fn group_by_column(tasks: &[Task]) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = TaskStatus::COLUMNS
        .iter()
        .map(|status| BoardColumn {
            status: status.clone(),
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        match columns.iter_mut().find(|c| c.status == task.status) {
            Some(column) => column.tasks.push(task.clone()),
            None => columns.push(BoardColumn {
                status: task.status.clone(),
                tasks: vec![task.clone()],
            }),
        }
    }

    columns
}

fn card(task: Task) -> impl IntoView {
    view! {
        <div class="board__card">
            <div class="board__card-title">{task.title}</div>
            <div class="board__card-meta">
                {task.assignee.map(|a| view! { <span class="board__assignee">{a}</span> })}
                {task.priority.map(|p| view! { <span class="board__priority">{p}</span> })}
            </div>
        </div>
    }
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);

    view! {
        <div class="view view--board">
            {render_task_load(load, |tasks| {
                let columns = group_by_column(&tasks);
                view! {
                    <div class="board">
                        {columns
                            .into_iter()
                            .map(|column| {
                                let count = column.tasks.len();
                                view! {
                                    <div class="board__column" data-status=column.status.as_str().to_string()>
                                        <div class="board__column-header">
                                            <span>{column.status.label().to_string()}</span>
                                            <span class="board__count">{count}</span>
                                        </div>
                                        {column.tasks.into_iter().map(card).collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
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

    fn task(id: &str, status: &str) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            status: TaskStatus::parse(status),
            assignee: None,
            priority: None,
            sprint_id: None,
            start_date: None,
            due_date: None,
            order: None,
        }
    }

    #[test]
    fn test_standard_columns_always_present() {
        let columns = group_by_column(&[]);
        let statuses: Vec<&str> = columns.iter().map(|c| c.status.as_str()).collect();
        assert_eq!(statuses, vec!["todo", "in_progress", "in_review", "done"]);
    }

    #[test]
    fn test_tasks_land_in_their_column() {
        let tasks = vec![
            task("a", "done"),
            task("b", "In Progress"),
            task("c", "blocked"),
            task("d", "todo"),
            task("e", "blocked"),
        ];
        let columns = group_by_column(&tasks);
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[0].tasks[0].id, "d");
        assert_eq!(columns[1].tasks[0].id, "b");
        assert_eq!(columns[3].tasks[0].id, "a");
        assert_eq!(columns[4].status.label(), "blocked");
        let blocked: Vec<&str> = columns[4].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(blocked, vec!["c", "e"]);
    }
}
