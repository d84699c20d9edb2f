//! Timeline view: scheduled tasks in chronological order

use super::task_source::{render_task_load, use_project_tasks};
use crate::layout::tabs::dispatcher::ViewContext;
use chrono::NaiveDate;
use contracts::domain::task::aggregate::{Task, TaskStatus};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub title: String,
    pub status: TaskStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineRow {
    /// Inclusive length in days
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    pub rows: Vec<TimelineRow>,
    /// Tasks with neither a start nor a due date
    pub unscheduled: usize,
}

/// A task with only one of the two dates becomes a one-day row. Reversed
/// ranges are swapped.
pub fn build_timeline(tasks: &[Task]) -> Timeline {
    let mut timeline = Timeline::default();

    for task in tasks {
        let (start, end) = match (task.start_date, task.due_date) {
            (Some(s), Some(e)) if s <= e => (s, e),
            (Some(s), Some(e)) => (e, s),
            (Some(d), None) | (None, Some(d)) => (d, d),
            (None, None) => {
                timeline.unscheduled += 1;
                continue;
            }
        };
        timeline.rows.push(TimelineRow {
            title: task.title.clone(),
            status: task.status.clone(),
            start,
            end,
        });
    }

    timeline
        .rows
        .sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)).then_with(|| a.title.cmp(&b.title)));
    timeline
}

pub fn render(context: ViewContext) -> AnyView {
    let load = use_project_tasks(&context);

    view! {
        <div class="view view--timeline">
            {render_task_load(load, |tasks| {
                let timeline = build_timeline(&tasks);
                let unscheduled = timeline.unscheduled;
                view! {
                    <table class="timeline">
                        <thead>
                            <tr>
                                <th>"Task"</th>
                                <th>"Start"</th>
                                <th>"End"</th>
                                <th>"Days"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {timeline
                                .rows
                                .into_iter()
                                .map(|row| {
                                    let days = row.span_days();
                                    view! {
                                        <tr>
                                            <td>{row.title}</td>
                                            <td>{row.start.format("%Y-%m-%d").to_string()}</td>
                                            <td>{row.end.format("%Y-%m-%d").to_string()}</td>
                                            <td>{days}</td>
                                            <td>{row.status.label().to_string()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || { unscheduled > 0 }>
                        <div class="timeline__unscheduled">
                            {format!("{} tasks without dates are not shown", unscheduled)}
                        </div>
                    </Show>
                }
                .into_any()
            })}
        </div>
    }
    .into_any()
}
