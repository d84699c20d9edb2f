//! Best-effort name → (view key, icon) tables for backend-declared feature names.
//!
//! Backends are not consistent about naming ("Board", "board", "scrum_board"),
//! so lookups go through [`fold_key`] and several spellings map to one view.

use super::descriptor::fold_key;

/// Icon used when nothing in the table matches
pub const GENERIC_ICON: &str = "layers";

/// (folded name, view key, icon)
const NAME_TABLE: &[(&str, &str, &str)] = &[
    // ── Overview ──────────────────────────────────────────────────────
    ("summary", "summary", "layout-dashboard"),
    ("overview", "summary", "layout-dashboard"),
    ("dashboard", "summary", "layout-dashboard"),
    // ── Boards ────────────────────────────────────────────────────────
    ("board", "board", "columns"),
    ("scrumboard", "board", "columns"),
    ("sprintboard", "board", "columns"),
    ("kanbanboard", "board", "columns"),
    ("taskboard", "board", "columns"),
    // ── Backlogs ──────────────────────────────────────────────────────
    ("backlog", "backlog", "list"),
    ("productbacklog", "backlog", "list"),
    ("sprintbacklog", "backlog", "list-checks"),
    // ── Lists ─────────────────────────────────────────────────────────
    ("list", "list", "table"),
    ("tasks", "list", "table"),
    ("issues", "list", "table"),
    ("requirements", "list", "file-text"),
    // ── Time ──────────────────────────────────────────────────────────
    ("timeline", "timeline", "calendar"),
    ("roadmap", "timeline", "calendar"),
    ("gantt", "timeline", "calendar"),
    ("ganttchart", "timeline", "calendar"),
    // ── Reports ───────────────────────────────────────────────────────
    ("reports", "reports", "bar-chart"),
    ("burndown", "reports", "trending-down"),
    ("cumulativeflow", "reports", "activity"),
    ("metrics", "reports", "activity"),
    ("velocity", "reports", "activity"),
    // ── Known features without a dedicated view ───────────────────────
    ("retrospective", "retrospective", "refresh-ccw"),
    ("wiplimits", "wip_limits", "gauge"),
    ("valuestream", "value_stream", "workflow"),
    ("milestones", "milestones", "flag"),
    ("phases", "phases", "layers"),
    ("wastelog", "waste_log", "trash"),
    ("sprints", "sprints", "repeat"),
];

fn find_row(raw_name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let folded = fold_key(raw_name);
    if folded.is_empty() {
        return None;
    }
    NAME_TABLE.iter().find(|(name, _, _)| *name == folded)
}

/// View key for a raw feature name, if the name is known.
pub fn view_key_for_name(raw_name: &str) -> Option<&'static str> {
    find_row(raw_name).map(|(_, view_key, _)| *view_key)
}

/// Icon for a raw feature name; [`GENERIC_ICON`] when unknown.
pub fn icon_for_name(raw_name: &str) -> &'static str {
    find_row(raw_name)
        .map(|(_, _, icon)| *icon)
        .unwrap_or(GENERIC_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_aliases_share_view() {
        assert_eq!(view_key_for_name("Board"), Some("board"));
        assert_eq!(view_key_for_name("scrum_board"), Some("board"));
        assert_eq!(view_key_for_name("Sprint Board"), Some("board"));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(view_key_for_name("Custom Thing"), None);
        assert_eq!(icon_for_name("Custom Thing"), GENERIC_ICON);
        assert_eq!(view_key_for_name(""), None);
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for_name("Burndown"), "trending-down");
        assert_eq!(icon_for_name("product backlog"), "list");
    }
}
