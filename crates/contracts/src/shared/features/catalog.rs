//! Template catalog - single source of truth for the default feature set of
//! each project template.
//!
//! Static tables, never mutated at runtime. Several templates point at the
//! same view through a shared `view_key` ("Sprint Board" and "Board" both
//! render with `board`).

use super::descriptor::FeatureSpec;

/// A project methodology and its default feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDef {
    pub id: &'static str,
    pub name: &'static str,
    pub features: &'static [FeatureSpec],
}

// ============================================================================
// Templates
// ============================================================================

const SCRUM: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Product Backlog", "list", "backlog", 2),
    FeatureSpec::new("Sprint Backlog", "list-checks", "backlog", 3),
    FeatureSpec::new("Sprint Board", "columns", "board", 4),
    FeatureSpec::new("Timeline", "calendar", "timeline", 5),
    FeatureSpec::new("Burndown", "trending-down", "reports", 6),
    FeatureSpec::new("Retrospective", "refresh-ccw", "retrospective", 7),
];

const KANBAN: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Board", "columns", "board", 2),
    FeatureSpec::new("Backlog", "list", "backlog", 3),
    FeatureSpec::new("List", "table", "list", 4),
    FeatureSpec::new("Cumulative Flow", "activity", "reports", 5),
    FeatureSpec::new("WIP Limits", "gauge", "wip_limits", 6),
];

const SCRUMBAN: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Backlog", "list", "backlog", 2),
    FeatureSpec::new("Board", "columns", "board", 3),
    FeatureSpec::new("Timeline", "calendar", "timeline", 4),
    FeatureSpec::new("Reports", "bar-chart", "reports", 5),
];

// Rows are not sorted by `order`; resolution sorts them.
const WATERFALL: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Reports", "bar-chart", "reports", 6),
    FeatureSpec::new("Requirements", "file-text", "list", 2),
    FeatureSpec::new("Phases", "layers", "phases", 3),
    FeatureSpec::new("Gantt Chart", "calendar", "timeline", 3),
    FeatureSpec::new("Milestones", "flag", "milestones", 4),
    FeatureSpec::new("Tasks", "table", "list", 5),
];

const LEAN: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Value Stream", "workflow", "value_stream", 2),
    FeatureSpec::new("Board", "columns", "board", 3),
    FeatureSpec::new("Backlog", "list", "backlog", 4),
    FeatureSpec::new("Waste Log", "trash", "waste_log", 5),
    FeatureSpec::new("Metrics", "activity", "reports", 6),
];

const AGILE: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Backlog", "list", "backlog", 2),
    FeatureSpec::new("Board", "columns", "board", 3),
    FeatureSpec::new("List", "table", "list", 4),
    FeatureSpec::new("Timeline", "calendar", "timeline", 5),
    FeatureSpec::new("Reports", "bar-chart", "reports", 6),
];

/// Feature set used when neither an explicit list nor a known template is given
pub const DEFAULT_FEATURES: &[FeatureSpec] = &[
    FeatureSpec::new("Summary", "layout-dashboard", "summary", 1),
    FeatureSpec::new("Board", "columns", "board", 2),
];

pub const TEMPLATES: &[TemplateDef] = &[
    TemplateDef { id: "scrum", name: "Scrum", features: SCRUM },
    TemplateDef { id: "kanban", name: "Kanban", features: KANBAN },
    TemplateDef { id: "scrumban", name: "Scrumban", features: SCRUMBAN },
    TemplateDef { id: "waterfall", name: "Waterfall", features: WATERFALL },
    TemplateDef { id: "lean", name: "Lean", features: LEAN },
    TemplateDef { id: "agile", name: "Agile", features: AGILE },
];

/// Case-insensitive template lookup; surrounding whitespace is ignored.
pub fn find_template(template_type: &str) -> Option<&'static TemplateDef> {
    let wanted = template_type.trim();
    TEMPLATES.iter().find(|t| t.id.eq_ignore_ascii_case(wanted))
}

/// Ids of every template in the catalog, in catalog order
pub fn known_templates() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.id)
}

/// Display name of a template; falls back to the raw value for unknown ones.
pub fn template_label(template_type: &str) -> String {
    find_template(template_type)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| template_type.to_string())
}
