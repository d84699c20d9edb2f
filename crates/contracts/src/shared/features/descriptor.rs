use serde::{Deserialize, Serialize};

/// One navigable capability of a project (a tab in the project navigation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Stable lowercase identifier, unique within a feature set ("product_backlog")
    pub id: String,
    /// Human-readable label
    pub name: String,
    /// Opaque glyph key, resolved by the UI icon set
    pub icon: String,
    /// Registry key of the view that renders this feature
    #[serde(rename = "viewKey")]
    pub view_key: String,
    /// URL-safe slug used for deep links ("product-backlog")
    #[serde(rename = "routeSegment")]
    pub route_segment: String,
    /// Ascending sort key; equal values keep catalog order
    pub order: u32,
}

/// Compile-time catalog row. Converted into an owned [`FeatureDescriptor`]
/// when a template is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub icon: &'static str,
    pub view_key: &'static str,
    pub order: u32,
}

impl FeatureSpec {
    pub const fn new(name: &'static str, icon: &'static str, view_key: &'static str, order: u32) -> Self {
        Self {
            name,
            icon,
            view_key,
            order,
        }
    }

    pub fn to_descriptor(&self) -> FeatureDescriptor {
        FeatureDescriptor {
            id: feature_id(self.name),
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            view_key: self.view_key.to_string(),
            route_segment: route_segment(self.name),
            order: self.order,
        }
    }
}

// ============================================================================
// Name normalization
// ============================================================================

/// Lowercases `raw` and collapses every run of non-alphanumeric characters
/// into a single `separator`. Leading and trailing separators are dropped.
///
/// Example: `slugify(" Sprint  Board! ", '-')` → `"sprint-board"`
pub fn slugify(raw: &str, separator: char) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

/// Feature id form of a raw name: `"Product Backlog"` → `"product_backlog"`
pub fn feature_id(raw: &str) -> String {
    slugify(raw, '_')
}

/// Route segment form of a raw name: `"Product Backlog"` → `"product-backlog"`
pub fn route_segment(raw: &str) -> String {
    slugify(raw, '-')
}

/// Loose comparison key: lowercase with every non-alphanumeric removed.
/// `"Scrum_Board"`, `"scrum-board"` and `"scrumboard"` all fold to `"scrumboard"`.
pub fn fold_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Capitalizes the first letter and leaves the rest untouched:
/// `"custom Thing"` → `"Custom Thing"`
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Product Backlog", '_'), "product_backlog");
        assert_eq!(slugify("  Sprint -- Board!! ", '-'), "sprint-board");
        assert_eq!(slugify("WIP/Limits", '_'), "wip_limits");
        assert_eq!(slugify("!!!", '_'), "");
    }

    #[test]
    fn test_fold_key_ignores_case_and_punctuation() {
        assert_eq!(fold_key("Scrum_Board"), "scrumboard");
        assert_eq!(fold_key("scrum-board"), "scrumboard");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("custom thing"), "Custom thing");
        assert_eq!(capitalize_first("Summary"), "Summary");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_spec_to_descriptor() {
        let d = FeatureSpec::new("Sprint Board", "columns", "board", 4).to_descriptor();
        assert_eq!(d.id, "sprint_board");
        assert_eq!(d.route_segment, "sprint-board");
        assert_eq!(d.view_key, "board");
        assert_eq!(d.order, 4);
    }
}
