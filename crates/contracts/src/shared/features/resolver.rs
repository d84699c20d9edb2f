//! Feature resolution: explicit backend list → template catalog → default pair.
//!
//! The operation is total. Whatever the input, the caller gets a non-empty,
//! ordered feature list with unique ids and route segments.

use super::catalog::{find_template, DEFAULT_FEATURES};
use super::descriptor::{capitalize_first, feature_id, route_segment, FeatureDescriptor, FeatureSpec};
use super::lookup::{icon_for_name, view_key_for_name};
use std::collections::HashSet;

/// Which branch produced a feature list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSource {
    /// Built from a backend-supplied list of names
    Explicit,
    /// Taken from the catalog entry with this template id
    Catalog(&'static str),
    /// Template unknown and no explicit list: Summary + Board
    Default,
}

impl FeatureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Catalog(_) => "catalog",
            Self::Default => "default",
        }
    }
}

/// Resolves the ordered feature list for a project.
///
/// # Arguments
/// * `template_type` - project template ("scrum", "Kanban", ...), case-insensitive
/// * `explicit_feature_names` - backend-declared feature names; wins when non-empty
pub fn resolve_features(
    template_type: &str,
    explicit_feature_names: Option<&[String]>,
) -> Vec<FeatureDescriptor> {
    resolve_features_with_source(template_type, explicit_feature_names).0
}

/// Same as [`resolve_features`], also reporting which branch was taken.
pub fn resolve_features_with_source(
    template_type: &str,
    explicit_feature_names: Option<&[String]>,
) -> (Vec<FeatureDescriptor>, FeatureSource) {
    if let Some(names) = explicit_feature_names.filter(|names| !names.is_empty()) {
        log::debug!(
            "resolving {} explicit features (template '{}')",
            names.len(),
            template_type
        );
        return (from_explicit_names(names), FeatureSource::Explicit);
    }

    if let Some(template) = find_template(template_type) {
        return (from_specs(template.features), FeatureSource::Catalog(template.id));
    }

    log::debug!(
        "unknown template '{}' without explicit features, using defaults",
        template_type
    );
    (default_features(), FeatureSource::Default)
}

/// The Summary + Board pair
pub fn default_features() -> Vec<FeatureDescriptor> {
    from_specs(DEFAULT_FEATURES)
}

/// Finds the feature referenced by a route value. Route segments are checked
/// first, then ids; both comparisons ignore ASCII case.
pub fn find_feature<'a>(
    features: &'a [FeatureDescriptor],
    route_value: &str,
) -> Option<&'a FeatureDescriptor> {
    let wanted = route_value.trim();
    if wanted.is_empty() {
        return None;
    }
    features
        .iter()
        .find(|f| f.route_segment.eq_ignore_ascii_case(wanted))
        .or_else(|| features.iter().find(|f| f.id.eq_ignore_ascii_case(wanted)))
}

fn from_specs(specs: &[FeatureSpec]) -> Vec<FeatureDescriptor> {
    let mut features: Vec<FeatureDescriptor> = specs.iter().map(FeatureSpec::to_descriptor).collect();
    // sort_by_key is stable: equal orders keep table order
    features.sort_by_key(|f| f.order);
    features
}

fn from_explicit_names(names: &[String]) -> Vec<FeatureDescriptor> {
    let mut used_ids = HashSet::new();
    let mut used_routes = HashSet::new();

    names
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let position = index + 1;
            let trimmed = raw.trim();

            let base_id = feature_id(trimmed);
            let (base_id, base_route, name) = if base_id.is_empty() {
                (
                    format!("feature_{}", position),
                    format!("feature-{}", position),
                    format!("Feature {}", position),
                )
            } else {
                (base_id, route_segment(trimmed), capitalize_first(trimmed))
            };

            let view_key = view_key_for_name(trimmed)
                .map(str::to_string)
                .unwrap_or_else(|| base_id.clone());

            FeatureDescriptor {
                id: claim_unique(base_id, '_', &mut used_ids),
                name,
                icon: icon_for_name(trimmed).to_string(),
                view_key,
                route_segment: claim_unique(base_route, '-', &mut used_routes),
                order: position as u32,
            }
        })
        .collect()
}

/// Returns `base`, or `base<sep>2`, `base<sep>3`, ... whichever is free first.
fn claim_unique(base: String, separator: char, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}{}{}", base, separator, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::features::catalog::{known_templates, TEMPLATES};

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn ids(features: &[FeatureDescriptor]) -> Vec<&str> {
        features.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_catalog_templates_are_sorted_and_unique() {
        for template in known_templates() {
            let features = resolve_features(template, None);
            assert!(!features.is_empty(), "{} resolved to nothing", template);

            assert!(
                features.windows(2).all(|w| w[0].order <= w[1].order),
                "{} is not sorted",
                template
            );

            let unique_ids: HashSet<_> = features.iter().map(|f| &f.id).collect();
            let unique_routes: HashSet<_> = features.iter().map(|f| &f.route_segment).collect();
            assert_eq!(unique_ids.len(), features.len(), "{} has duplicate ids", template);
            assert_eq!(unique_routes.len(), features.len(), "{} has duplicate routes", template);
        }
        assert_eq!(known_templates().count(), TEMPLATES.len());
    }

    #[test]
    fn test_equal_orders_keep_table_order() {
        let features = resolve_features("waterfall", None);
        let phases = features.iter().position(|f| f.id == "phases").unwrap();
        let gantt = features.iter().position(|f| f.id == "gantt_chart").unwrap();
        assert_eq!(features[phases].order, features[gantt].order);
        assert!(phases < gantt);
        assert_eq!(features.last().map(|f| f.id.as_str()), Some("reports"));
    }

    #[test]
    fn test_unknown_template_gets_default_pair() {
        for template in ["foobar", "", "   ", "scrum!"] {
            let (features, source) = resolve_features_with_source(template, None);
            assert_eq!(source, FeatureSource::Default);
            assert_eq!(ids(&features), vec!["summary", "board"]);
            assert_eq!(features[0].order, 1);
            assert_eq!(features[1].order, 2);
            assert_eq!(features[0].name, "Summary");
            assert_eq!(features[1].view_key, "board");
        }
    }

    #[test]
    fn test_empty_explicit_list_falls_through_to_catalog() {
        let (features, source) = resolve_features_with_source("Kanban", Some(&[][..]));
        assert_eq!(source, FeatureSource::Catalog("kanban"));
        assert_eq!(features[1].id, "board");
    }

    #[test]
    fn test_explicit_list_keeps_input_order() {
        let input = names(&["Timeline", "Summary", "Board", "Reports"]);
        let (features, source) = resolve_features_with_source("scrum", Some(input.as_slice()));

        assert_eq!(source, FeatureSource::Explicit);
        assert_eq!(ids(&features), vec!["timeline", "summary", "board", "reports"]);
        let orders: Vec<u32> = features.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_explicit_custom_feature() {
        let input = names(&["Summary", "Custom Thing"]);
        let features = resolve_features("kanban", Some(input.as_slice()));

        assert_eq!(features.len(), 2);
        let custom = &features[1];
        assert_eq!(custom.id, "custom_thing");
        assert_eq!(custom.route_segment, "custom-thing");
        assert_eq!(custom.name, "Custom Thing");
        assert_eq!(custom.view_key, "custom_thing");
        assert_eq!(custom.order, 2);
    }

    #[test]
    fn test_explicit_names_are_capitalized_and_mapped() {
        let input = names(&["sprint board", "product_backlog"]);
        let features = resolve_features("", Some(input.as_slice()));
        assert_eq!(features[0].name, "Sprint board");
        assert_eq!(features[0].view_key, "board");
        assert_eq!(features[0].icon, "columns");
        assert_eq!(features[1].view_key, "backlog");
        assert_eq!(features[1].route_segment, "product-backlog");
    }

    #[test]
    fn test_explicit_duplicates_stay_unique() {
        let input = names(&["Board", "board", "BOARD!", "  "]);
        let features = resolve_features("scrum", Some(input.as_slice()));

        assert_eq!(features.len(), 4);
        assert_eq!(ids(&features), vec!["board", "board_2", "board_3", "feature_4"]);
        let routes: Vec<&str> = features.iter().map(|f| f.route_segment.as_str()).collect();
        assert_eq!(routes, vec!["board", "board-2", "board-3", "feature-4"]);
        assert!(features[..3].iter().all(|f| f.view_key == "board"));
        assert_eq!(features[3].name, "Feature 4");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let input = names(&["Summary", "Custom Thing"]);
        assert_eq!(
            resolve_features("scrum", Some(input.as_slice())),
            resolve_features("scrum", Some(input.as_slice()))
        );
        assert_eq!(resolve_features("lean", None), resolve_features("lean", None));
        assert_eq!(resolve_features("nope", None), resolve_features("nope", None));
    }

    #[test]
    fn test_scrum_backlog_and_board_precede_retrospective() {
        let features = resolve_features("scrum", None);
        let order_of = |id: &str| features.iter().find(|f| f.id == id).map(|f| f.order);

        let backlog = order_of("product_backlog").unwrap();
        let board = order_of("sprint_board").unwrap();
        let retro = order_of("retrospective").unwrap();
        assert!(backlog < retro);
        assert!(board < retro);
    }

    #[test]
    fn test_find_feature_by_route_then_id() {
        let features = resolve_features("scrum", None);
        assert_eq!(
            find_feature(&features, "sprint-board").map(|f| f.id.as_str()),
            Some("sprint_board")
        );
        assert_eq!(
            find_feature(&features, "Product_Backlog").map(|f| f.id.as_str()),
            Some("product_backlog")
        );
        assert!(find_feature(&features, "does-not-exist").is_none());
        assert!(find_feature(&features, "").is_none());
    }
}
