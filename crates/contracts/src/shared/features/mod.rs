//! Project features: descriptors, the template catalog and the resolver.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::features::{resolve_features, find_feature};
//!
//! let features = resolve_features("scrum", None);
//! assert_eq!(features[0].id, "summary");
//! assert!(find_feature(&features, "sprint-board").is_some());
//! ```

mod catalog;
mod descriptor;
mod lookup;
mod resolver;

pub use catalog::{find_template, known_templates, template_label, TemplateDef, DEFAULT_FEATURES, TEMPLATES};
pub use descriptor::{
    capitalize_first, feature_id, fold_key, route_segment, slugify, FeatureDescriptor, FeatureSpec,
};
pub use lookup::{icon_for_name, view_key_for_name, GENERIC_ICON};
pub use resolver::{
    default_features, find_feature, resolve_features, resolve_features_with_source, FeatureSource,
};
