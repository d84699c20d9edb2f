//! Feature navigation of an open project
//!
//! - `registry` - view_key → view mapping with memoized lazy loads
//! - `dispatcher` - resolves and invokes the view of the selected feature
//! - `selection` - selection state machine and selection tokens
//! - `loader` - feature list fetch with timeout and fallback
//! - `view_model`, `navigation`, `tab_bar`, `page`, `placeholder` - UI

pub mod dispatcher;
pub mod loader;
pub mod navigation;
pub mod page;
pub mod placeholder;
pub mod registry;
pub mod selection;
pub mod tab_bar;
pub mod view_model;

pub use navigation::ProjectNavigation;
pub use page::TabPage;
