//! View registry - the single source of truth for the `view_key` → view mapping.
//!
//! The table of registrations is fixed when the registry is built. The view
//! behind each key is produced by an async loader the first time the key is
//! resolved; the load is shared between concurrent resolutions and memoized
//! afterwards. Resolution never fails: unknown keys and failed loads yield a
//! [`Placeholder`].

use contracts::shared::features::{capitalize_first, fold_key};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

pub type ViewLoad<V> = LocalBoxFuture<'static, Result<V, String>>;

type Loader<V> = Box<dyn Fn() -> ViewLoad<V>>;

/// One row of the registry table
pub struct ViewRegistration<V> {
    key: &'static str,
    aliases: &'static [&'static str],
    loader: Loader<V>,
}

impl<V: 'static> ViewRegistration<V> {
    /// Registers a view produced asynchronously on first use.
    pub fn new<F, Fut>(key: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, String>> + 'static,
    {
        Self {
            key,
            aliases: &[],
            loader: Box::new(move || loader().boxed_local()),
        }
    }

    /// Registers a view that is available immediately.
    pub fn ready(key: &'static str, view: V) -> Self
    where
        V: Clone,
    {
        Self::new(key, move || futures::future::ready(Ok(view.clone())))
    }

    /// Extra spellings accepted for this key ("scrum_board" for "board").
    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    fn matches_exact(&self, view_key: &str) -> bool {
        self.key == view_key || self.aliases.iter().any(|alias| *alias == view_key)
    }

    fn matches_folded(&self, folded: &str) -> bool {
        fold_key(self.key) == folded || self.aliases.iter().any(|alias| fold_key(alias) == folded)
    }
}

// ============================================================================
// Resolution result
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// No registration matches the key
    NotRegistered,
    /// The registration exists but its loader failed
    LoadFailed(String),
}

/// Stand-in for a feature without a working view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub view_key: String,
    /// Human-readable feature name
    pub title: String,
    pub reason: PlaceholderReason,
}

impl Placeholder {
    pub fn new(view_key: &str, reason: PlaceholderReason) -> Self {
        Self {
            view_key: view_key.to_string(),
            title: humanize_key(view_key),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<V> {
    Registered { key: &'static str, view: V },
    Placeholder(Placeholder),
}

impl<V> ResolvedView<V> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Registered key, or the requested key for placeholders
    pub fn view_key(&self) -> &str {
        match self {
            Self::Registered { key, .. } => key,
            Self::Placeholder(p) => &p.view_key,
        }
    }

    /// Replaces the placeholder title with the feature's display name.
    pub fn titled(self, feature_name: &str) -> Self {
        match self {
            Self::Placeholder(mut p) if !feature_name.trim().is_empty() => {
                p.title = feature_name.to_string();
                Self::Placeholder(p)
            }
            other => other,
        }
    }
}

/// `"value_stream"` → `"Value stream"`
fn humanize_key(view_key: &str) -> String {
    let words: Vec<&str> = view_key
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return "Feature".to_string();
    }
    capitalize_first(&words.join(" ").to_lowercase())
}

// ============================================================================
// Registry
// ============================================================================

pub struct ViewRegistry<V> {
    registrations: Vec<ViewRegistration<V>>,
    loaded: RefCell<HashMap<&'static str, Shared<ViewLoad<V>>>>,
}

impl<V: Clone + 'static> ViewRegistry<V> {
    pub fn new(registrations: Vec<ViewRegistration<V>>) -> Self {
        Self {
            registrations,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    /// Every registered key, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registrations.iter().map(|r| r.key)
    }

    /// Finds the registration for `view_key`: exact key/alias match first,
    /// then a match that ignores case and punctuation.
    pub fn lookup(&self, view_key: &str) -> Option<&ViewRegistration<V>> {
        if let Some(exact) = self.registrations.iter().find(|r| r.matches_exact(view_key)) {
            return Some(exact);
        }

        let folded = fold_key(view_key);
        if folded.is_empty() {
            return None;
        }
        self.registrations.iter().find(|r| r.matches_folded(&folded))
    }

    /// Resolves `view_key` to a view, loading it on first use.
    pub async fn resolve(&self, view_key: &str) -> ResolvedView<V> {
        let Some(registration) = self.lookup(view_key) else {
            log::debug!("no view registered for '{}', using placeholder", view_key);
            return ResolvedView::Placeholder(Placeholder::new(view_key, PlaceholderReason::NotRegistered));
        };

        let load = self.shared_load(registration);
        match load.clone().await {
            Ok(view) => ResolvedView::Registered {
                key: registration.key,
                view,
            },
            Err(e) => {
                log::warn!("view '{}' failed to load: {}", registration.key, e);
                self.forget_failed(registration.key, &load);
                ResolvedView::Placeholder(Placeholder::new(view_key, PlaceholderReason::LoadFailed(e)))
            }
        }
    }

    /// True once the view behind `view_key` has finished loading successfully
    pub fn is_loaded(&self, view_key: &str) -> bool {
        let Some(registration) = self.lookup(view_key) else {
            return false;
        };
        self.loaded
            .borrow()
            .get(registration.key)
            .and_then(|load| load.peek().map(Result::is_ok))
            .unwrap_or(false)
    }

    fn shared_load(&self, registration: &ViewRegistration<V>) -> Shared<ViewLoad<V>> {
        self.loaded
            .borrow_mut()
            .entry(registration.key)
            .or_insert_with(|| {
                log::debug!("loading view '{}'", registration.key);
                (registration.loader)().shared()
            })
            .clone()
    }

    /// Drops a failed load so the next resolution retries. A newer load that
    /// replaced it in the meantime is kept.
    fn forget_failed(&self, key: &'static str, failed: &Shared<ViewLoad<V>>) {
        let mut loaded = self.loaded.borrow_mut();
        if loaded.get(key).is_some_and(|current| current.ptr_eq(failed)) {
            loaded.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::rc::Rc;

    fn registry() -> ViewRegistry<&'static str> {
        ViewRegistry::new(vec![
            ViewRegistration::ready("summary", "summary-view"),
            ViewRegistration::ready("board", "board-view").with_aliases(&["scrum_board", "Board"]),
            ViewRegistration::ready("backlog", "backlog-view"),
        ])
    }

    #[test]
    fn test_exact_and_alias_lookup() {
        let r = registry();
        assert_eq!(r.lookup("summary").map(|e| e.key()), Some("summary"));
        assert_eq!(r.lookup("scrum_board").map(|e| e.key()), Some("board"));
        assert_eq!(r.lookup("Board").map(|e| e.key()), Some("board"));
    }

    #[test]
    fn test_normalized_lookup_tolerates_naming_drift() {
        let r = registry();
        assert_eq!(r.lookup("Scrum_Board").map(|e| e.key()), Some("board"));
        assert_eq!(r.lookup("scrum-board").map(|e| e.key()), Some("board"));
        assert_eq!(r.lookup(" BACKLOG ").map(|e| e.key()), Some("backlog"));
        assert!(r.lookup("sprint_board").is_none());
    }

    #[test]
    fn test_resolve_is_total() {
        let r = registry();
        for key in ["", "   ", "%%%", "custom_thing", "ünïcødé", "summary"] {
            let resolved = block_on(r.resolve(key));
            if key == "summary" {
                assert_eq!(
                    resolved,
                    ResolvedView::Registered {
                        key: "summary",
                        view: "summary-view"
                    }
                );
            } else {
                assert!(resolved.is_placeholder(), "{} should be a placeholder", key);
                assert_eq!(resolved.view_key(), key);
            }
        }
    }

    #[test]
    fn test_placeholder_titles() {
        let r = registry();
        match block_on(r.resolve("value_stream")) {
            ResolvedView::Placeholder(p) => {
                assert_eq!(p.title, "Value stream");
                assert_eq!(p.reason, PlaceholderReason::NotRegistered);
            }
            other => panic!("unexpected {:?}", other),
        }
        let titled = block_on(r.resolve("custom_thing")).titled("Custom Thing");
        assert!(matches!(titled, ResolvedView::Placeholder(ref p) if p.title == "Custom Thing"));
        assert_eq!(humanize_key(""), "Feature");
    }

    #[test]
    fn test_view_is_loaded_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let r = ViewRegistry::new(vec![ViewRegistration::new("board", move || {
            counter.set(counter.get() + 1);
            futures::future::ready(Ok("board-view"))
        })]);

        assert!(!r.is_loaded("board"));
        block_on(r.resolve("board"));
        block_on(r.resolve("BOARD"));
        block_on(r.resolve("board"));
        assert_eq!(calls.get(), 1);
        assert!(r.is_loaded("board"));
    }

    #[test]
    fn test_concurrent_resolutions_share_one_load() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let (tx, rx) = oneshot::channel::<&'static str>();
        let gate = Rc::new(RefCell::new(Some(rx)));

        let r = Rc::new(ViewRegistry::new(vec![ViewRegistration::new("timeline", move || {
            counter.set(counter.get() + 1);
            let rx = gate.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.map_err(|e| e.to_string()),
                    None => Err("loader called twice".to_string()),
                }
            }
        })]));

        let results = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        for _ in 0..3 {
            let r = r.clone();
            let results = results.clone();
            pool.spawner()
                .spawn_local(async move {
                    let resolved = r.resolve("timeline").await;
                    results.borrow_mut().push(resolved);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);
        assert!(results.borrow().is_empty());

        tx.send("timeline-view").unwrap();
        pool.run();

        let results = results.borrow();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|v| matches!(
            v,
            ResolvedView::Registered { view: "timeline-view", .. }
        )));
    }

    #[test]
    fn test_failed_load_falls_back_and_retries() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let r = ViewRegistry::new(vec![ViewRegistration::new("reports", move || {
            counter.set(counter.get() + 1);
            let attempt = counter.get();
            async move {
                if attempt == 1 {
                    Err("network error".to_string())
                } else {
                    Ok("reports-view")
                }
            }
        })]);

        match block_on(r.resolve("reports")) {
            ResolvedView::Placeholder(p) => {
                assert_eq!(p.reason, PlaceholderReason::LoadFailed("network error".to_string()))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(!r.is_loaded("reports"));

        assert!(!block_on(r.resolve("reports")).is_placeholder());
        assert_eq!(calls.get(), 2);
    }
}
