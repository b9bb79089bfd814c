use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The host's UI surface. Selectors are opaque to the clients; they only pass
/// through what the config names.
pub trait Page: Send + Sync {
    fn contains(&self, selector: &str) -> bool;

    fn set_text(&self, selector: &str, text: &str);

    fn set_visible(&self, selector: &str, visible: bool);

    /// Replace the current location.
    fn navigate(&self, path: &str);

    /// Open `path` in another window or tab; `target` follows the usual `_blank` naming.
    fn open_window(&self, path: &str, target: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub location: Option<String>,
    pub elements: BTreeMap<String, ElementState>,
    pub opened: Vec<(String, String)>,
}

/// In-memory page: a set of present elements plus a record of every mutation.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    present: BTreeSet<String>,
    state: Mutex<PageSnapshot>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.present.insert(selector.clone());
        self.lock().elements.insert(selector, ElementState::default());
        self
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    pub fn element(&self, selector: &str) -> Option<ElementState> {
        self.lock().elements.get(selector).cloned()
    }

    pub fn location(&self) -> Option<String> {
        self.lock().location.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        // A panicking writer leaves plain data behind; keep serving it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Page for HeadlessPage {
    fn contains(&self, selector: &str) -> bool {
        self.present.contains(selector)
    }

    fn set_text(&self, selector: &str, text: &str) {
        if let Some(element) = self.lock().elements.get_mut(selector) {
            element.text = text.to_string();
        }
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        if let Some(element) = self.lock().elements.get_mut(selector) {
            element.visible = visible;
        }
    }

    fn navigate(&self, path: &str) {
        self.lock().location = Some(path.to_string());
    }

    fn open_window(&self, path: &str, target: &str) {
        self.lock().opened.push((path.to_string(), target.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_only_touch_present_elements() {
        let page = HeadlessPage::new().with_element("cartBadge");
        page.set_text("cartBadge", "3");
        page.set_visible("cartBadge", true);
        page.set_text("missing", "x");

        assert!(page.contains("cartBadge"));
        assert!(!page.contains("missing"));
        assert_eq!(
            page.element("cartBadge"),
            Some(ElementState { text: "3".into(), visible: true })
        );
        assert_eq!(page.element("missing"), None);
    }

    #[test]
    fn records_navigation_and_windows() {
        let page = HeadlessPage::new();
        page.navigate("/");
        page.open_window("/bill/4", "_blank");

        let snapshot = page.snapshot();
        assert_eq!(snapshot.location.as_deref(), Some("/"));
        assert_eq!(snapshot.opened, vec![("/bill/4".to_string(), "_blank".to_string())]);
    }
}
