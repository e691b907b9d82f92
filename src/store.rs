//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::sync::ListHandle;

/// Where the initial load stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// The grocery list as the UI sees it: a best-effort cache of the remote collection
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Items in display order
    pub items: Vec<Item>,
    pub status: LoadStatus,
    /// Last user-visible error (last one wins)
    pub error: Option<String>,
    /// Highest id handed out this session, keeps same-millisecond adds apart
    pub last_issued_id: i64,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the collection with a freshly loaded one
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.status = LoadStatus::Ready;
    }

    pub fn fail_load(&mut self, message: String) {
        self.status = LoadStatus::Failed;
        self.error = Some(message);
    }

    /// Append unless an item with the same id is already present
    pub fn push(&mut self, item: Item) {
        if self.find(&item.id).is_none() {
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Hand out a time-based id that is unique in the collection and never
    /// repeats within the session
    pub fn issue_id(&mut self, now_millis: i64) -> String {
        let mut candidate = now_millis.max(self.last_issued_id + 1);
        while self.find(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_issued_id = candidate;
        candidate.to_string()
    }
}

/// Type alias for the store
pub type AppStore = Store<ListState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl ListHandle for AppStore {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(items: &[(&str, &str, bool)]) -> ListState {
        let mut state = ListState::new();
        state.replace_items(
            items
                .iter()
                .map(|(id, label, checked)| Item { id: id.to_string(), label: label.to_string(), checked: *checked })
                .collect(),
        );
        state
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = ListState::new();
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_push_skips_duplicate_ids() {
        let mut state = state_with(&[("1", "Milk", false)]);
        state.push(Item::new("1", "Milk again"));
        state.push(Item::new("2", "Eggs"));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].label, "Milk");
    }

    #[test]
    fn test_remove_and_set_checked() {
        let mut state = state_with(&[("1", "Milk", false), ("2", "Eggs", false)]);
        assert!(state.set_checked("2", true));
        assert!(state.find("2").unwrap().checked);
        assert!(!state.set_checked("9", true));

        assert!(state.remove("1"));
        assert!(!state.remove("1"));
        assert_eq!(state.items, vec![Item { id: "2".into(), label: "Eggs".into(), checked: true }]);
    }

    #[test]
    fn test_fail_load_keeps_message() {
        let mut state = ListState::new();
        state.fail_load("Response was not ok: down".into());
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Response was not ok: down"));

        state.clear_error();
        assert!(state.error.is_none());
        assert_eq!(state.status, LoadStatus::Failed);
    }

    #[test]
    fn test_issue_id_uses_clock() {
        let mut state = ListState::new();
        assert_eq!(state.issue_id(1_700_000_000_000), "1700000000000");
    }

    #[test]
    fn test_issue_id_same_millisecond() {
        let mut state = ListState::new();
        let a = state.issue_id(1000);
        let b = state.issue_id(1000);
        assert_eq!(a, "1000");
        assert_eq!(b, "1001");
    }

    #[test]
    fn test_issue_id_skips_existing() {
        let mut state = state_with(&[("500", "Milk", false), ("501", "Eggs", false)]);
        assert_eq!(state.issue_id(500), "502");
    }

    #[test]
    fn test_store_handle_clears_error() {
        let store: AppStore = Store::new(ListState::new());
        store.write_state(|s| s.record_error("Item 9 not found".into()));
        assert_eq!(store.read_state(|s| s.error.clone()).as_deref(), Some("Item 9 not found"));

        store.write_state(|s| s.clear_error());

        assert!(store.read_state(|s| s.error.is_none()));
    }
}
