use super::*;

#[test]
fn default_is_idle_and_empty() {
    let state = JobsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.highlight(), "");
}

#[test]
fn load_replaces_items_and_clears_loading() {
    let mut state = JobsState { loading: true, ..JobsState::default() };
    state.load(vec![JobRecord { id: "a".to_owned(), ..JobRecord::default() }]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn highlight_trims_keyword() {
    let state = JobsState { keyword: "  rust ".to_owned(), ..JobsState::default() };
    assert_eq!(state.highlight(), "rust");
}
