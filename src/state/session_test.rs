use super::*;

fn child(id: &str) -> ChildPrincipal {
    ChildPrincipal {
        id: id.to_owned(),
        name: "Mei".to_owned(),
        extra: serde_json::Map::new(),
    }
}

fn admin() -> AdminPrincipal {
    AdminPrincipal {
        id: "a1".to_owned(),
        name: "Mom".to_owned(),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn set_child_marks_logged_in_without_admin() {
    let mut store = SessionStore::default();
    store.set_child(child("c1"));
    assert!(store.is_logged_in());
    assert!(!store.is_admin());
    assert_eq!(store.current_child().map(|c| c.id.as_str()), Some("c1"));
}

#[test]
fn set_admin_clears_child_slot() {
    let mut store = SessionStore::default();
    store.set_child(child("c1"));
    store.set_admin(admin());
    assert!(store.is_logged_in());
    assert!(store.is_admin());
    assert!(store.current_child().is_none());
}

#[test]
fn set_child_clears_admin_slot() {
    let mut store = SessionStore::default();
    store.set_admin(admin());
    store.set_child(child("c2"));
    assert!(!store.is_admin());
    assert_eq!(store.current_child().map(|c| c.id.as_str()), Some("c2"));
}

#[test]
fn at_most_one_principal_after_any_sequence() {
    let mut store = SessionStore::default();
    store.set_child(child("c1"));
    store.set_admin(admin());
    store.set_child(child("c2"));
    store.logout();
    store.set_admin(admin());
    let exclusive = store.current_child().is_none() || !store.is_admin();
    assert!(exclusive);
    assert!(store.is_admin());
}

#[test]
fn repeated_set_child_is_idempotent() {
    let mut store = SessionStore::default();
    store.set_child(child("c1"));
    let before = store.state().clone();
    store.set_child(child("c1"));
    assert_eq!(store.state(), &before);
}

#[test]
fn logout_always_ends_anonymous() {
    let mut store = SessionStore::default();
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);

    store.set_child(child("c1"));
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);

    store.set_admin(admin());
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert!(!store.is_logged_in());
}

#[test]
fn restored_state_child_only() {
    let raw = serde_json::to_string(&child("c1")).unwrap();
    let state = restored_state(Some(&raw), None);
    assert_eq!(state.current_child().map(|c| c.id.as_str()), Some("c1"));
    assert!(!state.is_admin());
}

#[test]
fn restored_state_admin_only() {
    let raw = serde_json::to_string(&admin()).unwrap();
    let state = restored_state(None, Some(&raw));
    assert!(state.is_admin());
    assert!(state.current_child().is_none());
}

#[test]
fn restored_state_prefers_admin_when_both_present() {
    let child_raw = serde_json::to_string(&child("c1")).unwrap();
    let admin_raw = serde_json::to_string(&admin()).unwrap();
    let state = restored_state(Some(&child_raw), Some(&admin_raw));
    assert!(state.is_admin());
    assert!(state.current_child().is_none());
}

#[test]
fn restored_state_empty_is_anonymous() {
    assert_eq!(restored_state(None, None), SessionState::Anonymous);
}

#[test]
fn restored_state_treats_malformed_record_as_absent() {
    assert_eq!(restored_state(Some("{not json"), None), SessionState::Anonymous);

    let child_raw = serde_json::to_string(&child("c1")).unwrap();
    let state = restored_state(Some(&child_raw), Some("{not json"));
    assert_eq!(state.current_child().map(|c| c.id.as_str()), Some("c1"));
}

#[test]
fn principal_extra_fields_round_trip() {
    let raw = r#"{"id":"c1","name":"Mei","level":3,"coins":120}"#;
    let parsed: ChildPrincipal = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.extra.get("level"), Some(&serde_json::json!(3)));

    let back = serde_json::to_string(&parsed).unwrap();
    let again: ChildPrincipal = serde_json::from_str(&back).unwrap();
    assert_eq!(parsed, again);
}
