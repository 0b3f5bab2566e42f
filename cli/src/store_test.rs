use super::*;

use fitcoach::User;

fn scratch(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fitcoach-cli-{name}-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: 4_000_000_000,
        user: User { id: "u1".to_owned(), email: Some("ana@example.com".to_owned()), user_metadata: Default::default() },
    }
}

#[test]
fn missing_file_is_signed_out() {
    let store = FileSessionStore::new(scratch("missing"));
    assert_eq!(store.load(), Ok(None));
    assert_eq!(store.clear(), Ok(()));
}

#[test]
fn save_then_load_round_trips() {
    let path = scratch("round-trip");
    let store = FileSessionStore::new(&path);
    store.save(&session()).unwrap();
    assert_eq!(store.load(), Ok(Some(session())));
    store.clear().unwrap();
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_removed() {
    let path = scratch("corrupt");
    std::fs::write(&path, "{not json").unwrap();
    let store = FileSessionStore::new(&path);
    assert_eq!(store.load(), Ok(None));
    assert!(!path.exists());
}
