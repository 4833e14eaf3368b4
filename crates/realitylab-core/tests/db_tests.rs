use realitylab_core::{store::KeyValueBackend, Database};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), 1);
    assert_eq!(db.usage().unwrap(), 0);
}

#[test]
fn test_get_missing_key() {
    let (_temp_file, db) = create_test_db();
    assert_eq!(db.get("realitylab.realities").unwrap(), None);
}

#[test]
fn test_commit_sets_and_overwrites() {
    let (_temp_file, mut db) = create_test_db();

    db.commit(&[("alpha", "1".to_string()), ("beta", "2".to_string())], &[])
        .expect("Failed to commit");
    assert_eq!(db.get("alpha").unwrap().as_deref(), Some("1"));
    assert_eq!(db.get("beta").unwrap().as_deref(), Some("2"));

    db.commit(&[("alpha", "one".to_string())], &[])
        .expect("Failed to overwrite");
    assert_eq!(db.get("alpha").unwrap().as_deref(), Some("one"));
}

#[test]
fn test_commit_removes() {
    let (_temp_file, mut db) = create_test_db();

    db.commit(&[("alpha", "1".to_string()), ("beta", "2".to_string())], &[])
        .unwrap();
    db.commit(&[("gamma", "3".to_string())], &["alpha", "missing"])
        .expect("Removing an absent key is not an error");

    assert_eq!(db.get("alpha").unwrap(), None);
    assert_eq!(db.get("beta").unwrap().as_deref(), Some("2"));
    assert_eq!(db.get("gamma").unwrap().as_deref(), Some("3"));
}

#[test]
fn test_usage_counts_key_and_value_bytes() {
    let (_temp_file, mut db) = create_test_db();

    db.commit(&[("key", "value".to_string())], &[]).unwrap();
    assert_eq!(db.usage().unwrap(), 8);

    // Multi-byte characters count as bytes, not characters
    db.commit(&[("é", "日本".to_string())], &[]).unwrap();
    assert_eq!(db.usage().unwrap(), 8 + 2 + 6);

    db.commit(&[], &["key", "é"]).unwrap();
    assert_eq!(db.usage().unwrap(), 0);
}

#[test]
fn test_values_survive_reopen() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.commit(&[("realitylab.profile", r#"{"name":"Meera"}"#.to_string())], &[])
            .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Reopening should succeed");
    assert_eq!(
        db.get("realitylab.profile").unwrap().as_deref(),
        Some(r#"{"name":"Meera"}"#)
    );
    assert_eq!(db.schema_version().unwrap(), 1);
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open in-memory database");
    db.commit(&[("alpha", "1".to_string())], &[]).unwrap();
    assert_eq!(db.get("alpha").unwrap().as_deref(), Some("1"));
}
