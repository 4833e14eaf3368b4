#![allow(dead_code)]

use realitylab_core::{
    models::{PlanDocument, Profile, RealityStatus, SavedArtifact, TimelinePhase},
    store::KeyValueBackend,
    Database, Lab, LabBuilder, MemoryBackend, Store,
};
use tempfile::{NamedTempFile, TempDir};

/// A stable document with one phase per entry of `months`.
pub fn document(name: &str, months: &[u32]) -> PlanDocument {
    let mut doc = PlanDocument::new(name).with_status(RealityStatus::Stable);
    for (i, m) in months.iter().enumerate() {
        doc = doc.with_phase(TimelinePhase::new(
            format!("Phase {}", i + 1),
            format!("{name} work {}", i + 1),
            format!("{m} months"),
        ));
    }
    doc
}

pub fn memory_store() -> Store<MemoryBackend> {
    Store::new(MemoryBackend::new())
}

/// Helper function to create a store over a temporary SQLite file
pub fn sqlite_store() -> (NamedTempFile, Store<Database>) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, Store::new(db))
}

pub fn save<B: KeyValueBackend>(
    store: &mut Store<B>,
    name: &str,
    parent: Option<&str>,
) -> SavedArtifact {
    store
        .save(
            name,
            document(name, &[6]),
            Profile::default(),
            &format!("prompt for {name}"),
            parent,
        )
        .expect("Failed to save reality")
}

/// Helper function to create a test lab
pub async fn create_test_lab() -> (TempDir, Lab) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let lab = LabBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create lab");
    (temp_dir, lab)
}
