use super::backend::DocumentBackend;
use super::StoreState;
use crate::enrollment::{self, ClassInfo, ImportReport};
use crate::error::{Result, RollbookError};
use crate::model::{Document, Settings, Student, StudentPatch};
use chrono::{Datelike, Local, Utc};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What `init()` did to get the store ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The store was already ready; nothing was read or written.
    AlreadyReady,
    /// An existing document was loaded.
    Loaded,
    /// No document existed; a default one was written.
    Created,
}

/// Owns the document and its lifecycle.
pub struct RecordStore<B: DocumentBackend> {
    backend: B,
    state: StoreState,
    data: Document,
}

impl<B: DocumentBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: StoreState::Uninitialized,
            data: Document::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn data_path(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn init(&mut self) -> Result<InitOutcome> {
        if self.state == StoreState::Ready {
            return Ok(InitOutcome::AlreadyReady);
        }

        self.state = StoreState::Initializing;
        match self.load_or_create() {
            Ok(outcome) => {
                self.state = StoreState::Ready;
                info!(path = %self.data_path().display(), ?outcome, "data store initialized");
                Ok(outcome)
            }
            Err(e) => {
                self.state = StoreState::Uninitialized;
                Err(e)
            }
        }
    }

    fn load_or_create(&mut self) -> Result<InitOutcome> {
        self.backend.prepare()?;

        match self.backend.read()? {
            Some(raw) => {
                let data = Document::from_slice(&raw).map_err(|source| {
                    RollbookError::CorruptStore {
                        path: self.backend.location(),
                        source,
                    }
                })?;
                debug!(students = data.students.len(), "loaded document");
                self.data = data;
                Ok(InitOutcome::Loaded)
            }
            None => {
                let fresh = Document::default();
                self.backend.write(&fresh.to_json()?)?;
                self.data = fresh;
                Ok(InitOutcome::Created)
            }
        }
    }

    /// Whether the backing document exists. I/O failures count as "no": callers
    /// use this to pick a bootstrap path, not to report errors.
    pub fn exists(&self) -> bool {
        match self.backend.exists() {
            Ok(exists) => exists,
            Err(e) => {
                warn!(error = %e, "could not check for data file");
                false
            }
        }
    }

    /// Write the in-memory document out as-is (bootstrap helper).
    pub fn create_data_structure(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.flush()?;
        info!(path = %self.data_path().display(), "data structure created");
        Ok(())
    }

    pub fn import_students<S: AsRef<str>>(
        &mut self,
        names: &[S],
        class_info: &str,
    ) -> Result<ImportReport> {
        self.ensure_ready()?;
        enrollment::validate_input(names, class_info)?;

        let info = ClassInfo::parse(class_info);
        let now = Local::now();
        let batch = enrollment::build_batch(
            names,
            &info,
            now.year(),
            now.with_timezone(&Utc),
        );
        for item in &batch.errors {
            warn!(name = %item.name, error = %item.error, "skipping student");
        }

        let report = batch.report();
        let kept = self.data.students.len();
        self.data.students.extend(batch.students);
        if let Err(e) = self.flush() {
            // Memory must not run ahead of the file
            self.data.students.truncate(kept);
            return Err(e);
        }

        info!(
            count = report.count,
            failed = report.errors.as_ref().map_or(0, Vec::len),
            grade = %info.grade,
            class = %info.class_name,
            "imported students"
        );
        Ok(report)
    }

    pub fn students(&self) -> Result<&[Student]> {
        self.ensure_ready()?;
        Ok(&self.data.students)
    }

    pub fn settings(&self) -> Result<&Settings> {
        self.ensure_ready()?;
        Ok(&self.data.settings)
    }

    pub fn document(&self) -> Result<&Document> {
        self.ensure_ready()?;
        Ok(&self.data)
    }

    /// Corrective edit of the first student carrying `id`.
    pub fn update_student(&mut self, id: &str, patch: &StudentPatch) -> Result<Student> {
        self.ensure_ready()?;
        let index = self
            .data
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RollbookError::StudentNotFound(id.to_string()))?;

        let previous = self.data.students[index].clone();
        patch.apply(&mut self.data.students[index]);
        if let Err(e) = self.flush() {
            self.data.students[index] = previous;
            return Err(e);
        }
        info!(id, "updated student");
        Ok(self.data.students[index].clone())
    }

    pub fn save(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.flush()
    }

    pub fn close(&mut self) {
        if self.state != StoreState::Closed {
            self.state = StoreState::Closed;
            info!("data store closed");
        }
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.state != StoreState::Ready {
            return Err(RollbookError::NotInitialized(self.state));
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.backend.write(&self.data.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn ready_store() -> RecordStore<MemBackend> {
        let mut store = RecordStore::new(MemBackend::new());
        store.init().unwrap();
        store
    }

    fn year() -> i32 {
        Local::now().year()
    }

    #[test]
    fn test_init_creates_default_document() {
        let mut store = RecordStore::new(MemBackend::new());
        assert!(!store.exists());

        assert_eq!(store.init().unwrap(), InitOutcome::Created);

        assert_eq!(store.state(), StoreState::Ready);
        assert!(store.students().unwrap().is_empty());
        assert!(store.exists());
        assert_eq!(store.backend().write_count(), 1);
        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.settings, Settings::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut store = ready_store();
        let before = store.document().unwrap().clone();

        assert_eq!(store.init().unwrap(), InitOutcome::AlreadyReady);

        assert_eq!(store.document().unwrap(), &before);
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(store.backend().read_count(), 1);
    }

    #[test]
    fn test_init_loads_existing_document() {
        let mut doc = Document::default();
        doc.settings.app_name = "Custom".to_string();
        let backend = MemBackend::with_content(&doc.to_json().unwrap());

        let mut store = RecordStore::new(backend);
        assert_eq!(store.init().unwrap(), InitOutcome::Loaded);

        assert_eq!(store.settings().unwrap().app_name, "Custom");
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_init_rejects_corrupt_document() {
        let backend = MemBackend::with_content("{ not json");
        let mut store = RecordStore::new(backend);

        let err = store.init().unwrap_err();

        assert!(matches!(err, RollbookError::CorruptStore { .. }));
        assert_eq!(store.state(), StoreState::Uninitialized);
        // The broken file is left alone
        assert_eq!(store.backend().content().as_deref(), Some("{ not json"));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_init_rejects_wrong_shape() {
        let backend = MemBackend::with_content(r#"{ "students": 3 }"#);
        let mut store = RecordStore::new(backend);
        assert!(matches!(
            store.init(),
            Err(RollbookError::CorruptStore { .. })
        ));
    }

    #[test]
    fn test_operations_before_init_fail() {
        let mut store = RecordStore::new(MemBackend::new());
        assert!(matches!(
            store.students(),
            Err(RollbookError::NotInitialized(StoreState::Uninitialized))
        ));
        assert!(matches!(
            store.import_students(&["Alice"], "2024级1班"),
            Err(RollbookError::NotInitialized(_))
        ));
        assert!(matches!(store.save(), Err(RollbookError::NotInitialized(_))));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_import_students() {
        let mut store = ready_store();

        let report = store
            .import_students(&["Alice", "Bob"], "2024级1班")
            .unwrap();

        assert_eq!(report.count, 2);
        assert_eq!(report.errors, None);
        let students = store.students().unwrap();
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].grade, "2024级");
        assert_eq!(students[0].class_name, "1班");
        assert_eq!(students[0].id, format!("{}0101", year()));
        assert_eq!(students[1].id, format!("{}0102", year()));
    }

    #[test]
    fn test_import_flushes_once_per_batch() {
        let mut store = ready_store();
        store
            .import_students(&["Alice", "Bob", "Carol"], "2024级1班")
            .unwrap();
        assert_eq!(store.backend().write_count(), 2);

        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.students.len(), 3);
    }

    #[test]
    fn test_import_skips_blank_names_without_shifting_ids() {
        let mut store = ready_store();
        let report = store.import_students(&["Alice", "", "Carol"], "X级Y").unwrap();

        assert_eq!(report.count, 2);
        let ids: Vec<_> = store
            .students()
            .unwrap()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert!(ids[0].ends_with("01"));
        assert!(ids[1].ends_with("03"));
    }

    #[test]
    fn test_import_without_delimiter() {
        let mut store = ready_store();
        store.import_students(&["Dan"], "NoDelimiter").unwrap();
        let dan = &store.students().unwrap()[0];
        assert_eq!(dan.grade, "NoDelimiter级");
        assert_eq!(dan.class_name, "NoDelimiter");
    }

    #[test]
    fn test_import_rejects_invalid_input() {
        let mut store = ready_store();
        store.import_students(&["Alice"], "X级Y").unwrap();
        let writes = store.backend().write_count();

        let empty: [&str; 0] = [];
        assert!(matches!(
            store.import_students(&empty, "X级Y"),
            Err(RollbookError::InvalidImportInput(_))
        ));
        assert!(matches!(
            store.import_students(&["A"], ""),
            Err(RollbookError::InvalidImportInput(_))
        ));

        assert_eq!(store.students().unwrap().len(), 1);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_import_appends_after_existing_students() {
        let mut store = ready_store();
        store.import_students(&["Alice"], "2024级1班").unwrap();
        store.import_students(&["Bob"], "2024级2班").unwrap();

        let students = store.students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].name, "Bob");
        assert_eq!(students[1].class_name, "2班");
        // Known limitation: each batch restarts numbering
        assert_eq!(students[0].id, students[1].id);
    }

    #[test]
    fn test_import_reports_item_errors() {
        let mut store = ready_store();
        let report = store
            .import_students(&["Alice", "Bad\nName"], "X级Y")
            .unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.errors.unwrap()[0].name, "Bad\nName");
        assert_eq!(store.students().unwrap().len(), 1);
    }

    #[test]
    fn test_import_write_failure_propagates() {
        let mut store = ready_store();
        store.backend().set_simulate_write_error(true);

        let err = store.import_students(&["Alice"], "X级Y").unwrap_err();
        assert!(matches!(err, RollbookError::Persistence { .. }));
        assert!(store.students().unwrap().is_empty());

        // Retrying after the failure imports the batch exactly once
        store.backend().set_simulate_write_error(false);
        store.import_students(&["Alice"], "X级Y").unwrap();
        assert_eq!(store.students().unwrap().len(), 1);
        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.students.len(), 1);
    }

    #[test]
    fn test_update_write_failure_keeps_previous_student() {
        let mut store = ready_store();
        store.import_students(&["Alcie"], "2024级1班").unwrap();
        let before = store.students().unwrap()[0].clone();
        store.backend().set_simulate_write_error(true);

        let patch = StudentPatch {
            name: Some("Alice".to_string()),
            class_name: Some("2班".to_string()),
            ..Default::default()
        };
        let err = store.update_student(&before.id, &patch).unwrap_err();

        assert!(matches!(err, RollbookError::Persistence { .. }));
        assert_eq!(store.students().unwrap()[0], before);

        // A later unrelated flush must not persist the failed edit
        store.backend().set_simulate_write_error(false);
        store.save().unwrap();
        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.students[0].name, "Alcie");
    }

    #[test]
    fn test_init_rejects_invalid_utf8() {
        let backend = MemBackend::with_bytes(&[0xff, 0xfe, 0x00, 0x7b]);
        let mut store = RecordStore::new(backend);

        assert!(matches!(
            store.init(),
            Err(RollbookError::CorruptStore { .. })
        ));
        assert_eq!(store.state(), StoreState::Uninitialized);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_init_accepts_document_without_collections() {
        let mut store = RecordStore::new(MemBackend::with_content(r#"{ "students": [] }"#));
        assert_eq!(store.init().unwrap(), InitOutcome::Loaded);
        assert_eq!(store.settings().unwrap(), &Settings::default());
        assert!(store.document().unwrap().attendance.is_empty());
    }

    #[test]
    fn test_exists_swallows_errors() {
        let store = RecordStore::new(MemBackend::with_content("{}"));
        assert!(store.exists());
        store.backend().set_simulate_read_error(true);
        assert!(!store.exists());
    }

    #[test]
    fn test_init_read_failure_is_persistence_error() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let mut store = RecordStore::new(backend);
        assert!(matches!(
            store.init(),
            Err(RollbookError::Persistence { .. })
        ));
        assert_eq!(store.state(), StoreState::Uninitialized);
    }

    #[test]
    fn test_close_fails_fast_afterwards() {
        let mut store = ready_store();
        store.close();
        store.close();

        assert_eq!(store.state(), StoreState::Closed);
        assert!(matches!(
            store.import_students(&["Alice"], "X级Y"),
            Err(RollbookError::NotInitialized(StoreState::Closed))
        ));
        assert!(matches!(
            store.save(),
            Err(RollbookError::NotInitialized(StoreState::Closed))
        ));
    }

    #[test]
    fn test_init_after_close_reopens() {
        let mut store = ready_store();
        store.import_students(&["Alice"], "X级Y").unwrap();
        store.close();

        assert_eq!(store.init().unwrap(), InitOutcome::Loaded);
        assert_eq!(store.students().unwrap().len(), 1);
    }

    #[test]
    fn test_save_writes_document() {
        let mut store = ready_store();
        store.save().unwrap();
        assert_eq!(store.backend().write_count(), 2);
    }

    #[test]
    fn test_create_data_structure_writes_current_document() {
        let mut store = ready_store();
        store.import_students(&["Alice"], "X级Y").unwrap();
        store.create_data_structure().unwrap();

        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(&on_disk, store.document().unwrap());
    }

    #[test]
    fn test_update_student() {
        let mut store = ready_store();
        store.import_students(&["Alcie"], "2024级1班").unwrap();
        let id = store.students().unwrap()[0].id.clone();

        let patch = StudentPatch {
            name: Some("Alice".to_string()),
            ..Default::default()
        };
        let updated = store.update_student(&id, &patch).unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.class_name, "1班");
        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.students[0].name, "Alice");
    }

    #[test]
    fn test_update_unknown_student() {
        let mut store = ready_store();
        assert!(matches!(
            store.update_student("nope", &StudentPatch::default()),
            Err(RollbookError::StudentNotFound(_))
        ));
    }

    #[test]
    fn test_opaque_collections_survive_round_trip() {
        let raw = r#"{
          "students": [],
          "attendance": [{ "date": "2024-09-02", "absent": ["20240101"] }],
          "grades": [{ "subject": "math", "score": 93.5 }],
          "settings": { "appName": "Student Information System", "version": "0.0.1-ArrowLake-Alpha" }
        }"#;
        let mut store = RecordStore::new(MemBackend::with_content(raw));
        store.init().unwrap();
        store.save().unwrap();

        let on_disk = Document::from_json(&store.backend().content().unwrap()).unwrap();
        assert_eq!(on_disk.grades[0]["score"], 93.5);
        assert_eq!(on_disk.attendance[0]["absent"][0], "20240101");
    }
}
