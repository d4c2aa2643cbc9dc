mod common;

#[cfg(test)]
mod file_store {
    use std::fs;

    use hotelier::{
        db::{FileStore, RecordStore},
        error::StoreError,
    };
    use tempfile::TempDir;

    use crate::common::stored_hotel;

    #[test]
    fn open_creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data").join("hotels");

        let store = FileStore::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn write_then_read() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        let hotel = stored_hotel(4, "river-house", "River House");

        store.write(4, &hotel).unwrap();

        assert!(tmp.path().join("4.json").is_file());
        assert_eq!(store.read(4).unwrap(), Some(hotel));
        assert!(store.exists(4).unwrap());
    }

    #[test]
    fn missing_record_reads_as_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        assert_eq!(store.read(1).unwrap(), None);
        assert!(!store.exists(1).unwrap());
    }

    #[test]
    fn write_overwrites_previous_content() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.write(1, &stored_hotel(1, "before", "Before")).unwrap();

        store.write(1, &stored_hotel(1, "after", "After")).unwrap();

        assert_eq!(store.read(1).unwrap().unwrap().slug, "after");
    }

    #[test]
    fn scan_sorts_by_id_and_skips_other_files() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.write(10, &stored_hotel(10, "ten", "Ten")).unwrap();
        store.write(2, &stored_hotel(2, "two", "Two")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "not a hotel").unwrap();

        let ids: Vec<u64> = store.scan().unwrap().iter().map(|h| h.id).collect();

        assert_eq!(ids, vec![2, 10]);
    }

    #[test]
    fn next_id_uses_highest_stored_id() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.next_id().unwrap(), 1);

        store.write(1, &stored_hotel(1, "one", "One")).unwrap();
        store.write(5, &stored_hotel(5, "five", "Five")).unwrap();

        assert_eq!(store.next_id().unwrap(), 6);
    }

    #[test]
    fn find_by_slug_scans_records() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.write(1, &stored_hotel(1, "one", "One")).unwrap();
        store.write(2, &stored_hotel(2, "two", "Two")).unwrap();

        assert_eq!(store.find_by_slug("two").unwrap().unwrap().id, 2);
        assert_eq!(store.find_by_slug("three").unwrap(), None);
    }

    #[test]
    fn records_without_images_load_with_empty_gallery() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        let mut record = serde_json::to_value(stored_hotel(3, "old", "Old")).unwrap();
        record.as_object_mut().unwrap().remove("images");
        fs::write(tmp.path().join("3.json"), record.to_string()).unwrap();

        let hotel = store.read(3).unwrap().unwrap();

        assert!(hotel.images.is_empty());
    }

    #[test]
    fn malformed_record_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("1.json"), "{ not json").unwrap();

        assert!(matches!(store.read(1), Err(StoreError::Parse { .. })));
        assert!(matches!(store.next_id(), Err(StoreError::Parse { .. })));
    }
}
