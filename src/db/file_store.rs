use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use super::RecordStore;
use crate::{error::StoreError, models::hotel::Hotel};

/// One pretty-printed JSON file per hotel, named `<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        debug!("Hotel records stored in {}", dir.display());
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn load(path: &Path) -> Result<Hotel, StoreError> {
        let data = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl RecordStore for FileStore {
    fn read(&self, id: u64) -> Result<Option<Hotel>, StoreError> {
        let path = self.path_for(id);
        match Self::load(&path) {
            Ok(hotel) => Ok(Some(hotel)),
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, id: u64, hotel: &Hotel) -> Result<(), StoreError> {
        let path = self.path_for(id);
        let data =
            serde_json::to_string_pretty(hotel).map_err(|source| StoreError::Encode { id, source })?;
        fs::write(&path, data).map_err(|e| StoreError::io(path, e))
    }

    fn scan(&self) -> Result<Vec<Hotel>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let mut hotels = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&self.dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            hotels.push(Self::load(&path)?);
        }
        hotels.sort_by_key(|hotel| hotel.id);

        Ok(hotels)
    }

    fn exists(&self, id: u64) -> Result<bool, StoreError> {
        let path = self.path_for(id);
        path.try_exists().map_err(|e| StoreError::io(path, e))
    }
}
