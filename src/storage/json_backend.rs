use std::{
    fmt,
    fs::{self, File},
    io::{ErrorKind, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::TrackerError;

use super::{CollectionStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// A collection persisted as one pretty-printed JSON array at a fixed path.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> fmt::Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>> {
        read_collection(&self.path)
    }

    fn store(&self, records: &[T]) -> Result<()> {
        write_collection(&self.path, records)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads the whole collection at `path`. A missing file is an empty collection.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(storage_error("read", path, err)),
    };
    serde_json::from_str(&data).map_err(|err| storage_error("parse", path, err))
}

/// Replaces the collection at `path` with `records`, creating parent directories.
///
/// The data is staged in a sibling `.tmp` file and renamed over the target.
pub fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|err| storage_error("encode", path, err))?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json).map_err(|err| storage_error("write", &tmp, err))?;
    fs::rename(&tmp, path).map_err(|err| storage_error("replace", path, err))?;
    Ok(())
}

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> TrackerError {
    TrackerError::Storage(format!("failed to {action} `{}`: {err}", path.display()))
}

/// Sibling staging path: `expense.json` becomes `expense.json.tmp`.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_file(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
