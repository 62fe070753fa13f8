//! Directory-backed key-value storage.
//!
//! Each key is stored as `<key>.json` inside a single directory opened with
//! capability-based filesystem access, so no key can address a path outside
//! that directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";

/// Key-value storage persisted as files in one directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root = path.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self {
            dir,
            root: root.to_owned(),
        })
    }

    /// Returns the directory this storage writes to.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Maps a storage key onto a file name inside the storage directory.
fn file_name_for(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0'])
        && !key.starts_with('.');
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = file_name_for(key)?;
        let staging_name = format!(".{file_name}.tmp");
        self.dir.write(&staging_name, value)?;
        self.dir.rename(&staging_name, &self.dir, &file_name)?;
        Ok(())
    }
}
