//! JSON file helpers for the store files
//!
//! Files are replaced whole: the new contents go to a sibling `.tmp` file,
//! are synced, then renamed over the target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PocketError;

/// Load a JSON document, or `T::default()` when the file is absent
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, PocketError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(PocketError::Storage(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&text)
        .map_err(|e| PocketError::Storage(format!("{} is not valid JSON: {}", path.display(), e)))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn save_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), PocketError> {
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| PocketError::Storage(format!("Cannot encode {}: {}", path.display(), e)))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| PocketError::Storage(format!("Cannot create {}: {}", dir.display(), e)))?;
    }

    let staging = sibling(path, "tmp");
    let written = fs::File::create(&staging).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|_| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(PocketError::Storage(format!(
            "Cannot write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

/// Move an unreadable file to `<name>.corrupt`, returning the new path
pub fn set_aside(path: &Path) -> io::Result<PathBuf> {
    let target = sibling(path, "corrupt");
    fs::rename(path, &target)?;
    Ok(target)
}

/// `prefs.json` -> `prefs.json.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
