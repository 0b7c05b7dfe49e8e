//! Directory-backed durable slot for native hosts.
//!
//! Each key is stored in its own file under the slot directory. Writes go to a
//! temporary sibling file that is then renamed over the target, so a crash
//! mid-write leaves either the old or the new value, never a torn one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{DurableSlot, StorageError, StorageErrorCode, StorageResult};

/// File-per-key implementation of [`DurableSlot`].
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

/// Percent-encode anything outside `[A-Za-z0-9._-]` so distinct keys map to
/// distinct file names on every platform.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn io_error(err: std::io::Error, context: &str, key: &str) -> StorageError {
    let code = match err.kind() {
        ErrorKind::PermissionDenied => StorageErrorCode::Unavailable,
        _ => StorageErrorCode::Io,
    };
    StorageError::with_key(code, format!("{}: {}", context, err), key)
}

impl DurableSlot for FileSlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(e, "Failed to read slot file", key)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| io_error(e, "Failed to create slot directory", key))?;

        let target = self.path_for(key);
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| io_error(e, "Failed to write slot file", key))?;
        fs::rename(&tmp, &target).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            io_error(e, "Failed to replace slot file", key)
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e, "Failed to remove slot file", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"));

        assert_eq!(slot.read("k").unwrap(), None);

        slot.write("k", "{\"email\":\"a@example.com\"}").unwrap();
        assert_eq!(
            slot.read("k").unwrap().as_deref(),
            Some("{\"email\":\"a@example.com\"}")
        );

        slot.remove("k").unwrap();
        assert_eq!(slot.read("k").unwrap(), None);
        assert!(!slot.path_for("k").exists());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.remove("absent").is_ok());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        slot.write("k", "v").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_key_encoding() {
        assert_eq!(encode_key("mnee-checkout-user-info-v1"), "mnee-checkout-user-info-v1");
        assert_eq!(encode_key("a/b"), "a%2Fb");
        assert_ne!(encode_key("a/b"), encode_key("a_b"));
    }
}
