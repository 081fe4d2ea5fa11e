use {
  super::*,
  std::{cell::RefCell, rc::Rc},
};

/// A durable string-to-string slot store.
pub(crate) trait Storage {
  fn get(&self, key: &str) -> Option<String>;

  fn set(&mut self, key: &str, value: &str) -> Result;
}

/// Key-value pairs kept in a single JSON object on disk. Every `set` rewrites
/// the whole file.
#[derive(Debug)]
pub(crate) struct FileStorage {
  path: PathBuf,
  values: BTreeMap<String, String>,
}

impl FileStorage {
  pub(crate) fn default_path() -> Result<PathBuf> {
    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("stories").join("storage.json"))
  }

  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn open(path: &Path) -> Result<Self> {
    let values = if path.exists() {
      let data = fs::read(path)?;

      if data.is_empty() {
        BTreeMap::new()
      } else {
        serde_json::from_slice::<BTreeMap<String, String>>(&data)?
      }
    } else {
      BTreeMap::new()
    };

    debug!(path = %path.display(), keys = values.len(), "opened storage");

    Ok(Self {
      path: path.to_path_buf(),
      values,
    })
  }

  fn persist(&self) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(&self.values)?;

    fs::write(&self.path, serialized)?;

    Ok(())
  }
}

impl Storage for FileStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) -> Result {
    self.values.insert(key.to_string(), value.to_string());
    self.persist()
  }
}

/// In-process storage. Clones share the same slots, so a clone can stand in
/// for "the same disk" across two sessions.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
  values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.values.borrow().get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) -> Result {
    self
      .values
      .borrow_mut()
      .insert(key.to_string(), value.to_string());

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_storage_file() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    env::temp_dir().join(format!(
      "stories_storage_test_{}_{unique}",
      process::id()
    ))
    .join("storage.json")
  }

  #[test]
  fn open_missing_file_is_empty() {
    let path = temp_storage_file();

    let storage = FileStorage::open(&path).unwrap();

    assert_eq!(storage.get("search"), None);
    assert!(!path.exists(), "open should not create the file");
  }

  #[test]
  fn set_persists_across_reopen() {
    let path = temp_storage_file();

    let mut storage = FileStorage::open(&path).unwrap();
    storage.set("search", "rust").unwrap();
    storage.set("other", "kept").unwrap();

    let reopened = FileStorage::open(&path).unwrap();

    assert_eq!(reopened.get("search").as_deref(), Some("rust"));
    assert_eq!(reopened.get("other").as_deref(), Some("kept"));

    let _ = fs::remove_dir_all(path.parent().unwrap());
  }

  #[test]
  fn open_rejects_corrupt_file() {
    let path = temp_storage_file();

    FileStorage::ensure_parent_dir(&path).unwrap();
    fs::write(&path, "not json").unwrap();

    assert!(FileStorage::open(&path).is_err());

    let _ = fs::remove_dir_all(path.parent().unwrap());
  }

  #[test]
  fn open_treats_empty_file_as_empty() {
    let path = temp_storage_file();

    FileStorage::ensure_parent_dir(&path).unwrap();
    fs::write(&path, "").unwrap();

    assert_eq!(FileStorage::open(&path).unwrap().get("search"), None);

    let _ = fs::remove_dir_all(path.parent().unwrap());
  }

  #[test]
  fn memory_storage_clones_share_slots() {
    let mut storage = MemoryStorage::default();
    let other = storage.clone();

    storage.set("search", "foo").unwrap();

    assert_eq!(other.get("search").as_deref(), Some("foo"));
  }
}
