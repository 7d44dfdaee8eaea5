//! JSONファイルのキー・値ストア
//!
//! ブラウザのlocalStorageと同じく、文字列キーに文字列値を持つ。
//! 書込みのたびにファイル全体を書き直す。

use hanzi_cards_common::{Error, KeyValueStore};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// ストアファイルを開く（無い・壊れている場合は空）
    pub fn open(path: &Path) -> Self {
        let entries = match File::open(path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "store file is corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.flush()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> hanzi_cards_common::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
            .map_err(|e| Error::Storage(format!("{}: {}", self.path.display(), e)))
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Err(e) = self.flush() {
                tracing::warn!(key, error = %e, "failed to write store after remove");
            }
        }
    }
}
