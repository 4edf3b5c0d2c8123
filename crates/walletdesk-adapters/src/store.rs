//! JSON persistence for the wallet list

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use walletdesk_core::{WalletId, WalletInfo};

use crate::config::Network;

const STORE_FILE: &str = "wallets.json";
const STORE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("wallet store io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("wallet store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("unsupported wallet store version {0}")]
    Version(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub id: WalletId,
    pub name: String,
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_key: Option<String>,
}

impl WalletRecord {
    pub fn info(&self) -> WalletInfo {
        WalletInfo {
            id: self.id,
            name: self.name.clone(),
            watch_only: self.extended_key.is_some(),
            extended_key: self.extended_key.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    wallets: Vec<WalletRecord>,
}

/// Wallet records, optionally backed by `wallets.json` in a data dir.
#[derive(Debug, Default)]
pub struct WalletStore {
    path: Option<PathBuf>,
    records: Vec<WalletRecord>,
}

impl WalletStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store in `dir`, creating the directory when missing.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(STORE_FILE);

        let records = match fs::read_to_string(&path) {
            Ok(raw) => {
                let file: StoreFile = serde_json::from_str(&raw)?;
                if file.version != STORE_VERSION {
                    return Err(StoreError::Version(file.version));
                }
                file.wallets
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), count = records.len(), "wallet store opened");

        Ok(Self {
            path: Some(path),
            records,
        })
    }

    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }

    pub fn next_id(&self) -> WalletId {
        let max = self.records.iter().map(|r| r.id.0).max();
        WalletId(max.map_or(1, |id| id + 1))
    }

    /// Appends `record` and writes the file. The in-memory list is left
    /// untouched when the write fails.
    pub fn insert(&mut self, record: WalletRecord) -> Result<(), StoreError> {
        self.records.push(record);
        if let Err(err) = self.save() {
            self.records.pop();
            return Err(err);
        }
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = StoreFile {
            version: STORE_VERSION,
            wallets: self.records.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)?;

        // write then rename so a crash never leaves a half-written file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }
}
