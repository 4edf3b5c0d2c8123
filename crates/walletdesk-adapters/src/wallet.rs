use std::sync::{Mutex, MutexGuard};

use walletdesk_core::{WalletError, WalletId, WalletInfo, WalletService};

use crate::address;
use crate::config::{AppConfig, Network};
use crate::keys::ExtendedPubKey;
use crate::store::{StoreError, WalletRecord, WalletStore};

/// Local wallet backend: watch-only wallets plus message verification.
#[derive(Debug)]
pub struct MultiWallet {
    network: Network,
    store: Mutex<WalletStore>,
}

impl MultiWallet {
    pub fn new(network: Network, store: WalletStore) -> Self {
        Self {
            network,
            store: Mutex::new(store),
        }
    }

    pub fn in_memory(network: Network) -> Self {
        Self::new(network, WalletStore::in_memory())
    }

    /// Opens the wallet store in the configured data dir. Without a
    /// resolvable data dir wallets live in memory only.
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let store = match config.resolved_data_dir() {
            Some(dir) => WalletStore::open(&dir)?,
            None => {
                tracing::warn!("no data directory available, wallets will not be saved");
                WalletStore::in_memory()
            }
        };
        Ok(Self::new(config.network, store))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    fn lock(&self) -> Result<MutexGuard<'_, WalletStore>, WalletError> {
        self.store
            .lock()
            .map_err(|_| WalletError::Backend("wallet store lock poisoned".to_owned()))
    }

    fn parse_key(&self, xpub: &str) -> Result<ExtendedPubKey, WalletError> {
        ExtendedPubKey::parse_for(xpub, self.network)
            .map_err(|e| WalletError::InvalidExtendedKey(e.to_string()))
    }
}

impl WalletService for MultiWallet {
    fn is_address_valid(&self, address: &str) -> bool {
        address::is_address_valid(address)
    }

    fn verify_message(
        &self,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool, WalletError> {
        let valid = address::verify_message(address, message, signature)?;
        tracing::debug!(address, valid, "message verified");
        Ok(valid)
    }

    /// A key that does not parse for this network matches no wallet; the
    /// create call reports it against the key field.
    fn wallet_with_xpub(&self, xpub: &str) -> Result<Option<WalletId>, WalletError> {
        let Ok(wanted) = ExtendedPubKey::parse_for(xpub, self.network) else {
            return Ok(None);
        };
        let store = self.lock()?;
        let found = store.records().iter().find(|record| {
            record
                .extended_key
                .as_deref()
                .and_then(|key| ExtendedPubKey::parse(key).ok())
                .is_some_and(|key| key == wanted)
        });
        Ok(found.map(|record| record.id))
    }

    fn create_watch_only_wallet(&self, name: &str, xpub: &str) -> Result<WalletId, WalletError> {
        let key = self.parse_key(xpub)?;
        let mut store = self.lock()?;

        let id = store.next_id();
        let name = match name.trim() {
            "" => format!("Watch-only wallet {id}"),
            trimmed => trimmed.to_owned(),
        };
        if store.records().iter().any(|record| record.name == name) {
            return Err(WalletError::Exists);
        }
        let encoded = key.encode();
        if store
            .records()
            .iter()
            .any(|record| record.extended_key.as_deref() == Some(encoded.as_str()))
        {
            return Err(WalletError::Backend(
                "a wallet with this extended public key already exists".to_owned(),
            ));
        }

        store
            .insert(WalletRecord {
                id,
                name: name.clone(),
                network: self.network,
                extended_key: Some(encoded),
            })
            .map_err(|e| {
                tracing::error!(error = %e, "failed to persist wallet");
                WalletError::Backend(e.to_string())
            })?;
        tracing::info!(%id, name, "watch-only wallet created");
        Ok(id)
    }

    fn wallets(&self) -> Vec<WalletInfo> {
        match self.lock() {
            Ok(store) => store.records().iter().map(WalletRecord::info).collect(),
            Err(err) => {
                tracing::error!(error = %err, "cannot list wallets");
                Vec::new()
            }
        }
    }
}
