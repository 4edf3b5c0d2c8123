use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WalletId(pub u32);

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub id: WalletId,
    pub name: String,
    pub watch_only: bool,
    pub extended_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("exists")]
    Exists,
    #[error("invalid extended key: {0}")]
    InvalidExtendedKey(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
}

/// Wallet operations the GUI delegates to.
pub trait WalletService {
    fn is_address_valid(&self, address: &str) -> bool;
    fn verify_message(
        &self,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool, WalletError>;
    /// Wallet whose extended public key equals `xpub`, if any.
    fn wallet_with_xpub(&self, xpub: &str) -> Result<Option<WalletId>, WalletError>;
    fn create_watch_only_wallet(&self, name: &str, xpub: &str) -> Result<WalletId, WalletError>;
    fn wallets(&self) -> Vec<WalletInfo>;
}
