pub mod address;
pub mod config;
pub mod keys;
pub mod store;
pub mod wallet;

pub use config::{AppConfig, ConfigError, Network};
pub use keys::{ExtendedPubKey, KeyError};
pub use store::{StoreError, WalletRecord, WalletStore};
pub use wallet::MultiWallet;
