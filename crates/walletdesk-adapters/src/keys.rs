//! Serialized BIP32 extended public keys

use std::str::FromStr;

use bip32::{ChildNumber, ExtendedKey, ExtendedKeyAttrs, Prefix};
use thiserror::Error;

use crate::config::Network;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("bad extended key encoding: {0}")]
    Encoding(String),
    #[error("extended private keys are not accepted")]
    PrivateKey,
    #[error("unsupported key prefix {0}")]
    UnknownVersion(String),
    #[error("key is for {found:?}, expected {expected:?}")]
    WrongNetwork { expected: Network, found: Network },
    #[error("key data is not a compressed secp256k1 point")]
    InvalidPoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedPubKey {
    pub network: Network,
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32,
    pub chain_code: [u8; 32],
    pub public_key: [u8; 33],
}

fn prefix_for(network: Network) -> Prefix {
    match network {
        Network::Mainnet => Prefix::XPUB,
        Network::Testnet => Prefix::TPUB,
    }
}

impl ExtendedPubKey {
    /// Decodes an `xpub` or `tpub` string. Surrounding whitespace is ignored.
    pub fn parse(encoded: &str) -> Result<Self, KeyError> {
        let raw = ExtendedKey::from_str(encoded.trim())
            .map_err(|e| KeyError::Encoding(e.to_string()))?;

        let network = if raw.prefix == Prefix::XPUB {
            Network::Mainnet
        } else if raw.prefix == Prefix::TPUB {
            Network::Testnet
        } else if raw.prefix.is_private() {
            return Err(KeyError::PrivateKey);
        } else {
            return Err(KeyError::UnknownVersion(raw.prefix.as_str().to_owned()));
        };

        let depth = raw.attrs.depth;
        let parent_fingerprint = raw.attrs.parent_fingerprint;
        let child_number = u32::from(raw.attrs.child_number);
        let chain_code = raw.attrs.chain_code;
        let xpub = bip32::XPub::try_from(raw).map_err(|_| KeyError::InvalidPoint)?;

        Ok(Self {
            network,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            public_key: xpub.to_bytes(),
        })
    }

    /// Like [`ExtendedPubKey::parse`] but also requires `network`.
    pub fn parse_for(encoded: &str, network: Network) -> Result<Self, KeyError> {
        let key = Self::parse(encoded)?;
        if key.network != network {
            return Err(KeyError::WrongNetwork {
                expected: network,
                found: key.network,
            });
        }
        Ok(key)
    }

    pub fn encode(&self) -> String {
        ExtendedKey {
            prefix: prefix_for(self.network),
            attrs: ExtendedKeyAttrs {
                depth: self.depth,
                parent_fingerprint: self.parent_fingerprint,
                child_number: ChildNumber::from(self.child_number),
                chain_code: self.chain_code,
            },
            key_bytes: self.public_key,
        }
        .to_string()
    }
}
