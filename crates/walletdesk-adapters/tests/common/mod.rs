#![allow(dead_code)]

use alloy::primitives::{eip191_hash_message, hex};
use k256::ecdsa::SigningKey;
use walletdesk_adapters::address::address_of;

// BIP32 test vectors 1 and 2, master public keys
pub const XPUB_1: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";
pub const XPUB_2: &str = "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB";

pub struct Signer {
    key: SigningKey,
}

impl Signer {
    pub fn new(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("valid scalar");
        Self { key }
    }

    /// Checksummed account address.
    pub fn address(&self) -> String {
        address_of(self.key.verifying_key()).to_string()
    }

    /// `0x`-prefixed `r || s || v` with `v` in {27, 28}.
    pub fn sign(&self, message: &str) -> String {
        let prehash = eip191_hash_message(message.as_bytes());
        let (signature, recovery) = self
            .key
            .sign_prehash_recoverable(prehash.as_slice())
            .expect("sign");
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery.to_byte() + 27);
        format!("0x{}", hex::encode(bytes))
    }
}
