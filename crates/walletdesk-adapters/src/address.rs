//! Account addresses and signed-message verification

use std::str::FromStr;

use alloy::primitives::{eip191_hash_message, keccak256, Address};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use walletdesk_core::WalletError;

/// Accepts `0x` + 40 hex digits. Mixed-case input must carry a valid
/// EIP-55 checksum.
pub fn is_address_valid(address: &str) -> bool {
    let address = address.trim();
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    let all_lower = !hex.chars().any(|c| c.is_ascii_uppercase());
    let all_upper = !hex.chars().any(|c| c.is_ascii_lowercase());
    if all_lower || all_upper {
        return true;
    }
    Address::parse_checksummed(address, None).is_ok()
}

/// Address controlled by `key`.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Recovers the signer of an EIP-191 personal message.
/// `signature` is 65 bytes of hex: `r || s || v`.
pub fn recover_signer(message: &str, signature: &str) -> Result<Address, WalletError> {
    let raw = alloy::primitives::hex::decode(signature.trim())
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))?;
    if raw.len() != 65 {
        return Err(WalletError::InvalidSignature(format!(
            "expected 65 bytes, got {}",
            raw.len()
        )));
    }

    let sig = Signature::from_slice(&raw[..64])
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))?;
    let v = raw[64];
    let bad_v = || WalletError::InvalidSignature(format!("bad recovery byte {v}"));
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(bad_v()),
    };
    let recovery = RecoveryId::from_byte(id).ok_or_else(bad_v)?;

    let prehash = eip191_hash_message(message.as_bytes());
    let key = VerifyingKey::recover_from_prehash(prehash.as_slice(), &sig, recovery)
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))?;
    Ok(address_of(&key))
}

/// `Ok(true)` when `signature` over `message` was made by `address`.
pub fn verify_message(address: &str, message: &str, signature: &str) -> Result<bool, WalletError> {
    if !is_address_valid(address) {
        return Err(WalletError::Backend(format!("invalid address {address}")));
    }
    let expected = Address::from_str(address.trim())
        .map_err(|e| WalletError::Backend(e.to_string()))?;
    let signer = recover_signer(message, signature)?;
    Ok(signer == expected)
}
