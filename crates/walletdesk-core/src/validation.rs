//! Form validation helpers

use crate::controls::FormField;
use crate::ports::{WalletError, WalletId, WalletService};

pub const MSG_EMPTY_ADDRESS: &str = "Please enter a valid address";
pub const MSG_INVALID_ADDRESS: &str = "Invalid address";

/// True when `s` has any non-whitespace content
pub fn string_not_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// True when at least one of the fields has content
pub fn fields_not_empty(fields: &[&FormField]) -> bool {
    fields.iter().any(|f| string_not_empty(f.text()))
}

/// Checks an address, returning the message to show when it is rejected
pub fn validate_address(address: &str, wallet: &dyn WalletService) -> Result<(), &'static str> {
    if !string_not_empty(address) {
        return Err(MSG_EMPTY_ADDRESS);
    }
    if !wallet.is_address_valid(address) {
        return Err(MSG_INVALID_ADDRESS);
    }
    Ok(())
}

/// Looks up an existing wallet tracking the same extended public key
pub fn existing_wallet_for_xpub(
    xpub: &str,
    wallet: &dyn WalletService,
) -> Result<Option<WalletId>, WalletError> {
    wallet.wallet_with_xpub(xpub.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::WalletInfo;

    struct OnlyAbc;

    impl WalletService for OnlyAbc {
        fn is_address_valid(&self, address: &str) -> bool {
            address == "abc"
        }
        fn verify_message(&self, _: &str, _: &str, _: &str) -> Result<bool, WalletError> {
            Ok(false)
        }
        fn wallet_with_xpub(&self, xpub: &str) -> Result<Option<WalletId>, WalletError> {
            Ok((xpub == "known").then_some(WalletId(3)))
        }
        fn create_watch_only_wallet(&self, _: &str, _: &str) -> Result<WalletId, WalletError> {
            Err(WalletError::NotFound)
        }
        fn wallets(&self) -> Vec<WalletInfo> {
            Vec::new()
        }
    }

    #[test]
    fn address_checks_run_in_order() {
        assert_eq!(validate_address("", &OnlyAbc), Err(MSG_EMPTY_ADDRESS));
        assert_eq!(validate_address("  ", &OnlyAbc), Err(MSG_EMPTY_ADDRESS));
        assert_eq!(validate_address("xyz", &OnlyAbc), Err(MSG_INVALID_ADDRESS));
        assert_eq!(validate_address("abc", &OnlyAbc), Ok(()));
    }

    #[test]
    fn any_non_empty_field_counts() {
        let empty = FormField::new("a");
        let mut filled = FormField::new("b");
        filled.set_text("x");
        assert!(!fields_not_empty(&[&empty]));
        assert!(fields_not_empty(&[&empty, &filled]));
    }

    #[test]
    fn xpub_lookup_is_trimmed() {
        assert_eq!(
            existing_wallet_for_xpub(" known ", &OnlyAbc).expect("lookup"),
            Some(WalletId(3))
        );
        assert_eq!(existing_wallet_for_xpub("other", &OnlyAbc).expect("lookup"), None);
    }
}
