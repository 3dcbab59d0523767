//! Discriminator derivation for instruction and account data.
//!
//! The deployed program tags instruction data with the first eight bytes of
//! `sha256("global:<method_name>")` and account data with the first eight bytes of
//! `sha256("account:<StructName>")`.

use solana_sdk::hash::hash;

pub const DISCRIMINATOR_LEN: usize = 8;

/// Derives the 8-byte discriminator for a namespaced identifier, e.g. `global:add_gif`.
pub fn derive_discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let preimage = format!("{namespace}:{name}");
    let digest = hash(preimage.as_bytes()).to_bytes();

    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    discriminator
}

/// The discriminator prefixing instruction data for a program method.
pub fn instruction_discriminator(method_name: &str) -> [u8; DISCRIMINATOR_LEN] {
    derive_discriminator("global", method_name)
}

/// The discriminator prefixing account data for a program-owned account struct.
pub fn account_discriminator(struct_name: &str) -> [u8; DISCRIMINATOR_LEN] {
    derive_discriminator("account", struct_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            instruction_discriminator("add_gif"),
            instruction_discriminator("add_gif"),
        );
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        assert_ne!(
            instruction_discriminator("initialize"),
            account_discriminator("initialize"),
        );
    }

    #[test]
    fn test_names_do_not_collide() {
        assert_ne!(
            instruction_discriminator("initialize"),
            instruction_discriminator("add_gif"),
        );
    }
}
