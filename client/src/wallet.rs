//! Wallet capability abstraction over an environment-supplied keypair.
//!
//! The browser original reads a wallet object injected into the page; the terminal analog is
//! a secret key supplied through the environment. Silent connection only succeeds when the
//! user has additionally marked the wallet as pre-trusted, mirroring a wallet's
//! only-if-trusted connection mode.

use anyhow::{
    bail,
    Context,
};
use async_trait::async_trait;
use solana_address::Address;
use solana_sdk::{
    bs58,
    signature::{
        Keypair,
        Signer,
    },
};

/// Secret key for the wallet, either a JSON byte array or a base58 string.
pub const WALLET_SECRET_ENV: &str = "GIF_PORTAL_SECRET_KEY";

/// When set to `1` or `true`, the wallet connects silently at startup without an explicit
/// connect action.
pub const WALLET_TRUSTED_ENV: &str = "GIF_PORTAL_TRUSTED";

#[async_trait]
pub trait WalletBridge {
    /// Whether a wallet capability is present at all.
    fn detect(&self) -> bool;

    /// Connects without user interaction; succeeds only for a present, pre-trusted wallet.
    async fn silent_connect(&self) -> anyhow::Result<Address>;

    /// Connects unconditionally, the analog of prompting the user.
    async fn explicit_connect(&self) -> anyhow::Result<Address>;

    /// The keypair used to authorize transactions once connected.
    fn signing_keypair(&self) -> anyhow::Result<&Keypair>;
}

pub struct KeypairWallet {
    keypair: Option<Keypair>,
    pre_trusted: bool,
}

impl KeypairWallet {
    pub fn new(keypair: Option<Keypair>, pre_trusted: bool) -> Self {
        Self {
            keypair,
            pre_trusted,
        }
    }

    /// Reads the wallet from the environment. A malformed secret key is treated the same as
    /// an absent one.
    pub fn from_env() -> Self {
        let keypair = std::env::var(WALLET_SECRET_ENV)
            .ok()
            .and_then(|raw| parse_secret_key(&raw).ok());
        let pre_trusted = std::env::var(WALLET_TRUSTED_ENV)
            .map(|flag| flag == "1" || flag.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self::new(keypair, pre_trusted)
    }
}

#[async_trait]
impl WalletBridge for KeypairWallet {
    fn detect(&self) -> bool {
        self.keypair.is_some()
    }

    async fn silent_connect(&self) -> anyhow::Result<Address> {
        let Some(keypair) = self.keypair.as_ref() else {
            bail!("No wallet keypair is available");
        };
        if !self.pre_trusted {
            bail!("Wallet isn't pre-trusted; an explicit connect is required");
        }

        Ok(keypair.pubkey())
    }

    async fn explicit_connect(&self) -> anyhow::Result<Address> {
        let Some(keypair) = self.keypair.as_ref() else {
            bail!("No wallet keypair is available");
        };

        Ok(keypair.pubkey())
    }

    fn signing_keypair(&self) -> anyhow::Result<&Keypair> {
        self.keypair
            .as_ref()
            .context("No wallet keypair is available")
    }
}

/// Parses a secret key from either a JSON byte array or a base58 string.
pub fn parse_secret_key(raw: &str) -> anyhow::Result<Keypair> {
    let raw = raw.trim();
    let byte_vec: Vec<u8> = if raw.starts_with('[') {
        serde_json::from_str(raw).context("Invalid JSON keypair")?
    } else {
        bs58::decode(raw)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_byte_array() {
        let keypair = Keypair::new();
        let raw = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let parsed = parse_secret_key(&raw).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_base58() {
        let keypair = Keypair::new();
        let raw = bs58::encode(keypair.to_bytes()).into_string();

        let parsed = parse_secret_key(&raw).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_secret_key("not a key").is_err());
        assert!(parse_secret_key("[1, 2, 3]").is_err());
    }

    #[tokio::test]
    async fn test_silent_connect_requires_trust() {
        let wallet = KeypairWallet::new(Some(Keypair::new()), false);
        assert!(wallet.detect());
        assert!(wallet.silent_connect().await.is_err());
        assert!(wallet.explicit_connect().await.is_ok());
    }

    #[tokio::test]
    async fn test_trusted_wallet_connects_silently() {
        let keypair = Keypair::new();
        let address = keypair.pubkey();
        let wallet = KeypairWallet::new(Some(keypair), true);

        assert_eq!(wallet.silent_connect().await.unwrap(), address);
    }

    #[tokio::test]
    async fn test_absent_wallet_fails_every_connect() {
        let wallet = KeypairWallet::new(None, true);
        assert!(!wallet.detect());
        assert!(wallet.silent_connect().await.is_err());
        assert!(wallet.explicit_connect().await.is_err());
        assert!(wallet.signing_keypair().is_err());
    }
}
