//! The base account layout: a Borsh-encoded, discriminator-prefixed list of submitted links.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::{
    discriminator::{
        account_discriminator,
        DISCRIMINATOR_LEN,
    },
    error::PortalError,
};

/// A single submitted record. Exactly one attribute: the link to an external image resource.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
pub struct GifItem {
    pub gif_link: String,
}

/// The program-owned account holding every submitted link, in submission order.
///
/// On-chain, the account is allocated with a fixed byte size at initialization, so decoded
/// data is followed by zero padding up to that size.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<GifItem>,
}

pub fn base_account_discriminator() -> [u8; DISCRIMINATOR_LEN] {
    account_discriminator("BaseAccount")
}

impl BaseAccount {
    /// Decodes the account from raw on-chain data, checking the discriminator prefix and
    /// ignoring the trailing allocation padding.
    pub fn try_from_bytes(data: &[u8]) -> Result<Self, PortalError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(PortalError::InsufficientByteLength);
        }
        let (prefix, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if prefix != base_account_discriminator() {
            return Err(PortalError::InvalidAccountDiscriminator);
        }

        BaseAccount::deserialize(&mut body).map_err(|_| PortalError::InvalidAccountData)
    }

    /// Encodes the account as it would appear on-chain, without allocation padding. Used by
    /// fixtures and tests.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = base_account_discriminator().to_vec();
        let body = borsh::to_vec(self).expect("Borsh serialization of the account is infallible");
        data.extend_from_slice(&body);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> BaseAccount {
        BaseAccount {
            total_gifs: 2,
            gif_list: vec![
                GifItem {
                    gif_link: "https://media.giphy.com/media/one/giphy.gif".into(),
                },
                GifItem {
                    gif_link: "https://media.giphy.com/media/two/giphy.gif".into(),
                },
            ],
        }
    }

    #[test]
    fn test_decode_tolerates_allocation_padding() {
        let mut data = sample_account().to_bytes();
        data.extend_from_slice(&[0u8; 512]);

        let decoded = BaseAccount::try_from_bytes(&data).unwrap();
        assert_eq!(decoded, sample_account());
    }

    #[test]
    fn test_decode_rejects_short_data() {
        assert_eq!(
            BaseAccount::try_from_bytes(&[0u8; 4]),
            Err(PortalError::InsufficientByteLength),
        );
    }

    #[test]
    fn test_decode_rejects_foreign_discriminator() {
        let mut data = sample_account().to_bytes();
        data[..DISCRIMINATOR_LEN].copy_from_slice(&account_discriminator("SomeOtherAccount"));

        assert_eq!(
            BaseAccount::try_from_bytes(&data),
            Err(PortalError::InvalidAccountDiscriminator),
        );
    }

    #[test]
    fn test_decode_rejects_truncated_body() {
        let data = sample_account().to_bytes();
        // Cut into the middle of the second string.
        let truncated = &data[..data.len() - 10];

        assert_eq!(
            BaseAccount::try_from_bytes(truncated),
            Err(PortalError::InvalidAccountData),
        );
    }
}
