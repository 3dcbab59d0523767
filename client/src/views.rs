//! Read-only view helpers for decoding the portal's base account into ergonomic structs.

use gif_portal_interface::state::BaseAccount;
use solana_address::Address;

use crate::error::FetchError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GifItemView {
    /// Position in the on-chain list, which is also the render key.
    pub index: usize,
    pub gif_link: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseAccountView {
    pub address: Address,
    pub total_gifs: u64,
    pub gifs: Vec<GifItemView>,
}

/// Decodes a fetched account's owner and raw data into a [`BaseAccountView`].
pub fn try_base_account_view(
    address: Address,
    owner: &Address,
    data: &[u8],
) -> Result<BaseAccountView, FetchError> {
    if owner != &gif_portal_interface::program::ID {
        return Err(FetchError::InvalidOwner { owner: *owner });
    }

    let account = BaseAccount::try_from_bytes(data)?;
    Ok(BaseAccountView {
        address,
        total_gifs: account.total_gifs,
        gifs: account
            .gif_list
            .into_iter()
            .enumerate()
            .map(|(index, item)| GifItemView {
                index,
                gif_link: item.gif_link,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use gif_portal_interface::state::GifItem;

    use super::*;

    fn account_data(links: &[&str]) -> Vec<u8> {
        let mut data = BaseAccount {
            total_gifs: links.len() as u64,
            gif_list: links
                .iter()
                .map(|link| GifItem {
                    gif_link: (*link).into(),
                })
                .collect(),
        }
        .to_bytes();
        // On-chain accounts carry allocation padding after the encoded struct.
        data.extend_from_slice(&[0u8; 128]);
        data
    }

    #[test]
    fn test_decodes_owned_account() {
        let address = Address::new_unique();
        let data = account_data(&["https://media.giphy.com/media/a/giphy.gif"]);

        let view =
            try_base_account_view(address, &gif_portal_interface::program::ID, &data).unwrap();
        assert_eq!(view.address, address);
        assert_eq!(view.total_gifs, 1);
        assert_eq!(view.gifs.len(), 1);
        assert_eq!(view.gifs[0].index, 0);
        assert_eq!(
            view.gifs[0].gif_link,
            "https://media.giphy.com/media/a/giphy.gif"
        );
    }

    #[test]
    fn test_rejects_foreign_owner() {
        let foreign_owner = Address::new_unique();
        let data = account_data(&[]);

        let error =
            try_base_account_view(Address::new_unique(), &foreign_owner, &data).unwrap_err();
        assert!(matches!(error, FetchError::InvalidOwner { owner } if owner == foreign_owner));
    }

    #[test]
    fn test_rejects_garbage_data() {
        let error = try_base_account_view(
            Address::new_unique(),
            &gif_portal_interface::program::ID,
            &[0u8; 64],
        )
        .unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[test]
    fn test_empty_list_decodes_to_zero_views() {
        let view = try_base_account_view(
            Address::new_unique(),
            &gif_portal_interface::program::ID,
            &account_data(&[]),
        )
        .unwrap();
        assert!(view.gifs.is_empty());
    }
}
