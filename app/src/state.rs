//! Page-local state for the portal view.

use client::views::GifItemView;
use solana_address::Address;

/// The three pieces of state driving the view. Each has exactly one writer: the wallet
/// bridge sets the address, the program bridge refreshes the list, and the submission
/// command owns the input text.
#[derive(Debug, Default)]
pub struct PortalState {
    /// Set once a wallet connection succeeds; there is no disconnect path.
    pub wallet_address: Option<Address>,
    /// The pending submission text.
    pub input_value: String,
    /// `None` means the base account hasn't been created yet, which is distinct from an
    /// initialized-but-empty `Some(vec![])`.
    pub gif_list: Option<Vec<GifItemView>>,
}

impl PortalState {
    pub fn is_connected(&self) -> bool {
        self.wallet_address.is_some()
    }

    pub fn needs_initialization(&self) -> bool {
        self.is_connected() && self.gif_list.is_none()
    }
}
