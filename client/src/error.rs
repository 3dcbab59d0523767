//! Typed failure modes for reads of the portal's base account.
//!
//! Call sites need to tell "the account hasn't been created yet" apart from transient
//! failures: only the former should drive the view into its needs-initialization state.

use gif_portal_interface::error::PortalError;
use solana_address::Address;
use solana_client::client_error::ClientError;

#[derive(Debug)]
pub enum FetchError {
    /// No account exists at the base account address yet.
    NotInitialized,
    /// An account exists but is owned by a different program.
    InvalidOwner { owner: Address },
    /// The account data doesn't decode as a base account.
    Decode(PortalError),
    /// The RPC request itself failed.
    Rpc(ClientError),
}

impl FetchError {
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, FetchError::NotInitialized)
    }
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FetchError::NotInitialized => {
                write!(f, "The base account hasn't been initialized yet")
            }
            FetchError::InvalidOwner { owner } => {
                write!(f, "Account isn't owned by the portal program (owner: {owner})")
            }
            FetchError::Decode(error) => write!(f, "Couldn't decode the base account: {error}"),
            FetchError::Rpc(error) => write!(f, "RPC request failed: {error}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Rpc(error) => Some(error),
            FetchError::Decode(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(error: ClientError) -> Self {
        FetchError::Rpc(error)
    }
}

impl From<PortalError> for FetchError {
    fn from(error: PortalError) -> Self {
        FetchError::Decode(error)
    }
}
