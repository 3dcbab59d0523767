//! Portal-level context for building program instructions from contextual address data.

use gif_portal_interface::instructions::{
    AddGifInstructionData,
    InitializeInstructionData,
};
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

/// A struct holding the program address and the keypair addressing the base account.
///
/// Implements helper methods for building the program's instructions against that account.
/// The base account keypair is ephemeral by default; a persisted keypair can be supplied for
/// repeatable runs against the same account.
pub struct PortalContext {
    pub program_id: Address,
    base_account: Keypair,
}

impl PortalContext {
    pub fn new(program_id: Address, base_account: Keypair) -> Self {
        Self {
            program_id,
            base_account,
        }
    }

    /// Creates a context with a freshly generated base account keypair, valid for this
    /// session only.
    pub fn ephemeral(program_id: Address) -> Self {
        Self::new(program_id, Keypair::new())
    }

    pub fn base_address(&self) -> Address {
        self.base_account.pubkey()
    }

    /// The base account keypair, needed as an additional signer for `initialize`.
    pub fn base_signer(&self) -> &Keypair {
        &self.base_account
    }

    /// Builds the one-time `initialize` instruction creating the base account, funded by the
    /// user.
    pub fn initialize(&self, user: &Address) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(self.base_address(), true),
                AccountMeta::new(*user, true),
                AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            ],
            data: InitializeInstructionData.pack(),
        }
    }

    /// Builds the `add_gif` instruction appending one link to the base account, authorized by
    /// the user.
    pub fn add_gif(&self, user: &Address, gif_link: &str) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(self.base_address(), false),
                AccountMeta::new_readonly(*user, true),
            ],
            data: AddGifInstructionData::new(gif_link).pack(),
        }
    }
}
