//! The program-call bridge: the three remote operations against the deployed portal program.
//!
//! The bridge is a trait so the view layer can be driven by a test double; the real
//! implementation wires the instruction-building context to the RPC client.

use async_trait::async_trait;
use solana_sdk::signature::{
    Keypair,
    Signature,
    Signer,
};

use crate::{
    context::PortalContext,
    error::FetchError,
    transactions::PortalRpc,
    views::{
        try_base_account_view,
        BaseAccountView,
    },
};

#[async_trait]
pub trait ProgramBridge {
    /// Creates the base account. Must succeed exactly once per deployment; re-calling against
    /// an existing account fails remotely.
    async fn initialize_account(&self, payer: &Keypair) -> anyhow::Result<Signature>;

    /// Appends one link to the base account.
    async fn append_entry(&self, payer: &Keypair, gif_link: &str) -> anyhow::Result<Signature>;

    /// Reads the current list from the base account.
    async fn fetch_account(&self) -> Result<BaseAccountView, FetchError>;
}

pub struct PortalClient {
    pub rpc: PortalRpc,
    pub context: PortalContext,
}

impl PortalClient {
    pub fn new(rpc: PortalRpc, context: PortalContext) -> Self {
        Self { rpc, context }
    }
}

#[async_trait]
impl ProgramBridge for PortalClient {
    async fn initialize_account(&self, payer: &Keypair) -> anyhow::Result<Signature> {
        let instruction = self.context.initialize(&payer.pubkey());
        // The base account keypair co-signs account creation.
        self.rpc
            .send_and_confirm(payer, &[self.context.base_signer()], &[instruction])
            .await
    }

    async fn append_entry(&self, payer: &Keypair, gif_link: &str) -> anyhow::Result<Signature> {
        let instruction = self.context.add_gif(&payer.pubkey(), gif_link);
        self.rpc.send_and_confirm(payer, &[], &[instruction]).await
    }

    async fn fetch_account(&self) -> Result<BaseAccountView, FetchError> {
        let base_address = self.context.base_address();
        let response = self
            .rpc
            .client
            .get_account_with_commitment(&base_address, self.rpc.commitment())
            .await?;

        match response.value {
            None => Err(FetchError::NotInitialized),
            Some(account) => try_base_account_view(base_address, &account.owner, &account.data),
        }
    }
}
