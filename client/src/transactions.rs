//! Lightweight, nonblocking RPC client utilities for funding accounts and submitting portal
//! transactions.

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use solana_address::Address;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    pretty::PrettyTransactionFailure,
    print_kv,
    LogColor,
};

/// The fixed public test-network endpoint the portal talks to by default.
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

pub struct PortalRpc {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for PortalRpc {
    fn default() -> Self {
        PortalRpc::new(DEVNET_URL, Default::default())
    }
}

impl PortalRpc {
    pub fn new(url: &str, config: SendTransactionConfig) -> Self {
        PortalRpc {
            client: RpcClient::new_with_commitment(url.into(), config.commitment),
            config,
        }
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.config.commitment
    }

    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let kp = Keypair::new();
        fund(&self.client, &kp.pubkey()).await?;

        Ok(kp)
    }

    /// Signs and submits a transaction with the payer as fee payer plus any additional
    /// signers, then waits for confirmation at the configured commitment.
    pub async fn send_and_confirm(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch the latest blockhash")?;

        let message = Message::new(instructions, Some(&payer.pubkey()));
        let mut transaction = Transaction::new_unsigned(message);
        transaction
            .try_sign(
                &[std::iter::once(payer)
                    .chain(signers.iter().cloned())
                    .collect::<Vec<_>>()]
                .concat(),
                blockhash,
            )
            .context("Couldn't sign the transaction")?;

        match self.client.send_and_confirm_transaction(&transaction).await {
            Ok(signature) => {
                if self.config.debug_logs {
                    print_kv!("Transaction confirmed", signature, LogColor::Info);
                }
                Ok(signature)
            }
            Err(error) => {
                PrettyTransactionFailure::new(&error, instructions).inspect(|failure| {
                    print!("{failure}");
                    print_kv!("Payer", payer.pubkey(), LogColor::Error);
                });
                Err(error).context("Failed transaction submission")
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct SendTransactionConfig {
    /// How finalized reads and writes must be before being considered done. The portal runs
    /// at the fastest tier.
    pub commitment: CommitmentConfig,
    pub debug_logs: bool,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            commitment: CommitmentConfig::processed(),
            debug_logs: true,
        }
    }
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
        && i < MAX_TRIES
    {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        i += 1;
    }

    if i == MAX_TRIES {
        bail!("Airdrop did not land.");
    }

    Ok(())
}

/// Checks if an account at the given address exists on-chain.
pub async fn account_exists(rpc: &PortalRpc, address: &Address) -> anyhow::Result<bool> {
    Ok(rpc
        .client
        .get_account_with_commitment(address, rpc.commitment())
        .await
        .context("Couldn't retrieve account data")?
        .value
        .is_some())
}
