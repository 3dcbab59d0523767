//! End-to-end flow against a local validator with the portal program deployed: fund a payer,
//! initialize the base account, submit one link, and read it back.

use client::{
    bridge::{
        PortalClient,
        ProgramBridge,
    },
    context::PortalContext,
    print_kv,
    transactions::{
        account_exists,
        PortalRpc,
        SendTransactionConfig,
    },
    LogColor,
};
use colored::Colorize;
use gif_portal_interface::program;
use solana_sdk::signature::Signer;

const LOCALNET_URL: &str = "http://localhost:8899";
const GIF_LINK: &str = "https://media.giphy.com/media/wgH3eRXvq56vSiDldb/giphy.gif";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = PortalRpc::new(LOCALNET_URL, SendTransactionConfig::default());
    let payer = rpc.fund_new_account().await?;

    let portal = PortalClient::new(rpc, PortalContext::ephemeral(program::ID));
    print_kv!("Base account", portal.context.base_address());

    portal.initialize_account(&payer).await?;
    assert!(account_exists(&portal.rpc, &portal.context.base_address()).await?);

    portal.append_entry(&payer, GIF_LINK).await?;

    let view = portal.fetch_account().await?;
    assert_eq!(view.gifs.len(), 1);
    assert_eq!(view.gifs[0].gif_link, GIF_LINK);

    print_kv!("Total gifs", view.total_gifs, LogColor::Info);
    for gif in &view.gifs {
        print_kv!(gif.index, &gif.gif_link, LogColor::Gray);
    }

    Ok(())
}
