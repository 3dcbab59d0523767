//! Reads and prints the gif list for an existing base account, passed as the first argument.

use std::str::FromStr;

use anyhow::Context;
use client::{
    print_kv,
    transactions::PortalRpc,
    views::try_base_account_view,
    LogColor,
};
use colored::Colorize;
use solana_address::Address;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let raw_address = std::env::args()
        .nth(1)
        .context("Usage: view_gifs <BASE_ACCOUNT_ADDRESS>")?;
    let base_address = Address::from_str(&raw_address).context("Invalid base account address")?;

    let rpc = PortalRpc::default();
    let account = rpc
        .client
        .get_account(&base_address)
        .await
        .context("Base account doesn't exist; run the one-time initialization first")?;

    let view = try_base_account_view(base_address, &account.owner, &account.data)?;

    print_kv!("Base account", view.address, LogColor::Header);
    print_kv!("Total gifs", view.total_gifs, LogColor::Info);
    for gif in &view.gifs {
        print_kv!(gif.index, &gif.gif_link, LogColor::Gray);
    }

    Ok(())
}
