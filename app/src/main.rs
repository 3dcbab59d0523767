//! Interactive terminal front-end for the GIF portal program.
//!
//! On startup it validates the interface-description artifact, builds the RPC bridge and the
//! wallet from configuration, attempts a silent wallet reconnection, and then serves an
//! interactive command loop standing in for the page's buttons and form.

use anyhow::Context;
use clap::Parser;
use client::{
    bridge::PortalClient,
    context::PortalContext,
    print_kv,
    transactions::{
        PortalRpc,
        SendTransactionConfig,
    },
    wallet::{
        parse_secret_key,
        KeypairWallet,
    },
    LogColor,
};
use colored::Colorize;
use gif_portal_interface::idl::{
    Idl,
    DEFAULT_IDL_JSON,
};
use solana_sdk::signature::Keypair;
use tokio::io::{
    AsyncBufReadExt,
    BufReader,
};

use crate::{
    cli::{
        parse_command,
        CliArgs,
        Command,
        HELP_TEXT,
    },
    controller::Portal,
    render::render,
};

mod cli;
mod controller;
mod render;
mod state;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // The artifact must match the deployed program exactly, or every remote call would fail.
    let idl = load_idl(&args)?;
    idl.validate()
        .context("Interface-description artifact doesn't match this client")?;
    let program_id = idl.program_address()?;

    let base_account = match &args.base_account_keypair {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Couldn't read base account keypair {path:?}"))?;
            parse_secret_key(&raw).context("Couldn't parse the base account keypair")?
        }
        None => Keypair::new(),
    };

    let rpc = PortalRpc::new(&args.url, SendTransactionConfig::default());
    print_kv!("Endpoint", &args.url, LogColor::Dim);
    print_kv!("Program", program_id, LogColor::Dim);

    let context = PortalContext::new(program_id, base_account);
    print_kv!("Base account", context.base_address(), LogColor::Dim);

    let mut portal = Portal::new(KeypairWallet::from_env(), PortalClient::new(rpc, context));
    portal.on_mount().await;
    println!("{}", render(&portal.state));

    run_event_loop(&mut portal).await
}

fn load_idl(args: &CliArgs) -> anyhow::Result<Idl> {
    let json = match &args.idl {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Couldn't read artifact {path:?}"))?,
        None => DEFAULT_IDL_JSON.to_string(),
    };

    Ok(Idl::from_json(&json)?)
}

/// Reads commands until end of input, dispatching each to the controller and re-rendering.
async fn run_event_loop(
    portal: &mut Portal<KeypairWallet, PortalClient>,
) -> anyhow::Result<()> {
    println!("{HELP_TEXT}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some((command, rest)) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command. {}", "Type `help` for the list.".color(LogColor::Dim));
            }
            continue;
        };

        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        print_kv!(format!("[{timestamp}]"), command, LogColor::Dim, LogColor::Gray);

        match command {
            Command::Connect => portal.connect_wallet().await,
            Command::Submit => portal.submit(rest).await,
            Command::Init => portal.create_gif_account().await,
            Command::List => portal.refresh_gif_list().await,
            Command::Help => {
                println!("{HELP_TEXT}");
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", render(&portal.state));
    }

    Ok(())
}
