//! Event handlers wiring the wallet and program bridges to the view state.
//!
//! Every remote operation is caught here: failures are logged and the process keeps
//! running. The one user-facing alert is the missing-wallet case at mount.

use client::{
    bridge::ProgramBridge,
    error::FetchError,
    print_kv,
    wallet::WalletBridge,
    LogColor,
};
use colored::Colorize;

use crate::state::PortalState;

pub const MISSING_WALLET_ALERT: &str =
    "Wallet not found! Set GIF_PORTAL_SECRET_KEY to connect a wallet.";

pub struct Portal<W, P> {
    pub state: PortalState,
    wallet: W,
    program: P,
}

impl<W: WalletBridge, P: ProgramBridge> Portal<W, P> {
    pub fn new(wallet: W, program: P) -> Self {
        Self {
            state: PortalState::default(),
            wallet,
            program,
        }
    }

    /// The mount effect: try a silent reconnection, alerting only when no wallet capability
    /// exists at all.
    pub async fn on_mount(&mut self) {
        if !self.wallet.detect() {
            println!("{}", MISSING_WALLET_ALERT.color(LogColor::Warning));
            return;
        }

        match self.wallet.silent_connect().await {
            Ok(address) => {
                print_kv!("Connected with address", address, LogColor::Info);
                self.state.wallet_address = Some(address);
                self.on_address_change().await;
            }
            Err(error) => print_kv!("Silent connect failed", error, LogColor::Warning),
        }
    }

    /// The connect interaction, prompting the wallet unconditionally.
    pub async fn connect_wallet(&mut self) {
        match self.wallet.explicit_connect().await {
            Ok(address) => {
                print_kv!("Connected with address", address, LogColor::Info);
                self.state.wallet_address = Some(address);
                self.on_address_change().await;
            }
            Err(error) => print_kv!("Error connecting wallet", error, LogColor::Error),
        }
    }

    /// The submission interaction: stores the typed text verbatim, then sends it.
    pub async fn submit(&mut self, text: &str) {
        self.state.input_value = text.to_string();
        self.send_gif().await;
    }

    /// The one-time initialization interaction.
    pub async fn create_gif_account(&mut self) {
        let payer = match self.wallet.signing_keypair() {
            Ok(payer) => payer,
            Err(error) => {
                print_kv!("Error creating base account", error, LogColor::Error);
                return;
            }
        };

        match self.program.initialize_account(payer).await {
            Ok(_) => println!("Created the gif program account."),
            Err(error) => {
                print_kv!("Error creating base account", error, LogColor::Error);
                return;
            }
        }

        self.refresh_gif_list().await;
    }

    /// Re-reads the list from the program. Only the not-yet-created case drives the view
    /// into its needs-initialization state; transient failures keep the previous list.
    pub async fn refresh_gif_list(&mut self) {
        match self.program.fetch_account().await {
            Ok(view) => {
                print_kv!("Got the account", view.address, LogColor::Dim);
                self.state.gif_list = Some(view.gifs);
            }
            Err(FetchError::NotInitialized) => {
                print_kv!(
                    "Base account not created yet",
                    "one-time initialization required",
                    LogColor::Warning
                );
                self.state.gif_list = None;
            }
            Err(error) => print_kv!("Error fetching gif list", error, LogColor::Error),
        }
    }

    async fn send_gif(&mut self) {
        if self.state.input_value.is_empty() {
            println!("No gif link given!");
            return;
        }
        let link = self.state.input_value.clone();

        let sent = match self.wallet.signing_keypair() {
            Ok(payer) => match self.program.append_entry(payer, &link).await {
                Ok(_) => {
                    print_kv!("Gif sent to the program", link, LogColor::Info);
                    true
                }
                Err(error) => {
                    print_kv!("Error sending gif", error, LogColor::Error);
                    false
                }
            },
            Err(error) => {
                print_kv!("Error sending gif", error, LogColor::Error);
                false
            }
        };

        if sent {
            self.state.input_value.clear();
            self.refresh_gif_list().await;
        }
    }

    /// The address-change effect: a fresh address always triggers a list fetch.
    async fn on_address_change(&mut self) {
        if self.state.is_connected() {
            println!("Fetching gif list...");
            self.refresh_gif_list().await;
        }
    }
}
