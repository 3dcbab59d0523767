//! Pure rendering of the portal's three view states.

use client::{
    fmt_kv,
    logs::fmt_divider,
    LogColor,
};
use colored::Colorize;

use crate::state::PortalState;

pub const HEADER: &str = "GIF Portal";
pub const SUB_TEXT: &str = "a shared gif collection on-chain";

pub const CONNECT_PROMPT: &str = "Type `connect` to connect your wallet.";
pub const INIT_PROMPT: &str =
    "Type `init` to do the one-time initialization of the gif program account.";
pub const SUBMIT_PROMPT: &str = "Type `submit <link>` to add a gif.";

/// Renders the whole view as a function of the current state: disconnected,
/// connected-needs-init, or connected-with-data.
pub fn render(state: &PortalState) -> String {
    let mut lines = vec![
        fmt_divider(),
        fmt_kv!(HEADER, SUB_TEXT, LogColor::Header, LogColor::Gray),
    ];

    match &state.wallet_address {
        None => lines.push(CONNECT_PROMPT.into()),
        Some(address) => {
            lines.push(fmt_kv!("Connected", address, LogColor::Info));
            if state.needs_initialization() {
                lines.push(INIT_PROMPT.into());
            } else if let Some(gifs) = &state.gif_list {
                lines.push(SUBMIT_PROMPT.into());
                lines.push(render_grid(gifs));
            }
        }
    }

    lines.push(fmt_divider());
    lines.join("\n")
}

/// One line per record, keyed by position. A single finite pass over the list.
fn render_grid(gifs: &[client::views::GifItemView]) -> String {
    let mut lines = vec![fmt_kv!("Gifs", gifs.len(), LogColor::Accent, LogColor::Info)];
    lines.extend(
        gifs.iter()
            .map(|gif| fmt_kv!(gif.index, &gif.gif_link, LogColor::Dim, LogColor::Gray)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use client::views::GifItemView;
    use solana_address::Address;

    use super::*;

    fn connected_state(gif_list: Option<Vec<GifItemView>>) -> PortalState {
        PortalState {
            wallet_address: Some(Address::new_unique()),
            input_value: String::new(),
            gif_list,
        }
    }

    #[test]
    fn test_disconnected_view_prompts_for_connection() {
        let rendered = render(&PortalState::default());
        assert!(rendered.contains(CONNECT_PROMPT));
        assert!(!rendered.contains(INIT_PROMPT));
    }

    #[test]
    fn test_absent_list_prompts_for_initialization() {
        let rendered = render(&connected_state(None));
        assert!(rendered.contains(INIT_PROMPT));
        assert!(!rendered.contains("Gifs"));
    }

    #[test]
    fn test_empty_list_renders_zero_entry_grid() {
        // Initialized-but-empty shows the grid (with zero entries), not the init prompt.
        let rendered = render(&connected_state(Some(vec![])));
        assert!(rendered.contains(SUBMIT_PROMPT));
        assert!(rendered.contains("Gifs"));
        assert!(!rendered.contains(INIT_PROMPT));
    }

    #[test]
    fn test_grid_lists_each_record_once() {
        let gifs = vec![
            GifItemView {
                index: 0,
                gif_link: "http://example.com/a.gif".into(),
            },
            GifItemView {
                index: 1,
                gif_link: "http://example.com/b.gif".into(),
            },
        ];
        let rendered = render(&connected_state(Some(gifs)));

        assert_eq!(rendered.matches("http://example.com/a.gif").count(), 1);
        assert_eq!(rendered.matches("http://example.com/b.gif").count(), 1);
    }
}
