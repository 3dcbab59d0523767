//! Client-facing interface layer for the GIF portal program: instruction schemas, the base
//! account layout, and the interface-description artifact the deployed program is validated
//! against.

pub mod discriminator;
pub mod error;
pub mod idl;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_address::Address;

    /// The deployed portal program's address. The interface-description artifact shipped with
    /// this crate must carry the same address or startup validation fails.
    pub const ID: Address = Address::from_str_const("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
}
