//! Definitions of the portal program's instructions and their wire encodings.
//!
//! Each instruction's data is its 8-byte `global:` discriminator followed by the
//! Borsh-serialized arguments. The account tables below are the source of truth the
//! interface-description artifact is validated against.

use borsh::BorshSerialize;

use crate::discriminator::{
    instruction_discriminator,
    DISCRIMINATOR_LEN,
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PortalInstruction {
    Initialize,
    AddGif,
}

/// The role an account plays in an instruction, mirrored by the artifact's account list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccountSpec {
    pub name: &'static str,
    pub is_mut: bool,
    pub is_signer: bool,
}

pub const INITIALIZE_ACCOUNTS: &[AccountSpec] = &[
    AccountSpec { name: "base_account", is_mut: true, is_signer: true },
    AccountSpec { name: "user", is_mut: true, is_signer: true },
    AccountSpec { name: "system_program", is_mut: false, is_signer: false },
];

pub const ADD_GIF_ACCOUNTS: &[AccountSpec] = &[
    AccountSpec { name: "base_account", is_mut: true, is_signer: false },
    AccountSpec { name: "user", is_mut: false, is_signer: true },
];

pub const ALL_INSTRUCTIONS: &[PortalInstruction] =
    &[PortalInstruction::Initialize, PortalInstruction::AddGif];

impl PortalInstruction {
    /// The deployed program's method name for this instruction.
    pub const fn method_name(&self) -> &'static str {
        match self {
            PortalInstruction::Initialize => "initialize",
            PortalInstruction::AddGif => "add_gif",
        }
    }

    pub const fn account_specs(&self) -> &'static [AccountSpec] {
        match self {
            PortalInstruction::Initialize => INITIALIZE_ACCOUNTS,
            PortalInstruction::AddGif => ADD_GIF_ACCOUNTS,
        }
    }

    pub fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        instruction_discriminator(self.method_name())
    }

    /// Maps the leading bytes of instruction data back to the instruction, for error
    /// interpretation.
    pub fn from_data(data: &[u8]) -> Option<Self> {
        let prefix = data.get(..DISCRIMINATOR_LEN)?;
        ALL_INSTRUCTIONS
            .iter()
            .find(|instruction| instruction.discriminator().as_slice() == prefix)
            .copied()
    }
}

impl core::fmt::Display for PortalInstruction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

/// `initialize` takes no arguments; its data is the bare discriminator.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitializeInstructionData;

impl InitializeInstructionData {
    pub fn pack(&self) -> Vec<u8> {
        PortalInstruction::Initialize.discriminator().to_vec()
    }
}

/// `add_gif` takes the link string as its sole argument.
#[derive(BorshSerialize, Clone, Debug)]
pub struct AddGifInstructionData {
    pub gif_link: String,
}

impl AddGifInstructionData {
    pub fn new(gif_link: impl Into<String>) -> Self {
        Self {
            gif_link: gif_link.into(),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = PortalInstruction::AddGif.discriminator().to_vec();
        let args = borsh::to_vec(self).expect("Borsh serialization of a string is infallible");
        data.extend_from_slice(&args);
        data
    }
}
