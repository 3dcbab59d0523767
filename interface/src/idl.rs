//! Loader and validator for the interface-description artifact (`idl.json`).
//!
//! The artifact is a static, versioned description of the deployed program's callable methods
//! and account layout. It is parsed once at startup and checked against the schema compiled
//! into this crate; any mismatch means every remote call would fail, so validation errors are
//! fatal to startup.

use std::str::FromStr;

use serde::Deserialize;
use solana_address::Address;

use crate::{
    instructions::{
        AccountSpec,
        ALL_INSTRUCTIONS,
    },
    program,
};

/// The artifact shipped with this crate, matching the deployed program.
pub const DEFAULT_IDL_JSON: &str = include_str!("../idl/gif_portal.json");

pub const BASE_ACCOUNT_NAME: &str = "BaseAccount";

#[derive(Clone, Debug, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    pub accounts: Vec<IdlAccount>,
    pub metadata: IdlMetadata,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlInstructionAccount>,
    pub args: Vec<IdlField>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlInstructionAccount {
    pub name: String,
    #[serde(rename = "isMut")]
    pub is_mut: bool,
    #[serde(rename = "isSigner")]
    pub is_signer: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlMetadata {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IdlError {
    Parse(String),
    InvalidAddress(String),
    AddressMismatch { artifact: Address, expected: Address },
    MissingInstruction(&'static str),
    AccountTableMismatch(&'static str),
    MissingAccount(&'static str),
}

impl core::fmt::Display for IdlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IdlError::Parse(message) => write!(f, "Artifact isn't valid JSON: {message}"),
            IdlError::InvalidAddress(address) => {
                write!(f, "Artifact address isn't a valid public key: {address}")
            }
            IdlError::AddressMismatch { artifact, expected } => write!(
                f,
                "Artifact address {artifact} doesn't match the deployed program {expected}"
            ),
            IdlError::MissingInstruction(name) => {
                write!(f, "Artifact doesn't describe the `{name}` instruction")
            }
            IdlError::AccountTableMismatch(name) => write!(
                f,
                "Artifact account table for `{name}` doesn't match this client's"
            ),
            IdlError::MissingAccount(name) => {
                write!(f, "Artifact doesn't describe the `{name}` account")
            }
        }
    }
}

impl std::error::Error for IdlError {}

impl Idl {
    pub fn from_json(json: &str) -> Result<Self, IdlError> {
        serde_json::from_str(json).map_err(|error| IdlError::Parse(error.to_string()))
    }

    /// The deployed program's address as recorded in the artifact.
    pub fn program_address(&self) -> Result<Address, IdlError> {
        Address::from_str(&self.metadata.address)
            .map_err(|_| IdlError::InvalidAddress(self.metadata.address.clone()))
    }

    /// Checks the artifact against the schema compiled into this crate: the program address,
    /// each instruction's name and account table, and the base account's presence.
    pub fn validate(&self) -> Result<(), IdlError> {
        let artifact = self.program_address()?;
        if artifact != program::ID {
            return Err(IdlError::AddressMismatch {
                artifact,
                expected: program::ID,
            });
        }

        for instruction in ALL_INSTRUCTIONS {
            let name = instruction.method_name();
            let described = self
                .instructions
                .iter()
                .find(|candidate| candidate.name == name)
                .ok_or(IdlError::MissingInstruction(name))?;

            if !account_tables_match(&described.accounts, instruction.account_specs()) {
                return Err(IdlError::AccountTableMismatch(name));
            }
        }

        self.accounts
            .iter()
            .find(|account| account.name == BASE_ACCOUNT_NAME)
            .ok_or(IdlError::MissingAccount(BASE_ACCOUNT_NAME))?;

        Ok(())
    }
}

fn account_tables_match(described: &[IdlInstructionAccount], specs: &[AccountSpec]) -> bool {
    described.len() == specs.len()
        && described.iter().zip(specs).all(|(account, spec)| {
            account.name == spec.name
                && account.is_mut == spec.is_mut
                && account.is_signer == spec.is_signer
        })
}
