//! Interprets RPC preflight failures into readable portal instruction errors.

use std::fmt::Display;

use colored::Colorize;
use gif_portal_interface::instructions::PortalInstruction;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError;
use solana_transaction_error::TransactionError;

use crate::{
    fmt_kv,
    LogColor,
};

/// A failed instruction resolved to the portal method it was built from, where the data
/// prefix allows it.
pub struct PrettyTransactionFailure {
    instruction: Option<PortalInstruction>,
    error: InstructionError,
}

impl PrettyTransactionFailure {
    pub fn new(error: &ClientError, instructions: &[Instruction]) -> Option<Self> {
        match error.kind() {
            ClientErrorKind::RpcError(RpcResponseError {
                data:
                    RpcResponseErrorData::SendTransactionPreflightFailure(
                        RpcSimulateTransactionResult {
                            err: Some(ui_err), ..
                        },
                    ),
                ..
            }) => {
                let transaction_error: TransactionError = ui_err.clone().into();
                match transaction_error {
                    TransactionError::InstructionError(instruction_index, instruction_error) => {
                        let instruction = instructions
                            .get(instruction_index as usize)
                            .and_then(|instruction| {
                                PortalInstruction::from_data(&instruction.data)
                            });

                        Some(Self {
                            instruction,
                            error: instruction_error,
                        })
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl Display for PrettyTransactionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let instruction = match self.instruction {
            Some(instruction) => instruction.to_string(),
            None => "unknown instruction".to_string(),
        };

        let message = format!("{instruction}, {}", self.error);
        let error_message = fmt_kv!("InstructionError", message, LogColor::Error);
        writeln!(f, "{error_message}")
    }
}
