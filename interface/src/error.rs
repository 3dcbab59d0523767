//! Interface-level error types and conversion helpers to represent them as message strings.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PortalError {
    InsufficientByteLength,
    InvalidAccountDiscriminator,
    InvalidAccountData,
    UnknownInstructionDiscriminator,
}

impl From<PortalError> for &'static str {
    fn from(value: PortalError) -> Self {
        match value {
            PortalError::InsufficientByteLength => "Not enough bytes passed",
            PortalError::InvalidAccountDiscriminator => "Invalid account discriminator",
            PortalError::InvalidAccountData => "Account data doesn't match the expected layout",
            PortalError::UnknownInstructionDiscriminator => "Unknown instruction discriminator",
        }
    }
}

impl core::fmt::Display for PortalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message: &'static str = (*self).into();
        write!(f, "{message}")
    }
}

impl std::error::Error for PortalError {}
