use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use thiserror::Error;

/// Custom error codes returned by the program (`ProgramError::Custom`).
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
#[repr(u32)]
pub enum TodoError {
    /// 6000 (0x1770)
    #[error("Authority did not sign or does not own this record")]
    Unauthorized = 0x1770,
    /// 6001 (0x1771)
    #[error("Supplied address does not match the derived address")]
    AddressMismatch = 0x1771,
    /// 6002 (0x1772)
    #[error("A record already exists at this address")]
    AlreadyExists = 0x1772,
    /// 6003 (0x1773)
    #[error("Profile not found")]
    ProfileNotFound = 0x1773,
    /// 6004 (0x1774)
    #[error("Task not found")]
    TaskNotFound = 0x1774,
    /// 6005 (0x1775)
    #[error("Profile already holds the maximum number of tasks")]
    CapacityExceeded = 0x1775,
    /// 6006 (0x1776)
    #[error("Task content is too long")]
    ContentTooLong = 0x1776,
    /// 6007 (0x1777)
    #[error("Task is already completed")]
    AlreadyCompleted = 0x1777,
    /// 6008 (0x1778)
    #[error("Overflow")]
    Overflow = 0x1778,
    /// 6009 (0x1779)
    #[error("Underflow")]
    Underflow = 0x1779,
}

impl TodoError {
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("account data is {0} bytes, shorter than the discriminator")]
    AccountDataTooShort(usize),
    #[error("account discriminator does not match the expected record")]
    DiscriminatorMismatch,
    #[error("borsh: {0}")]
    Borsh(#[from] std::io::Error),
}
