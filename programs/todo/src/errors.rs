use anchor_lang::error_code;

#[error_code]
pub enum TodoError {
    #[msg("Authority did not sign or does not own this record")]
    Unauthorized,
    #[msg("Supplied address does not match the derived address")]
    AddressMismatch,
    #[msg("A record already exists at this address")]
    AlreadyExists,
    #[msg("Profile not found")]
    ProfileNotFound,
    #[msg("Task not found")]
    TaskNotFound,
    #[msg("Profile already holds the maximum number of tasks")]
    CapacityExceeded,
    #[msg("Task content is too long")]
    ContentTooLong,
    #[msg("Task is already completed")]
    AlreadyCompleted,
    #[msg("Overflow")]
    Overflow,
    #[msg("Underflow")]
    Underflow,
}
