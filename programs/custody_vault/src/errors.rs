use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("Supplied signer bump does not match the derived vault authority.")]
    InvalidAuthority,
    #[msg("Requested account size is smaller than the record requires.")]
    UndersizedAllocation,
    #[msg("Proposal is not in the stage required for this operation.")]
    InvalidStage,
    #[msg("Proposal has passed its expiry date.")]
    Expired,
    #[msg("Proposal has already been executed.")]
    AlreadyExecuted,
    #[msg("Execution accounts do not match the approved action specs.")]
    AccountMismatch,
    #[msg("Insufficient funds for transfer.")]
    InsufficientFunds,
    #[msg("A proposal must contain at least one action.")]
    EmptyActionList,
    #[msg("Proposal does not belong to this vault.")]
    InvalidVault,
}
