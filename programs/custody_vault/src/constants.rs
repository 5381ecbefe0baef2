/// Seed label for the vault's derived signer. All vault funds live on the
/// PDA of [VAULT_SIGNER_PREFIX, vault_key]; the PDA has no private key.
pub const VAULT_SIGNER_PREFIX: &[u8] = b"custody_vault_signer";

/// Proposals stop being executable this long after creation (30 days).
pub const PROPOSAL_EXPIRY_DURATION: i64 = 30 * 24 * 60 * 60;
