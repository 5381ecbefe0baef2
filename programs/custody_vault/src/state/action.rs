use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;

/// Account permissions approved for one action. Fixed when the action is
/// stored; the execution engine treats it as the sole source of truth for
/// what may be touched and how.
#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct AccountSpec {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountSpec {
    // 32 pubkey + 1 is_signer + 1 is_writable
    pub const SERIALIZED_SIZE: usize = 32 + 1 + 1;
}

impl From<&AccountSpec> for AccountMeta {
    fn from(spec: &AccountSpec) -> Self {
        AccountMeta {
            pubkey: spec.pubkey,
            is_signer: spec.is_signer,
            is_writable: spec.is_writable,
        }
    }
}

/// One approved external operation: target program, account permissions and
/// an opaque payload this program never parses.
#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct Action {
    pub program_id: Pubkey,
    pub account_specs: Vec<AccountSpec>,
    pub data: Vec<u8>,
}

impl Action {
    /// Exact serialized byte length of this action within a proposal record.
    pub fn serialized_size(&self) -> usize {
        32 + 4
            + AccountSpec::SERIALIZED_SIZE * self.account_specs.len()
            + 4
            + self.data.len()
    }
}
