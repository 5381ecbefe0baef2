use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};

use crate::constants::VAULT_SIGNER_PREFIX;
use crate::errors::ErrorCode;
use crate::events::{ProposalDirectExecuted, ProposalExecuted};
use crate::state::{Action, Proposal, ProposalStage, Vault};

/// Validates one action's slice of the caller-supplied account list against
/// its stored specs and builds the metas for invocation.
///
/// Accounts are matched positionally: the spec'd accounts in order, then the
/// target program. The vault signer must arrive non-signing; its signer bit
/// is granted here, never taken from the caller.
fn checked_account_metas(
    action: &Action,
    accounts: &[AccountInfo],
    vault_signer: &Pubkey,
) -> Result<Vec<AccountMeta>> {
    require_eq!(
        accounts.len(),
        action.account_specs.len() + 1,
        ErrorCode::AccountMismatch
    );

    let mut metas = Vec::with_capacity(action.account_specs.len());
    for (spec, info) in action.account_specs.iter().zip(accounts.iter()) {
        require_keys_eq!(*info.key, spec.pubkey, ErrorCode::AccountMismatch);
        require_eq!(
            info.is_writable,
            spec.is_writable,
            ErrorCode::AccountMismatch
        );

        let mut meta = AccountMeta::from(spec);
        if info.key == vault_signer {
            // The PDA holds no key, so the caller cannot have signed for it.
            require!(!info.is_signer, ErrorCode::AccountMismatch);
            meta.is_signer = true;
        } else {
            require_eq!(info.is_signer, spec.is_signer, ErrorCode::AccountMismatch);
        }
        metas.push(meta);
    }

    let program_account = &accounts[action.account_specs.len()];
    require_keys_eq!(
        *program_account.key,
        action.program_id,
        ErrorCode::AccountMismatch
    );

    Ok(metas)
}

/// Runs `actions` in order against the caller-supplied account list, signing
/// as the vault authority where an action names it. Any mismatch or failed
/// invocation aborts the whole call; the transaction rollback discards every
/// prior write.
fn execute_actions(
    actions: &[Action],
    remaining_accounts: &[AccountInfo],
    vault_key: &Pubkey,
    vault_signer: &Pubkey,
    signer_bump: u8,
) -> Result<()> {
    let seeds = &[VAULT_SIGNER_PREFIX, vault_key.as_ref(), &[signer_bump]];
    let signer_seeds = &[&seeds[..]];

    let mut cursor = 0usize;
    for action in actions {
        let span = action.account_specs.len() + 1;
        require_gte!(
            remaining_accounts.len(),
            cursor + span,
            ErrorCode::AccountMismatch
        );

        let accounts = &remaining_accounts[cursor..cursor + span];
        let metas = checked_account_metas(action, accounts, vault_signer)?;

        let ix = Instruction {
            program_id: action.program_id,
            accounts: metas,
            data: action.data.clone(),
        };
        invoke_signed(&ix, accounts, signer_seeds)?;

        cursor += span;
    }

    // Leftover accounts mean the caller supplied a context the approval
    // never described.
    require_eq!(cursor, remaining_accounts.len(), ErrorCode::AccountMismatch);

    Ok(())
}

/// Any signer may submit; authorization is bound to the stored action specs
/// and the vault authority's PDA signature, not the caller identity.
pub fn execute_proposal(ctx: Context<ExecuteProposal>) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;

    require!(!proposal.is_executed, ErrorCode::AlreadyExecuted);
    require!(
        proposal.stage == ProposalStage::Draft,
        ErrorCode::InvalidStage
    );

    let now = Clock::get()?.unix_timestamp;
    require_gte!(proposal.expiry_date, now, ErrorCode::Expired);

    let vault_key = ctx.accounts.vault.key();
    execute_actions(
        &proposal.actions,
        ctx.remaining_accounts,
        &vault_key,
        ctx.accounts.vault_signer.key,
        ctx.accounts.vault.signer_bump,
    )?;

    proposal.is_executed = true;
    proposal.stage = ProposalStage::Completed;

    emit!(ProposalExecuted {
        vault: vault_key,
        proposal: proposal.key(),
        executed_date: now,
    });

    msg!("Executed proposal with {} action(s)", proposal.actions.len());
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ExecuteProposalDirectParams {
    pub name: String,
    pub actions: Vec<Action>,
}

/// Owner-only fast path that skips the stored proposal record and its
/// expiry window entirely.
pub fn execute_proposal_direct(
    ctx: Context<ExecuteProposalDirect>,
    params: ExecuteProposalDirectParams,
) -> Result<()> {
    require!(!params.actions.is_empty(), ErrorCode::EmptyActionList);

    let vault_key = ctx.accounts.vault.key();
    execute_actions(
        &params.actions,
        ctx.remaining_accounts,
        &vault_key,
        ctx.accounts.vault_signer.key,
        ctx.accounts.vault.signer_bump,
    )?;

    let executed = params.actions.len();
    emit!(ProposalDirectExecuted {
        vault: vault_key,
        executed_date: Clock::get()?.unix_timestamp,
        actions: params.actions,
    });

    msg!("Executed '{}' with {} action(s) directly", params.name, executed);
    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        has_one = vault @ ErrorCode::InvalidVault,
    )]
    pub proposal: Account<'info, Proposal>,

    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; signs the approved actions via invoke_signed
    #[account(
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ExecuteProposalDirect<'info> {
    pub proposer: Signer<'info>,

    #[account(
        constraint = vault.owner == proposer.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; signs the approved actions via invoke_signed
    #[account(
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AccountSpec;

    struct TestAccount {
        key: Pubkey,
        lamports: u64,
        data: Vec<u8>,
        owner: Pubkey,
    }

    impl TestAccount {
        fn new(key: Pubkey) -> Self {
            TestAccount {
                key,
                lamports: 0,
                data: vec![],
                owner: Pubkey::default(),
            }
        }

        fn info(&mut self, is_signer: bool, is_writable: bool) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                is_signer,
                is_writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    fn sample_action(program_id: Pubkey, specs: Vec<AccountSpec>) -> Action {
        Action {
            program_id,
            account_specs: specs,
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn matching_context_builds_metas_and_grants_signer_bit() {
        let vault_signer = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let action = sample_action(
            program_id,
            vec![
                AccountSpec {
                    pubkey: vault_signer,
                    is_signer: false,
                    is_writable: true,
                },
                AccountSpec {
                    pubkey: other,
                    is_signer: false,
                    is_writable: false,
                },
            ],
        );

        let mut a = TestAccount::new(vault_signer);
        let mut b = TestAccount::new(other);
        let mut p = TestAccount::new(program_id);
        let infos = vec![a.info(false, true), b.info(false, false), p.info(false, false)];

        let metas = checked_account_metas(&action, &infos, &vault_signer).unwrap();
        assert_eq!(metas.len(), 2);
        assert_eq!(metas[0].pubkey, vault_signer);
        assert!(metas[0].is_signer); // granted by the engine, not the caller
        assert!(metas[0].is_writable);
        assert!(!metas[1].is_signer);
        assert!(!metas[1].is_writable);
    }

    #[test]
    fn substituted_address_is_rejected() {
        let approved = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: approved,
                is_signer: false,
                is_writable: true,
            }],
        );

        let mut substitute = TestAccount::new(Pubkey::new_unique());
        let mut p = TestAccount::new(program_id);
        let infos = vec![substitute.info(false, true), p.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn signer_flag_not_in_spec_is_rejected() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: key,
                is_signer: false,
                is_writable: false,
            }],
        );

        let mut a = TestAccount::new(key);
        let mut p = TestAccount::new(program_id);
        let infos = vec![a.info(true, false), p.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn missing_required_signer_is_rejected() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: key,
                is_signer: true,
                is_writable: false,
            }],
        );

        let mut a = TestAccount::new(key);
        let mut p = TestAccount::new(program_id);
        let infos = vec![a.info(false, false), p.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn caller_signed_vault_authority_is_rejected() {
        let vault_signer = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: vault_signer,
                is_signer: false,
                is_writable: true,
            }],
        );

        let mut a = TestAccount::new(vault_signer);
        let mut p = TestAccount::new(program_id);
        let infos = vec![a.info(true, true), p.info(false, false)];

        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn writable_mismatch_is_rejected() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: key,
                is_signer: false,
                is_writable: false,
            }],
        );

        let mut a = TestAccount::new(key);
        let mut p = TestAccount::new(program_id);
        let infos = vec![a.info(false, true), p.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn wrong_program_account_is_rejected() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: key,
                is_signer: false,
                is_writable: false,
            }],
        );

        let mut a = TestAccount::new(key);
        let mut p = TestAccount::new(Pubkey::new_unique());
        let infos = vec![a.info(false, false), p.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }

    #[test]
    fn wrong_account_count_is_rejected() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let action = sample_action(
            program_id,
            vec![AccountSpec {
                pubkey: key,
                is_signer: false,
                is_writable: false,
            }],
        );

        // Program account missing entirely.
        let mut a = TestAccount::new(key);
        let infos = vec![a.info(false, false)];

        let vault_signer = Pubkey::new_unique();
        assert!(checked_account_metas(&action, &infos, &vault_signer).is_err());
    }
}
