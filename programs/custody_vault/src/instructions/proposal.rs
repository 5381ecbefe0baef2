use anchor_lang::prelude::*;

use crate::constants::PROPOSAL_EXPIRY_DURATION;
use crate::errors::ErrorCode;
use crate::events::{ActionsAppended, ProposalCancelled, ProposalCreated};
use crate::state::{Action, Proposal, ProposalStage, Vault};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateProposalParams {
    pub name: String,
    pub actions: Vec<Action>,
    /// Full account size, discriminator included. Must cover
    /// `Proposal::required_space(name, actions)`.
    pub proposal_account_size: u32,
}

pub fn create_proposal(ctx: Context<CreateProposal>, params: CreateProposalParams) -> Result<()> {
    require!(!params.actions.is_empty(), ErrorCode::EmptyActionList);

    require_gte!(
        params.proposal_account_size as usize,
        Proposal::required_space(&params.name, &params.actions),
        ErrorCode::UndersizedAllocation
    );

    let proposal = &mut ctx.accounts.proposal;
    let now = Clock::get()?.unix_timestamp;

    proposal.vault = ctx.accounts.vault.key();
    proposal.stage = ProposalStage::Draft;
    proposal.created_date = now;
    proposal.expiry_date = now + PROPOSAL_EXPIRY_DURATION;
    proposal.is_executed = false;
    proposal.name = params.name;
    proposal.actions = params.actions;

    emit!(ProposalCreated {
        proposal: proposal.key(),
        vault: proposal.vault,
        name: proposal.name.clone(),
        created_date: proposal.created_date,
        actions: proposal.actions.clone(),
    });

    msg!(
        "Proposal '{}' created with {} action(s)",
        proposal.name,
        proposal.actions.len()
    );
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AppendActionsParams {
    pub actions: Vec<Action>,
    /// Full account size after the append, discriminator included.
    pub proposal_account_size: u32,
}

pub fn append_actions(ctx: Context<AppendActions>, params: AppendActionsParams) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;

    require!(!proposal.is_executed, ErrorCode::AlreadyExecuted);
    require!(
        proposal.stage == ProposalStage::Draft,
        ErrorCode::InvalidStage
    );

    let now = Clock::get()?.unix_timestamp;
    require_gt!(proposal.expiry_date, now, ErrorCode::Expired);

    let combined_space = Proposal::required_space(&proposal.name, &proposal.actions)
        + params
            .actions
            .iter()
            .map(Action::serialized_size)
            .sum::<usize>();
    require_gte!(
        params.proposal_account_size as usize,
        combined_space,
        ErrorCode::UndersizedAllocation
    );

    let appended = params.actions.len();
    proposal.actions.extend(params.actions.iter().cloned());

    emit!(ActionsAppended {
        proposal: proposal.key(),
        actions: params.actions,
    });

    msg!("Appended {} action(s) to proposal", appended);
    Ok(())
}

pub fn cancel_proposal(ctx: Context<CancelProposal>) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;

    require!(!proposal.is_executed, ErrorCode::AlreadyExecuted);
    require!(
        proposal.stage == ProposalStage::Draft,
        ErrorCode::InvalidStage
    );

    proposal.stage = ProposalStage::Cancelled;

    emit!(ProposalCancelled {
        proposal: proposal.key(),
        vault: proposal.vault,
    });

    msg!("Proposal cancelled");
    Ok(())
}

#[derive(Accounts)]
#[instruction(params: CreateProposalParams)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        constraint = vault.owner == proposer.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        signer,
        payer = proposer,
        space = params.proposal_account_size as usize,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(params: AppendActionsParams)]
pub struct AppendActions<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        constraint = vault.owner == proposer.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        has_one = vault @ ErrorCode::InvalidVault,
        realloc = params.proposal_account_size as usize,
        realloc::payer = proposer,
        realloc::zero = false,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CancelProposal<'info> {
    pub owner: Signer<'info>,

    #[account(
        constraint = vault.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        has_one = vault @ ErrorCode::InvalidVault,
    )]
    pub proposal: Account<'info, Proposal>,
}
