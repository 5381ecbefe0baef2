pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

#[allow(ambiguous_glob_reexports, hidden_glob_reexports)]
pub use instructions::*;

declare_id!("3tMxmGPBdHtkK12hND9LBQKdnXXqUrYX1DBFqjRwZxGv");

#[program]
pub mod custody_vault {
    use super::*;

    pub fn create_vault(ctx: Context<CreateVault>, params: CreateVaultParams) -> Result<()> {
        instructions::vault::create_vault(ctx, params)
    }

    pub fn deposit_sol(ctx: Context<DepositSol>, params: DepositSolParams) -> Result<()> {
        instructions::vault::deposit_sol(ctx, params)
    }

    pub fn withdraw_sol(ctx: Context<WithdrawSol>, params: WithdrawSolParams) -> Result<()> {
        instructions::vault::withdraw_sol(ctx, params)
    }

    pub fn deposit_token(ctx: Context<DepositToken>, params: DepositTokenParams) -> Result<()> {
        instructions::vault::deposit_token(ctx, params)
    }

    pub fn withdraw_token(ctx: Context<WithdrawToken>, params: WithdrawTokenParams) -> Result<()> {
        instructions::vault::withdraw_token(ctx, params)
    }

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        params: CreateProposalParams,
    ) -> Result<()> {
        instructions::proposal::create_proposal(ctx, params)
    }

    pub fn append_actions(ctx: Context<AppendActions>, params: AppendActionsParams) -> Result<()> {
        instructions::proposal::append_actions(ctx, params)
    }

    pub fn cancel_proposal(ctx: Context<CancelProposal>) -> Result<()> {
        instructions::proposal::cancel_proposal(ctx)
    }

    pub fn execute_proposal(ctx: Context<ExecuteProposal>) -> Result<()> {
        instructions::execute::execute_proposal(ctx)
    }

    pub fn execute_proposal_direct(
        ctx: Context<ExecuteProposalDirect>,
        params: ExecuteProposalDirectParams,
    ) -> Result<()> {
        instructions::execute::execute_proposal_direct(ctx, params)
    }
}
