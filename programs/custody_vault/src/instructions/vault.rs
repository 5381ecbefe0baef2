use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::constants::VAULT_SIGNER_PREFIX;
use crate::errors::ErrorCode;
use crate::events::{SolDeposited, SolWithdrawn, TokenDeposited, TokenWithdrawn, VaultCreated};
use crate::state::Vault;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateVaultParams {
    pub owner: Pubkey,
    pub signer_bump: u8,
}

pub fn create_vault(ctx: Context<CreateVault>, params: CreateVaultParams) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    // The bump is fixed for the vault's lifetime; only the canonical one
    // is accepted.
    let (_, canonical_bump) = Vault::derive_signer(&vault.key());
    require_eq!(params.signer_bump, canonical_bump, ErrorCode::InvalidAuthority);

    vault.owner = params.owner;
    vault.signer_bump = params.signer_bump;
    vault.created_date = Clock::get()?.unix_timestamp;

    emit!(VaultCreated {
        vault: vault.key(),
        owner: vault.owner,
        bump: vault.signer_bump,
    });

    msg!("Vault created for owner: {}", vault.owner);
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct DepositSolParams {
    pub amount: u64,
}

/// Anyone may deposit; the vault signer PDA is the balance holder.
pub fn deposit_sol(ctx: Context<DepositSol>, params: DepositSolParams) -> Result<()> {
    require_gte!(
        ctx.accounts.depositor.lamports(),
        params.amount,
        ErrorCode::InsufficientFunds
    );

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor.to_account_info(),
            to: ctx.accounts.vault_signer.to_account_info(),
        },
    );
    transfer(cpi_ctx, params.amount)?;

    emit!(SolDeposited {
        vault: ctx.accounts.vault.key(),
        vault_signer: ctx.accounts.vault_signer.key(),
        depositor: ctx.accounts.depositor.key(),
        amount: params.amount,
    });

    msg!("Deposited {} lamports into vault", params.amount);
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawSolParams {
    pub amount: u64,
}

pub fn withdraw_sol(ctx: Context<WithdrawSol>, params: WithdrawSolParams) -> Result<()> {
    require_gte!(
        ctx.accounts.vault_signer.lamports(),
        params.amount,
        ErrorCode::InsufficientFunds
    );

    let vault_key = ctx.accounts.vault.key();
    let seeds = &[
        VAULT_SIGNER_PREFIX,
        vault_key.as_ref(),
        &[ctx.accounts.vault.signer_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_signer.to_account_info(),
            to: ctx.accounts.recipient.to_account_info(),
        },
        signer_seeds,
    );
    transfer(cpi_ctx, params.amount)?;

    emit!(SolWithdrawn {
        vault: vault_key,
        recipient: ctx.accounts.recipient.key(),
        amount: params.amount,
    });

    msg!("Withdrew {} lamports from vault", params.amount);
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct DepositTokenParams {
    pub amount: u64,
    pub decimals: u8,
}

/// Anyone may deposit. `transfer_checked` rejects a `decimals` that does not
/// match the mint's declared precision.
pub fn deposit_token(ctx: Context<DepositToken>, params: DepositTokenParams) -> Result<()> {
    require_gte!(
        ctx.accounts.depositor_token_account.amount,
        params.amount,
        ErrorCode::InsufficientFunds
    );

    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.depositor_token_account.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    transfer_checked(cpi_ctx, params.amount, params.decimals)?;

    emit!(TokenDeposited {
        vault: ctx.accounts.vault.key(),
        vault_signer: ctx.accounts.vault_signer.key(),
        vault_token_account: ctx.accounts.vault_token_account.key(),
        depositor: ctx.accounts.depositor.key(),
        depositor_token_account: ctx.accounts.depositor_token_account.key(),
        amount: params.amount,
    });

    msg!("Deposited {} tokens into vault", params.amount);
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawTokenParams {
    pub amount: u64,
    pub decimals: u8,
}

pub fn withdraw_token(ctx: Context<WithdrawToken>, params: WithdrawTokenParams) -> Result<()> {
    require_gte!(
        ctx.accounts.vault_token_account.amount,
        params.amount,
        ErrorCode::InsufficientFunds
    );

    let vault_key = ctx.accounts.vault.key();
    let seeds = &[
        VAULT_SIGNER_PREFIX,
        vault_key.as_ref(),
        &[ctx.accounts.vault.signer_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.vault_token_account.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.recipient_token_account.to_account_info(),
            authority: ctx.accounts.vault_signer.to_account_info(),
        },
        signer_seeds,
    );
    transfer_checked(cpi_ctx, params.amount, params.decimals)?;

    emit!(TokenWithdrawn {
        vault: vault_key,
        vault_signer: ctx.accounts.vault_signer.key(),
        vault_token_account: ctx.accounts.vault_token_account.key(),
        recipient: ctx.accounts.recipient.key(),
        recipient_token_account: ctx.accounts.recipient_token_account.key(),
        amount: params.amount,
    });

    msg!("Withdrew {} tokens from vault", params.amount);
    Ok(())
}

#[derive(Accounts)]
pub struct CreateVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        signer,
        payer = payer,
        space = Vault::INIT_SPACE,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DepositSol<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; holds the vault's lamports, data never touched
    #[account(
        mut,
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(mut)]
    pub recipient: Signer<'info>,

    #[account(
        constraint = vault.owner == recipient.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; holds the vault's lamports, data never touched
    #[account(
        mut,
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DepositToken<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; authority of the vault-side token account
    #[account(
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = token_mint,
        associated_token::authority = vault_signer,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawToken<'info> {
    #[account(mut)]
    pub recipient: Signer<'info>,

    #[account(
        constraint = vault.owner == recipient.key() @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: derived signer PDA; authority of the vault-side token account
    #[account(
        seeds = [VAULT_SIGNER_PREFIX, vault.key().as_ref()],
        bump = vault.signer_bump,
    )]
    pub vault_signer: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_signer,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = recipient,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
