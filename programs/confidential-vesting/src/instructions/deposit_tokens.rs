use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{REGISTRY_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingRegistry;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let registry = &ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        VestingError::UnauthorizedAdmin
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        registry.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let expected = ctx
        .accounts
        .vault
        .amount
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount == expected,
        VestingError::InvalidTokenAccount
    );

    emit!(TokensDeposited {
        admin: ctx.accounts.registry.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = registry.vault_bump,
        constraint = vault.mint == registry.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
