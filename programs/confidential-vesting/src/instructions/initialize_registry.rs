use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{REGISTRY_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingRegistry;

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    coprocessor: Pubkey,
    decryption_oracle: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    validate_attestors(&admin, &coprocessor, &decryption_oracle)?;

    let registry = &mut ctx.accounts.registry;
    registry.initialize(
        admin,
        ctx.accounts.mint.key(),
        coprocessor,
        decryption_oracle,
        ctx.bumps.registry,
        ctx.bumps.vault,
    );

    emit!(RegistryInitialized {
        admin,
        mint: registry.mint,
        coprocessor,
        decryption_oracle,
    });

    Ok(())
}

/// Attestors must be real keys, distinct from the admin.
pub(crate) fn validate_attestors(
    admin: &Pubkey,
    coprocessor: &Pubkey,
    decryption_oracle: &Pubkey,
) -> Result<()> {
    require!(coprocessor != &Pubkey::default(), VestingError::InvalidPubkey);
    require!(
        decryption_oracle != &Pubkey::default(),
        VestingError::InvalidPubkey
    );
    require!(coprocessor != admin, VestingError::InvalidConfig);
    require!(decryption_oracle != admin, VestingError::InvalidConfig);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingRegistry::space(0),
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Box<Account<'info, VestingRegistry>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = registry,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub coprocessor: Pubkey,
    pub decryption_oracle: Pubkey,
}
