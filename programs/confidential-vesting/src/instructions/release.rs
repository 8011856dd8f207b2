use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{RECORD_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingRecord, VestingRegistry};

pub fn release(ctx: Context<Release>) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();
    let registry_bump = ctx.accounts.registry.bump;
    let mint = ctx.accounts.registry.mint;

    let expected_ata = expected_ata_address(&beneficiary, &mint);
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.key(),
        expected_ata,
        VestingError::InvalidRecipientAta
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.mint,
        mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let record_info = ctx.accounts.record.to_account_info();
    let mut record = VestingRecord::load(&record_info)?;
    let amount = ctx
        .accounts
        .registry
        .release_record(&mut record, &beneficiary, now)?;
    ctx.accounts.registry.check_entry(&beneficiary, &record)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // Write the removal to account data before control leaves the program.
    close_record(&record_info, &ctx.accounts.beneficiary.to_account_info())?;
    ctx.accounts.registry.exit(&crate::ID)?;

    let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_SEED, &[registry_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: ctx.accounts.registry.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(VestingReleased {
        beneficiary,
        amount,
    });

    Ok(())
}

/// Returns the record account's rent to the beneficiary and hands the
/// account back to the system program.
fn close_record<'info>(record: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let rent = record.lamports();
    let credited = destination
        .lamports()
        .checked_add(rent)
        .ok_or(VestingError::MathOverflow)?;
    **destination.try_borrow_mut_lamports()? = credited;
    **record.try_borrow_mut_lamports()? = 0;
    record.assign(&anchor_lang::system_program::ID);
    record.realloc(0, false)?;
    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    // ATA derivation: PDA(owner, token_program_id, mint) under the associated token program.
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        realloc = 8 + VestingRegistry::space(registry.index.len().saturating_sub(1)),
        realloc::payer = beneficiary,
        realloc::zero = false,
    )]
    pub registry: Box<Account<'info, VestingRegistry>>,

    /// CHECK: record PDA of the signing beneficiary; may not exist, which
    /// reads as no record. Closed on success.
    #[account(
        mut,
        seeds = [RECORD_SEED, registry.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = registry.vault_bump,
        constraint = vault.mint == registry.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingReleased {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
