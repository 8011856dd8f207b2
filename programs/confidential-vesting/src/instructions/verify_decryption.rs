use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as INSTRUCTIONS_SYSVAR_ID;

use crate::constants::{RECORD_SEED, REGISTRY_SEED};
use crate::fhe::{Attestations, OracleBindingVerifier};
use crate::state::{VestingRecord, VestingRegistry};

/// Permissionless: the oracle signature over (handles, cleartexts) is the
/// authorization, not the submitter.
pub fn verify_decryption(
    ctx: Context<VerifyDecryption>,
    beneficiary: Pubkey,
    amount_cleartext: [u8; 32],
    unlock_time_cleartext: [u8; 32],
    proof: Vec<u8>,
) -> Result<()> {
    let attestations = Attestations::load(&ctx.accounts.instructions_sysvar)?;
    let verifier =
        OracleBindingVerifier::new(&attestations, ctx.accounts.registry.decryption_oracle);
    let info = ctx.accounts.record.to_account_info();

    let mut record = VestingRecord::load(&info)?;
    let verified = record.verify(
        &verifier,
        &amount_cleartext,
        &unlock_time_cleartext,
        &proof,
    )?;
    record.store(&info)?;

    emit!(DecryptionVerified {
        beneficiary,
        amount: verified.amount,
        unlock_time: verified.unlock_time,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct VerifyDecryption<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,

    /// CHECK: record PDA of `beneficiary`; may not exist, which reads as
    /// no record.
    #[account(
        mut,
        seeds = [RECORD_SEED, registry.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,

    /// CHECK: address-constrained to the instructions sysvar.
    #[account(address = INSTRUCTIONS_SYSVAR_ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

#[event]
pub struct DecryptionVerified {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub unlock_time: u64,
}
