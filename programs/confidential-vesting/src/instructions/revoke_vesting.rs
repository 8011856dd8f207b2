use anchor_lang::prelude::*;

use crate::constants::{RECORD_SEED, REGISTRY_SEED};
use crate::state::{VestingRecord, VestingRegistry};

pub fn revoke_vesting(ctx: Context<RevokeVesting>, beneficiary: Pubkey) -> Result<()> {
    let caller = ctx.accounts.beneficiary.key();
    let info = ctx.accounts.record.to_account_info();

    let mut record = VestingRecord::load(&info)?;
    record.revoke(&caller, &beneficiary)?;
    record.store(&info)?;

    emit!(VestingRevoked { beneficiary });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary_key: Pubkey)]
pub struct RevokeVesting<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,

    /// CHECK: record PDA of `beneficiary`; may not exist, which reads as
    /// no record.
    #[account(
        mut,
        seeds = [RECORD_SEED, registry.key().as_ref(), beneficiary_key.as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct VestingRevoked {
    pub beneficiary: Pubkey,
}
