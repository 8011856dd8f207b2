use anchor_lang::prelude::*;

use crate::constants::{RECORD_SEED, REGISTRY_SEED};
use crate::state::{BeneficiaryPage, VestingRecord, VestingRegistry};

pub fn get_vesting(ctx: Context<GetVesting>, _beneficiary: Pubkey) -> Result<VestingRecord> {
    let record = VestingRecord::load(&ctx.accounts.record.to_account_info())?;
    Ok(*record.existing()?)
}

/// One page of the index; walk it by advancing `offset` by the page length
/// until an empty page comes back.
pub fn list_beneficiaries(
    ctx: Context<ListBeneficiaries>,
    offset: u32,
    limit: u32,
) -> Result<BeneficiaryPage> {
    let page = ctx.accounts.registry.index.page(offset, limit);
    msg!(
        "beneficiaries: {} of {} from {}",
        page.members.len(),
        page.total,
        offset
    );
    Ok(page)
}

/// Liveness check; always true.
pub fn probe(_ctx: Context<Probe>) -> Result<bool> {
    msg!("confidential-vesting: ok");
    Ok(true)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct GetVesting<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,

    /// CHECK: record PDA of `beneficiary`; may not exist, which reads as
    /// `NotFound`.
    #[account(
        seeds = [RECORD_SEED, registry.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ListBeneficiaries<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,
}

#[derive(Accounts)]
pub struct Probe {}
