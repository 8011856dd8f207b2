use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as INSTRUCTIONS_SYSVAR_ID;

use crate::constants::{RECORD_SEED, REGISTRY_SEED};
use crate::fhe::{Attestations, CoprocessorGateway};
use crate::state::{VestingInput, VestingRecord, VestingRegistry};

/// Permissionless: any creator holding coprocessor-attested inputs may open a
/// vesting record for any beneficiary that has none. The creator pays rent
/// for the record account and for the registry's index growth.
pub fn create_vesting(ctx: Context<CreateVesting>, input: VestingInput) -> Result<()> {
    let attestations = Attestations::load(&ctx.accounts.instructions_sysvar)?;
    let registry_key = ctx.accounts.registry.key();
    let registry = &mut ctx.accounts.registry;
    let record = &mut ctx.accounts.record;

    let mut gateway = CoprocessorGateway::new(
        &attestations,
        registry.coprocessor,
        ctx.accounts.creator.key(),
    );
    registry.create_record(record, &mut gateway, &registry_key, &input)?;
    registry.check_entry(&input.beneficiary, record)?;

    emit!(VestingCreated {
        beneficiary: input.beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(input: VestingInput)]
pub struct CreateVesting<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        realloc = 8 + VestingRegistry::space(registry.index.len() + 1),
        realloc::payer = creator,
        realloc::zero = false,
    )]
    pub registry: Box<Account<'info, VestingRegistry>>,

    /// Opened on first use; an existing account holds a record and is
    /// rejected with `AlreadyExists`.
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + VestingRecord::SIZE,
        seeds = [RECORD_SEED, registry.key().as_ref(), input.beneficiary.as_ref()],
        bump
    )]
    pub record: Box<Account<'info, VestingRecord>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: address-constrained to the instructions sysvar.
    #[account(address = INSTRUCTIONS_SYSVAR_ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub beneficiary: Pubkey,
}
