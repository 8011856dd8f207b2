use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::error::VestingError;
use crate::instructions::initialize_registry::validate_attestors;
use crate::state::VestingRegistry;

pub fn set_attestors(
    ctx: Context<SetAttestors>,
    coprocessor: Pubkey,
    decryption_oracle: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        VestingError::UnauthorizedAdmin
    );
    validate_attestors(&registry.admin, &coprocessor, &decryption_oracle)?;

    let old_coprocessor = registry.coprocessor;
    let old_decryption_oracle = registry.decryption_oracle;
    registry.coprocessor = coprocessor;
    registry.decryption_oracle = decryption_oracle;

    emit!(AttestorsSet {
        admin: registry.admin,
        old_coprocessor,
        new_coprocessor: coprocessor,
        old_decryption_oracle,
        new_decryption_oracle: decryption_oracle,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAttestors<'info> {
    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Box<Account<'info, VestingRegistry>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AttestorsSet {
    pub admin: Pubkey,
    pub old_coprocessor: Pubkey,
    pub new_coprocessor: Pubkey,
    pub old_decryption_oracle: Pubkey,
    pub new_decryption_oracle: Pubkey,
}
