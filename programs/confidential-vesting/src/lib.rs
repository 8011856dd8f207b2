use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod fhe;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::{BeneficiaryPage, Handle, VestingInput, VestingRecord};

declare_id!("GM5YBMoq6WYedyDVLgvDQvUyH9ggC8wQacQ1JZQMNhh6");

#[program]
pub mod confidential_vesting {
    use super::*;

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        coprocessor: Pubkey,
        decryption_oracle: Pubkey,
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(ctx, coprocessor, decryption_oracle)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn set_attestors(
        ctx: Context<SetAttestors>,
        coprocessor: Pubkey,
        decryption_oracle: Pubkey,
    ) -> Result<()> {
        instructions::set_attestors::set_attestors(ctx, coprocessor, decryption_oracle)
    }

    pub fn create_vesting(ctx: Context<CreateVesting>, input: VestingInput) -> Result<()> {
        instructions::create_vesting::create_vesting(ctx, input)
    }

    pub fn revoke_vesting(ctx: Context<RevokeVesting>, beneficiary: Pubkey) -> Result<()> {
        instructions::revoke_vesting::revoke_vesting(ctx, beneficiary)
    }

    pub fn verify_decryption(
        ctx: Context<VerifyDecryption>,
        beneficiary: Pubkey,
        amount_cleartext: [u8; 32],
        unlock_time_cleartext: [u8; 32],
        proof: Vec<u8>,
    ) -> Result<()> {
        instructions::verify_decryption::verify_decryption(
            ctx,
            beneficiary,
            amount_cleartext,
            unlock_time_cleartext,
            proof,
        )
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn get_vesting(ctx: Context<GetVesting>, beneficiary: Pubkey) -> Result<VestingRecord> {
        instructions::views::get_vesting(ctx, beneficiary)
    }

    pub fn list_beneficiaries(
        ctx: Context<ListBeneficiaries>,
        offset: u32,
        limit: u32,
    ) -> Result<BeneficiaryPage> {
        instructions::views::list_beneficiaries(ctx, offset, limit)
    }

    pub fn probe(ctx: Context<Probe>) -> Result<bool> {
        instructions::views::probe(ctx)
    }
}
