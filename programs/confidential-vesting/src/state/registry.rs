use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::fhe::EncryptedValueGateway;
use crate::state::{BeneficiaryIndex, VestingInput, VestingRecord};

/// Registry PDA: configuration and the beneficiary index. Records live in
/// their own PDAs; the account is resized as the index grows and shrinks.
#[account]
#[derive(Default)]
pub struct VestingRegistry {
    /// Admin authority (funds the vault, rotates attestors).
    pub admin: Pubkey,
    /// Mint paid out on release.
    pub mint: Pubkey,
    /// Signer of encrypted input proofs.
    pub coprocessor: Pubkey,
    /// Signer of decryption proofs.
    pub decryption_oracle: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    pub index: BeneficiaryIndex,
}

impl VestingRegistry {
    /// Account size (without discriminator) for an index of `members` keys.
    pub const fn space(members: usize) -> usize {
        32 + // admin
        32 + // mint
        32 + // coprocessor
        32 + // decryption_oracle
        1 +  // bump
        1 +  // vault_bump
        BeneficiaryIndex::space(members) // index
    }

    pub fn initialize(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        coprocessor: Pubkey,
        decryption_oracle: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) {
        self.admin = admin;
        self.mint = mint;
        self.coprocessor = coprocessor;
        self.decryption_oracle = decryption_oracle;
        self.bump = bump;
        self.vault_bump = vault_bump;
        self.index = BeneficiaryIndex::new();
    }

    pub fn beneficiaries(&self) -> &[Pubkey] {
        self.index.as_slice()
    }

    /// Fills the vacant `record` for `input.beneficiary` and indexes it.
    ///
    /// `store` is the registry's own address; it receives operating rights on
    /// both handles.
    pub fn create_record<G: EncryptedValueGateway>(
        &mut self,
        record: &mut VestingRecord,
        gateway: &mut G,
        store: &Pubkey,
        input: &VestingInput,
    ) -> std::result::Result<(), VestingError> {
        if input.beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidBeneficiary);
        }
        if !record.is_vacant() {
            return Err(VestingError::AlreadyExists);
        }
        if self.index.contains(&input.beneficiary) {
            return Err(VestingError::IndexOutOfSync);
        }

        let amount = gateway.materialize(&input.encrypted_amount, &input.amount_proof)?;
        let unlock_time =
            gateway.materialize(&input.encrypted_unlock_time, &input.unlock_time_proof)?;
        if !gateway.is_initialized(&amount) || !gateway.is_initialized(&unlock_time) {
            return Err(VestingError::InvalidCiphertext);
        }

        for handle in [&amount, &unlock_time] {
            gateway.allow(handle, store);
            gateway.make_publicly_decryptable(handle);
        }

        *record = VestingRecord {
            beneficiary: input.beneficiary,
            encrypted_amount: amount,
            encrypted_unlock_time: unlock_time,
            cliff_period: input.cliff_period,
            duration: input.duration,
            revoked: false,
            decrypted_amount: 0,
            decrypted_unlock_time: 0,
            verified: false,
        };
        self.index.push(input.beneficiary);
        Ok(())
    }

    /// Vacates `record` and drops its beneficiary from the index.
    pub(crate) fn remove_record(
        &mut self,
        record: &mut VestingRecord,
    ) -> std::result::Result<VestingRecord, VestingError> {
        let removed = *record.existing()?;
        if !self.index.remove(&removed.beneficiary) {
            return Err(VestingError::IndexOutOfSync);
        }
        *record = VestingRecord::default();
        Ok(removed)
    }

    /// The record stored under `beneficiary` exists iff the index lists it.
    pub fn check_entry(
        &self,
        beneficiary: &Pubkey,
        record: &VestingRecord,
    ) -> std::result::Result<(), VestingError> {
        if !record.is_vacant() && record.beneficiary != *beneficiary {
            return Err(VestingError::IndexOutOfSync);
        }
        if record.is_vacant() == self.index.contains(beneficiary) {
            return Err(VestingError::IndexOutOfSync);
        }
        Ok(())
    }

    /// Set equality between the existing records (keyed by beneficiary) and
    /// the index, with no duplicate index entries.
    pub fn check_invariants<'a, I>(&self, records: I) -> std::result::Result<(), VestingError>
    where
        I: IntoIterator<Item = (&'a Pubkey, &'a VestingRecord)>,
    {
        let mut existing = 0usize;
        for (key, record) in records {
            self.check_entry(key, record)?;
            if !record.is_vacant() {
                existing += 1;
            }
        }
        let members = self.index.as_slice();
        for (i, member) in members.iter().enumerate() {
            if members[..i].contains(member) {
                return Err(VestingError::IndexOutOfSync);
            }
        }
        if existing != members.len() {
            return Err(VestingError::IndexOutOfSync);
        }
        Ok(())
    }
}
