use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::error::VestingError;

/// Opaque reference to a value held by the encryption coprocessor.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(transparent)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    pub const SIZE: usize = 32;

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// Per-beneficiary PDA (`[RECORD_SEED, registry, beneficiary]`). An account
/// that does not exist reads as `VestingRecord::default()`, and a default
/// `beneficiary` means "no record".
#[account]
#[derive(Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingRecord {
    pub beneficiary: Pubkey,
    pub encrypted_amount: Handle,
    pub encrypted_unlock_time: Handle,
    /// Informational only; release does not read it.
    pub cliff_period: u64,
    /// Informational only; release does not read it.
    pub duration: u64,
    pub revoked: bool,
    /// Valid only once `verified` is set.
    pub decrypted_amount: u64,
    /// Valid only once `verified` is set (Unix seconds).
    pub decrypted_unlock_time: u64,
    pub verified: bool,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // beneficiary
        Handle::SIZE + // encrypted_amount
        Handle::SIZE + // encrypted_unlock_time
        8 +  // cliff_period
        8 +  // duration
        1 +  // revoked
        8 +  // decrypted_amount
        8 +  // decrypted_unlock_time
        1;   // verified

    pub fn is_vacant(&self) -> bool {
        self.beneficiary == Pubkey::default()
    }

    pub fn existing(&self) -> std::result::Result<&Self, VestingError> {
        if self.is_vacant() {
            return Err(VestingError::NotFound);
        }
        Ok(self)
    }

    /// Self-revocation: only the beneficiary may revoke their own record.
    pub fn revoke(
        &mut self,
        caller: &Pubkey,
        beneficiary: &Pubkey,
    ) -> std::result::Result<(), VestingError> {
        if caller != beneficiary {
            return Err(VestingError::NotAuthorized);
        }
        if self.is_vacant() || self.beneficiary != *beneficiary {
            return Err(VestingError::NotFound);
        }
        if self.revoked {
            return Err(VestingError::AlreadyRevoked);
        }
        self.revoked = true;
        Ok(())
    }

    /// Reads the record held by `info`. Accounts this program does not own,
    /// or that hold no data, read as vacant.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(Self::default());
        }
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Writes the record back into an account this program owns.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        require_keys_eq!(*info.owner, crate::ID, VestingError::NotFound);
        let mut data = info.try_borrow_mut_data()?;
        let mut dst: &mut [u8] = &mut data[..];
        self.try_serialize(&mut dst)
    }
}

/// Instruction input for `create_vesting`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VestingInput {
    pub beneficiary: Pubkey,
    pub encrypted_amount: Handle,
    pub amount_proof: Vec<u8>,
    pub encrypted_unlock_time: Handle,
    pub unlock_time_proof: Vec<u8>,
    pub cliff_period: u64,
    pub duration: u64,
}
