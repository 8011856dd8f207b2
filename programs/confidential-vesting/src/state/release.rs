use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{VestingRecord, VestingRegistry};

impl VestingRegistry {
    /// Checks the release preconditions for `caller` and, if they hold,
    /// vacates `record` and drops it from the index. Returns the amount owed;
    /// the caller pays it out only after this state change is stored.
    pub fn release_record(
        &mut self,
        record: &mut VestingRecord,
        caller: &Pubkey,
        now: i64,
    ) -> std::result::Result<u64, VestingError> {
        let current = record.existing()?;
        if current.beneficiary != *caller {
            return Err(VestingError::NotFound);
        }
        if current.revoked {
            return Err(VestingError::Revoked);
        }
        if !current.verified {
            return Err(VestingError::Unverified);
        }
        // Negative ledger time never reaches an unlock time.
        let now = u64::try_from(now).unwrap_or(0);
        if now < current.decrypted_unlock_time {
            return Err(VestingError::NotYetUnlocked);
        }

        let removed = self.remove_record(record)?;
        Ok(removed.decrypted_amount)
    }
}
