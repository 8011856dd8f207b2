use crate::error::VestingError;
use crate::fhe::{decode_u64, BindingVerifier, Cleartext};
use crate::state::VestingRecord;

/// Plaintexts cached by a successful verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedDecryption {
    pub amount: u64,
    pub unlock_time: u64,
}

impl VestingRecord {
    /// Accepts the oracle's decryption of this record's handles, exactly once.
    ///
    /// Anyone may submit; the binding proof is what authorizes the write.
    pub fn verify<V: BindingVerifier>(
        &mut self,
        verifier: &V,
        amount_cleartext: &Cleartext,
        unlock_time_cleartext: &Cleartext,
        proof: &[u8],
    ) -> std::result::Result<VerifiedDecryption, VestingError> {
        self.existing()?;
        if self.verified {
            return Err(VestingError::AlreadyVerified);
        }

        let handles = [self.encrypted_amount, self.encrypted_unlock_time];
        let cleartexts = [*amount_cleartext, *unlock_time_cleartext];
        if !verifier.verify_binding(&handles, &cleartexts, proof) {
            return Err(VestingError::InvalidProof);
        }

        let amount = decode_u64(amount_cleartext)?;
        let unlock_time = decode_u64(unlock_time_cleartext)?;

        self.decrypted_amount = amount;
        self.decrypted_unlock_time = unlock_time;
        self.verified = true;

        Ok(VerifiedDecryption {
            amount,
            unlock_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    use crate::fhe::encode_u64;
    use crate::fhe::mock::{AlwaysInvalid, AlwaysValid, IdentityGateway, IdentityOracle};
    use crate::state::registry::tests::{input, Ledger};

    fn with_record(b: Pubkey, amount: u64, unlock_time: u64) -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .create(
                &mut IdentityGateway::default(),
                &input(b, amount, unlock_time),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn caches_plaintexts_on_valid_proof() {
        let b = Pubkey::new_unique();
        let mut ledger = with_record(b, 1000, 86_400);

        let out = ledger
            .verify(&IdentityOracle, &b, &encode_u64(1000), &encode_u64(86_400), &[])
            .unwrap();
        assert_eq!(
            out,
            VerifiedDecryption {
                amount: 1000,
                unlock_time: 86_400
            }
        );

        let rec = ledger.record(&b).unwrap();
        assert!(rec.verified);
        assert_eq!(rec.decrypted_amount, 1000);
        assert_eq!(rec.decrypted_unlock_time, 86_400);
        ledger.check();
    }

    #[test]
    fn rejected_proof_leaves_record_untouched() {
        let b = Pubkey::new_unique();
        let mut ledger = with_record(b, 1000, 86_400);
        let before = ledger.record(&b).unwrap();

        let err = ledger
            .verify(&AlwaysInvalid, &b, &encode_u64(1000), &encode_u64(86_400), &[1])
            .unwrap_err();
        assert!(matches!(err, VestingError::InvalidProof));

        // The identity oracle refuses a value the handle does not hold.
        let err = ledger
            .verify(&IdentityOracle, &b, &encode_u64(9999), &encode_u64(86_400), &[])
            .unwrap_err();
        assert!(matches!(err, VestingError::InvalidProof));

        assert_eq!(ledger.record(&b).unwrap(), before);
    }

    #[test]
    fn second_verification_is_rejected_and_cache_is_kept() {
        let b = Pubkey::new_unique();
        let mut ledger = with_record(b, 1000, 86_400);
        ledger
            .verify(&AlwaysValid, &b, &encode_u64(1000), &encode_u64(86_400), &[])
            .unwrap();

        let err = ledger
            .verify(&AlwaysValid, &b, &encode_u64(1), &encode_u64(2), &[])
            .unwrap_err();
        assert!(matches!(err, VestingError::AlreadyVerified));

        let rec = ledger.record(&b).unwrap();
        assert_eq!(rec.decrypted_amount, 1000);
        assert_eq!(rec.decrypted_unlock_time, 86_400);
    }

    #[test]
    fn missing_record_and_oversized_cleartext() {
        let b = Pubkey::new_unique();
        let mut ledger = with_record(b, 1, 2);

        let err = ledger
            .verify(&AlwaysValid, &Pubkey::new_unique(), &encode_u64(1), &encode_u64(2), &[])
            .unwrap_err();
        assert!(matches!(err, VestingError::NotFound));

        let mut wide = encode_u64(1);
        wide[0] = 1;
        let err = ledger
            .verify(&AlwaysValid, &b, &wide, &encode_u64(2), &[])
            .unwrap_err();
        assert!(matches!(err, VestingError::MalformedCleartext));
        assert!(!ledger.record(&b).unwrap().verified);
    }

    #[test]
    fn verification_is_independent_of_revocation() {
        let b = Pubkey::new_unique();
        let mut ledger = with_record(b, 10, 20);
        ledger.revoke(&b, &b).unwrap();

        ledger
            .verify(&AlwaysValid, &b, &encode_u64(10), &encode_u64(20), &[])
            .unwrap();
        let rec = ledger.record(&b).unwrap();
        assert!(rec.revoked && rec.verified);
    }
}
