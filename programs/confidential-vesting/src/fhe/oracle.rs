use anchor_lang::prelude::*;

use crate::constants::{DECRYPTION_PROOF_DOMAIN, SIGNATURE_LEN};
use crate::fhe::{Attestations, Cleartext};
use crate::state::Handle;

/// Checks that `cleartexts` are the true decryption of `handles`.
pub trait BindingVerifier {
    fn verify_binding(&self, handles: &[Handle], cleartexts: &[Cleartext], proof: &[u8]) -> bool;
}

/// Digest the decryption oracle signs. Handles and cleartexts are hashed in
/// order, so the binding covers which value belongs to which handle.
pub fn decryption_digest(
    program_id: &Pubkey,
    handles: &[Handle],
    cleartexts: &[Cleartext],
) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DECRYPTION_PROOF_DOMAIN);
    hasher.update(program_id.as_ref());
    hasher.update(&(handles.len() as u32).to_le_bytes());
    hasher.update(bytemuck::cast_slice(handles));
    hasher.update(&(cleartexts.len() as u32).to_le_bytes());
    hasher.update(bytemuck::cast_slice(cleartexts));
    *hasher.finalize().as_bytes()
}

/// Verifier backed by a decryption oracle signature found in the transaction.
pub struct OracleBindingVerifier<'a> {
    attestations: &'a Attestations,
    oracle: Pubkey,
}

impl<'a> OracleBindingVerifier<'a> {
    pub fn new(attestations: &'a Attestations, oracle: Pubkey) -> Self {
        Self {
            attestations,
            oracle,
        }
    }
}

impl BindingVerifier for OracleBindingVerifier<'_> {
    fn verify_binding(&self, handles: &[Handle], cleartexts: &[Cleartext], proof: &[u8]) -> bool {
        if proof.len() != SIGNATURE_LEN || handles.len() != cleartexts.len() {
            return false;
        }
        let digest = decryption_digest(&crate::ID, handles, cleartexts);
        self.attestations.contains(&self.oracle, proof, &digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhe::{encode_u64, Attestation};

    fn signed(oracle: Pubkey, handles: &[Handle], cleartexts: &[Cleartext]) -> Attestations {
        Attestations::new(vec![Attestation {
            signer: oracle,
            signature: [7u8; SIGNATURE_LEN],
            message: decryption_digest(&crate::ID, handles, cleartexts).to_vec(),
        }])
    }

    #[test]
    fn accepts_signature_over_exact_binding() {
        let oracle = Pubkey::new_unique();
        let handles = [Handle([1u8; 32]), Handle([2u8; 32])];
        let cleartexts = [encode_u64(1000), encode_u64(86_400)];
        let attestations = signed(oracle, &handles, &cleartexts);

        let verifier = OracleBindingVerifier::new(&attestations, oracle);
        assert!(verifier.verify_binding(&handles, &cleartexts, &[7u8; SIGNATURE_LEN]));
    }

    #[test]
    fn rejects_swapped_or_altered_cleartexts() {
        let oracle = Pubkey::new_unique();
        let handles = [Handle([1u8; 32]), Handle([2u8; 32])];
        let cleartexts = [encode_u64(1000), encode_u64(86_400)];
        let attestations = signed(oracle, &handles, &cleartexts);
        let verifier = OracleBindingVerifier::new(&attestations, oracle);
        let proof = [7u8; SIGNATURE_LEN];

        let swapped = [cleartexts[1], cleartexts[0]];
        assert!(!verifier.verify_binding(&handles, &swapped, &proof));
        let inflated = [encode_u64(1_000_000), cleartexts[1]];
        assert!(!verifier.verify_binding(&handles, &inflated, &proof));
        assert!(!verifier.verify_binding(&handles[..1], &cleartexts[..1], &proof));
    }

    #[test]
    fn rejects_other_signer_and_bad_proof_length() {
        let oracle = Pubkey::new_unique();
        let handles = [Handle([1u8; 32])];
        let cleartexts = [encode_u64(5)];
        let attestations = signed(Pubkey::new_unique(), &handles, &cleartexts);
        let verifier = OracleBindingVerifier::new(&attestations, oracle);

        assert!(!verifier.verify_binding(&handles, &cleartexts, &[7u8; SIGNATURE_LEN]));
        assert!(!verifier.verify_binding(&handles, &cleartexts, &[7u8; 32]));
    }
}
