use anchor_lang::prelude::*;

use crate::constants::{INPUT_PROOF_DOMAIN, SIGNATURE_LEN};
use crate::error::VestingError;
use crate::fhe::Attestations;
use crate::state::Handle;

/// Capability surface of the encryption coprocessor.
pub trait EncryptedValueGateway {
    /// Turns an externally supplied ciphertext handle plus its validity proof
    /// into a handle the program may operate on.
    fn materialize(
        &mut self,
        external: &Handle,
        proof: &[u8],
    ) -> std::result::Result<Handle, VestingError>;

    fn is_initialized(&self, handle: &Handle) -> bool;

    /// Irrevocably lets `principal` operate on `handle`.
    fn allow(&mut self, handle: &Handle, principal: &Pubkey);

    /// Irrevocably allows anyone to request a public decryption of `handle`.
    fn make_publicly_decryptable(&mut self, handle: &Handle);
}

/// Digest the coprocessor signs to vouch for an encrypted input.
pub fn input_digest(program_id: &Pubkey, sender: &Pubkey, handle: &Handle) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(INPUT_PROOF_DOMAIN);
    hasher.update(program_id.as_ref());
    hasher.update(sender.as_ref());
    hasher.update(bytemuck::bytes_of(handle));
    *hasher.finalize().as_bytes()
}

/// Gateway backed by coprocessor signatures found in the transaction.
///
/// ACL grants are published as events; the coprocessor indexes program logs.
pub struct CoprocessorGateway<'a> {
    attestations: &'a Attestations,
    coprocessor: Pubkey,
    sender: Pubkey,
}

impl<'a> CoprocessorGateway<'a> {
    pub fn new(attestations: &'a Attestations, coprocessor: Pubkey, sender: Pubkey) -> Self {
        Self {
            attestations,
            coprocessor,
            sender,
        }
    }
}

impl EncryptedValueGateway for CoprocessorGateway<'_> {
    fn materialize(
        &mut self,
        external: &Handle,
        proof: &[u8],
    ) -> std::result::Result<Handle, VestingError> {
        if proof.len() != SIGNATURE_LEN {
            return Err(VestingError::InvalidCiphertext);
        }
        let digest = input_digest(&crate::ID, &self.sender, external);
        if !self.attestations.contains(&self.coprocessor, proof, &digest) {
            return Err(VestingError::InvalidCiphertext);
        }
        Ok(*external)
    }

    fn is_initialized(&self, handle: &Handle) -> bool {
        !handle.is_zero()
    }

    fn allow(&mut self, handle: &Handle, principal: &Pubkey) {
        emit!(HandleAllowed {
            handle: *handle,
            principal: *principal,
        });
    }

    fn make_publicly_decryptable(&mut self, handle: &Handle) {
        emit!(HandleMadePublic { handle: *handle });
    }
}

#[event]
pub struct HandleAllowed {
    pub handle: Handle,
    pub principal: Pubkey,
}

#[event]
pub struct HandleMadePublic {
    pub handle: Handle,
}
