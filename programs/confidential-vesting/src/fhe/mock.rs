//! In-memory doubles for the coprocessor and the decryption oracle.

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::fhe::{decode_u64, BindingVerifier, Cleartext, EncryptedValueGateway};
use crate::state::Handle;

/// "Encrypts" by tagging: the handle carries the plaintext in its low bytes
/// and a marker byte so that zero still yields a non-zero handle.
pub fn encrypt(value: u64) -> Handle {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xE1;
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    Handle(bytes)
}

pub fn decrypt(handle: &Handle) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&handle.0[24..]);
    u64::from_be_bytes(buf)
}

/// Any non-empty proof is accepted; an empty one is rejected.
#[derive(Debug, Default)]
pub struct IdentityGateway {
    pub allowed: Vec<(Handle, Pubkey)>,
    pub public: Vec<Handle>,
}

impl EncryptedValueGateway for IdentityGateway {
    fn materialize(
        &mut self,
        external: &Handle,
        proof: &[u8],
    ) -> std::result::Result<Handle, VestingError> {
        if proof.is_empty() {
            return Err(VestingError::InvalidCiphertext);
        }
        Ok(*external)
    }

    fn is_initialized(&self, handle: &Handle) -> bool {
        !handle.is_zero()
    }

    fn allow(&mut self, handle: &Handle, principal: &Pubkey) {
        self.allowed.push((*handle, *principal));
    }

    fn make_publicly_decryptable(&mut self, handle: &Handle) {
        self.public.push(*handle);
    }
}

pub struct AlwaysValid;

impl BindingVerifier for AlwaysValid {
    fn verify_binding(&self, _: &[Handle], _: &[Cleartext], _: &[u8]) -> bool {
        true
    }
}

pub struct AlwaysInvalid;

impl BindingVerifier for AlwaysInvalid {
    fn verify_binding(&self, _: &[Handle], _: &[Cleartext], _: &[u8]) -> bool {
        false
    }
}

/// Accepts exactly the cleartexts that `decrypt` recovers from the handles.
pub struct IdentityOracle;

impl BindingVerifier for IdentityOracle {
    fn verify_binding(&self, handles: &[Handle], cleartexts: &[Cleartext], _: &[u8]) -> bool {
        handles.len() == cleartexts.len()
            && handles
                .iter()
                .zip(cleartexts)
                .all(|(h, c)| decode_u64(c).map_or(false, |v| v == decrypt(h)))
    }
}
