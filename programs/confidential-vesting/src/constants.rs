//! Program-wide constants.

use anchor_lang::prelude::Pubkey;

/// PDA seed of the registry account.
pub const REGISTRY_SEED: &[u8] = b"registry";

/// PDA seed of a vesting record (combined with the registry and beneficiary
/// keys).
pub const RECORD_SEED: &[u8] = b"vesting";

/// PDA seed of the token vault (combined with the registry key).
pub const VAULT_SEED: &[u8] = b"vault";

/// Max beneficiaries returned by one `list_beneficiaries` call. A page is
/// 4 + 4 + 4 + 32 * N bytes of return data, capped at 1024.
pub const MAX_PAGE_LEN: usize = 30;

/// Ed25519SigVerify111111111111111111111111111
pub const ED25519_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    3, 125, 70, 214, 124, 147, 251, 190, 18, 249, 66, 143, 131, 141, 64, 255, 5, 112, 116, 73,
    39, 244, 138, 100, 252, 202, 112, 68, 128, 0, 0, 0,
]);

/// Domain tag for coprocessor input proofs.
pub const INPUT_PROOF_DOMAIN: &[u8] = b"confidential-vesting/input/v1";

/// Domain tag for decryption oracle proofs.
pub const DECRYPTION_PROOF_DOMAIN: &[u8] = b"confidential-vesting/decryption/v1";

/// Length of an ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Width of one decrypted plaintext word (big-endian).
pub const CLEARTEXT_WORD_LEN: usize = 32;
