use anchor_lang::prelude::*;

/// Custom error codes for the confidential vesting program.
#[error_code]
pub enum VestingError {
    #[msg("A vesting record already exists for this beneficiary")]
    AlreadyExists,

    #[msg("Encrypted input is not a valid ciphertext handle")]
    InvalidCiphertext,

    #[msg("Vesting record not found")]
    NotFound,

    #[msg("Only the beneficiary may revoke their vesting record")]
    NotAuthorized,

    #[msg("Vesting record is already revoked")]
    AlreadyRevoked,

    #[msg("Decryption already verified for this record")]
    AlreadyVerified,

    #[msg("Decryption proof does not bind the cleartexts to the handles")]
    InvalidProof,

    #[msg("Vesting record is revoked")]
    Revoked,

    #[msg("Decryption has not been verified")]
    Unverified,

    #[msg("Unlock time has not been reached")]
    NotYetUnlocked,

    #[msg("Beneficiary must not be the default public key")]
    InvalidBeneficiary,

    #[msg("Cleartext does not fit in 64 bits")]
    MalformedCleartext,

    #[msg("Malformed ed25519 attestation instruction")]
    MalformedAttestation,

    #[msg("Beneficiary index is out of sync with the record store")]
    IndexOutOfSync,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidRecipientAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
