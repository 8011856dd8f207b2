//! Seams to the encryption coprocessor and the decryption oracle.
//!
//! The core only sees the [`EncryptedValueGateway`] and [`BindingVerifier`]
//! traits. On-chain both are backed by ed25519 attestations checked by the
//! precompile earlier in the same transaction.

pub mod attestation;
pub mod cleartext;
pub mod gateway;
pub mod oracle;

#[cfg(test)]
pub mod mock;

pub use attestation::*;
pub use cleartext::*;
pub use gateway::*;
pub use oracle::*;
