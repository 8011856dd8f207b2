//! Reads signatures that the ed25519 precompile already checked.
//!
//! The precompile aborts the transaction if any signature it carries is
//! invalid, so a signature that appears in a preceding ed25519 instruction is
//! known to be valid for its `(signer, message)` pair. Only entries whose
//! offsets point into the precompile instruction itself are collected.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::constants::{ED25519_PROGRAM_ID, SIGNATURE_LEN};
use crate::error::VestingError;

const OFFSETS_START: usize = 2;
const OFFSETS_LEN: usize = 14;
const PUBKEY_LEN: usize = 32;
/// Instruction index meaning "this instruction".
const CURRENT_INSTRUCTION: u16 = u16::MAX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attestation {
    pub signer: Pubkey,
    pub signature: [u8; SIGNATURE_LEN],
    pub message: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct Attestations {
    entries: Vec<Attestation>,
}

impl Attestations {
    pub fn new(entries: Vec<Attestation>) -> Self {
        Self { entries }
    }

    /// Collects attestations from every ed25519 instruction that precedes the
    /// current one in the transaction.
    pub fn load(instructions_sysvar: &AccountInfo) -> Result<Self> {
        let current = load_current_index_checked(instructions_sysvar)? as usize;
        let mut entries = Vec::new();
        for index in 0..current {
            let ix = load_instruction_at_checked(index, instructions_sysvar)?;
            if ix.program_id != ED25519_PROGRAM_ID {
                continue;
            }
            entries.extend(parse_ed25519_instruction(&ix.data, index as u16)?);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, signer: &Pubkey, signature: &[u8], message: &[u8]) -> bool {
        self.entries.iter().any(|a| {
            a.signer == *signer && a.signature[..] == *signature && a.message == message
        })
    }
}

/// Parses ed25519 precompile instruction data.
///
/// Layout: `[count: u8, padding: u8]` followed by `count` offset records of
/// seven little-endian `u16`s (signature offset/ix, pubkey offset/ix, message
/// offset/size/ix), then the referenced bytes.
pub fn parse_ed25519_instruction(
    data: &[u8],
    own_index: u16,
) -> std::result::Result<Vec<Attestation>, VestingError> {
    let count = *data.first().ok_or(VestingError::MalformedAttestation)? as usize;
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let start = OFFSETS_START + i * OFFSETS_LEN;
        let offsets = data
            .get(start..start + OFFSETS_LEN)
            .ok_or(VestingError::MalformedAttestation)?;
        let field = |n: usize| u16::from_le_bytes([offsets[2 * n], offsets[2 * n + 1]]);

        let signature_offset = field(0);
        let signature_ix = field(1);
        let pubkey_offset = field(2);
        let pubkey_ix = field(3);
        let message_offset = field(4);
        let message_size = field(5);
        let message_ix = field(6);

        let is_local = |ix: u16| ix == CURRENT_INSTRUCTION || ix == own_index;
        if !(is_local(signature_ix) && is_local(pubkey_ix) && is_local(message_ix)) {
            continue;
        }

        let signature = slice_at(data, signature_offset, SIGNATURE_LEN)?;
        let pubkey = slice_at(data, pubkey_offset, PUBKEY_LEN)?;
        let message = slice_at(data, message_offset, message_size as usize)?;

        let mut sig = [0u8; SIGNATURE_LEN];
        sig.copy_from_slice(signature);
        let signer =
            Pubkey::try_from(pubkey).map_err(|_| VestingError::MalformedAttestation)?;

        out.push(Attestation {
            signer,
            signature: sig,
            message: message.to_vec(),
        });
    }

    Ok(out)
}

fn slice_at(data: &[u8], offset: u16, len: usize) -> std::result::Result<&[u8], VestingError> {
    let start = offset as usize;
    data.get(start..start + len)
        .ok_or(VestingError::MalformedAttestation)
}

/// Builds precompile instruction data for the given entries, all offsets
/// pointing into the instruction itself.
#[cfg(test)]
pub(crate) fn ed25519_instruction_data(
    entries: &[(Pubkey, [u8; SIGNATURE_LEN], Vec<u8>)],
) -> Vec<u8> {
    let header = OFFSETS_START + entries.len() * OFFSETS_LEN;
    let mut offsets = Vec::with_capacity(header);
    let mut body = Vec::new();
    offsets.push(entries.len() as u8);
    offsets.push(0);

    for (signer, signature, message) in entries {
        let pubkey_offset = (header + body.len()) as u16;
        body.extend_from_slice(signer.as_ref());
        let signature_offset = (header + body.len()) as u16;
        body.extend_from_slice(signature);
        let message_offset = (header + body.len()) as u16;
        body.extend_from_slice(message);

        for v in [
            signature_offset,
            CURRENT_INSTRUCTION,
            pubkey_offset,
            CURRENT_INSTRUCTION,
            message_offset,
            message.len() as u16,
            CURRENT_INSTRUCTION,
        ] {
            offsets.extend_from_slice(&v.to_le_bytes());
        }
    }

    offsets.extend_from_slice(&body);
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_signature_in_instruction() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let data = ed25519_instruction_data(&[
            (a, [1u8; SIGNATURE_LEN], b"first".to_vec()),
            (b, [2u8; SIGNATURE_LEN], vec![9u8; 32]),
        ]);

        let parsed = parse_ed25519_instruction(&data, 0).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].signer, a);
        assert_eq!(parsed[0].message, b"first".to_vec());
        assert_eq!(parsed[1].signature, [2u8; SIGNATURE_LEN]);

        let attestations = Attestations::new(parsed);
        assert!(attestations.contains(&b, &[2u8; SIGNATURE_LEN], &[9u8; 32]));
        assert!(!attestations.contains(&a, &[2u8; SIGNATURE_LEN], &[9u8; 32]));
        assert!(!attestations.contains(&b, &[2u8; SIGNATURE_LEN], &[8u8; 32]));
    }

    #[test]
    fn skips_entries_referencing_other_instructions() {
        let signer = Pubkey::new_unique();
        let mut data =
            ed25519_instruction_data(&[(signer, [3u8; SIGNATURE_LEN], vec![1, 2, 3])]);
        // Point the message at instruction 4.
        let message_ix = OFFSETS_START + 12;
        data[message_ix..message_ix + 2].copy_from_slice(&4u16.to_le_bytes());

        assert!(parse_ed25519_instruction(&data, 0).unwrap().is_empty());
        assert_eq!(parse_ed25519_instruction(&data, 4).unwrap().len(), 1);
    }

    #[test]
    fn truncated_data_is_malformed() {
        let data = ed25519_instruction_data(&[(
            Pubkey::new_unique(),
            [4u8; SIGNATURE_LEN],
            vec![7; 32],
        )]);
        assert!(matches!(
            parse_ed25519_instruction(&data[..data.len() - 1], 0),
            Err(VestingError::MalformedAttestation)
        ));
        assert!(matches!(
            parse_ed25519_instruction(&[], 0),
            Err(VestingError::MalformedAttestation)
        ));
    }
}
