use anchor_lang::prelude::*;

use crate::constants::MAX_PAGE_LEN;

/// Unordered enumeration of beneficiaries that currently hold a record.
///
/// Only the registry mutates it, in the same call that creates or closes the
/// record account. Removal swaps the last member into the vacated position,
/// so enumeration order is not stable across releases.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BeneficiaryIndex {
    members: Vec<Pubkey>,
}

/// One window of the index, returned by `list_beneficiaries`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BeneficiaryPage {
    /// Members in the whole index at the time of the call.
    pub total: u32,
    pub offset: u32,
    pub members: Vec<Pubkey>,
}

impl BeneficiaryIndex {
    /// Serialized size with `members` entries (Borsh length prefix + keys).
    pub const fn space(members: usize) -> usize {
        4 + 32 * members
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Pubkey] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, beneficiary: &Pubkey) -> bool {
        self.members.iter().any(|m| m == beneficiary)
    }

    /// At most `limit` members starting at `offset`, never more than
    /// `MAX_PAGE_LEN`. An offset past the end yields an empty page.
    pub fn page(&self, offset: u32, limit: u32) -> BeneficiaryPage {
        let start = (offset as usize).min(self.members.len());
        let len = (limit as usize).min(MAX_PAGE_LEN);
        let end = start.saturating_add(len).min(self.members.len());
        BeneficiaryPage {
            total: self.members.len() as u32,
            offset,
            members: self.members[start..end].to_vec(),
        }
    }

    pub(crate) fn push(&mut self, beneficiary: Pubkey) {
        self.members.push(beneficiary);
    }

    /// Swap-with-last then truncate. Returns false if not a member.
    pub(crate) fn remove(&mut self, beneficiary: &Pubkey) -> bool {
        match self.members.iter().position(|m| m == beneficiary) {
            Some(pos) => {
                self.members.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}
