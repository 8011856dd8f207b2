use crate::constants::CLEARTEXT_WORD_LEN;
use crate::error::VestingError;

/// A decrypted value as returned by the oracle: one big-endian word.
pub type Cleartext = [u8; CLEARTEXT_WORD_LEN];

pub fn decode_u64(word: &Cleartext) -> Result<u64, VestingError> {
    let (high, low) = word.split_at(CLEARTEXT_WORD_LEN - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(VestingError::MalformedCleartext);
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    Ok(u64::from_be_bytes(buf))
}

pub fn encode_u64(value: u64) -> Cleartext {
    let mut word = [0u8; CLEARTEXT_WORD_LEN];
    word[CLEARTEXT_WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_low_eight_bytes() {
        assert_eq!(decode_u64(&encode_u64(1000)).unwrap(), 1000);
        assert_eq!(decode_u64(&encode_u64(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(decode_u64(&[0u8; CLEARTEXT_WORD_LEN]).unwrap(), 0);
    }

    #[test]
    fn rejects_values_wider_than_u64() {
        let mut word = encode_u64(7);
        word[CLEARTEXT_WORD_LEN - 9] = 1;
        assert!(matches!(
            decode_u64(&word),
            Err(VestingError::MalformedCleartext)
        ));
    }
}
