// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{FheError, Result};

/// Convert text to one code per character. Each code is the first UTF-16 code unit of the
/// character, so characters outside the BMP keep only their high surrogate.
pub fn text_to_codes(text: &str) -> Vec<u64> {
    let mut buf = [0u16; 2];
    text.chars()
        .map(|c| c.encode_utf16(&mut buf)[0] as u64)
        .collect()
}

/// Zero pad codes to exactly `slot_count` values
pub fn pad_to_slots(mut codes: Vec<u64>, slot_count: usize) -> Result<Vec<u64>> {
    if codes.len() > slot_count {
        return Err(FheError::InputTooLong {
            len: codes.len(),
            slots: slot_count,
        });
    }
    codes.resize(slot_count, 0);
    Ok(codes)
}

/// Inverse of [`text_to_codes`] after stripping the zero padding. Codes that are not a valid
/// scalar value on their own become U+FFFD.
pub fn codes_to_text(codes: &[u64]) -> String {
    let end = codes
        .iter()
        .rposition(|c| *c != 0)
        .map_or(0, |last| last + 1);

    codes[..end]
        .iter()
        .map(|code| {
            u32::try_from(*code)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_codes_uses_utf16_units() {
        assert_eq!(text_to_codes("Hi!"), vec![72, 105, 33]);
        assert_eq!(text_to_codes("é"), vec![0xe9]);
        // U+1F600 keeps only the high surrogate
        assert_eq!(text_to_codes("😀"), vec![0xd83d]);
        assert!(text_to_codes("").is_empty());
    }

    #[test]
    fn pads_short_input_to_slot_count() {
        let padded = pad_to_slots(text_to_codes("abc"), 8).unwrap();
        assert_eq!(padded, vec![97, 98, 99, 0, 0, 0, 0, 0]);

        let exact = pad_to_slots(vec![1, 2, 3, 4], 4).unwrap();
        assert_eq!(exact, vec![1, 2, 3, 4]);

        let empty = pad_to_slots(vec![], 2048).unwrap();
        assert_eq!(empty.len(), 2048);
        assert!(empty.iter().all(|c| *c == 0));
    }

    #[test]
    fn rejects_input_longer_than_slots() {
        let err = pad_to_slots(vec![1; 5], 4).unwrap_err();
        assert!(matches!(err, FheError::InputTooLong { len: 5, slots: 4 }));
    }

    #[test]
    fn codes_to_text_strips_padding() {
        let padded = pad_to_slots(text_to_codes("héllo\n"), 16).unwrap();
        assert_eq!(codes_to_text(&padded), "héllo\n");
        assert_eq!(codes_to_text(&[0, 0, 0]), "");
        assert_eq!(codes_to_text(&[0xd83d, 0]), "\u{fffd}");
    }
}
