// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ID list tokens
//!
//! The foreign store references lists of records through compact tokens:
//! a bare number (`"4"`), a comma list (`"1,3,5"`), an inclusive range
//! (`"5-9"`), or a mix of both (`"1,3,5-9"`). Mixed tokens are only read
//! as comma-separated groups of numbers or ranges; nothing more general is
//! accepted.

use femlink_model::{ConvertError, Result};
use memchr::memchr;
use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use std::ops::RangeInclusive;

/// Most IDs a single `start-end` group may expand to
pub const MAX_RANGE_LEN: u32 = 1 << 20;

/// Decode a token into IDs, in token order
///
/// Ranges expand in ascending order at their position in the token. An
/// empty or blank token decodes to no IDs.
pub fn decode(token: &str) -> Result<Vec<u32>> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let has_comma = memchr(b',', trimmed.as_bytes()).is_some();
    let has_dash = memchr(b'-', trimmed.as_bytes()).is_some();

    match (has_comma, has_dash) {
        // Mixed: "1,3,5-9"
        (true, true) => {
            let mut ids = Vec::new();
            for group in trimmed.split(',') {
                if memchr(b'-', group.as_bytes()).is_some() {
                    ids.extend(range(group, token)?);
                } else {
                    ids.push(single(group, token)?);
                }
            }
            Ok(ids)
        }
        // Comma list: "1,3,5"
        (true, false) => trimmed.split(',').map(|group| single(group, token)).collect(),
        // Range: "5-9"
        (false, true) => Ok(range(trimmed, token)?.collect()),
        // Single: "4"
        (false, false) => Ok(vec![single(trimmed, token)?]),
    }
}

/// Decode a token straight into typed IDs
pub fn decode_as<T: From<u32>>(token: &str) -> Result<Vec<T>> {
    Ok(decode(token)?.into_iter().map(T::from).collect())
}

/// Encode IDs into a token
///
/// Runs of two or more consecutive ascending values become `start-end`,
/// everything else stays comma-separated. `decode(&encode(ids))` returns
/// `ids` unchanged as long as no run is longer than [`MAX_RANGE_LEN`].
pub fn encode(ids: &[u32]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < ids.len() {
        let mut j = i;
        while j + 1 < ids.len() && ids[j].checked_add(1) == Some(ids[j + 1]) {
            j += 1;
        }

        if !out.is_empty() {
            out.push(',');
        }
        if j > i {
            out.push_str(&format!("{}-{}", ids[i], ids[j]));
        } else {
            out.push_str(&ids[i].to_string());
        }

        i = j + 1;
    }

    out
}

/// Encode typed IDs into a token
pub fn encode_ids<T: Copy + Into<u32>>(ids: &[T]) -> String {
    let raw: Vec<u32> = ids.iter().map(|&id| id.into()).collect();
    encode(&raw)
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse one unsigned integer, surrounding blanks allowed
fn id(input: &str) -> IResult<&str, u32> {
    map_res(delimited(space0, digit1, space0), |digits: &str| {
        lexical_core::parse::<u32>(digits.as_bytes())
    })
    .parse(input)
}

fn single(group: &str, token: &str) -> Result<u32> {
    all_consuming(id)
        .parse(group)
        .map(|(_, value)| value)
        .map_err(|_| ConvertError::token(token, format!("'{}' is not an ID", group.trim())))
}

fn range(group: &str, token: &str) -> Result<RangeInclusive<u32>> {
    let (_, (start, end)) = all_consuming(separated_pair(id, char('-'), id))
        .parse(group)
        .map_err(|_| {
            ConvertError::token(token, format!("'{}' is not a start-end range", group.trim()))
        })?;

    if end < start {
        return Err(ConvertError::ReversedRange {
            token: token.to_string(),
            start,
            end,
        });
    }

    if end - start >= MAX_RANGE_LEN {
        return Err(ConvertError::token(
            token,
            format!(
                "range {}-{} expands to more than {} IDs",
                start, end, MAX_RANGE_LEN
            ),
        ));
    }

    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use femlink_model::LineNo;

    #[test]
    fn test_decode_single() {
        assert_eq!(decode("4").unwrap(), vec![4]);
        assert_eq!(decode(" 12 ").unwrap(), vec![12]);
    }

    #[test]
    fn test_decode_comma_list_keeps_order() {
        assert_eq!(decode("10,11").unwrap(), vec![10, 11]);
        assert_eq!(decode("3,1,2").unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_decode_range() {
        assert_eq!(decode("5-9").unwrap(), vec![5, 6, 7, 8, 9]);
        assert_eq!(decode("2-2").unwrap(), vec![2]);
    }

    #[test]
    fn test_decode_mixed() {
        assert_eq!(decode("1,3,5-9").unwrap(), vec![1, 3, 5, 6, 7, 8, 9]);
        assert_eq!(decode("7-8,1,4-5").unwrap(), vec![7, 8, 1, 4, 5]);
        assert_eq!(decode("1, 3-4").unwrap(), vec![1, 3, 4]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("   ").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for token in ["a", "1,b", "1,,2", "1,", "-5", "1-2-3", "1-x,4", "3.5"] {
            let err = decode(token).unwrap_err();
            assert!(err.is_parse(), "{token} should fail with a parse error");
        }
    }

    #[test]
    fn test_decode_rejects_reversed_range() {
        let err = decode("1,9-5").unwrap_err();
        assert_eq!(
            err,
            ConvertError::ReversedRange {
                token: "1,9-5".into(),
                start: 9,
                end: 5
            }
        );
    }

    #[test]
    fn test_decode_rejects_huge_range() {
        let err = decode("1-4000000000").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidIdToken { .. }));
        assert!(err.to_string().contains("expands to more than"));

        let top = MAX_RANGE_LEN;
        assert_eq!(decode(&format!("1-{}", top)).unwrap().len(), top as usize);
        assert!(decode(&format!("0-{}", top)).is_err());
    }

    #[test]
    fn test_decode_as_typed() {
        let lines: Vec<LineNo> = decode_as("10-11").unwrap();
        assert_eq!(lines, vec![LineNo(10), LineNo(11)]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[1, 3, 5, 6, 7, 8, 9]), "1,3,5-9");
        assert_eq!(encode(&[4]), "4");
        assert_eq!(encode(&[1, 2]), "1-2");
        assert_eq!(encode(&[]), "");
        assert_eq!(encode_ids(&[LineNo(2), LineNo(3), LineNo(7)]), "2-3,7");
    }

    #[test]
    fn test_encode_then_decode_preserves_ascending_sets() {
        let sets: Vec<Vec<u32>> = vec![
            vec![],
            vec![1],
            vec![1, 2, 3, 4],
            vec![1, 3, 5, 7],
            vec![2, 3, 10, 11, 12, 40],
            (1..=200).filter(|n| n % 7 != 0).collect(),
            vec![u32::MAX - 1, u32::MAX],
        ];
        for ids in sets {
            assert_eq!(decode(&encode(&ids)).unwrap(), ids);
        }
    }
}
