//! # IBAN Formatting
//!
//! Turns whatever the user typed into the canonical display form: uppercase
//! Latin letters and digits in groups of four, separated by single spaces.
//!
//! [`format_iban`] is meant to run on every keystroke, not only on submit, so
//! it accepts any input and never fails. It is idempotent.
//!
//! Only the character set and spacing are normalized. Country codes, lengths
//! and mod-97 checksums are not verified.
//!
//! Capping the input length (32 characters by default) is a UI concern and
//! lives in [`truncate_iban`], applied on top of formatting.

pub const GROUP_SIZE: usize = 4;

/// Canonicalizes raw IBAN text.
///
/// ```
/// use ibanz::iban::format_iban;
/// assert_eq!(format_iban("tr33 0006 1005"), "TR33 0006 1005");
/// ```
pub fn format_iban(raw: &str) -> String {
    let cleaned: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    let mut out = String::with_capacity(cleaned.len() + cleaned.len() / GROUP_SIZE);
    for (i, c) in cleaned.iter().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Formats `raw` and caps the result at `max_len` characters (spaces
/// included), never ending on a separator.
pub fn truncate_iban(raw: &str, max_len: usize) -> String {
    let formatted = format_iban(raw);
    // Output is ASCII, so byte and char offsets agree.
    if formatted.len() <= max_len {
        return formatted;
    }
    formatted[..max_len].trim_end().to_string()
}

/// The IBAN without group separators, as banks expect it when pasted.
pub fn compact_iban(raw: &str) -> String {
    format_iban(raw).replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn is_canonical(s: &str) -> bool {
        if s.is_empty() {
            return true;
        }
        let groups: Vec<&str> = s.split(' ').collect();
        let last = groups.len() - 1;
        groups.iter().enumerate().all(|(i, g)| {
            let len_ok = if i == last {
                (1..=GROUP_SIZE).contains(&g.len())
            } else {
                g.len() == GROUP_SIZE
            };
            len_ok
                && g
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
    }

    #[test]
    fn formats_full_iban() {
        assert_eq!(
            format_iban("tr33 0006 1005 1978 6457 8413 26"),
            "TR33 0006 1005 1978 6457 8413 26"
        );
    }

    #[test]
    fn formats_partial_iban() {
        assert_eq!(format_iban("tr330006"), "TR33 0006");
    }

    #[test]
    fn no_trailing_space_on_full_group() {
        assert_eq!(format_iban("abcd"), "ABCD");
        assert_eq!(format_iban("abcde"), "ABCD E");
    }

    #[test]
    fn strips_punctuation_and_non_latin_letters() {
        assert_eq!(format_iban("TR33-0006-1005"), "TR33 0006 1005");
        assert_eq!(format_iban("ğüşiöç tr12"), "ITR1 2");
        assert_eq!(format_iban("!!!"), "");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(format_iban(""), "");
        assert_eq!(format_iban(" \t\n"), "");
    }

    quickcheck! {
        fn is_idempotent(s: String) -> bool {
            let once = format_iban(&s);
            format_iban(&once) == once
        }

        fn output_is_canonical(s: String) -> bool {
            is_canonical(&format_iban(&s))
        }

        fn keeps_every_latin_letter_and_digit(s: String) -> bool {
            let expected: String = s
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                .collect();
            compact_iban(&s) == expected
        }

        fn truncate_respects_cap(s: String, cap: u8) -> bool {
            let max_len = cap as usize;
            let capped = truncate_iban(&s, max_len);
            capped.len() <= max_len
                && is_canonical(&capped)
                && format_iban(&s).starts_with(&capped)
        }
    }

    #[test]
    fn handles_mixed_whitespace_and_fullwidth_input() {
        assert_eq!(
            format_iban("  de89\t3704\n0044 0532 0130 00  "),
            "DE89 3704 0044 0532 0130 00"
        );
        assert_eq!(format_iban("ＡＢ12"), "12");
    }

    #[test]
    fn truncate_caps_length_without_trailing_space() {
        let long = "tr330006100519786457841326000011112222";
        let capped = truncate_iban(long, 32);
        assert_eq!(capped.len(), 32);
        assert!(is_canonical(&capped));

        // A cut at 30 lands right after a separator.
        assert_eq!(truncate_iban(long, 30), "TR33 0006 1005 1978 6457 8413");
        assert_eq!(truncate_iban("tr33", 32), "TR33");
    }

    #[test]
    fn compact_drops_separators() {
        assert_eq!(compact_iban("tr33 0006 10"), "TR33000610");
    }
}
