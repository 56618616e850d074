// Case pattern detection with Turkish casing rules

use crate::letter::{is_lower, is_upper};

/// Classification of letter casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "ankara".
    AllLower,
    /// First letter is uppercase, the rest lowercase: "Ankara".
    FirstUpper,
    /// Mixed case that fits no other pattern: "AnKara".
    Complex,
    /// All letters are uppercase: "TBMM".
    AllUpper,
}

/// Detect the case pattern of a word. Non-letters are ignored, except that
/// the first character must itself be an uppercase letter for `FirstUpper`.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = is_upper(first);
    let mut no_letters = !first_uc && !is_lower(first);
    let mut all_uc = !is_lower(first);
    let mut rest_lc = true;

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        CaseType::NoLetters
    } else if all_uc {
        CaseType::AllUpper
    } else if !rest_lc {
        CaseType::Complex
    } else if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}
