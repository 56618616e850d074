// Suffix form templates
//
// Lowercase letters and the apostrophe are literal. Uppercase letters are
// resolved against the preceding surface:
//   A  a/e by last vowel
//   I  ı/i/u/ü by last vowel
//   D  t after a voiceless letter, else d
//   C  ç after a voiceless letter, else c
// A `+` marks the next letter optional: an optional vowel is kept only after
// a consonant, an optional consonant only after a vowel.

use std::fmt;
use std::sync::Arc;

use trmorph_core::letter::letter_of;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormLetter {
    Literal(char),
    HarmonyA,
    HarmonyI,
    DevoicedD,
    DevoicedC,
}

impl FormLetter {
    /// Whether the letter is realized as a vowel.
    pub fn is_vowel(self) -> bool {
        match self {
            FormLetter::HarmonyA | FormLetter::HarmonyI => true,
            FormLetter::Literal(c) => letter_of(c).is_some_and(|l| l.vowel),
            FormLetter::DevoicedD | FormLetter::DevoicedC => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormToken {
    pub letter: FormLetter,
    pub optional: bool,
}

/// A parsed suffix form template such as `+yAcAk`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SuffixFormTemplate {
    text: Arc<str>,
    tokens: Vec<FormToken>,
}

impl SuffixFormTemplate {
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let invalid = |reason| GraphError::InvalidTemplate { template: text.to_string(), reason };
        let mut tokens = Vec::new();
        let mut optional = false;
        for c in text.chars() {
            if c == '+' {
                if optional {
                    return Err(invalid("repeated optional marker"));
                }
                optional = true;
                continue;
            }
            let letter = match c {
                'A' => FormLetter::HarmonyA,
                'I' => FormLetter::HarmonyI,
                'D' => FormLetter::DevoicedD,
                'C' => FormLetter::DevoicedC,
                '\'' if optional => return Err(invalid("apostrophe cannot be optional")),
                '\'' => FormLetter::Literal(c),
                _ if letter_of(c).is_some_and(|l| l.lower == c) => FormLetter::Literal(c),
                _ => return Err(invalid("unexpected character")),
            };
            tokens.push(FormToken { letter, optional });
            optional = false;
        }
        if optional {
            return Err(invalid("dangling optional marker"));
        }
        Ok(Self { text: Arc::from(text), tokens })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[FormToken] {
        &self.tokens
    }

    /// True for the zero form.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when every realization consumes at least one character.
    pub fn always_consumes(&self) -> bool {
        self.tokens.iter().any(|t| !t.optional)
    }
}

impl fmt::Debug for SuffixFormTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

impl fmt::Display for SuffixFormTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
