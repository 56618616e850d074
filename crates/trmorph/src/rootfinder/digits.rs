// Digit strings: cardinals ("12", "1.250,5") and ordinals ("4.", "1.000.")

use std::sync::Arc;

use regex::Regex;
use trmorph_core::numeral::digits_to_text;
use trmorph_core::phonetics::calculate_phonetic_attributes;
use trmorph_core::{Lexeme, LexemeAttribute, PrimaryPos, Root, SecondaryPos, Sequence};

use super::RootFinder;
use crate::error::BuildError;
use crate::morphotactics::SuffixFormTemplate;
use crate::phonetics::PhoneticsEngine;

const CARDINAL_PATTERNS: [&str; 2] = [r"^[-+]?\d+(,\d)?\d*$", r"^[-+]?(\d{1,3}\.)+\d{3}(,\d)?\d*$"];
const ORDINAL_PATTERNS: [&str; 2] = [r"^[-+]?\d+\.$", r"^[-+]?(\d{1,3}\.)+\d{3}\.$"];

/// Ordinal suffix applied to the spelled-out number.
const ORDINAL_TEMPLATE: &str = "+IncI";

/// The only digit whose spoken form ends in a stop that voices: dört.
const VOICING_DIGIT: char = '4';

fn compile(patterns: [&str; 2]) -> Result<Vec<Regex>, regex::Error> {
    patterns.into_iter().map(Regex::new).collect()
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

/// The character right after `partial` in `whole`.
fn next_char(partial: &Sequence, whole: &Sequence) -> Option<char> {
    whole.char_at(partial.len()).map(|c| c.value())
}

/// An apostrophe after a number must be followed by a suffix.
fn dangling_apostrophe(partial: &Sequence, whole: &Sequence) -> bool {
    next_char(partial, whole) == Some('\'') && whole.len() == partial.len() + 1
}

fn numeral_root(surface: &Sequence, lemma: &str, secondary: SecondaryPos) -> Arc<Root> {
    let lexeme = Lexeme::with_root(lemma, surface.as_str(), PrimaryPos::Numeral, Some(secondary));
    let attributes = calculate_phonetic_attributes(&Sequence::new(lemma), None);
    Arc::new(Root::numeral(surface.clone(), lexeme, attributes))
}

// ---------------------------------------------------------------------------
// Cardinal
// ---------------------------------------------------------------------------

/// Cardinal digit strings. The lemma is the spoken form; phonetic
/// attributes come from it, so "12'ye" harmonizes with "on iki".
pub struct CardinalDigitsRootFinder {
    patterns: Vec<Regex>,
}

impl CardinalDigitsRootFinder {
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self { patterns: compile(CARDINAL_PATTERNS)? })
    }
}

impl RootFinder for CardinalDigitsRootFinder {
    fn handles(&self, partial: &Sequence, _whole: &Sequence) -> bool {
        self.patterns.iter().any(|p| p.is_match(partial.as_str()))
    }

    fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Vec<Arc<Root>> {
        if next_char(partial, whole).is_some_and(is_numeric_char) || dangling_apostrophe(partial, whole) {
            return Vec::new();
        }
        let Some(text) = digits_to_text(partial.as_str()) else {
            return Vec::new();
        };
        vec![numeral_root(partial, &text, SecondaryPos::DigitsCardinal)]
    }
}

// ---------------------------------------------------------------------------
// Ordinal
// ---------------------------------------------------------------------------

/// Ordinal digit strings, written with a trailing period. The lemma is the
/// spoken ordinal: "3." is "üçüncü", "4." is "dördüncü".
pub struct OrdinalDigitsRootFinder {
    patterns: Vec<Regex>,
    template: SuffixFormTemplate,
    engine: PhoneticsEngine,
}

impl OrdinalDigitsRootFinder {
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self {
            patterns: compile(ORDINAL_PATTERNS)?,
            template: SuffixFormTemplate::parse(ORDINAL_TEMPLATE)?,
            engine: PhoneticsEngine::default(),
        })
    }

    /// Spoken ordinal for a digit string without its trailing period.
    fn ordinal_text(&self, digits: &str) -> Option<String> {
        let cardinal = digits_to_text(digits)?;
        let attributes: &[LexemeAttribute] =
            if digits.ends_with(VOICING_DIGIT) { &[] } else { &[LexemeAttribute::NoVoicing] };
        let (stem, suffix) = self.engine.apply(&Sequence::new(&cardinal), &self.template, attributes)?;
        Some(stem + &suffix)
    }
}

impl RootFinder for OrdinalDigitsRootFinder {
    fn handles(&self, partial: &Sequence, _whole: &Sequence) -> bool {
        self.patterns.iter().any(|p| p.is_match(partial.as_str()))
    }

    fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Vec<Arc<Root>> {
        if next_char(partial, whole).is_some_and(|c| c != '\'') || dangling_apostrophe(partial, whole) {
            return Vec::new();
        }
        let Some(digits) = partial.as_str().strip_suffix('.') else {
            return Vec::new();
        };
        match self.ordinal_text(digits) {
            Some(text) => vec![numeral_root(partial, &text, SecondaryPos::DigitsOrdinal)],
            None => Vec::new(),
        }
    }
}
