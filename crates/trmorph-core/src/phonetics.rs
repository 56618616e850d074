// Phonetic attributes of surface strings

use std::fmt;

use crate::letter::{letter_name, letter_of};
use crate::lexicon::LexemeAttribute;
use crate::sequence::Sequence;

/// A phonetic property of a surface string, derived from its first letter,
/// last letter and last vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterNotVoiceless,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
}

impl PhoneticAttribute {
    pub const ALL: [PhoneticAttribute; 12] = [
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterNotVoiceless,
        Self::LastLetterVoicelessStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::HasNoVowel,
    ];

    pub fn short_form(self) -> &'static str {
        match self {
            Self::LastLetterVowel => "LLV",
            Self::LastLetterConsonant => "LLC",
            Self::LastVowelFrontal => "LVF",
            Self::LastVowelBack => "LVB",
            Self::LastVowelRounded => "LVR",
            Self::LastVowelUnrounded => "LVuR",
            Self::LastLetterVoiceless => "LLVless",
            Self::LastLetterNotVoiceless => "LLNotVless",
            Self::LastLetterVoicelessStop => "LLStop",
            Self::FirstLetterVowel => "FLV",
            Self::FirstLetterConsonant => "FLC",
            Self::HasNoVowel => "NoVow",
        }
    }

    pub fn from_short_form(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.short_form() == s)
    }

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

// ---------------------------------------------------------------------------
// Attribute set
// ---------------------------------------------------------------------------

/// A set of phonetic attributes stored as a bitset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneticAttributes(u16);

impl PhoneticAttributes {
    pub const EMPTY: Self = Self(0);

    pub fn contains(self, attribute: PhoneticAttribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    pub fn insert(&mut self, attribute: PhoneticAttribute) {
        self.0 |= attribute.bit();
    }

    pub fn remove(&mut self, attribute: PhoneticAttribute) {
        self.0 &= !attribute.bit();
    }

    pub fn with(mut self, attribute: PhoneticAttribute) -> Self {
        self.insert(attribute);
        self
    }

    pub fn without(mut self, attribute: PhoneticAttribute) -> Self {
        self.remove(attribute);
        self
    }

    /// Keep only the attributes that are also in `other`.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PhoneticAttribute> {
        PhoneticAttribute::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<PhoneticAttribute> for PhoneticAttributes {
    fn from_iter<T: IntoIterator<Item = PhoneticAttribute>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl fmt::Debug for PhoneticAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(PhoneticAttribute::short_form)).finish()
    }
}

/// Constraint a root (or suffix form) places on the next non-empty suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhoneticExpectation {
    /// The next consumed character must be a vowel.
    VowelStart,
    /// The next consumed character, if any, must not be a vowel.
    ConsonantStart,
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

use PhoneticAttribute::*;

/// Compute the phonetic attributes of `surface`.
///
/// Characters that are not letters (digits, apostrophes, spaces) are skipped.
/// A surface without letters inherits `predecessor` unchanged; a surface
/// without vowels takes its vowel attributes from `predecessor`.
pub fn calculate_phonetic_attributes(
    surface: &Sequence,
    predecessor: Option<PhoneticAttributes>,
) -> PhoneticAttributes {
    let (Some(first), Some(last)) = (surface.first_letter(), surface.last_letter()) else {
        return predecessor.unwrap_or_default();
    };

    let mut attrs = PhoneticAttributes::EMPTY;
    attrs.insert(if first.is_vowel() { FirstLetterVowel } else { FirstLetterConsonant });

    if last.is_vowel() {
        attrs.insert(LastLetterVowel);
    } else {
        attrs.insert(LastLetterConsonant);
    }
    match last.letter() {
        Some(l) if l.voiceless => {
            attrs.insert(LastLetterVoiceless);
            if l.is_stop() {
                attrs.insert(LastLetterVoicelessStop);
            }
        }
        _ => attrs.insert(LastLetterNotVoiceless),
    }

    match surface.last_vowel().and_then(|c| c.letter()) {
        Some(vowel) => {
            attrs.insert(if vowel.frontal { LastVowelFrontal } else { LastVowelBack });
            attrs.insert(if vowel.rounded { LastVowelRounded } else { LastVowelUnrounded });
        }
        None => {
            attrs.insert(HasNoVowel);
            if let Some(prev) = predecessor {
                for a in [LastVowelFrontal, LastVowelBack, LastVowelRounded, LastVowelUnrounded] {
                    if prev.contains(a) {
                        attrs.insert(a);
                    }
                }
            }
        }
    }
    attrs
}

/// Attributes after appending `c` to a surface with `attrs`.
///
/// Non-letters leave the attributes unchanged. A consonant keeps the last
/// vowel information of what precedes it.
pub fn append_letter(mut attrs: PhoneticAttributes, c: char) -> PhoneticAttributes {
    let Some(letter) = letter_of(c) else {
        return attrs;
    };
    for a in [LastLetterVowel, LastLetterConsonant, LastLetterVoiceless, LastLetterNotVoiceless] {
        attrs.remove(a);
    }
    attrs.remove(LastLetterVoicelessStop);
    if letter.vowel {
        attrs.insert(LastLetterVowel);
        attrs.insert(LastLetterNotVoiceless);
        for a in [LastVowelFrontal, LastVowelBack, LastVowelRounded, LastVowelUnrounded, HasNoVowel] {
            attrs.remove(a);
        }
        attrs.insert(if letter.frontal { LastVowelFrontal } else { LastVowelBack });
        attrs.insert(if letter.rounded { LastVowelRounded } else { LastVowelUnrounded });
    } else {
        attrs.insert(LastLetterConsonant);
        if letter.voiceless {
            attrs.insert(LastLetterVoiceless);
            if letter.is_stop() {
                attrs.insert(LastLetterVoicelessStop);
            }
        } else {
            attrs.insert(LastLetterNotVoiceless);
        }
    }
    attrs
}

/// Attributes after appending `suffix` to a surface with `predecessor`.
///
/// Only the appended letters are looked at, so whatever the predecessor
/// carries (root irregularities, a spelled-out abbreviation) survives
/// suffixes without vowels and apostrophes.
pub fn calculate_appended_attributes(predecessor: PhoneticAttributes, suffix: &str) -> PhoneticAttributes {
    suffix.chars().fold(predecessor, append_letter)
}

/// Compute the attributes of an all-caps abbreviation as it is read aloud.
///
/// Abbreviations that end in a vowel or carry at least two vowels are read
/// as words ("NATO", "ASELSAN"). Others are spelled letter by letter, so
/// "TBMM" sounds like "tebememe" and takes "'ye".
pub fn calculate_abbreviation_attributes(surface: &Sequence) -> PhoneticAttributes {
    let vowels = surface.chars().iter().filter(|c| c.is_vowel()).count();
    let ends_in_vowel = surface.last_letter().is_some_and(|c| c.is_vowel());
    if ends_in_vowel || vowels >= 2 {
        return calculate_phonetic_attributes(surface, None);
    }
    let spoken: String = surface.chars().iter().filter_map(|c| letter_name(c.value())).collect();
    calculate_phonetic_attributes(&Sequence::new(&spoken), None)
}

/// Compute root attributes, adjusted by the lexeme's irregularity markers.
///
/// `InverseHarmony` swaps front and back; `NoVoicing` clears the voiceless
/// stop marker so the root never voices.
pub fn calculate_with_lexeme_attributes<'a>(
    surface: &Sequence,
    lexeme_attributes: impl IntoIterator<Item = &'a LexemeAttribute>,
) -> PhoneticAttributes {
    let attrs = calculate_phonetic_attributes(surface, None);
    adjust_for_lexeme(attrs, lexeme_attributes)
}

/// Apply lexeme irregularity markers to already computed attributes.
pub fn adjust_for_lexeme<'a>(
    mut attrs: PhoneticAttributes,
    lexeme_attributes: impl IntoIterator<Item = &'a LexemeAttribute>,
) -> PhoneticAttributes {
    for attribute in lexeme_attributes {
        match attribute {
            LexemeAttribute::InverseHarmony => {
                if attrs.contains(LastVowelBack) {
                    attrs = attrs.without(LastVowelBack).with(LastVowelFrontal);
                } else if attrs.contains(LastVowelFrontal) {
                    attrs = attrs.without(LastVowelFrontal).with(LastVowelBack);
                }
            }
            LexemeAttribute::NoVoicing => attrs.remove(LastLetterVoicelessStop),
            _ => {}
        }
    }
    attrs
}
