// Lexemes, roots and the root map

mod generator;
mod loader;
mod root;

pub use generator::RootGenerator;
pub use loader::{load_lexicon, parse_lexicon_line};
pub use root::{Root, RootKind, RootMap};

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::LexiconError;
use crate::pos::{PrimaryPos, SecondaryPos};

/// Irregularity markers attached to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeAttribute {
    Voicing,
    NoVoicing,
    Doubling,
    LastVowelDrop,
    InverseHarmony,
    AoristI,
    AoristA,
    CausativeT,
    CausativeIr,
    CausativeDIr,
    PassiveIn,
    CompoundP3sg,
    NoSuffix,
}

impl LexemeAttribute {
    pub const ALL: [LexemeAttribute; 13] = [
        Self::Voicing,
        Self::NoVoicing,
        Self::Doubling,
        Self::LastVowelDrop,
        Self::InverseHarmony,
        Self::AoristI,
        Self::AoristA,
        Self::CausativeT,
        Self::CausativeIr,
        Self::CausativeDIr,
        Self::PassiveIn,
        Self::CompoundP3sg,
        Self::NoSuffix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Voicing => "Voicing",
            Self::NoVoicing => "NoVoicing",
            Self::Doubling => "Doubling",
            Self::LastVowelDrop => "LastVowelDrop",
            Self::InverseHarmony => "InverseHarmony",
            Self::AoristI => "Aorist_I",
            Self::AoristA => "Aorist_A",
            Self::CausativeT => "Causative_t",
            Self::CausativeIr => "Causative_Ir",
            Self::CausativeDIr => "Causative_dIr",
            Self::PassiveIn => "Passive_In",
            Self::CompoundP3sg => "CompoundP3sg",
            Self::NoSuffix => "NoSuffix",
        }
    }
}

impl FromStr for LexemeAttribute {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| LexiconError::UnknownAttribute(s.to_string()))
    }
}

impl fmt::Display for LexemeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Lexeme
// ---------------------------------------------------------------------------

/// A dictionary word: lemma, the root form suffixes attach to, parts of
/// speech and irregularity markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    pub lemma: String,
    pub lemma_root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: Option<SecondaryPos>,
    pub attributes: BTreeSet<LexemeAttribute>,
}

impl Lexeme {
    /// Create a lexeme; verb lemma roots drop the infinitive `-mak`/`-mek`.
    pub fn new(lemma: &str, primary_pos: PrimaryPos, secondary_pos: Option<SecondaryPos>) -> Self {
        let lemma_root = if primary_pos == PrimaryPos::Verb {
            lemma.strip_suffix("mak").or_else(|| lemma.strip_suffix("mek")).unwrap_or(lemma)
        } else {
            lemma
        };
        Self::with_root(lemma, lemma_root, primary_pos, secondary_pos)
    }

    pub fn with_root(
        lemma: &str,
        lemma_root: &str,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
    ) -> Self {
        Self {
            lemma: lemma.to_string(),
            lemma_root: lemma_root.to_string(),
            primary_pos,
            secondary_pos,
            attributes: BTreeSet::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: LexemeAttribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    pub fn has_attribute(&self, attribute: LexemeAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.lemma, self.primary_pos)?;
        if let Some(secondary) = self.secondary_pos {
            write!(f, "_{secondary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_lemma_root_drops_infinitive() {
        assert_eq!(Lexeme::new("gelmek", PrimaryPos::Verb, None).lemma_root, "gel");
        assert_eq!(Lexeme::new("okumak", PrimaryPos::Verb, None).lemma_root, "oku");
        assert_eq!(Lexeme::new("yemek", PrimaryPos::Noun, None).lemma_root, "yemek");
    }

    #[test]
    fn attribute_names_parse() {
        assert_eq!("Aorist_A".parse::<LexemeAttribute>().unwrap(), LexemeAttribute::AoristA);
        assert!("Sometimes".parse::<LexemeAttribute>().is_err());
    }

    #[test]
    fn display_includes_parts_of_speech() {
        let l = Lexeme::new("ben", PrimaryPos::Pronoun, Some(SecondaryPos::Personal));
        assert_eq!(l.to_string(), "ben(Pron)_Pers");
    }
}
