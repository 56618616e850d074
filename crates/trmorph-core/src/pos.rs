// Part-of-speech enums

use std::fmt;
use std::str::FromStr;

use crate::error::LexiconError;

/// Primary part of speech. Also used as the syntactic category of suffix
/// graph states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Adverb,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    Conjunction,
    Interjection,
    Question,
    Punctuation,
}

impl PrimaryPos {
    pub const ALL: [PrimaryPos; 11] = [
        Self::Noun,
        Self::Adjective,
        Self::Adverb,
        Self::Verb,
        Self::Pronoun,
        Self::Numeral,
        Self::Determiner,
        Self::Conjunction,
        Self::Interjection,
        Self::Question,
        Self::Punctuation,
    ];

    pub fn short_form(self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Adjective => "Adj",
            Self::Adverb => "Adv",
            Self::Verb => "Verb",
            Self::Pronoun => "Pron",
            Self::Numeral => "Num",
            Self::Determiner => "Det",
            Self::Conjunction => "Conj",
            Self::Interjection => "Interj",
            Self::Question => "Ques",
            Self::Punctuation => "Punc",
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

impl FromStr for PrimaryPos {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_form() == s)
            .ok_or_else(|| LexiconError::UnknownPrimaryPos(s.to_string()))
    }
}

/// Secondary part of speech refining the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryPos {
    ProperNoun,
    Abbreviation,
    Time,
    Personal,
    Demonstrative,
    Reflexive,
    QuestionPronoun,
    Cardinal,
    Ordinal,
    DigitsCardinal,
    DigitsOrdinal,
}

impl SecondaryPos {
    pub const ALL: [SecondaryPos; 11] = [
        Self::ProperNoun,
        Self::Abbreviation,
        Self::Time,
        Self::Personal,
        Self::Demonstrative,
        Self::Reflexive,
        Self::QuestionPronoun,
        Self::Cardinal,
        Self::Ordinal,
        Self::DigitsCardinal,
        Self::DigitsOrdinal,
    ];

    pub fn short_form(self) -> &'static str {
        match self {
            Self::ProperNoun => "Prop",
            Self::Abbreviation => "Abbr",
            Self::Time => "Time",
            Self::Personal => "Pers",
            Self::Demonstrative => "Demons",
            Self::Reflexive => "Reflex",
            Self::QuestionPronoun => "Ques",
            Self::Cardinal => "Card",
            Self::Ordinal => "Ord",
            Self::DigitsCardinal => "DigitsC",
            Self::DigitsOrdinal => "DigitsO",
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

impl FromStr for SecondaryPos {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_form() == s)
            .ok_or_else(|| LexiconError::UnknownSecondaryPos(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_forms() {
        assert_eq!("Adj".parse::<PrimaryPos>().unwrap(), PrimaryPos::Adjective);
        assert_eq!("DigitsC".parse::<SecondaryPos>().unwrap(), SecondaryPos::DigitsCardinal);
        assert!(matches!(
            "Adjective".parse::<PrimaryPos>(),
            Err(LexiconError::UnknownPrimaryPos(s)) if s == "Adjective"
        ));
    }
}
