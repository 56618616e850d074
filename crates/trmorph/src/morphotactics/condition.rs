// Declarative conditions on suffix forms

use trmorph_core::{LexemeAttribute, PhoneticAttribute, SecondaryPos};

use super::SuffixId;
use crate::morpheme::MorphemeContainer;

/// A predicate over a morpheme container.
///
/// Used as a form's precondition (checked before applying it), its
/// postcondition (checked on the result) and its post-derivative condition
/// (checked on the result of the next derivation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The suffix was applied since the last derivation.
    ComesAfter(SuffixId),
    /// The suffix was applied with this exact template since the last
    /// derivation.
    ComesAfterForm(SuffixId, String),
    RootHasAttribute(LexemeAttribute),
    RootHasSecondaryPos(SecondaryPos),
    HasPhoneticAttribute(PhoneticAttribute),
    /// Last letter of the consumed surface (lowercased).
    LastLetterIs(char),
    /// Last character of the consumed surface, letter or not.
    LastConsumedCharIs(char),
    /// No derivation has been applied yet.
    Underived,
    Not(Box<Condition>),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn is_satisfied_by(&self, container: &MorphemeContainer) -> bool {
        match self {
            Condition::ComesAfter(suffix) => container.has_suffix_since_derivation(*suffix),
            Condition::ComesAfterForm(suffix, template) => {
                container.has_applied_form_since_derivation(*suffix, template)
            }
            Condition::RootHasAttribute(attribute) => container.lexeme().has_attribute(*attribute),
            Condition::RootHasSecondaryPos(pos) => container.lexeme().secondary_pos == Some(*pos),
            Condition::HasPhoneticAttribute(attribute) => {
                container.phonetic_attributes().contains(*attribute)
            }
            Condition::LastLetterIs(c) => container.last_letter() == Some(*c),
            Condition::LastConsumedCharIs(c) => container.last_consumed_char() == Some(*c),
            Condition::Underived => container.is_underived(),
            Condition::Not(inner) => !inner.is_satisfied_by(container),
            Condition::All(all) => all.iter().all(|c| c.is_satisfied_by(container)),
            Condition::Any(any) => any.iter().any(|c| c.is_satisfied_by(container)),
        }
    }

    pub fn negate(self) -> Self {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }

    pub fn and(self, other: Condition) -> Self {
        match self {
            Condition::All(mut all) => {
                all.push(other);
                Condition::All(all)
            }
            first => Condition::All(vec![first, other]),
        }
    }

    pub fn or(self, other: Condition) -> Self {
        match self {
            Condition::Any(mut any) => {
                any.push(other);
                Condition::Any(any)
            }
            first => Condition::Any(vec![first, other]),
        }
    }

    pub fn comes_after_any(suffixes: &[SuffixId]) -> Self {
        Condition::Any(suffixes.iter().copied().map(Condition::ComesAfter).collect())
    }

    pub fn phonetic(attribute: PhoneticAttribute) -> Self {
        Condition::HasPhoneticAttribute(attribute)
    }
}
