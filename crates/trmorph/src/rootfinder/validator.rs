// Consistency checks on roots proposed by finders

use trmorph_core::{LexemeAttribute, Root, Sequence};

use crate::error::ParseError;

/// Rejects roots that cannot be anchored at the prefix they were found for.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootValidator;

impl RootValidator {
    pub fn new() -> Self {
        Self
    }

    /// A root must be a non-empty prefix of `partial`, equal to it unless
    /// the lexeme is a compound carrying its own possessive, and name a
    /// lemma.
    pub fn validate(&self, root: &Root, partial: &Sequence) -> Result<(), ParseError> {
        let invalid = |reason| ParseError::InvalidRoot {
            root: root.sequence().as_str().to_string(),
            partial: partial.as_str().to_string(),
            reason,
        };
        let surface = root.sequence();
        if surface.is_empty() {
            return Err(invalid("empty root surface"));
        }
        if !partial.starts_with(surface.as_str()) {
            return Err(invalid("root is not a prefix of the input"));
        }
        if surface.len() < partial.len() && !root.lexeme().has_attribute(LexemeAttribute::CompoundP3sg) {
            return Err(invalid("shorter root without compound marker"));
        }
        if root.lexeme().lemma.is_empty() || root.lexeme().lemma_root.is_empty() {
            return Err(invalid("empty lemma"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trmorph_core::phonetics::PhoneticAttributes;
    use trmorph_core::{Lexeme, PrimaryPos};

    fn root(surface: &str, lexeme: Lexeme) -> Root {
        Root::dynamic(Sequence::new(surface), lexeme, PhoneticAttributes::EMPTY)
    }

    #[test]
    fn exact_prefix_is_valid() {
        let r = root("kitap", Lexeme::new("kitap", PrimaryPos::Noun, None));
        assert!(RootValidator::new().validate(&r, &Sequence::new("kitap")).is_ok());
    }

    #[test]
    fn shorter_roots_need_the_compound_marker() {
        let plain = Lexeme::new("suboru", PrimaryPos::Noun, None);
        let partial = Sequence::new("suborusu");
        assert!(RootValidator::new().validate(&root("suboru", plain.clone()), &partial).is_err());
        let compound = plain.with_attribute(LexemeAttribute::CompoundP3sg);
        assert!(RootValidator::new().validate(&root("suboru", compound), &partial).is_ok());
    }

    #[test]
    fn mismatched_or_empty_roots_are_invalid() {
        let v = RootValidator::new();
        let lexeme = Lexeme::new("masa", PrimaryPos::Noun, None);
        assert!(v.validate(&root("masa", lexeme.clone()), &Sequence::new("ev")).is_err());
        assert!(v.validate(&root("", lexeme), &Sequence::new("ev")).is_err());
        let nameless = Lexeme::with_root("", "ev", PrimaryPos::Noun, None);
        assert!(v.validate(&root("ev", nameless), &Sequence::new("ev")).is_err());
    }
}
