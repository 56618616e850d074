// Noun compounds carrying a third-person possessive: "atkuyruğu", "suborusu"

use std::sync::Arc;

use trmorph_core::{LexemeAttribute, PrimaryPos, Root, RootKind, Sequence};

use super::RootFinder;

/// Shortest prefix worth trying as a compound.
pub const MIN_COMPOUND_LENGTH: usize = 5;

const POSSESSIVE_VOWELS: [char; 4] = ['i', 'ı', 'u', 'ü'];

/// Guesses compounds by stripping the possessive ending off the prefix and
/// looking the rest up with an inner finder.
///
/// The guess is blind: any noun followed by a third-person possessive and
/// an "n" looks like a compound, so "kitabını" also yields "kitabı".
pub struct BruteForceCompoundRootFinder<F> {
    inner: F,
}

impl<F: RootFinder> BruteForceCompoundRootFinder<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    fn inner_roots(&self, stem: &Sequence, whole: &Sequence) -> Vec<Arc<Root>> {
        if self.inner.handles(stem, whole) { self.inner.find_roots(stem, whole) } else { Vec::new() }
    }
}

impl<F: RootFinder> RootFinder for BruteForceCompoundRootFinder<F> {
    fn handles(&self, partial: &Sequence, whole: &Sequence) -> bool {
        let len = partial.len();
        if len < MIN_COMPOUND_LENGTH || whole.len() < len + 2 {
            return false;
        }
        let tail_upper = partial.chars()[len - 2..].iter().any(|c| c.is_upper());
        let possessive = partial.last_char().is_some_and(|c| POSSESSIVE_VOWELS.contains(&c.value()));
        let buffer = whole.char_at(len).is_some_and(|c| c.value() == 'n');
        !tail_upper && possessive && buffer
    }

    fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Vec<Arc<Root>> {
        let len = partial.len();
        let mut stems = vec![partial.prefix(len - 1)];
        if partial.char_at(len - 2).is_some_and(|c| c.value() == 's') {
            stems.push(partial.prefix(len - 2));
        }

        stems
            .iter()
            .flat_map(|stem| self.inner_roots(stem, whole))
            .filter(|root| root.lexeme().primary_pos == PrimaryPos::Noun)
            .map(|root| {
                let mut lexeme = root.lexeme().clone().with_attribute(LexemeAttribute::CompoundP3sg);
                lexeme.lemma = partial.as_str().to_string();
                lexeme.lemma_root = partial.as_str().to_string();
                Arc::new(root.with_lexeme(lexeme, RootKind::Dynamic))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rootfinder::DictionaryRootFinder;
    use trmorph_core::{Lexeme, RootMap};

    fn finder() -> BruteForceCompoundRootFinder<DictionaryRootFinder> {
        let lexemes = [
            Lexeme::new("atkuyruk", PrimaryPos::Noun, None),
            Lexeme::new("suboru", PrimaryPos::Noun, None),
            Lexeme::new("kutu", PrimaryPos::Adjective, None),
        ];
        BruteForceCompoundRootFinder::new(DictionaryRootFinder::new(Arc::new(RootMap::from_lexemes(&lexemes))))
    }

    fn found(partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let f = finder();
        let (partial, whole) = (Sequence::new(partial), Sequence::new(whole));
        if f.handles(&partial, &whole) { f.find_roots(&partial, &whole) } else { Vec::new() }
    }

    #[test]
    fn possessive_vowel_before_n() {
        let roots = found("atkuyruğu", "atkuyruğunu");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].sequence().as_str(), "atkuyruğ");
        assert_eq!(roots[0].lexeme().lemma, "atkuyruğu");
        assert!(roots[0].lexeme().has_attribute(LexemeAttribute::CompoundP3sg));
        assert_eq!(roots[0].kind(), RootKind::Dynamic);
    }

    #[test]
    fn buffer_s_after_a_vowel() {
        let roots = found("suborusu", "suborusuna");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].sequence().as_str(), "suboru");
        assert_eq!(roots[0].lexeme().lemma_root, "suborusu");
    }

    #[test]
    fn rejects_short_or_unbuffered_words() {
        assert!(found("atkuyruğu", "atkuyruğu").is_empty());
        assert!(found("atkuyruğu", "atkuyruğuyla").is_empty());
        assert!(found("kutu", "kutunu").is_empty());
        assert!(found("kutusu", "kutusunu").is_empty());
    }
}
