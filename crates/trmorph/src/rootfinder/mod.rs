// Root candidate discovery
//
// Finders are consulted in order for every prefix of the input. A finder
// registered with `StopWhenHandled` ends the search for that prefix as soon
// as it claims it, whether or not it returned any roots.

mod compound;
mod dictionary;
mod digits;
mod proper_noun;
mod punctuation;
mod validator;

pub use compound::{BruteForceCompoundRootFinder, MIN_COMPOUND_LENGTH};
pub use dictionary::DictionaryRootFinder;
pub use digits::{CardinalDigitsRootFinder, OrdinalDigitsRootFinder};
pub use proper_noun::{ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder};
pub use punctuation::PunctuationRootFinder;
pub use validator::RootValidator;

use std::sync::Arc;

use trmorph_core::{Root, Sequence};

use crate::error::ParseError;

/// Proposes roots anchored at a prefix of the input.
pub trait RootFinder: Send + Sync {
    /// Cheap pre-check. May claim prefixes it then finds nothing for, but
    /// must claim every prefix it would return roots for.
    fn handles(&self, partial: &Sequence, whole: &Sequence) -> bool;

    /// Roots whose surface ends exactly at `partial` (compound finders may
    /// return shorter ones).
    fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Vec<Arc<Root>>;
}

/// What the chain does after a finder claims a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderPolicy {
    Continue,
    StopWhenHandled,
}

/// Ordered list of finders with their policies.
#[derive(Default)]
pub struct RootFinderChain {
    finders: Vec<(Box<dyn RootFinder>, FinderPolicy)>,
    validator: RootValidator,
}

impl RootFinderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, finder: impl RootFinder + 'static, policy: FinderPolicy) -> Self {
        self.push(Box::new(finder), policy);
        self
    }

    pub fn push(&mut self, finder: Box<dyn RootFinder>, policy: FinderPolicy) {
        self.finders.push((finder, policy));
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    /// Validated roots for `partial`, in finder order, without duplicates.
    ///
    /// Two roots with the same surface, lemma and parts of speech are one
    /// reading; the one from the earlier finder is kept.
    pub fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Result<Vec<Arc<Root>>, ParseError> {
        let mut found: Vec<Arc<Root>> = Vec::new();
        for (finder, policy) in &self.finders {
            if !finder.handles(partial, whole) {
                continue;
            }
            for root in finder.find_roots(partial, whole) {
                self.validator.validate(&root, partial)?;
                if !found.iter().any(|r| same_reading(r, &root)) {
                    found.push(root);
                }
            }
            if *policy == FinderPolicy::StopWhenHandled {
                break;
            }
        }
        Ok(found)
    }
}

fn same_reading(a: &Root, b: &Root) -> bool {
    let (x, y) = (a.lexeme(), b.lexeme());
    a.sequence() == b.sequence()
        && x.lemma == y.lemma
        && x.primary_pos == y.primary_pos
        && x.secondary_pos == y.secondary_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use trmorph_core::{Lexeme, PrimaryPos, RootKind, RootMap, SecondaryPos};

    fn root_map(words: &[&str]) -> Arc<RootMap> {
        let lexemes: Vec<_> = words.iter().map(|w| Lexeme::new(w, PrimaryPos::Noun, None)).collect();
        Arc::new(RootMap::from_lexemes(&lexemes))
    }

    fn lemmas(chain: &RootFinderChain, partial: &str, whole: &str) -> Vec<String> {
        chain
            .find_roots(&Sequence::new(partial), &Sequence::new(whole))
            .unwrap()
            .iter()
            .map(|r| r.lexeme().lemma.clone())
            .collect()
    }

    /// Claims everything, finds nothing.
    struct Greedy;

    impl RootFinder for Greedy {
        fn handles(&self, _partial: &Sequence, _whole: &Sequence) -> bool {
            true
        }

        fn find_roots(&self, _partial: &Sequence, _whole: &Sequence) -> Vec<Arc<Root>> {
            Vec::new()
        }
    }

    #[test]
    fn stop_policy_hides_later_finders() {
        let roots = root_map(&["ev"]);
        let chain = RootFinderChain::new()
            .with(Greedy, FinderPolicy::StopWhenHandled)
            .with(DictionaryRootFinder::new(Arc::clone(&roots)), FinderPolicy::Continue);
        assert!(lemmas(&chain, "ev", "evler").is_empty());

        let chain = RootFinderChain::new()
            .with(Greedy, FinderPolicy::Continue)
            .with(DictionaryRootFinder::new(roots), FinderPolicy::Continue);
        assert_eq!(lemmas(&chain, "ev", "evler"), ["ev"]);
    }

    #[test]
    fn duplicate_roots_are_merged() {
        let roots = root_map(&["ev"]);
        let chain = RootFinderChain::new()
            .with(DictionaryRootFinder::new(Arc::clone(&roots)), FinderPolicy::Continue)
            .with(DictionaryRootFinder::new(roots), FinderPolicy::Continue);
        assert_eq!(chain.len(), 2);
        assert_eq!(lemmas(&chain, "ev", "ev"), ["ev"]);
    }

    #[test]
    fn dictionary_and_guessed_proper_nouns_are_one_reading() {
        let lexeme = Lexeme::new("Ali", PrimaryPos::Noun, Some(SecondaryPos::ProperNoun));
        let roots = Arc::new(RootMap::from_lexemes([&lexeme]));
        let chain = RootFinderChain::new()
            .with(DictionaryRootFinder::new(roots), FinderPolicy::Continue)
            .with(ProperNounWithoutApostropheRootFinder, FinderPolicy::Continue);
        let found = chain.find_roots(&Sequence::new("Ali"), &Sequence::new("Ali")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind(), RootKind::Dictionary);
    }

    /// Returns a root that does not match the prefix it was asked about.
    struct Broken;

    impl RootFinder for Broken {
        fn handles(&self, _partial: &Sequence, _whole: &Sequence) -> bool {
            true
        }

        fn find_roots(&self, _partial: &Sequence, _whole: &Sequence) -> Vec<Arc<Root>> {
            let lexeme = Lexeme::new("masa", PrimaryPos::Noun, None);
            RootMap::from_lexemes([&lexeme]).iter().cloned().collect()
        }
    }

    #[test]
    fn invalid_roots_fail_the_call() {
        let chain = RootFinderChain::new().with(Broken, FinderPolicy::Continue);
        let err = chain.find_roots(&Sequence::new("ev"), &Sequence::new("ev")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRoot { .. }));
    }
}
