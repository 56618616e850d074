// Contextless morphological parsing
//
// A parse seeds one candidate per root found for every prefix of the input,
// forces mandatory transitions, then extends all candidates round by round
// over the suffix graph until none is left.

mod applier;
mod builder;
mod mandatory;
mod observer;
mod predefined;

pub use applier::SuffixApplier;
pub use builder::{MorphologicParserBuilder, full_parser, simple_parser};
pub use observer::{NoopObserver, ParseObserver, Rejection};
pub use predefined::PredefinedPaths;

use std::sync::Arc;

use trmorph_core::{Root, Sequence};

use crate::error::ParseError;
use crate::morpheme::MorphemeContainer;
use crate::rootfinder::RootFinderChain;

/// A parser turning one token into every complete analysis.
///
/// An input with no analysis yields an empty list; errors mean a broken
/// grammar or root finder.
pub trait MorphologicParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<Vec<MorphemeContainer>, ParseError>;

    /// Parse every input, keeping their order.
    fn parse_all(&self, inputs: &[&str]) -> Result<Vec<Vec<MorphemeContainer>>, ParseError> {
        inputs.iter().map(|input| self.parse(input)).collect()
    }
}

/// Breadth-first parser over a shared suffix graph, root finder chain and
/// predefined paths. Immutable once built; one parser serves any number of
/// threads.
pub struct ContextlessMorphologicParser {
    applier: SuffixApplier,
    chain: RootFinderChain,
    predefined: PredefinedPaths,
}

impl ContextlessMorphologicParser {
    pub fn new(applier: SuffixApplier, chain: RootFinderChain, predefined: PredefinedPaths) -> Self {
        Self { applier, chain, predefined }
    }

    pub fn applier(&self) -> &SuffixApplier {
        &self.applier
    }

    pub fn predefined_paths(&self) -> &PredefinedPaths {
        &self.predefined
    }

    /// Parse `input`, reporting every search event to `observer`.
    pub fn parse_with_observer(
        &self,
        input: &str,
        observer: &mut dyn ParseObserver,
    ) -> Result<Vec<MorphemeContainer>, ParseError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let whole = Sequence::new(input);
        let shared: Arc<str> = Arc::from(input);

        let mut frontier = Vec::new();
        for len in 1..=whole.len() {
            let partial = whole.prefix(len);
            for root in self.chain.find_roots(&partial, &whole)? {
                for seed in self.seeds(&root, &shared)? {
                    observer.candidate_seeded(&seed);
                    frontier.extend(mandatory::apply_mandatory_transitions(&self.applier, seed, observer));
                }
            }
        }

        self.traverse(&whole, frontier, observer)
    }

    /// Initial containers for `root`: its predefined paths if it has any,
    /// otherwise the root at its default state.
    fn seeds(&self, root: &Arc<Root>, input: &Arc<str>) -> Result<Vec<MorphemeContainer>, ParseError> {
        if self.predefined.has_paths_for_root(root) {
            return Ok(self.predefined.paths(root).iter().filter_map(|path| path.reanchored(input)).collect());
        }
        let state = self.applier.graph().default_state_for_root(root).ok_or_else(|| {
            ParseError::NoDefaultState {
                root: root.sequence().as_str().to_string(),
                pos: root.lexeme().primary_pos.to_string(),
            }
        })?;
        Ok(MorphemeContainer::new(Arc::clone(root), Arc::clone(state), Arc::clone(input)).into_iter().collect())
    }

    fn traverse(
        &self,
        whole: &Sequence,
        mut frontier: Vec<MorphemeContainer>,
        observer: &mut dyn ParseObserver,
    ) -> Result<Vec<MorphemeContainer>, ParseError> {
        // Every consuming step eats a character and, between two of them,
        // no suffix repeats; more rounds than this means a zero-form cycle.
        let max_rounds = (whole.len() + 1) * (self.applier.graph().suffixes().len() + 1);

        let mut results = Vec::new();
        for _ in 0..max_rounds {
            if frontier.is_empty() {
                return Ok(results);
            }
            let mut next = Vec::new();
            for container in frontier {
                if container.is_terminal() {
                    if container.remaining_surface().is_empty() {
                        observer.result_accepted(&container);
                        results.push(container);
                    } else {
                        observer.container_dropped(&container);
                    }
                    continue;
                }
                for edge in container.state().edges() {
                    next.extend(self.applier.try_suffix(&container, *edge, observer));
                }
            }
            frontier = next;
        }

        if frontier.is_empty() {
            Ok(results)
        } else {
            Err(ParseError::UnfinishedTraversal { input: whole.as_str().to_string(), pending: frontier.len() })
        }
    }

    /// Parse every input on the rayon thread pool, keeping their order.
    #[cfg(feature = "parallel")]
    pub fn parse_all_parallel(&self, inputs: &[&str]) -> Result<Vec<Vec<MorphemeContainer>>, ParseError> {
        use rayon::prelude::*;

        inputs.par_iter().map(|input| self.parse(input)).collect()
    }
}

impl MorphologicParser for ContextlessMorphologicParser {
    fn parse(&self, input: &str) -> Result<Vec<MorphemeContainer>, ParseError> {
        self.parse_with_observer(input, &mut NoopObserver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphotactics::{Suffix, names};
    use trmorph_core::{Lexeme, PrimaryPos, RootMap, SecondaryPos};

    fn roots() -> Arc<RootMap> {
        let lexemes = [
            Lexeme::new("kitap", PrimaryPos::Noun, None),
            Lexeme::new("ev", PrimaryPos::Noun, None),
            Lexeme::new("gelmek", PrimaryPos::Verb, None),
            Lexeme::new("ben", PrimaryPos::Pronoun, Some(SecondaryPos::Personal)),
        ];
        Arc::new(RootMap::from_lexemes(&lexemes))
    }

    fn analyses(parser: &impl MorphologicParser, input: &str) -> Vec<String> {
        parser.parse(input).unwrap().iter().map(ToString::to_string).collect()
    }

    #[derive(Default)]
    struct Recorder {
        seeded: usize,
        accepted: Vec<String>,
        dropped: usize,
        rejections: Vec<Rejection>,
    }

    impl ParseObserver for Recorder {
        fn candidate_seeded(&mut self, _container: &MorphemeContainer) {
            self.seeded += 1;
        }

        fn transition_rejected(&mut self, _container: &MorphemeContainer, _suffix: &Suffix, reason: Rejection) {
            self.rejections.push(reason);
        }

        fn result_accepted(&mut self, container: &MorphemeContainer) {
            self.accepted.push(container.to_string());
        }

        fn container_dropped(&mut self, _container: &MorphemeContainer) {
            self.dropped += 1;
        }
    }

    #[test]
    fn bare_noun() {
        let parser = simple_parser(roots()).unwrap();
        let results = parser.parse("kitap").unwrap();
        assert!(!results.is_empty());
        for r in &results {
            assert_eq!(r.root().lexeme().lemma, "kitap");
            assert_eq!(r.surface_so_far(), "kitap");
            assert!(r.is_complete());
        }
        let first: Vec<_> = results[0].transitions().iter().map(|t| t.suffix().name().to_string()).collect();
        assert!(first.starts_with(&[names::A3SG_NOUN.to_string(), names::PNON_NOUN.to_string()]));
    }

    #[test]
    fn plural_noun() {
        let parser = simple_parser(roots()).unwrap();
        let results = parser.parse("kitaplar").unwrap();
        assert!(results.iter().any(|r| r.transitions().iter().any(|t| t.suffix().name() == names::A3PL_NOUN
            && t.surface() == "lar")));
    }

    #[test]
    fn voiced_stem_needs_a_vowel() {
        let parser = simple_parser(roots()).unwrap();
        assert!(!parser.parse("kitabı").unwrap().is_empty());
        assert!(parser.parse("kitapı").unwrap().is_empty());
        assert!(parser.parse("kitab").unwrap().is_empty());
    }

    #[test]
    fn garbage_has_no_analysis() {
        let parser = simple_parser(roots()).unwrap();
        assert!(parser.parse("xqzw").unwrap().is_empty());
        assert!(parser.parse("").unwrap().is_empty());
    }

    #[test]
    fn pronoun_paradigm_comes_from_paths() {
        let parser = simple_parser(roots()).unwrap();
        let bana = parser.parse("bana").unwrap();
        assert!(!bana.is_empty());
        assert!(bana.iter().all(|r| r.lexeme().lemma == "ben"));
        assert!(parser.parse("bene").unwrap().is_empty());
    }

    #[test]
    fn observer_sees_the_search() {
        let parser = simple_parser(roots()).unwrap();
        let mut recorder = Recorder::default();
        let results = parser.parse_with_observer("evler", &mut recorder).unwrap();
        assert!(recorder.seeded >= 1);
        assert_eq!(recorder.accepted.len(), results.len());
        assert!(recorder.rejections.contains(&Rejection::SurfaceMismatch));
        assert!(recorder.dropped > 0);
    }

    #[test]
    fn parsing_is_deterministic() {
        let parser = simple_parser(roots()).unwrap();
        assert_eq!(analyses(&parser, "geliyor"), analyses(&parser, "geliyor"));
    }

    #[test]
    fn batch_keeps_input_order() {
        let parser = simple_parser(roots()).unwrap();
        let batch = parser.parse_all(&["ev", "xqzw", "kitaplar"]).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch[1].is_empty());
        assert!(batch[0].iter().all(|r| r.input() == "ev"));
        assert!(batch[2].iter().all(|r| r.input() == "kitaplar"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_matches_sequential() {
        let parser = simple_parser(roots()).unwrap();
        let inputs = ["ev", "evler", "kitabı", "geliyor"];
        let sequential = parser.parse_all(&inputs).unwrap();
        let parallel = parser.parse_all_parallel(&inputs).unwrap();
        let render = |all: &[Vec<MorphemeContainer>]| -> Vec<Vec<String>> {
            all.iter().map(|rs| rs.iter().map(ToString::to_string).collect()).collect()
        };
        assert_eq!(render(&sequential), render(&parallel));
    }
}
