// Applying one suffix edge to a morpheme container

use std::sync::Arc;

use trmorph_core::PhoneticExpectation;
use trmorph_core::letter::letter_of;
use trmorph_core::sequence::match_prefix;

use super::observer::{ParseObserver, Rejection};
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::{StateType, Suffix, SuffixEdge, SuffixForm, SuffixGraph, SuffixGraphState};
use crate::phonetics::PhoneticsEngine;

/// Tries suffix edges against containers.
///
/// For every form of the edge's suffix, in declaration order:
/// precondition, realization, literal match against the remaining input,
/// phonetic expectation, successor, postcondition and, when crossing a
/// derivational state, the previous derivation's post-derivative condition.
pub struct SuffixApplier {
    graph: Arc<SuffixGraph>,
    engine: PhoneticsEngine,
}

impl SuffixApplier {
    pub fn new(graph: Arc<SuffixGraph>, engine: PhoneticsEngine) -> Self {
        Self { graph, engine }
    }

    pub fn graph(&self) -> &Arc<SuffixGraph> {
        &self.graph
    }

    pub fn engine(&self) -> &PhoneticsEngine {
        &self.engine
    }

    /// Whether `edge` may be considered from `container` at all: its suffix
    /// and its group must not have been applied since the last derivation.
    pub fn check_edge(&self, container: &MorphemeContainer, edge: SuffixEdge) -> Result<(), Rejection> {
        let suffix = self.graph.suffix(edge.suffix);
        if container.has_suffix_since_derivation(suffix.id()) {
            return Err(Rejection::AlreadyApplied);
        }
        match suffix.group() {
            Some(group) if container.has_group_since_derivation(group) => Err(Rejection::GroupTouched),
            _ => Ok(()),
        }
    }

    /// Every successor reachable from `container` over `edge`, one per
    /// applicable form.
    pub fn try_suffix(
        &self,
        container: &MorphemeContainer,
        edge: SuffixEdge,
        observer: &mut dyn ParseObserver,
    ) -> Vec<MorphemeContainer> {
        let suffix = self.graph.suffix(edge.suffix);
        if let Err(reason) = self.check_edge(container, edge) {
            observer.transition_rejected(container, suffix, reason);
            return Vec::new();
        }
        let target = self.graph.state(edge.target);
        (0..suffix.forms().len())
            .filter_map(|form_index| match self.try_form(container, suffix, form_index, target) {
                Ok(next) => {
                    observer.transition_applied(container, &next);
                    Some(next)
                }
                Err(reason) => {
                    observer.transition_rejected(container, suffix, reason);
                    None
                }
            })
            .collect()
    }

    /// Apply a single form of `suffix`, moving to `target`.
    pub fn try_form(
        &self,
        container: &MorphemeContainer,
        suffix: &Arc<Suffix>,
        form_index: usize,
        target: &Arc<SuffixGraphState>,
    ) -> Result<MorphemeContainer, Rejection> {
        let form = &suffix.forms()[form_index];
        if form.precondition().is_some_and(|c| !c.is_satisfied_by(container)) {
            return Err(Rejection::Precondition);
        }

        let realized = self
            .engine
            .realize(form.template(), container.phonetic_attributes())
            .ok_or(Rejection::Unrealizable)?;
        let remaining = container.remaining_surface();
        let consumed = match_prefix(remaining, &realized, !target.is_case_sensitive())
            .ok_or(Rejection::SurfaceMismatch)?;

        if consumed > 0 {
            if let Some(expectation) = container.expectation() {
                if !meets(expectation, remaining.chars().next()) {
                    return Err(Rejection::Expectation);
                }
            }
        }

        let successor = container.with_transition(suffix, form_index, consumed, target);
        // A vowel-final stem variant cannot end the word.
        if successor.is_terminal() && successor.expectation() == Some(PhoneticExpectation::VowelStart) {
            return Err(Rejection::Expectation);
        }
        if form.postcondition().is_some_and(|c| !c.is_satisfied_by(&successor)) {
            return Err(Rejection::Postcondition);
        }
        if container.state().kind() == StateType::Derivational {
            let pending = container.pending_post_derivative().and_then(SuffixForm::post_derivative);
            if pending.is_some_and(|c| !c.is_satisfied_by(&successor)) {
                return Err(Rejection::PostDerivative);
            }
        }
        Ok(successor)
    }

    /// Generation mode: extend `container` over `edge` without an input to
    /// match against. Each realizable form yields a successor whose input
    /// is the consumed surface plus the realized suffix.
    pub fn generate(&self, container: &MorphemeContainer, edge: SuffixEdge) -> Vec<MorphemeContainer> {
        if self.check_edge(container, edge).is_err() {
            return Vec::new();
        }
        let suffix = self.graph.suffix(edge.suffix);
        let target = self.graph.state(edge.target);
        let mut out = Vec::new();
        for (form_index, form) in suffix.forms().iter().enumerate() {
            if form.precondition().is_some_and(|c| !c.is_satisfied_by(container)) {
                continue;
            }
            let Some(realized) = self.engine.realize(form.template(), container.phonetic_attributes())
            else {
                continue;
            };
            let input: Arc<str> = Arc::from(format!("{}{realized}", container.surface_so_far()));
            let Some(anchored) = container.reanchored(&input) else {
                continue;
            };
            if let Ok(next) = self.try_form(&anchored, suffix, form_index, target) {
                out.push(next);
            }
        }
        out
    }
}

fn meets(expectation: PhoneticExpectation, next: Option<char>) -> bool {
    let vowel = next.and_then(letter_of).is_some_and(|l| l.vowel);
    match expectation {
        PhoneticExpectation::VowelStart => vowel,
        PhoneticExpectation::ConsonantStart => !vowel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphotactics::names;
    use crate::parser::observer::NoopObserver;
    use trmorph_core::{Lexeme, PrimaryPos, Root, RootGenerator};

    fn applier() -> SuffixApplier {
        SuffixApplier::new(Arc::new(SuffixGraph::basic().unwrap()), PhoneticsEngine::default())
    }

    fn roots(lemma: &str, pos: PrimaryPos) -> Vec<Arc<Root>> {
        RootGenerator::new().generate(&Lexeme::new(lemma, pos, None)).into_iter().map(Arc::new).collect()
    }

    fn seed(applier: &SuffixApplier, root: &Arc<Root>, input: &str) -> MorphemeContainer {
        let state = applier.graph().default_state_for_root(root).unwrap().clone();
        MorphemeContainer::new(Arc::clone(root), state, Arc::from(input)).unwrap()
    }

    fn edge(applier: &SuffixApplier, container: &MorphemeContainer, suffix: &str) -> SuffixEdge {
        let suffix = applier.graph().suffix_by_name(suffix).unwrap();
        applier.graph().edge(container.state().id(), suffix.id()).unwrap()
    }

    fn step(applier: &SuffixApplier, container: &MorphemeContainer, suffix: &str) -> Vec<MorphemeContainer> {
        let e = edge(applier, container, suffix);
        applier.try_suffix(container, e, &mut NoopObserver)
    }

    #[test]
    fn plural_consumes_lar() {
        let a = applier();
        let kitap = &roots("kitap", PrimaryPos::Noun)[0];
        let c = seed(&a, kitap, "kitaplar");
        let next = step(&a, &c, names::A3PL_NOUN);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].surface_so_far(), "kitaplar");
        assert_eq!(next[0].last_transition().unwrap().surface(), "lar");
    }

    #[test]
    fn zero_forms_consume_nothing() {
        let a = applier();
        let kitap = &roots("kitap", PrimaryPos::Noun)[0];
        let c = seed(&a, kitap, "kitaplar");
        let next = step(&a, &c, names::A3SG_NOUN);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].remaining_surface(), "lar");
        assert_eq!(next[0].phonetic_attributes(), c.phonetic_attributes());
    }

    #[test]
    fn surface_mismatch_is_rejected() {
        let a = applier();
        let kitap = &roots("kitap", PrimaryPos::Noun)[0];
        let c = seed(&a, kitap, "kitapler");
        assert!(step(&a, &c, names::A3PL_NOUN).is_empty());
    }

    #[test]
    fn matching_ignores_case_in_ordinary_states() {
        let a = applier();
        let kitap = &roots("kitap", PrimaryPos::Noun)[0];
        let c = seed(&a, kitap, "kitapLAR");
        assert_eq!(step(&a, &c, names::A3PL_NOUN)[0].remaining_surface(), "");
    }

    #[test]
    fn root_expectations_gate_the_next_letter() {
        let a = applier();
        let variants = roots("kitap", PrimaryPos::Noun);
        let (plain, voiced) = (&variants[0], &variants[1]);
        assert_eq!(voiced.sequence().as_str(), "kitab");

        let c = seed(&a, plain, "kitapı");
        let c = step(&a, &c, names::A3SG_NOUN).remove(0);
        let c = step(&a, &c, names::PNON_NOUN).remove(0);
        let acc = edge(&a, &c, "Acc_Noun");
        assert!(a.try_suffix(&c, acc, &mut NoopObserver).is_empty());

        let c = seed(&a, voiced, "kitabı");
        let c = step(&a, &c, names::A3SG_NOUN).remove(0);
        let c = step(&a, &c, names::P3SG_NOUN).remove(0);
        assert_eq!(c.surface_so_far(), "kitabı");
        assert_eq!(c.expectation(), None);
    }

    #[test]
    fn repeated_suffixes_are_filtered() {
        let a = applier();
        let kitap = &roots("kitap", PrimaryPos::Noun)[0];
        let c = seed(&a, kitap, "kitap");
        let c = step(&a, &c, names::A3SG_NOUN).remove(0);
        let a3sg = a.graph().suffix_by_name(names::A3SG_NOUN).unwrap();
        let fake = SuffixEdge { suffix: a3sg.id(), target: c.state().id() };
        assert_eq!(a.check_edge(&c, fake), Err(Rejection::AlreadyApplied));
        let a3pl = a.graph().suffix_by_name(names::A3PL_NOUN).unwrap();
        let fake = SuffixEdge { suffix: a3pl.id(), target: c.state().id() };
        assert_eq!(a.check_edge(&c, fake), Err(Rejection::GroupTouched));
    }

    #[test]
    fn generation_builds_the_surface() {
        let a = applier();
        let ev = &roots("ev", PrimaryPos::Noun)[0];
        let c = seed(&a, ev, "ev");
        let e = edge(&a, &c, names::A3PL_NOUN);
        let next = a.generate(&c, e);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].surface_so_far(), "evler");
        assert!(next[0].remaining_surface().is_empty());
    }
}
