// Forced transitions applied to freshly seeded candidates

use super::applier::SuffixApplier;
use super::observer::ParseObserver;
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::{StateType, SuffixEdge};

/// The transitions `container` must choose from next; empty when it is
/// free to branch.
///
/// Graph rules come first: every matching rule on the state is one allowed
/// alternative. Otherwise a non-terminal state whose only edge carries a
/// single unconditional zero form leaves no choice either.
pub(crate) fn mandatory_edges(applier: &SuffixApplier, container: &MorphemeContainer) -> Vec<SuffixEdge> {
    let graph = applier.graph();
    let state = container.state();
    let ruled: Vec<SuffixEdge> = graph
        .mandatory_transitions()
        .iter()
        .filter(|m| m.state == state.id())
        .filter(|m| !container.has_suffix_since_derivation(m.suffix) && m.when.is_satisfied_by(container))
        .filter_map(|m| graph.edge(state.id(), m.suffix))
        .collect();
    if !ruled.is_empty() {
        return ruled;
    }

    if state.kind() == StateType::Terminal {
        return Vec::new();
    }
    let [edge] = state.edges() else {
        return Vec::new();
    };
    match graph.suffix(edge.suffix).forms() {
        [form] if form.is_unconditional_zero() && applier.check_edge(container, *edge).is_ok() => vec![*edge],
        _ => Vec::new(),
    }
}

/// Apply mandatory transitions to `seed` until none applies.
///
/// A seed whose mandatory transitions all fail is dropped: it had no other
/// way forward.
pub(crate) fn apply_mandatory_transitions(
    applier: &SuffixApplier,
    seed: MorphemeContainer,
    observer: &mut dyn ParseObserver,
) -> Vec<MorphemeContainer> {
    let mut done = Vec::new();
    let mut pending = vec![seed];
    while let Some(container) = pending.pop() {
        let edges = mandatory_edges(applier, &container);
        if edges.is_empty() {
            done.push(container);
            continue;
        }
        let mut next = Vec::new();
        for edge in edges {
            next.extend(applier.try_suffix(&container, edge, observer));
        }
        next.reverse();
        pending.extend(next);
    }
    done
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::morphotactics::{SuffixGraph, names};
    use crate::parser::observer::NoopObserver;
    use crate::phonetics::PhoneticsEngine;
    use trmorph_core::{Lexeme, LexemeAttribute, PrimaryPos, Root, RootKind, Sequence};
    use trmorph_core::phonetics::calculate_phonetic_attributes;

    fn applier() -> SuffixApplier {
        SuffixApplier::new(Arc::new(SuffixGraph::full().unwrap()), PhoneticsEngine::default())
    }

    fn seed(applier: &SuffixApplier, root: Root, input: &str) -> MorphemeContainer {
        let root = Arc::new(root);
        let state = applier.graph().default_state_for_root(&root).unwrap().clone();
        MorphemeContainer::new(root, state, Arc::from(input)).unwrap()
    }

    #[test]
    fn compound_roots_take_agreement_and_possessive() {
        let a = applier();
        let lexeme = Lexeme::new("zeytinyağı", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::CompoundP3sg);
        let surface = Sequence::new("zeytinyağ");
        let attrs = calculate_phonetic_attributes(&surface, None);
        let root = Root::new(surface, lexeme, attrs, None, RootKind::Dynamic);

        let out = apply_mandatory_transitions(&a, seed(&a, root, "zeytinyağını"), &mut NoopObserver);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].surface_so_far(), "zeytinyağı");
        assert_eq!(out[0].state().name(), names::NOUN_WITH_POSSESSION);
        let applied: Vec<_> = out[0].transitions().iter().map(|t| t.suffix().name().to_string()).collect();
        assert_eq!(applied, [names::A3SG_NOUN, names::P3SG_NOUN]);
    }

    #[test]
    fn compound_roots_may_be_plural() {
        let a = applier();
        let lexeme = Lexeme::new("zeytinyağı", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::CompoundP3sg);
        let surface = Sequence::new("zeytinyağ");
        let attrs = calculate_phonetic_attributes(&surface, None);
        let root = Root::new(surface, lexeme, attrs, None, RootKind::Dynamic);

        let out = apply_mandatory_transitions(&a, seed(&a, root, "zeytinyağları"), &mut NoopObserver);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].surface_so_far(), "zeytinyağları");
        let applied: Vec<_> = out[0].transitions().iter().map(|t| t.suffix().name().to_string()).collect();
        assert_eq!(applied, [names::A3PL_NOUN, names::P3SG_NOUN]);
    }

    #[test]
    fn failing_mandatory_transition_drops_the_seed() {
        let a = applier();
        let lexeme = Lexeme::new("zeytinyağı", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::CompoundP3sg);
        let surface = Sequence::new("zeytinyağ");
        let attrs = calculate_phonetic_attributes(&surface, None);
        let root = Root::new(surface, lexeme, attrs, None, RootKind::Dynamic);

        let out = apply_mandatory_transitions(&a, seed(&a, root, "zeytinyağlar"), &mut NoopObserver);
        assert!(out.is_empty());
    }

    #[test]
    fn single_zero_edges_are_followed() {
        let a = applier();
        let root = Root::new(
            Sequence::new("hızla"),
            Lexeme::new("hızla", PrimaryPos::Adverb, None),
            calculate_phonetic_attributes(&Sequence::new("hızla"), None),
            None,
            RootKind::Dictionary,
        );
        let out = apply_mandatory_transitions(&a, seed(&a, root, "hızla"), &mut NoopObserver);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_complete());
    }

    #[test]
    fn branching_states_are_left_alone() {
        let a = applier();
        let root = Root::new(
            Sequence::new("ev"),
            Lexeme::new("ev", PrimaryPos::Noun, None),
            calculate_phonetic_attributes(&Sequence::new("ev"), None),
            None,
            RootKind::Dictionary,
        );
        let out = apply_mandatory_transitions(&a, seed(&a, root, "evler"), &mut NoopObserver);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].transition_count(), 0);
    }
}
