// Suffix graph: states, suffixes, forms and edges

mod basic;
mod builder;
mod condition;
mod copula;
pub mod names;
mod numeral;
mod proper_noun;
mod template;

pub use builder::{FormSpec, GraphExtension, SuffixGraphBuilder};
pub use condition::Condition;
pub use template::{FormLetter, FormToken, SuffixFormTemplate};

use std::sync::Arc;

use hashbrown::HashMap;
use trmorph_core::{PhoneticExpectation, PrimaryPos, Root, SecondaryPos};

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuffixId(pub(crate) u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub(crate) u16);

/// Role of a state in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    /// Inflectional state; its outgoing transitions do not reset bookkeeping.
    Transfer,
    /// Outgoing transitions are derivations into a (possibly new) category.
    Derivational,
    /// A word may end here; no outgoing edges.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuffixEdge {
    pub suffix: SuffixId,
    pub target: StateId,
}

#[derive(Debug)]
pub struct SuffixGraphState {
    id: StateId,
    name: String,
    kind: StateType,
    category: PrimaryPos,
    case_sensitive: bool,
    edges: Vec<SuffixEdge>,
}

impl SuffixGraphState {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StateType {
        self.kind
    }

    pub fn category(&self) -> PrimaryPos {
        self.category
    }

    /// Suffix surfaces entering this state must match the input exactly.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Outgoing edges in declaration order.
    pub fn edges(&self) -> &[SuffixEdge] {
        &self.edges
    }
}

/// One surface form of a suffix together with its conditions.
#[derive(Debug, Clone)]
pub struct SuffixForm {
    template: SuffixFormTemplate,
    precondition: Option<Condition>,
    postcondition: Option<Condition>,
    post_derivative: Option<Condition>,
    expectation: Option<PhoneticExpectation>,
}

impl SuffixForm {
    pub fn template(&self) -> &SuffixFormTemplate {
        &self.template
    }

    pub fn precondition(&self) -> Option<&Condition> {
        self.precondition.as_ref()
    }

    pub fn postcondition(&self) -> Option<&Condition> {
        self.postcondition.as_ref()
    }

    /// Checked against the result of the next derivational transition.
    pub fn post_derivative(&self) -> Option<&Condition> {
        self.post_derivative.as_ref()
    }

    /// Constraint this form places on the next consumed character.
    pub fn expectation(&self) -> Option<PhoneticExpectation> {
        self.expectation
    }

    /// A zero form with no conditions attached.
    pub fn is_unconditional_zero(&self) -> bool {
        self.template.is_empty()
            && self.precondition.is_none()
            && self.postcondition.is_none()
            && self.expectation.is_none()
    }
}

#[derive(Debug)]
pub struct Suffix {
    id: SuffixId,
    name: String,
    group: Option<GroupId>,
    forms: Vec<SuffixForm>,
}

impl Suffix {
    pub fn id(&self) -> SuffixId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn forms(&self) -> &[SuffixForm] {
        &self.forms
    }
}

impl PartialEq for Suffix {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Suffix {}

/// Mandatory transition applied to freshly seeded candidates before the
/// search: at `state`, when `when` holds, `suffix` is taken (or another rule
/// of the same state that also holds).
#[derive(Debug, Clone)]
pub struct MandatoryTransition {
    pub state: StateId,
    pub when: Condition,
    pub suffix: SuffixId,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable suffix graph, shared by every parse.
#[derive(Debug)]
pub struct SuffixGraph {
    states: Vec<Arc<SuffixGraphState>>,
    suffixes: Vec<Arc<Suffix>>,
    groups: Vec<String>,
    state_index: HashMap<String, StateId>,
    suffix_index: HashMap<String, SuffixId>,
    default_states: HashMap<(PrimaryPos, Option<SecondaryPos>), StateId>,
    mandatory: Vec<MandatoryTransition>,
    extensions: Vec<GraphExtension>,
}

impl SuffixGraph {
    /// Build a graph from an ordered list of extensions.
    pub fn with_extensions(extensions: &[GraphExtension]) -> Result<Self, GraphError> {
        let mut builder = SuffixGraphBuilder::new();
        for extension in extensions {
            builder.extend(*extension)?;
        }
        builder.build()
    }

    /// Nouns, adjectives, adverbs, verbs, pronouns and closed classes.
    pub fn basic() -> Result<Self, GraphError> {
        Self::with_extensions(&[GraphExtension::Basic])
    }

    /// The basic graph extended with numerals, proper nouns and the copula.
    pub fn full() -> Result<Self, GraphError> {
        Self::with_extensions(&[
            GraphExtension::Basic,
            GraphExtension::Numeral,
            GraphExtension::ProperNoun,
            GraphExtension::Copula,
        ])
    }

    pub fn state(&self, id: StateId) -> &Arc<SuffixGraphState> {
        &self.states[usize::from(id.0)]
    }

    pub fn suffix(&self, id: SuffixId) -> &Arc<Suffix> {
        &self.suffixes[usize::from(id.0)]
    }

    pub fn group_name(&self, id: GroupId) -> &str {
        &self.groups[usize::from(id.0)]
    }

    pub fn state_by_name(&self, name: &str) -> Result<&Arc<SuffixGraphState>, GraphError> {
        self.state_index
            .get(name)
            .map(|id| self.state(*id))
            .ok_or_else(|| GraphError::UnknownState(name.to_string()))
    }

    pub fn suffix_by_name(&self, name: &str) -> Result<&Arc<Suffix>, GraphError> {
        self.suffix_index
            .get(name)
            .map(|id| self.suffix(*id))
            .ok_or_else(|| GraphError::UnknownSuffix(name.to_string()))
    }

    pub fn states(&self) -> &[Arc<SuffixGraphState>] {
        &self.states
    }

    pub fn suffixes(&self) -> &[Arc<Suffix>] {
        &self.suffixes
    }

    pub fn extensions(&self) -> &[GraphExtension] {
        &self.extensions
    }

    /// Entry state for a root: the (primary, secondary) registration if one
    /// exists, else the primary-only registration.
    pub fn default_state_for_root(&self, root: &Root) -> Option<&Arc<SuffixGraphState>> {
        let lexeme = root.lexeme();
        self.default_states
            .get(&(lexeme.primary_pos, lexeme.secondary_pos))
            .or_else(|| self.default_states.get(&(lexeme.primary_pos, None)))
            .map(|id| self.state(*id))
    }

    pub fn mandatory_transitions(&self) -> &[MandatoryTransition] {
        &self.mandatory
    }

    /// The outgoing edge of `state` labelled with `suffix`.
    pub fn edge(&self, state: StateId, suffix: SuffixId) -> Option<SuffixEdge> {
        self.state(state).edges().iter().copied().find(|e| e.suffix == suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trmorph_core::Lexeme;
    use trmorph_core::lexicon::RootGenerator;

    #[test]
    fn full_graph_builds_and_resolves_default_states() {
        let graph = SuffixGraph::full().unwrap();
        let root = |lexeme: Lexeme| RootGenerator::new().generate(&lexeme).remove(0);

        let noun = root(Lexeme::new("kitap", PrimaryPos::Noun, None));
        assert_eq!(graph.default_state_for_root(&noun).unwrap().name(), names::NOUN_ROOT);

        let proper = root(Lexeme::new("Ankara", PrimaryPos::Noun, Some(SecondaryPos::ProperNoun)));
        assert_eq!(graph.default_state_for_root(&proper).unwrap().name(), names::PROPER_NOUN_ROOT);

        let time = root(Lexeme::new("sabah", PrimaryPos::Noun, Some(SecondaryPos::Time)));
        assert_eq!(graph.default_state_for_root(&time).unwrap().name(), names::NOUN_ROOT);
    }

    #[test]
    fn basic_graph_routes_proper_nouns_to_plain_nouns() {
        let graph = SuffixGraph::basic().unwrap();
        let lexeme = Lexeme::new("Ankara", PrimaryPos::Noun, Some(SecondaryPos::ProperNoun));
        let root = RootGenerator::new().generate(&lexeme).remove(0);
        assert_eq!(graph.default_state_for_root(&root).unwrap().name(), names::NOUN_ROOT);
    }

    #[test]
    fn terminal_states_have_no_edges() {
        let graph = SuffixGraph::full().unwrap();
        for state in graph.states() {
            if state.kind() == StateType::Terminal {
                assert!(state.edges().is_empty(), "{} has edges", state.name());
            }
        }
    }

    #[test]
    fn derivational_edges_always_consume() {
        let graph = SuffixGraph::full().unwrap();
        for state in graph.states().iter().filter(|s| s.kind() == StateType::Derivational) {
            for edge in state.edges() {
                for form in graph.suffix(edge.suffix).forms() {
                    assert!(form.template().always_consumes(), "{}", graph.suffix(edge.suffix).name());
                }
            }
        }
    }

    #[test]
    fn extensions_require_the_basic_graph() {
        let err = SuffixGraph::with_extensions(&[GraphExtension::Numeral]).unwrap_err();
        assert!(matches!(err, GraphError::UnknownState(_)));
    }

    #[test]
    fn lookups_by_name() {
        let graph = SuffixGraph::basic().unwrap();
        let a3pl = graph.suffix_by_name(names::A3PL_NOUN).unwrap();
        assert_eq!(a3pl.forms()[0].template().as_str(), "lAr");
        assert_eq!(graph.group_name(a3pl.group().unwrap()), "Noun_Agreements");
        let root = graph.state_by_name(names::NOUN_ROOT).unwrap();
        assert!(graph.edge(root.id(), a3pl.id()).is_some());
        assert!(graph.suffix_by_name("Nope").is_err());
    }
}
