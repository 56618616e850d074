// Suffix graph construction from ordered extensions

use std::sync::Arc;

use hashbrown::HashMap;
use trmorph_core::{PhoneticExpectation, PrimaryPos, SecondaryPos};

use super::{
    Condition, GroupId, MandatoryTransition, StateId, StateType, Suffix, SuffixEdge, SuffixForm,
    SuffixFormTemplate, SuffixGraph, SuffixGraphState, SuffixId,
};
use super::{basic, copula, numeral, proper_noun};
use crate::error::GraphError;

/// A named grammar fragment that adds states, suffixes and edges to a graph.
/// Later extensions may wire into states of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphExtension {
    Basic,
    Numeral,
    ProperNoun,
    Copula,
}

impl GraphExtension {
    fn register(self, builder: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
        match self {
            GraphExtension::Basic => basic::register(builder),
            GraphExtension::Numeral => numeral::register(builder),
            GraphExtension::ProperNoun => proper_noun::register(builder),
            GraphExtension::Copula => copula::register(builder),
        }
    }
}

/// Declarative description of a suffix form.
#[derive(Debug, Clone)]
pub struct FormSpec {
    template: String,
    precondition: Option<Condition>,
    postcondition: Option<Condition>,
    post_derivative: Option<Condition>,
    expectation: Option<PhoneticExpectation>,
}

impl FormSpec {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            precondition: None,
            postcondition: None,
            post_derivative: None,
            expectation: None,
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.precondition = Some(condition);
        self
    }

    pub fn postcondition(mut self, condition: Condition) -> Self {
        self.postcondition = Some(condition);
        self
    }

    pub fn post_derivative(mut self, condition: Condition) -> Self {
        self.post_derivative = Some(condition);
        self
    }

    pub fn expecting(mut self, expectation: PhoneticExpectation) -> Self {
        self.expectation = Some(expectation);
        self
    }

    fn into_form(self) -> Result<SuffixForm, GraphError> {
        Ok(SuffixForm {
            template: SuffixFormTemplate::parse(&self.template)?,
            precondition: self.precondition,
            postcondition: self.postcondition,
            post_derivative: self.post_derivative,
            expectation: self.expectation,
        })
    }
}

struct StateData {
    name: String,
    kind: StateType,
    category: PrimaryPos,
    case_sensitive: bool,
    edges: Vec<SuffixEdge>,
}

struct SuffixData {
    name: String,
    group: Option<GroupId>,
    forms: Vec<SuffixForm>,
}

/// Mutable graph under construction.
#[derive(Default)]
pub struct SuffixGraphBuilder {
    states: Vec<StateData>,
    suffixes: Vec<SuffixData>,
    groups: Vec<String>,
    state_index: HashMap<String, StateId>,
    suffix_index: HashMap<String, SuffixId>,
    group_index: HashMap<String, GroupId>,
    default_states: HashMap<(PrimaryPos, Option<SecondaryPos>), StateId>,
    mandatory: Vec<MandatoryTransition>,
    extensions: Vec<GraphExtension>,
}

impl SuffixGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, extension: GraphExtension) -> Result<&mut Self, GraphError> {
        extension.register(self)?;
        self.extensions.push(extension);
        Ok(self)
    }

    pub fn add_state(
        &mut self,
        name: &str,
        kind: StateType,
        category: PrimaryPos,
    ) -> Result<StateId, GraphError> {
        self.insert_state(name, kind, category, false)
    }

    pub fn add_case_sensitive_state(
        &mut self,
        name: &str,
        kind: StateType,
        category: PrimaryPos,
    ) -> Result<StateId, GraphError> {
        self.insert_state(name, kind, category, true)
    }

    fn insert_state(
        &mut self,
        name: &str,
        kind: StateType,
        category: PrimaryPos,
        case_sensitive: bool,
    ) -> Result<StateId, GraphError> {
        if self.state_index.contains_key(name) {
            return Err(GraphError::DuplicateState(name.to_string()));
        }
        let id = StateId(self.states.len() as u16);
        self.states.push(StateData {
            name: name.to_string(),
            kind,
            category,
            case_sensitive,
            edges: Vec::new(),
        });
        self.state_index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn state_id(&self, name: &str) -> Result<StateId, GraphError> {
        self.state_index.get(name).copied().ok_or_else(|| GraphError::UnknownState(name.to_string()))
    }

    /// Declare a suffix; forms are added separately so they can refer to it.
    pub fn add_suffix(&mut self, name: &str, group: Option<&str>) -> Result<SuffixId, GraphError> {
        if self.suffix_index.contains_key(name) {
            return Err(GraphError::DuplicateSuffix(name.to_string()));
        }
        let group = group.map(|g| self.group(g));
        let id = SuffixId(self.suffixes.len() as u16);
        self.suffixes.push(SuffixData { name: name.to_string(), group, forms: Vec::new() });
        self.suffix_index.insert(name.to_string(), id);
        Ok(id)
    }

    fn group(&mut self, name: &str) -> GroupId {
        if let Some(id) = self.group_index.get(name) {
            return *id;
        }
        let id = GroupId(self.groups.len() as u16);
        self.groups.push(name.to_string());
        self.group_index.insert(name.to_string(), id);
        id
    }

    pub fn suffix_id(&self, name: &str) -> Result<SuffixId, GraphError> {
        self.suffix_index.get(name).copied().ok_or_else(|| GraphError::UnknownSuffix(name.to_string()))
    }

    pub fn add_forms(
        &mut self,
        suffix: SuffixId,
        forms: impl IntoIterator<Item = FormSpec>,
    ) -> Result<(), GraphError> {
        for spec in forms {
            let form = spec.into_form()?;
            self.suffixes[usize::from(suffix.0)].forms.push(form);
        }
        Ok(())
    }

    /// Declare a suffix together with its forms.
    pub fn add_suffix_with_forms(
        &mut self,
        name: &str,
        group: Option<&str>,
        forms: impl IntoIterator<Item = FormSpec>,
    ) -> Result<SuffixId, GraphError> {
        let id = self.add_suffix(name, group)?;
        self.add_forms(id, forms)?;
        Ok(id)
    }

    pub fn add_edge(&mut self, from: StateId, suffix: SuffixId, to: StateId) {
        let edge = SuffixEdge { suffix, target: to };
        let edges = &mut self.states[usize::from(from.0)].edges;
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    /// A zero-form suffix connecting two states.
    pub fn add_free_transition(
        &mut self,
        name: &str,
        from: StateId,
        to: StateId,
        when: Option<Condition>,
    ) -> Result<SuffixId, GraphError> {
        let mut form = FormSpec::new("");
        form.precondition = when;
        let id = self.add_suffix_with_forms(name, None, [form])?;
        self.add_edge(from, id, to);
        Ok(id)
    }

    /// Register the entry state for roots of the given parts of speech.
    /// A later registration for the same key replaces an earlier one.
    pub fn set_default_state(&mut self, primary: PrimaryPos, secondary: Option<SecondaryPos>, state: StateId) {
        self.default_states.insert((primary, secondary), state);
    }

    /// Force `suffix` out of `state` when `when` holds. Several rules on one
    /// state are alternatives: the candidate must take one of them.
    pub fn add_mandatory_transition(&mut self, state: StateId, when: Condition, suffix: SuffixId) {
        self.mandatory.push(MandatoryTransition { state, when, suffix });
    }

    pub fn build(self) -> Result<SuffixGraph, GraphError> {
        for suffix in &self.suffixes {
            if suffix.forms.is_empty() {
                return Err(GraphError::SuffixWithoutForms(suffix.name.clone()));
            }
        }
        for state in &self.states {
            if state.kind == StateType::Terminal && !state.edges.is_empty() {
                return Err(GraphError::TerminalWithEdges(state.name.clone()));
            }
            if state.kind == StateType::Derivational {
                for edge in &state.edges {
                    let suffix = &self.suffixes[usize::from(edge.suffix.0)];
                    if let Some(form) = suffix.forms.iter().find(|f| !f.template.always_consumes()) {
                        return Err(GraphError::NonConsumingDerivation {
                            suffix: suffix.name.clone(),
                            template: form.template.as_str().to_string(),
                        });
                    }
                }
            }
        }
        for m in &self.mandatory {
            let state = &self.states[usize::from(m.state.0)];
            if !state.edges.iter().any(|e| e.suffix == m.suffix) {
                return Err(GraphError::MissingEdge {
                    state: state.name.clone(),
                    suffix: self.suffixes[usize::from(m.suffix.0)].name.clone(),
                });
            }
        }

        let states = self
            .states
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Arc::new(SuffixGraphState {
                    id: StateId(i as u16),
                    name: s.name,
                    kind: s.kind,
                    category: s.category,
                    case_sensitive: s.case_sensitive,
                    edges: s.edges,
                })
            })
            .collect();
        let suffixes = self
            .suffixes
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Arc::new(Suffix { id: SuffixId(i as u16), name: s.name, group: s.group, forms: s.forms })
            })
            .collect();

        Ok(SuffixGraph {
            states,
            suffixes,
            groups: self.groups,
            state_index: self.state_index,
            suffix_index: self.suffix_index,
            default_states: self.default_states,
            mandatory: self.mandatory,
            extensions: self.extensions,
        })
    }
}
