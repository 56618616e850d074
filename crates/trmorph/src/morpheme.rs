// Morpheme containers: partial and complete parse candidates

use std::fmt;
use std::sync::Arc;

use trmorph_core::letter::{letter_of, turkish_lower};
use trmorph_core::phonetics::calculate_appended_attributes;
use trmorph_core::{Lexeme, PhoneticAttributes, PhoneticExpectation, PrimaryPos, Root};

use crate::morphotactics::{GroupId, StateId, StateType, Suffix, SuffixForm, SuffixGraphState, SuffixId};

/// One applied suffix: which form was used and what it consumed.
#[derive(Debug, Clone)]
pub struct Transition {
    suffix: Arc<Suffix>,
    form_index: usize,
    surface: String,
    from: StateId,
    to: StateId,
    derivational: bool,
}

impl Transition {
    pub fn suffix(&self) -> &Arc<Suffix> {
        &self.suffix
    }

    pub fn form(&self) -> &SuffixForm {
        &self.suffix.forms()[self.form_index]
    }

    /// The input slice this transition consumed (possibly empty).
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn from(&self) -> StateId {
        self.from
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn is_derivational(&self) -> bool {
        self.derivational
    }
}

/// Persistent list of transitions shared between a container and its
/// successors.
#[derive(Debug)]
struct HistoryNode {
    transition: Transition,
    previous: Option<Arc<HistoryNode>>,
}

/// A root plus the ordered suffix transitions applied so far.
///
/// The consumed surface is always a prefix of the input; the rest of the
/// input is the remaining surface.
#[derive(Debug, Clone)]
pub struct MorphemeContainer {
    root: Arc<Root>,
    input: Arc<str>,
    consumed: usize,
    state: Arc<SuffixGraphState>,
    phonetic_attributes: PhoneticAttributes,
    expectation: Option<PhoneticExpectation>,
    history: Option<Arc<HistoryNode>>,
    transition_count: usize,
    derivation_count: usize,
    suffixes_since_derivation: Vec<SuffixId>,
    groups_since_derivation: Vec<GroupId>,
    pending_post_derivative: Option<(Arc<Suffix>, usize)>,
}

impl MorphemeContainer {
    /// Seed a container for `root` at `state`. Returns `None` if the root's
    /// surface is not a prefix of `input`.
    pub fn new(root: Arc<Root>, state: Arc<SuffixGraphState>, input: Arc<str>) -> Option<Self> {
        if !input.starts_with(root.sequence().as_str()) {
            return None;
        }
        Some(Self {
            consumed: root.sequence().as_str().len(),
            phonetic_attributes: root.phonetic_attributes(),
            expectation: root.expectation(),
            root,
            input,
            state,
            history: None,
            transition_count: 0,
            derivation_count: 0,
            suffixes_since_derivation: Vec::new(),
            groups_since_derivation: Vec::new(),
            pending_post_derivative: None,
        })
    }

    pub fn root(&self) -> &Arc<Root> {
        &self.root
    }

    pub fn lexeme(&self) -> &Lexeme {
        self.root.lexeme()
    }

    pub fn state(&self) -> &Arc<SuffixGraphState> {
        &self.state
    }

    /// Syntactic category of the current state.
    pub fn category(&self) -> PrimaryPos {
        self.state.category()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.kind() == StateType::Terminal
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn surface_so_far(&self) -> &str {
        &self.input[..self.consumed]
    }

    pub fn remaining_surface(&self) -> &str {
        &self.input[self.consumed..]
    }

    /// Terminal with nothing left to consume.
    pub fn is_complete(&self) -> bool {
        self.is_terminal() && self.remaining_surface().is_empty()
    }

    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        self.phonetic_attributes
    }

    /// Constraint on the next consumed character, carried until satisfied.
    pub fn expectation(&self) -> Option<PhoneticExpectation> {
        self.expectation
    }

    /// Applied transitions, oldest first.
    pub fn transitions(&self) -> Vec<&Transition> {
        let mut out = Vec::with_capacity(self.transition_count);
        let mut node = self.history.as_deref();
        while let Some(n) = node {
            out.push(&n.transition);
            node = n.previous.as_deref();
        }
        out.reverse();
        out
    }

    pub fn last_transition(&self) -> Option<&Transition> {
        self.history.as_deref().map(|n| &n.transition)
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    pub fn suffixes_since_derivation(&self) -> &[SuffixId] {
        &self.suffixes_since_derivation
    }

    pub fn has_suffix_since_derivation(&self, suffix: SuffixId) -> bool {
        self.suffixes_since_derivation.contains(&suffix)
    }

    pub fn has_group_since_derivation(&self, group: GroupId) -> bool {
        self.groups_since_derivation.contains(&group)
    }

    /// Whether `suffix` was applied with the given template since the last
    /// derivation.
    pub fn has_applied_form_since_derivation(&self, suffix: SuffixId, template: &str) -> bool {
        let mut node = self.history.as_deref();
        while let Some(n) = node {
            let t = &n.transition;
            if t.suffix.id() == suffix && t.form().template().as_str() == template {
                return true;
            }
            if t.derivational {
                return false;
            }
            node = n.previous.as_deref();
        }
        false
    }

    /// No derivational transition has been applied yet.
    pub fn is_underived(&self) -> bool {
        self.derivation_count == 0
    }

    pub fn pending_post_derivative(&self) -> Option<&SuffixForm> {
        self.pending_post_derivative.as_ref().map(|(s, i)| &s.forms()[*i])
    }

    pub fn last_consumed_char(&self) -> Option<char> {
        self.surface_so_far().chars().next_back()
    }

    /// Last letter of the consumed surface, lowercased.
    pub fn last_letter(&self) -> Option<char> {
        self.surface_so_far()
            .chars()
            .rev()
            .find(|c| letter_of(*c).is_some())
            .map(turkish_lower)
    }

    /// Successor after applying `suffix` with form `form_index`, consuming
    /// `consumed_bytes` of the remaining surface and moving to `target`.
    pub(crate) fn with_transition(
        &self,
        suffix: &Arc<Suffix>,
        form_index: usize,
        consumed_bytes: usize,
        target: &Arc<SuffixGraphState>,
    ) -> Self {
        let derivational = self.state.kind() == StateType::Derivational;
        let consumed = self.consumed + consumed_bytes;
        let surface = self.input[self.consumed..consumed].to_string();
        let form = &suffix.forms()[form_index];

        let transition = Transition {
            suffix: Arc::clone(suffix),
            form_index,
            surface,
            from: self.state.id(),
            to: target.id(),
            derivational,
        };

        let (phonetic_attributes, expectation) = if consumed_bytes == 0 {
            (self.phonetic_attributes, self.expectation)
        } else {
            let appended = &self.input[self.consumed..consumed];
            (calculate_appended_attributes(self.phonetic_attributes, appended), form.expectation())
        };

        let mut suffixes_since_derivation = self.suffixes_since_derivation.clone();
        let mut groups_since_derivation = self.groups_since_derivation.clone();
        let mut pending_post_derivative = self.pending_post_derivative.clone();
        if derivational {
            suffixes_since_derivation.clear();
            groups_since_derivation.clear();
            pending_post_derivative = form.post_derivative().map(|_| (Arc::clone(suffix), form_index));
        }
        suffixes_since_derivation.push(suffix.id());
        if let Some(group) = suffix.group() {
            groups_since_derivation.push(group);
        }

        Self {
            root: Arc::clone(&self.root),
            input: Arc::clone(&self.input),
            consumed,
            state: Arc::clone(target),
            phonetic_attributes,
            expectation,
            history: Some(Arc::new(HistoryNode { transition, previous: self.history.clone() })),
            transition_count: self.transition_count + 1,
            derivation_count: self.derivation_count + usize::from(derivational),
            suffixes_since_derivation,
            groups_since_derivation,
            pending_post_derivative,
        }
    }

    /// The same container over a different input that shares its consumed
    /// surface.
    pub(crate) fn reanchored(&self, input: &Arc<str>) -> Option<Self> {
        if !input.starts_with(self.surface_so_far()) {
            return None;
        }
        Some(Self { input: Arc::clone(input), ..self.clone() })
    }
}

impl fmt::Display for MorphemeContainer {
    /// `kitab(kitap)+Noun+A3sg_Noun+Pnon_Noun+Acc_Noun(ı)+...`; derivations
    /// are marked with `^DB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})+{}", self.root.sequence(), self.lexeme().lemma, self.lexeme().primary_pos)?;
        for t in self.transitions() {
            f.write_str(if t.derivational { "^DB+" } else { "+" })?;
            f.write_str(t.suffix.name())?;
            if !t.surface.is_empty() {
                write!(f, "({})", t.surface)?;
            }
        }
        Ok(())
    }
}
