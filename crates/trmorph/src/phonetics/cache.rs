// Precomputed suffix form realizations for a whole suffix graph

use std::sync::Arc;

use hashbrown::HashMap;
use trmorph_core::PhoneticAttributes;

use super::{RELEVANT_ATTRIBUTES, SuffixFormApplier, realize, relevant};
use crate::morphotactics::{SuffixFormTemplate, SuffixGraph};

/// Number of distinct combinations of the attributes realization looks at.
const COMBINATIONS: usize = 1 << RELEVANT_ATTRIBUTES.len();

fn combination_index(attributes: PhoneticAttributes) -> usize {
    RELEVANT_ATTRIBUTES
        .iter()
        .enumerate()
        .filter(|(_, a)| attributes.contains(**a))
        .fold(0, |index, (bit, _)| index | (1 << bit))
}

fn combination(index: usize) -> PhoneticAttributes {
    RELEVANT_ATTRIBUTES
        .iter()
        .enumerate()
        .filter(|(bit, _)| index & (1 << bit) != 0)
        .map(|(_, a)| *a)
        .collect()
}

/// Applier that realizes every template of a graph up front.
///
/// Realization only depends on the template text and on a handful of
/// attributes, so each template gets one slot per attribute combination.
/// Templates that were not part of the graph fall back to computing the
/// realization directly.
pub struct PrecachingSuffixFormApplier {
    realizations: HashMap<Arc<str>, Vec<Option<String>>>,
}

impl PrecachingSuffixFormApplier {
    pub fn new(graph: &SuffixGraph) -> Self {
        let mut realizations: HashMap<Arc<str>, Vec<Option<String>>> = HashMap::new();
        for suffix in graph.suffixes() {
            for form in suffix.forms() {
                let template = form.template();
                if realizations.contains_key(template.as_str()) {
                    continue;
                }
                let slots = (0..COMBINATIONS).map(|i| realize(template, combination(i))).collect();
                realizations.insert(Arc::from(template.as_str()), slots);
            }
        }
        Self { realizations }
    }

    /// Number of distinct templates held.
    pub fn len(&self) -> usize {
        self.realizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realizations.is_empty()
    }
}

impl SuffixFormApplier for PrecachingSuffixFormApplier {
    fn apply(&self, template: &SuffixFormTemplate, attributes: PhoneticAttributes) -> Option<String> {
        match self.realizations.get(template.as_str()) {
            Some(slots) => slots[combination_index(relevant(attributes))].clone(),
            None => realize(template, attributes),
        }
    }
}
