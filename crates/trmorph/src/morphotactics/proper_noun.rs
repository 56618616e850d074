// Proper nouns and abbreviations
//
// Suffixes after the apostrophe enter case-sensitive states, so
// "Ankara'da" parses and "Ankara'DA" does not.

use trmorph_core::{PrimaryPos, SecondaryPos};

use super::names::*;
use super::{Condition, StateType, SuffixGraphBuilder};
use crate::error::GraphError;

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let apostrophe = b.suffix_id(APOSTROPHE)?;
    let agreements = [b.suffix_id(A3SG_NOUN)?, b.suffix_id(A3PL_NOUN)?];
    let pnon = b.suffix_id(PNON_NOUN)?;
    let cases = NOUN_CASES.iter().map(|name| b.suffix_id(name)).collect::<Result<Vec<_>, _>>()?;

    let root = b.add_state(PROPER_NOUN_ROOT, StateType::Transfer, PrimaryPos::Noun)?;
    let terminal = b.add_state(PROPER_NOUN_TERMINAL, StateType::Terminal, PrimaryPos::Noun)?;
    let with_apostrophe =
        b.add_case_sensitive_state(PROPER_NOUN_WITH_APOSTROPHE, StateType::Transfer, PrimaryPos::Noun)?;
    let with_agreement =
        b.add_case_sensitive_state(PROPER_NOUN_WITH_AGREEMENT, StateType::Transfer, PrimaryPos::Noun)?;
    let with_possession =
        b.add_case_sensitive_state(PROPER_NOUN_WITH_POSSESSION, StateType::Transfer, PrimaryPos::Noun)?;
    let with_case =
        b.add_case_sensitive_state(PROPER_NOUN_WITH_CASE, StateType::Transfer, PrimaryPos::Noun)?;

    b.set_default_state(PrimaryPos::Noun, Some(SecondaryPos::ProperNoun), root);
    b.set_default_state(PrimaryPos::Noun, Some(SecondaryPos::Abbreviation), root);

    b.add_free_transition("Prop_Free_Transition_1", root, terminal, None)?;
    b.add_edge(root, apostrophe, with_apostrophe);
    for a in agreements {
        b.add_edge(with_apostrophe, a, with_agreement);
    }
    b.add_edge(with_agreement, pnon, with_possession);
    for case in cases {
        b.add_edge(with_possession, case, with_case);
    }
    b.add_free_transition(
        "Prop_Free_Transition_2",
        with_case,
        terminal,
        Some(Condition::LastConsumedCharIs('\'').negate()),
    )?;
    Ok(())
}
