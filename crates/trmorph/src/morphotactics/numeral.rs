// Numerals: spelled-out cardinals and ordinals, and digit strings

use trmorph_core::{PrimaryPos, SecondaryPos};

use super::names::*;
use super::{FormSpec, StateType, SuffixGraphBuilder};
use crate::error::GraphError;

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let noun_root = b.state_id(NOUN_ROOT)?;
    let adjective_root = b.state_id(ADJECTIVE_ROOT)?;
    let apostrophe = b.suffix_id(APOSTROPHE)?;

    let cardinal = b.add_state(NUMERAL_CARDINAL_ROOT, StateType::Transfer, PrimaryPos::Numeral)?;
    let ordinal = b.add_state(NUMERAL_ORDINAL_ROOT, StateType::Transfer, PrimaryPos::Numeral)?;
    let digits_cardinal =
        b.add_state(NUMERAL_DIGITS_CARDINAL_ROOT, StateType::Transfer, PrimaryPos::Numeral)?;
    let digits_ordinal =
        b.add_state(NUMERAL_DIGITS_ORDINAL_ROOT, StateType::Transfer, PrimaryPos::Numeral)?;
    let deriv = b.add_state(NUMERAL_CARDINAL_DERIV, StateType::Derivational, PrimaryPos::Numeral)?;
    let terminal = b.add_state(NUMERAL_TERMINAL, StateType::Terminal, PrimaryPos::Numeral)?;

    b.set_default_state(PrimaryPos::Numeral, None, cardinal);
    b.set_default_state(PrimaryPos::Numeral, Some(SecondaryPos::Cardinal), cardinal);
    b.set_default_state(PrimaryPos::Numeral, Some(SecondaryPos::Ordinal), ordinal);
    b.set_default_state(PrimaryPos::Numeral, Some(SecondaryPos::DigitsCardinal), digits_cardinal);
    b.set_default_state(PrimaryPos::Numeral, Some(SecondaryPos::DigitsOrdinal), digits_ordinal);

    let free = b.add_free_transition("Numeral_Free_Transition_1", cardinal, terminal, None)?;
    b.add_edge(ordinal, free, terminal);
    let to_noun = b.add_free_transition("Numeral_To_Noun_Zero_Transition", cardinal, noun_root, None)?;
    b.add_edge(ordinal, to_noun, noun_root);
    b.add_free_transition("Numeral_Free_Transition_2", cardinal, deriv, None)?;

    let ord = b.add_suffix_with_forms("Ord", None, [FormSpec::new("+IncI")])?;
    let dist = b.add_suffix_with_forms("Dist", None, [FormSpec::new("+şAr")])?;
    b.add_edge(deriv, ord, ordinal);
    b.add_edge(deriv, dist, adjective_root);

    let digits_free = b.add_free_transition("Digits_Free_Transition", digits_cardinal, terminal, None)?;
    b.add_edge(digits_ordinal, digits_free, terminal);
    b.add_edge(digits_cardinal, apostrophe, noun_root);
    b.add_edge(digits_ordinal, apostrophe, noun_root);
    Ok(())
}
