// Copula: nominal predicates ("kitaptır", "evdeydim", "güzelsin")

use trmorph_core::PrimaryPos;

use super::names::*;
use super::{Condition, FormSpec, StateType, SuffixGraphBuilder};
use crate::error::GraphError;

const COPULA_TENSES: &str = "Copula_Tenses";
const COPULA_AGREEMENTS: &str = "Copula_Agreements";

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let noun_with_case = b.state_id(NOUN_WITH_CASE)?;
    let adjective_root = b.state_id(ADJECTIVE_ROOT)?;
    let pronoun_with_case = b.state_id(PRONOUN_WITH_CASE)?;
    let verb_terminal = b.state_id(VERB_TERMINAL)?;
    let noun_acc = b.suffix_id(ACC_NOUN)?;
    let pronoun_nom = b.suffix_id(NOM_PRON)?;

    let without_tense =
        b.add_state(VERB_COPULA_WITHOUT_TENSE, StateType::Transfer, PrimaryPos::Verb)?;
    let with_tense = b.add_state(VERB_COPULA_WITH_TENSE, StateType::Transfer, PrimaryPos::Verb)?;
    let with_agreement =
        b.add_state(VERB_COPULA_WITH_AGREEMENT, StateType::Transfer, PrimaryPos::Verb)?;

    // Any case but the accusative can be predicated: "ev", "evde", "evden".
    let not_after_apostrophe = Condition::LastConsumedCharIs('\'').negate();
    b.add_free_transition(
        "Noun_Copula_Zero_Transition",
        noun_with_case,
        without_tense,
        Some(Condition::ComesAfter(noun_acc).negate().and(not_after_apostrophe)),
    )?;
    b.add_free_transition("Adj_Copula_Zero_Transition", adjective_root, without_tense, None)?;
    b.add_free_transition(
        "Pron_Copula_Zero_Transition",
        pronoun_with_case,
        without_tense,
        Some(Condition::ComesAfter(pronoun_nom)),
    )?;

    let g = Some(COPULA_TENSES);
    let pres = b.add_suffix_with_forms("Cop_Pres", g, [FormSpec::new("")])?;
    let past = b.add_suffix_with_forms("Cop_Past", g, [FormSpec::new("+ydI")])?;
    let narr = b.add_suffix_with_forms("Cop_Narr", g, [FormSpec::new("+ymIş")])?;
    let cond = b.add_suffix_with_forms("Cop_Cond", g, [FormSpec::new("+ysA")])?;
    for t in [pres, past, narr, cond] {
        b.add_edge(without_tense, t, with_tense);
    }

    let short = Condition::comes_after_any(&[past, cond]);
    let long = short.clone().negate();
    let g = Some(COPULA_AGREEMENTS);
    let agreements = [
        b.add_suffix_with_forms(
            "Cop_A1sg",
            g,
            [FormSpec::new("+yIm").when(long.clone()), FormSpec::new("m").when(short.clone())],
        )?,
        b.add_suffix_with_forms(
            "Cop_A2sg",
            g,
            [FormSpec::new("sIn").when(long.clone()), FormSpec::new("n").when(short.clone())],
        )?,
        b.add_suffix_with_forms("Cop_A3sg", g, [FormSpec::new("")])?,
        b.add_suffix_with_forms(
            "Cop_A1pl",
            g,
            [FormSpec::new("+yIz").when(long.clone()), FormSpec::new("k").when(short.clone())],
        )?,
        b.add_suffix_with_forms(
            "Cop_A2pl",
            g,
            [FormSpec::new("sInIz").when(long), FormSpec::new("nIz").when(short)],
        )?,
        b.add_suffix_with_forms("Cop_A3pl", g, [FormSpec::new("lAr")])?,
    ];
    for a in agreements {
        b.add_edge(with_tense, a, with_agreement);
    }

    let dir = b.add_suffix_with_forms("Cop_Dir", None, [FormSpec::new("DIr").when(Condition::ComesAfter(pres))])?;
    b.add_edge(with_agreement, dir, verb_terminal);
    b.add_free_transition("Copula_Free_Transition", with_agreement, verb_terminal, None)?;
    Ok(())
}
