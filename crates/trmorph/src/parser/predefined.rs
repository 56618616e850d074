// Precomputed suffix chains for pronouns with irregular paradigms

use std::sync::Arc;

use hashbrown::HashMap;
use trmorph_core::{PrimaryPos, Root, RootMap};

use super::applier::SuffixApplier;
use crate::error::GraphError;
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::SuffixId;
use crate::morphotactics::names::*;

/// One scripted paradigm: for `lemma` with stem `stem`, take `agreement`,
/// the zero possessive and then each of `cases` in turn.
struct PathScript {
    lemma: &'static str,
    stem: &'static str,
    agreement: &'static str,
    cases: &'static [&'static str],
}

const ALL_CASES: &[&str] = &[NOM_PRON, ACC_PRON, DAT_PRON, LOC_PRON, ABL_PRON, GEN_PRON, INS_PRON];
const STEM_CASES: &[&str] = &[ACC_PRON, DAT_PRON, LOC_PRON, ABL_PRON, GEN_PRON];

const SCRIPTS: &[PathScript] = &[
    // ben, beni, bende, benden, benim, benle; bana
    PathScript { lemma: "ben", stem: "ben", agreement: A1SG_PRON, cases: &[NOM_PRON, ACC_PRON, LOC_PRON, ABL_PRON, GEN_PRON, INS_PRON] },
    PathScript { lemma: "ben", stem: "ban", agreement: A1SG_PRON, cases: &[DAT_PRON] },
    PathScript { lemma: "sen", stem: "sen", agreement: A2SG_PRON, cases: &[NOM_PRON, ACC_PRON, LOC_PRON, ABL_PRON, GEN_PRON, INS_PRON] },
    PathScript { lemma: "sen", stem: "san", agreement: A2SG_PRON, cases: &[DAT_PRON] },
    PathScript { lemma: "biz", stem: "biz", agreement: A1PL_PRON, cases: ALL_CASES },
    PathScript { lemma: "siz", stem: "siz", agreement: A2PL_PRON, cases: ALL_CASES },
    // o, onu, ona, onda, ondan, onun; onlar...
    PathScript { lemma: "o", stem: "o", agreement: A3SG_PRON, cases: &[NOM_PRON] },
    PathScript { lemma: "o", stem: "on", agreement: A3SG_PRON, cases: STEM_CASES },
    PathScript { lemma: "o", stem: "on", agreement: A3PL_PRON, cases: ALL_CASES },
    PathScript { lemma: "bu", stem: "bu", agreement: A3SG_PRON, cases: &[NOM_PRON] },
    PathScript { lemma: "bu", stem: "bun", agreement: A3SG_PRON, cases: STEM_CASES },
    PathScript { lemma: "bu", stem: "bun", agreement: A3PL_PRON, cases: ALL_CASES },
    PathScript { lemma: "şu", stem: "şu", agreement: A3SG_PRON, cases: &[NOM_PRON] },
    PathScript { lemma: "şu", stem: "şun", agreement: A3SG_PRON, cases: STEM_CASES },
    PathScript { lemma: "şu", stem: "şun", agreement: A3PL_PRON, cases: ALL_CASES },
];

/// Containers precomputed per root. A root with paths is seeded only from
/// them, never from its default state.
#[derive(Default)]
pub struct PredefinedPaths {
    paths: HashMap<Root, Vec<MorphemeContainer>>,
}

impl PredefinedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every scripted paradigm for the pronoun roots in `roots`.
    pub fn build(applier: &SuffixApplier, roots: &RootMap) -> Result<Self, GraphError> {
        let graph = applier.graph();
        let pnon = graph.suffix_by_name(PNON_PRON)?.id();
        let mut paths: HashMap<Root, Vec<MorphemeContainer>> = HashMap::new();

        for root in roots.iter().filter(|r| r.lexeme().primary_pos == PrimaryPos::Pronoun) {
            let scripts = SCRIPTS
                .iter()
                .filter(|s| s.lemma == root.lexeme().lemma && s.stem == root.sequence().as_str());
            for script in scripts {
                let Some(state) = graph.default_state_for_root(root) else {
                    continue;
                };
                let input: Arc<str> = Arc::from(root.sequence().as_str());
                let Some(seed) = MorphemeContainer::new(Arc::clone(root), Arc::clone(state), input) else {
                    continue;
                };
                let agreement = graph.suffix_by_name(script.agreement)?.id();
                let with_agreement = walk(applier, vec![seed], agreement)?;
                let with_possession = walk(applier, with_agreement, pnon)?;
                let mut walked = Vec::new();
                for case in script.cases {
                    let case = graph.suffix_by_name(case)?.id();
                    walked.extend(walk(applier, with_possession.clone(), case)?);
                }
                if !walked.is_empty() {
                    paths.entry(Root::clone(root)).or_default().extend(walked);
                }
            }
        }
        Ok(Self { paths })
    }

    pub fn has_paths_for_root(&self, root: &Root) -> bool {
        self.paths.contains_key(root)
    }

    pub fn paths(&self, root: &Root) -> &[MorphemeContainer] {
        self.paths.get(root).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of roots with paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn walk(
    applier: &SuffixApplier,
    containers: Vec<MorphemeContainer>,
    suffix: SuffixId,
) -> Result<Vec<MorphemeContainer>, GraphError> {
    let graph = applier.graph();
    let mut out = Vec::new();
    for container in containers {
        let edge = graph.edge(container.state().id(), suffix).ok_or_else(|| GraphError::MissingEdge {
            state: container.state().name().to_string(),
            suffix: graph.suffix(suffix).name().to_string(),
        })?;
        out.extend(applier.generate(&container, edge));
    }
    Ok(out)
}
