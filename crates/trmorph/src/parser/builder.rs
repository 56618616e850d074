// Parser assembly: graph, phonetics, root finders and predefined paths

use std::sync::Arc;

use trmorph_core::RootMap;

use super::ContextlessMorphologicParser;
use super::applier::SuffixApplier;
use super::predefined::PredefinedPaths;
use crate::error::BuildError;
use crate::morphotactics::{GraphExtension, SuffixGraph};
use crate::phonetics::{PhoneticsEngine, PrecachingSuffixFormApplier};
use crate::rootfinder::{
    BruteForceCompoundRootFinder, CardinalDigitsRootFinder, DictionaryRootFinder, FinderPolicy,
    OrdinalDigitsRootFinder, ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder,
    PunctuationRootFinder, RootFinder, RootFinderChain,
};

/// Configures and builds a [`ContextlessMorphologicParser`].
///
/// Defaults: the basic graph, no root finders, predefined paths on,
/// realization caching off.
pub struct MorphologicParserBuilder {
    roots: Arc<RootMap>,
    extensions: Vec<GraphExtension>,
    chain: RootFinderChain,
    predefined_paths: bool,
    caching: bool,
}

impl MorphologicParserBuilder {
    /// Start a parser over `roots`, which the predefined paths are built
    /// from.
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self {
            roots,
            extensions: vec![GraphExtension::Basic],
            chain: RootFinderChain::new(),
            predefined_paths: true,
            caching: false,
        }
    }

    /// Graph extensions, in registration order.
    pub fn extensions(mut self, extensions: &[GraphExtension]) -> Self {
        self.extensions = extensions.to_vec();
        self
    }

    /// Append a root finder to the chain.
    pub fn finder(mut self, finder: impl RootFinder + 'static, policy: FinderPolicy) -> Self {
        self.chain.push(Box::new(finder), policy);
        self
    }

    /// A dictionary finder over the builder's own root map.
    pub fn dictionary_finder(self, policy: FinderPolicy) -> Self {
        let finder = DictionaryRootFinder::new(Arc::clone(&self.roots));
        self.finder(finder, policy)
    }

    pub fn predefined_paths(mut self, enabled: bool) -> Self {
        self.predefined_paths = enabled;
        self
    }

    /// Precompute every suffix form realization at build time.
    pub fn caching(mut self, enabled: bool) -> Self {
        self.caching = enabled;
        self
    }

    pub fn build(self) -> Result<ContextlessMorphologicParser, BuildError> {
        let graph = Arc::new(SuffixGraph::with_extensions(&self.extensions)?);
        let engine = if self.caching {
            PhoneticsEngine::new(Box::new(PrecachingSuffixFormApplier::new(&graph)))
        } else {
            PhoneticsEngine::default()
        };
        let applier = SuffixApplier::new(graph, engine);
        let predefined = if self.predefined_paths {
            PredefinedPaths::build(&applier, &self.roots)?
        } else {
            PredefinedPaths::new()
        };
        Ok(ContextlessMorphologicParser::new(applier, self.chain, predefined))
    }
}

/// Dictionary roots over the basic graph.
pub fn simple_parser(roots: Arc<RootMap>) -> Result<ContextlessMorphologicParser, BuildError> {
    MorphologicParserBuilder::new(roots).dictionary_finder(FinderPolicy::Continue).build()
}

/// Every graph extension and every root finder, with cached realizations.
///
/// Digit and punctuation finders stop the chain when they claim a prefix.
/// The dictionary is asked before any proper noun guess, so a listed name
/// keeps its own lexeme; the apostrophe finder then stops the chain.
pub fn full_parser(roots: Arc<RootMap>) -> Result<ContextlessMorphologicParser, BuildError> {
    let compound = BruteForceCompoundRootFinder::new(DictionaryRootFinder::new(Arc::clone(&roots)));
    MorphologicParserBuilder::new(roots)
        .extensions(&[
            GraphExtension::Basic,
            GraphExtension::Numeral,
            GraphExtension::ProperNoun,
            GraphExtension::Copula,
        ])
        .finder(PunctuationRootFinder, FinderPolicy::StopWhenHandled)
        .finder(OrdinalDigitsRootFinder::new()?, FinderPolicy::StopWhenHandled)
        .finder(CardinalDigitsRootFinder::new()?, FinderPolicy::StopWhenHandled)
        .dictionary_finder(FinderPolicy::Continue)
        .finder(ProperNounFromApostropheRootFinder, FinderPolicy::StopWhenHandled)
        .finder(ProperNounWithoutApostropheRootFinder, FinderPolicy::Continue)
        .finder(compound, FinderPolicy::Continue)
        .caching(true)
        .build()
}
