// Dictionary lookup of the prefix

use std::sync::Arc;

use trmorph_core::{Root, RootMap, Sequence};

use super::RootFinder;

/// Looks the prefix up in the root map, exactly as written.
pub struct DictionaryRootFinder {
    roots: Arc<RootMap>,
}

impl DictionaryRootFinder {
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self { roots }
    }
}

impl RootFinder for DictionaryRootFinder {
    fn handles(&self, partial: &Sequence, _whole: &Sequence) -> bool {
        self.roots.contains(partial.as_str())
    }

    fn find_roots(&self, partial: &Sequence, _whole: &Sequence) -> Vec<Arc<Root>> {
        self.roots.get(partial.as_str()).to_vec()
    }
}
