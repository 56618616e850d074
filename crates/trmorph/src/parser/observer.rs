// Structured hooks into the parse search

use crate::morpheme::MorphemeContainer;
use crate::morphotactics::Suffix;

/// Why a suffix form was not applied to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The suffix was already applied since the last derivation.
    AlreadyApplied,
    /// A suffix of the same group was already applied since the last
    /// derivation.
    GroupTouched,
    Precondition,
    /// The template could not be realized for the container's attributes.
    Unrealizable,
    /// The remaining input does not start with the realized surface.
    SurfaceMismatch,
    /// The root or a previous form required a different next letter.
    Expectation,
    Postcondition,
    /// The previous derivation's post-derivative condition failed.
    PostDerivative,
}

/// Receives search events. Every method has a no-op default.
pub trait ParseObserver {
    fn candidate_seeded(&mut self, _container: &MorphemeContainer) {}

    fn transition_applied(&mut self, _from: &MorphemeContainer, _to: &MorphemeContainer) {}

    fn transition_rejected(&mut self, _container: &MorphemeContainer, _suffix: &Suffix, _reason: Rejection) {}

    fn result_accepted(&mut self, _container: &MorphemeContainer) {}

    /// A terminal container with unconsumed input.
    fn container_dropped(&mut self, _container: &MorphemeContainer) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}
