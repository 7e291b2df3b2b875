//! Recording implementation of the Nurse trait.

use parking_lot::Mutex;
use pokecenter_core::{CoreError, Nurse, Pokemon};
use std::fmt;

type Matcher = Box<dyn Fn(&Pokemon) -> bool + Send + Sync>;
type Treatment = Box<dyn Fn(Pokemon) -> Result<Pokemon, CoreError> + Send + Sync>;

/// A test nurse that records every pokemon it is asked to heal
///
/// Answers come from the first rule whose matcher accepts the pokemon, then
/// from the fallback treatment. Without rules or fallback the pokemon is
/// returned unchanged.
pub struct RecordingNurse {
    calls: Mutex<Vec<Pokemon>>,
    rules: Vec<(Matcher, Treatment)>,
    fallback: Option<Treatment>,
}

impl fmt::Debug for RecordingNurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingNurse")
            .field("calls", &*self.calls.lock())
            .field("rule_count", &self.rules.len())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

impl RecordingNurse {
    /// Create a nurse that hands every pokemon back unchanged
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rules: Vec::new(),
            fallback: None,
        }
    }

    /// Answer with `output` whenever the nurse is called with a pokemon equal to `input`
    pub fn when_healing(self, input: Pokemon, output: Pokemon) -> Self {
        self.when_matching(move |p| *p == input, output)
    }

    /// Answer with `output` whenever the nurse is called with a pokemon accepted by `matcher`
    pub fn when_matching<M>(mut self, matcher: M, output: Pokemon) -> Self
    where
        M: Fn(&Pokemon) -> bool + Send + Sync + 'static,
    {
        let matcher: Matcher = Box::new(matcher);
        let treatment: Treatment = Box::new(move |_: Pokemon| Ok(output.clone()));
        self.rules.push((matcher, treatment));
        self
    }

    /// Treatment used when no rule matches
    pub fn otherwise<T>(mut self, treatment: T) -> Self
    where
        T: Fn(Pokemon) -> Result<Pokemon, CoreError> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(treatment));
        self
    }

    /// Restore every unmatched pokemon to `max_hp`
    pub fn restoring_to(self, max_hp: i32) -> Self {
        self.otherwise(move |mut p| {
            p.set_hp(max_hp);
            Ok(p)
        })
    }

    /// Fail with `CoreError::HealingFailed` for every unmatched pokemon
    pub fn failing(self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.otherwise(move |_| Err(CoreError::HealingFailed(reason.clone())))
    }

    /// Get a list of all pokemon the nurse was called with, in call order
    pub fn calls(&self) -> Vec<Pokemon> {
        self.calls.lock().clone()
    }

    /// Number of times the nurse was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether the nurse was called exactly `times` times
    pub fn was_called_times(&self, times: usize) -> bool {
        self.call_count() == times
    }

    /// Whether at least one call received a pokemon accepted by `predicate`
    ///
    /// The predicate runs on a snapshot of the calls, so it may query this nurse.
    pub fn was_called_with<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Pokemon) -> bool,
    {
        self.calls().iter().any(predicate)
    }

    /// Number of calls that received a pokemon accepted by `predicate`
    pub fn times_called_with<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Pokemon) -> bool,
    {
        self.calls().iter().filter(|&p| predicate(p)).count()
    }

    /// Clear the recorded calls, keeping the configured answers
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl Default for RecordingNurse {
    fn default() -> Self {
        Self::new()
    }
}

impl Nurse for RecordingNurse {
    fn heal(&self, pokemon: Pokemon) -> Result<Pokemon, CoreError> {
        // Record the call before answering, failures count as calls too
        self.calls.lock().push(pokemon.clone());
        tracing::trace!(pokemon = %pokemon, "RecordingNurse called");

        if let Some((_, treatment)) = self.rules.iter().find(|(matcher, _)| matcher(&pokemon)) {
            return treatment(pokemon);
        }

        match &self.fallback {
            Some(treatment) => treatment(pokemon),
            None => Ok(pokemon),
        }
    }
}
