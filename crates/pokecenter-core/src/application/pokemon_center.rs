use crate::{
    config::CenterConfig,
    domain::{nurse::Nurse, pokemon::Pokemon},
    CoreError,
};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Holding queue that hands pokemon to a nurse, oldest first
///
/// The center is not synchronised: `accept` and `collect` take `&mut self`,
/// callers sharing a center across threads must wrap it in their own lock.
pub struct PokemonCenter {
    /// Pokemon waiting to be collected, oldest at the front
    pokemons: VecDeque<Pokemon>,

    /// Nurse healing every collected pokemon
    nurse: Arc<dyn Nurse>,

    /// Center configuration
    config: CenterConfig,
}

impl fmt::Debug for PokemonCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokemonCenter")
            .field("name", &self.config.name)
            .field("waiting", &self.pokemons.len())
            .finish()
    }
}

impl PokemonCenter {
    /// Create an empty center with the default configuration
    pub fn new(nurse: Arc<dyn Nurse>) -> Self {
        let config = CenterConfig::default();

        Self {
            pokemons: VecDeque::with_capacity(config.initial_capacity),
            nurse,
            config,
        }
    }

    /// Create an empty center with the given configuration
    pub fn with_config(nurse: Arc<dyn Nurse>, config: CenterConfig) -> Result<Self, CoreError> {
        config.validate()?;

        Ok(Self {
            pokemons: VecDeque::with_capacity(config.initial_capacity),
            nurse,
            config,
        })
    }

    /// Configuration of this center
    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    /// Leave a pokemon at the center, behind every pokemon already waiting
    pub fn accept(&mut self, pokemon: Pokemon) {
        tracing::debug!(
            center = %self.config.name,
            pokemon = %pokemon.name(),
            hp = pokemon.hp(),
            queued = self.pokemons.len() + 1,
            "Pokemon accepted"
        );

        self.pokemons.push_back(pokemon);
    }

    /// Collect the oldest waiting pokemon, healed by the nurse
    ///
    /// Returns `Ok(None)` without calling the nurse when nobody is waiting.
    /// A nurse failure is returned as is; the popped pokemon is not put back.
    pub fn collect(&mut self) -> Result<Option<Pokemon>, CoreError> {
        let Some(pokemon) = self.pokemons.pop_front() else {
            tracing::trace!(center = %self.config.name, "No pokemon waiting");
            return Ok(None);
        };

        let span = tracing::debug_span!(
            "collect",
            center = %self.config.name,
            pokemon = %pokemon.name()
        );
        let _enter = span.enter();

        let healed = self.nurse.heal(pokemon).map_err(|err| {
            tracing::warn!(error = %err, "Nurse failed to heal pokemon");
            err
        })?;

        tracing::debug!(
            healed = %healed.name(),
            hp = healed.hp(),
            queued = self.pokemons.len(),
            "Pokemon healed"
        );

        Ok(Some(healed))
    }

    /// Number of pokemon waiting
    pub fn len(&self) -> usize {
        self.pokemons.len()
    }

    /// Whether no pokemon is waiting
    pub fn is_empty(&self) -> bool {
        self.pokemons.is_empty()
    }

    /// Waiting pokemon, oldest first, without removing them
    pub fn waiting(&self) -> impl Iterator<Item = &Pokemon> + '_ {
        self.pokemons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nurse::MockNurse;
    use mockall::predicate::{eq, function};
    use mockall::Sequence;

    fn rowlet(hp: i32) -> Pokemon {
        Pokemon::new("Rowlet", hp)
    }

    #[test]
    fn test_collect_heals_accepted_pokemon() {
        let input = rowlet(10);
        let expected = rowlet(100);

        let mut nurse = MockNurse::new();
        let returned = expected.clone();
        nurse.expect_heal()
            .with(eq(input.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let mut center = PokemonCenter::new(Arc::new(nurse));
        center.accept(input);

        assert_eq!(center.collect().unwrap(), Some(expected));
    }

    #[test]
    fn test_collect_on_empty_center_skips_nurse() {
        let mut nurse = MockNurse::new();
        nurse.expect_heal().never();

        let mut center = PokemonCenter::new(Arc::new(nurse));

        assert_eq!(center.collect().unwrap(), None);
        assert!(center.is_empty());
    }

    #[test]
    fn test_same_pokemon_accepted_twice_is_healed_twice() {
        let input = rowlet(10);
        let expected = rowlet(100);

        let mut nurse = MockNurse::new();
        let returned = expected.clone();
        nurse.expect_heal()
            .with(eq(input.clone()))
            .times(2)
            .returning(move |_| Ok(returned.clone()));

        let mut center = PokemonCenter::new(Arc::new(nurse));
        center.accept(input.clone());
        center.accept(input);

        assert_eq!(center.collect().unwrap(), Some(expected.clone()));
        assert_eq!(center.collect().unwrap(), Some(expected));
        assert_eq!(center.len(), 0);
    }

    #[test]
    fn test_copied_pokemon_matches_predicate() {
        let input = rowlet(10);
        let expected = rowlet(100);

        let mut nurse = MockNurse::new();
        let (name, hp) = (input.name().to_string(), input.hp());
        let returned = expected.clone();
        nurse.expect_heal()
            .with(function(move |p: &Pokemon| p.name() == name && p.hp() == hp))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let mut center = PokemonCenter::new(Arc::new(nurse));
        center.accept(input.copy());

        assert_eq!(center.collect().unwrap(), Some(expected));
    }

    #[test]
    fn test_pokemon_are_healed_in_arrival_order() {
        let party = vec![rowlet(10), Pokemon::new("Litten", 20), Pokemon::new("Popplio", 30)];

        let mut nurse = MockNurse::new();
        let mut seq = Sequence::new();
        for pokemon in &party {
            nurse.expect_heal()
                .with(eq(pokemon.clone()))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|mut p| {
                    p.set_hp(100);
                    Ok(p)
                });
        }

        let mut center = PokemonCenter::new(Arc::new(nurse));
        for pokemon in &party {
            center.accept(pokemon.clone());
        }

        for pokemon in &party {
            let healed = center.collect().unwrap().unwrap();
            assert_eq!(healed.name(), pokemon.name());
            assert_eq!(healed.hp(), 100);
        }
        assert_eq!(center.collect().unwrap(), None);
    }

    #[test]
    fn test_nurse_failure_is_propagated() {
        let mut nurse = MockNurse::new();
        nurse.expect_heal()
            .times(1)
            .returning(|p| Err(CoreError::HealingFailed(p.name().to_string())));

        let mut center = PokemonCenter::new(Arc::new(nurse));
        center.accept(rowlet(0));
        center.accept(Pokemon::new("Litten", 5));

        assert_eq!(
            center.collect(),
            Err(CoreError::HealingFailed("Rowlet".to_string()))
        );
        // The failed pokemon is consumed, the rest keeps waiting
        assert_eq!(center.waiting().collect::<Vec<_>>(), vec![&Pokemon::new("Litten", 5)]);
    }

    #[test]
    fn test_accept_and_inspect_queue() {
        let mut nurse = MockNurse::new();
        nurse.expect_heal().never();

        let mut center = PokemonCenter::new(Arc::new(nurse));
        assert!(center.is_empty());

        center.accept(rowlet(1));
        center.accept(rowlet(2));

        assert_eq!(center.len(), 2);
        let hps: Vec<i32> = center.waiting().map(Pokemon::hp).collect();
        assert_eq!(hps, vec![1, 2]);
    }

    #[test]
    fn test_with_config_validates() {
        let nurse = Arc::new(MockNurse::new());

        let center = PokemonCenter::with_config(nurse.clone(), CenterConfig::new("cerulean")).unwrap();
        assert_eq!(center.config().name, "cerulean");

        let err = PokemonCenter::with_config(nurse, CenterConfig::new("")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigurationError(_)));
    }

    #[test]
    fn test_with_config_rejects_oversized_capacity() {
        let config = CenterConfig {
            name: "saffron".to_string(),
            initial_capacity: usize::MAX,
        };

        let result = PokemonCenter::with_config(Arc::new(MockNurse::new()), config);

        assert!(matches!(result, Err(CoreError::ConfigurationError(_))));
    }

    #[test]
    fn test_closure_nurse() {
        let mut center = PokemonCenter::new(Arc::new(|mut p: Pokemon| -> Result<Pokemon, CoreError> {
            p.set_hp(p.hp() * 10);
            Ok(p)
        }));
        center.accept(rowlet(10));

        assert_eq!(center.collect().unwrap(), Some(rowlet(100)));
    }
}
