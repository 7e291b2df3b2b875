//! Mock implementation of the Nurse trait.

use mockall::mock;
use mockall::predicate::eq;
use pokecenter_core::{CoreError, Nurse, Pokemon};

// Generate the mock implementation for Nurse
mock! {
    pub Nurse {}

    impl Nurse for Nurse {
        fn heal(&self, pokemon: Pokemon) -> Result<Pokemon, CoreError>;
    }
}

/// Creates a mock nurse that restores every pokemon to `max_hp`.
pub fn create_mock_nurse(max_hp: i32) -> MockNurse {
    let mut mock = MockNurse::new();

    mock.expect_heal().returning(move |mut pokemon| {
        pokemon.set_hp(max_hp);
        Ok(pokemon)
    });

    mock
}

/// Creates a mock nurse expecting exactly `times` calls with `input`, each
/// answered with `output`.
pub fn create_mock_nurse_for(input: Pokemon, output: Pokemon, times: usize) -> MockNurse {
    let mut mock = MockNurse::new();

    mock.expect_heal()
        .with(eq(input))
        .times(times)
        .returning(move |_| Ok(output.clone()));

    mock
}

/// Creates a mock nurse that must never be called.
pub fn create_idle_mock_nurse() -> MockNurse {
    let mut mock = MockNurse::new();
    mock.expect_heal().never();
    mock
}
