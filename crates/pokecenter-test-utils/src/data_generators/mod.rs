//! Test data generators for the Pokemon Center.

use pokecenter_core::Pokemon;

const PARTY_NAMES: [&str; 6] = ["Rowlet", "Litten", "Popplio", "Pikipek", "Yungoos", "Grubbin"];

/// A Rowlet with the given health
pub fn rowlet(hp: i32) -> Pokemon {
    Pokemon::new("Rowlet", hp)
}

/// `size` distinct pokemon with increasing health
///
/// Names cycle once the built-in roster runs out, so a numeric suffix keeps
/// every generated pokemon unique.
pub fn sample_party(size: usize) -> Vec<Pokemon> {
    (0..size)
        .map(|i| {
            let base = PARTY_NAMES[i % PARTY_NAMES.len()];
            let name = match i / PARTY_NAMES.len() {
                0 => base.to_string(),
                round => format!("{base}-{round}"),
            };
            Pokemon::new(name, (i as i32 + 1) * 10)
        })
        .collect()
}
