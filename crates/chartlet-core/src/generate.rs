//! Random datasets for demos and tests.

use indexmap::IndexMap;
use rand::Rng;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVXWYZ";

/// Values are integers in `0..MAX_VALUE`.
pub const MAX_VALUE: u32 = 40;
pub const DEFAULT_LENGTH: usize = 3;
pub const DEFAULT_GROUP_VALUES: usize = 2;

pub type CategoricalData = IndexMap<String, f64>;
pub type GroupedCategoricalData = IndexMap<String, Vec<f64>>;

fn letter(i: usize) -> String {
    let letters = LETTERS.as_bytes();
    (letters[i % letters.len()] as char).to_string()
}

fn random_value<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..MAX_VALUE))
}

/// `length` letter-keyed random values.
///
/// Keys wrap around after `Z`; a repeated key keeps its first position and takes the later value.
pub fn generate_categories<R: Rng + ?Sized>(rng: &mut R, length: usize) -> CategoricalData {
    let values: Vec<f64> = (0..length).map(|_| random_value(rng)).collect();
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (letter(i), v))
        .collect()
}

pub fn generate_groups<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    values: usize,
) -> GroupedCategoricalData {
    let groups: Vec<Vec<f64>> = (0..length)
        .map(|_| (0..values).map(|_| random_value(rng)).collect())
        .collect();
    groups
        .into_iter()
        .enumerate()
        .map(|(i, vs)| (letter(i), vs))
        .collect()
}
