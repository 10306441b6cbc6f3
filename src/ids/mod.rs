//! Short random identifiers for gripes.

use rand::Rng;

/// Characters an ID is drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated gripe IDs.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Upper bound on resampling before giving up.
pub const MAX_ATTEMPTS: usize = 1_000;

/// Generate an ID of `length` characters not accepted by `taken`.
///
/// Returns `None` only if every attempt collided.
pub fn generate_id<F>(taken: F, length: usize) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    generate_id_with(&mut rand::thread_rng(), taken, length)
}

/// Same as [`generate_id`] with a caller-supplied random source.
pub fn generate_id_with<R, F>(rng: &mut R, taken: F, length: usize) -> Option<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let id: String = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        if !taken(&id) {
            return Some(id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn test_id_shape() {
        let id = generate_id(|_| false, DEFAULT_ID_LENGTH).unwrap();
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_never_collides_with_existing() {
        let mut rng = StdRng::seed_from_u64(7);
        let existing: HashSet<String> = (0..200)
            .map(|_| generate_id_with(&mut rng, |_| false, DEFAULT_ID_LENGTH).unwrap())
            .collect();

        for _ in 0..1000 {
            let id = generate_id(|c| existing.contains(c), DEFAULT_ID_LENGTH).unwrap();
            assert!(!existing.contains(&id));
        }
    }

    #[test]
    fn test_resamples_until_free() {
        // With length 1 most of the space is taken; the only free IDs are 'y' and 'z'.
        let taken: BTreeMap<String, String> = ALPHABET
            .iter()
            .map(|b| (*b as char).to_string())
            .filter(|c| c != "y" && c != "z")
            .map(|c| (c, String::new()))
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let id = generate_id_with(&mut rng, |c| taken.contains_key(c), 1).unwrap();
            assert!(id == "y" || id == "z");
        }
    }

    #[test]
    fn test_exhausted_space_returns_none() {
        assert_eq!(generate_id(|_| true, DEFAULT_ID_LENGTH), None);
    }
}
