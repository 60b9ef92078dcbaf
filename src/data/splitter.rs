// ============================================================
// Holdout Splitter
// ============================================================
// Splits the bulk records into a training set and a holdout
// set used only for evaluation.
//
//   records: [r0 r1 ... rN-h | rN-h+1 ... rN]
//             └── training ──┘ └─ holdout h ─┘
//
// Without a seed the split is positional: the last `holdout`
// records are held out, so repeated runs see identical sets.
// With a seed the records are shuffled first (Fisher-Yates via
// rand::seq::SliceRandom on a StdRng), which is still
// reproducible for a given seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split `samples` into (train, holdout).
///
/// A holdout larger than the dataset takes everything, leaving
/// the training set empty. Callers decide whether that is fatal.
pub fn split_holdout<T>(mut samples: Vec<T>, holdout: usize, seed: Option<u64>) -> (Vec<T>, Vec<T>) {
    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        samples.shuffle(&mut rng);
    }

    let total    = samples.len();
    let split_at = total.saturating_sub(holdout);
    let held     = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} holdout{}",
        samples.len(),
        held.len(),
        seed.map(|s| format!(" (shuffled, seed {s})")).unwrap_or_default(),
    );

    (samples, held)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_records_are_held_out() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_holdout(items, 3, None);
        assert_eq!(train, (0..7).collect::<Vec<_>>());
        assert_eq!(test,  vec![7, 8, 9]);
    }

    #[test]
    fn test_oversized_holdout_takes_everything() {
        let items: Vec<usize> = (0..4).collect();
        let (train, test)     = split_holdout(items, 100, None);
        assert!(train.is_empty());
        assert_eq!(test.len(), 4);
    }

    #[test]
    fn test_seeded_split_is_reproducible() {
        let a = split_holdout((0..50).collect::<Vec<usize>>(), 10, Some(42));
        let b = split_holdout((0..50).collect::<Vec<usize>>(), 10, Some(42));
        assert_eq!(a, b);
        assert_eq!(a.0.len() + a.1.len(), 50);
    }

    #[test]
    fn test_empty_dataset() {
        let (train, test) = split_holdout(Vec::<usize>::new(), 5, Some(1));
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
