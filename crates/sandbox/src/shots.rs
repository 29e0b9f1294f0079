use quantum::{measure, StateVector};
use rayon::prelude::*;
use rng::OndRng;

/// Outcome histogram from `shots` independent measurements of `psi`.
///
/// Shots are split across `batches` (clamped to `1..=shots`), each with its
/// own `OndRng` keyed by `seed` and batch index, and run in parallel. The
/// result depends only on the arguments, not on the number of worker threads.
pub fn sample_counts(psi: &StateVector, shots: usize, seed: &str, batches: usize) -> [usize; 4] {
    let batches = batches.min(shots).max(1);
    let per = shots / batches;
    let extra = shots % batches;

    let partial: Vec<[usize; 4]> = (0..batches)
        .into_par_iter()
        .map(|b| {
            let n = per + usize::from(b < extra);
            let seed_str = format!("{}-shots-{}", seed, b);
            let mut rng = OndRng::new(seed_str.as_bytes());
            let mut counts = [0usize; 4];
            for _ in 0..n {
                counts[measure(psi, &mut rng).outcome.index()] += 1;
            }
            counts
        })
        .collect();

    let mut total = [0usize; 4];
    for counts in partial {
        for (t, c) in total.iter_mut().zip(counts) {
            *t += c;
        }
    }
    total
}

/// Counts as fractions of their sum; all zeros when there are no shots.
pub fn frequencies(counts: &[usize; 4]) -> [f64; 4] {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return [0.0; 4];
    }
    counts.map(|c| c as f64 / n as f64)
}
