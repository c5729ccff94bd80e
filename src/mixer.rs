use std::collections::HashSet;

use rand::Rng;

use super::types::WordSource;

/// In-place Fisher-Yates shuffle: walks from the last index down to 1 and
/// swaps each slot with a uniformly drawn index in `0..=i`.
///
/// The sequence of draws is fixed, so a deterministic `rng` gives a
/// reproducible permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Up to `count` distinct positions of `pool`, uniformly sampled.
pub fn pick_random<T: Clone>(pool: &[T], count: usize) -> Vec<T> {
    pick_random_with(pool, count, &mut rand::thread_rng())
}

pub fn pick_random_with<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut picked = pool.to_vec();
    shuffle(&mut picked, rng);
    picked.truncate(count);
    picked
}

/// Build a shuffled list of at most `total_count` words drawn from `sources`
/// in proportion to their ratios.
///
/// Each source contributes `ceil(total_count * ratio / sum_of_ratios)` words
/// (capped by its pool size); the concatenation is shuffled and then cut to
/// `total_count`. Because every share rounds up, the cut drops a random
/// excess and the final proportions are only approximate. Empty pools are
/// skipped without redistributing their share.
pub fn mix(sources: &[WordSource], total_count: usize) -> Vec<String> {
    mix_with(sources, total_count, &mut rand::thread_rng())
}

pub fn mix_with<R: Rng + ?Sized>(
    sources: &[WordSource],
    total_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let total_ratio: f64 = sources.iter().map(|s| s.ratio).sum();
    // Also rejects NaN and negative sums.
    if !(total_ratio > 0.0) {
        tracing::debug!(sources = sources.len(), "word mix: no positive ratio");
        return Vec::new();
    }

    let mut combined = Vec::new();
    for source in sources.iter().filter(|s| !s.words.is_empty()) {
        let target = (total_count as f64 * (source.ratio / total_ratio)).ceil();
        let target = if target > 0.0 { target as usize } else { 0 };
        combined.extend(pick_random_with(&source.words, target, rng));
    }

    shuffle(&mut combined, rng);
    combined.truncate(total_count);
    combined
}

/// Two-source convenience: `primary` gets `primary_ratio`, `secondary` the rest.
pub fn mix_two_sources(
    primary: &[String],
    secondary: &[String],
    total_count: usize,
    primary_ratio: f64,
) -> Vec<String> {
    mix_two_sources_with(primary, secondary, total_count, primary_ratio, &mut rand::thread_rng())
}

pub fn mix_two_sources_with<R: Rng + ?Sized>(
    primary: &[String],
    secondary: &[String],
    total_count: usize,
    primary_ratio: f64,
    rng: &mut R,
) -> Vec<String> {
    let sources = [
        WordSource {
            words: primary.to_vec(),
            ratio: primary_ratio,
        },
        WordSource {
            words: secondary.to_vec(),
            ratio: 1.0 - primary_ratio,
        },
    ];
    mix_with(&sources, total_count, rng)
}

/// Share of the primary source in [`mix_two_sources`] when callers have no
/// preference.
pub const DEFAULT_PRIMARY_RATIO: f64 = 0.7;

/// Case-insensitive dedup keeping the first occurrence, with its casing, in
/// first-seen order.
pub fn deduplicate_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| seen.insert(w.to_lowercase()))
        .map(str::to_string)
        .collect()
}
