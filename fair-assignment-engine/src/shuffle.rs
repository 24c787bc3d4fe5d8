use rand::seq::SliceRandom as _;
use rand::Rng;

/// Uniformly random permutation of `items` using the given random source.
///
/// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every permutation is
/// equally likely for an unbiased `rng`.
#[must_use]
pub fn shuffle_with<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items
}

#[must_use]
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}
