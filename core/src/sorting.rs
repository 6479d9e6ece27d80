//! Quicksort, in the two shapes the benchmark compares.
//!
//! [`quicksort`] is the list-partitioning form: it allocates three buckets per
//! call and concatenates them. [`quicksort_in_place`] is the classic Lomuto
//! partition over a mutable slice.

use rand::Rng;

/// Default bounds for [`random_array`] values.
pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const DEFAULT_MAX_VALUE: i64 = 1000;

/// Sort by partitioning around the middle element into less / equal / greater
/// buckets and recursing on the two outer buckets.
///
/// Values that compare unordered with the pivot (NaN) fall in no bucket and
/// are dropped, so callers should only pass totally ordered data.
pub fn quicksort<T: PartialOrd + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }

    let pivot = &arr[arr.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for x in arr {
        if x < pivot {
            less.push(x.clone());
        } else if x == pivot {
            equal.push(x.clone());
        } else if x > pivot {
            greater.push(x.clone());
        }
    }

    let mut sorted = quicksort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&greater));
    sorted
}

/// Sort in place with Lomuto partitioning (last element as pivot).
///
/// Recurses into the smaller partition and loops on the larger one, which
/// keeps the stack depth logarithmic even for inputs with long runs of equal
/// values.
pub fn quicksort_in_place<T: PartialOrd>(arr: &mut [T]) {
    let mut slice = arr;
    while slice.len() > 1 {
        let pivot = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_in_place(left);
            slice = right;
        } else {
            quicksort_in_place(right);
            slice = left;
        }
    }
}

/// Returns the final index of the pivot. `arr` must not be empty.
fn partition<T: PartialOrd>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }

    arr.swap(store, high);
    store
}

/// Generate `size` uniformly distributed integers in `min..=max`.
pub fn random_array<R: Rng + ?Sized>(size: usize, min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_non_decreasing<T: PartialOrd>(values: &[T]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    fn std_sorted(values: &[i64]) -> Vec<i64> {
        let mut copy = values.to_vec();
        copy.sort_unstable();
        copy
    }

    #[test]
    fn quicksort_handles_empty_and_single() {
        assert!(quicksort::<i64>(&[]).is_empty());
        assert_eq!(quicksort(&[7]), vec![7]);
    }

    #[test]
    fn quicksort_sorts_small_example() {
        assert_eq!(
            quicksort(&[3, 6, 8, 10, 1, 2, 1]),
            vec![1, 1, 2, 3, 6, 8, 10]
        );
    }

    #[test]
    fn quicksort_output_is_sorted_permutation_of_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in [2, 3, 17, 256, 5_000] {
            let input = random_array(size, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, &mut rng);
            let sorted = quicksort(&input);

            assert!(is_non_decreasing(&sorted));
            assert_eq!(sorted, std_sorted(&input));
        }
    }

    #[test]
    fn quicksort_does_not_modify_input() {
        let input = vec![5, 4, 3, 2, 1];
        let _ = quicksort(&input);
        assert_eq!(input, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn quicksort_sorts_floats() {
        let sorted = quicksort(&[2.5, -1.0, 0.0, 2.5, 1e-9]);
        assert_eq!(sorted, vec![-1.0, 0.0, 1e-9, 2.5, 2.5]);
    }

    #[test]
    fn in_place_handles_empty_and_single() {
        let mut empty: Vec<i64> = Vec::new();
        quicksort_in_place(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        quicksort_in_place(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn in_place_sorts_already_sorted_and_reversed_input() {
        let mut ascending: Vec<i64> = (0..2_000).collect();
        quicksort_in_place(&mut ascending);
        assert!(is_non_decreasing(&ascending));

        let mut descending: Vec<i64> = (0..2_000).rev().collect();
        quicksort_in_place(&mut descending);
        assert_eq!(descending, (0..2_000).collect::<Vec<_>>());
    }

    #[test]
    fn in_place_handles_all_equal_values() {
        let mut values = vec![4_i64; 3_000];
        quicksort_in_place(&mut values);
        assert!(values.iter().all(|&v| v == 4));
        assert_eq!(values.len(), 3_000);
    }

    #[test]
    fn in_place_output_is_sorted_permutation_of_random_input() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [2, 5, 64, 1_000, 10_000] {
            let input = random_array(size, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, &mut rng);
            let mut sorted = input.clone();
            quicksort_in_place(&mut sorted);

            assert!(is_non_decreasing(&sorted));
            assert_eq!(sorted, std_sorted(&input));
        }
    }

    #[test]
    fn both_variants_agree() {
        let mut rng = StdRng::seed_from_u64(99);
        let input = random_array(1_234, -50, 50, &mut rng);

        let mut in_place = input.clone();
        quicksort_in_place(&mut in_place);

        assert_eq!(quicksort(&input), in_place);
    }

    #[test]
    fn random_array_respects_bounds_and_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = random_array(1_000, 10, 20, &mut rng);

        assert_eq!(values.len(), 1_000);
        assert!(values.iter().all(|v| (10..=20).contains(v)));
    }
}
