use std::collections::HashSet;

/// Group numbers missing from the contiguous range `[1, max]`. Empty input
/// yields an empty result; zero is an ordinary member and is never reported
/// missing since the range starts at 1.
pub fn find_missing_numbers(numbers: &[u64]) -> Vec<u64> {
    let max = match numbers.iter().max() {
        Some(&max) => max,
        None => return Vec::new(),
    };

    let observed: HashSet<u64> = numbers.iter().copied().collect();
    (1..=max).filter(|n| !observed.contains(n)).collect()
}
