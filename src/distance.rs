//! Character-level Levenshtein distance.

/// Levenshtein distance between two strings, counted in `char`s.
///
/// Insertions, deletions and substitutions each cost 1.
///
/// # Examples
///
/// ```
/// use bc2score::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("abcdef", "abczef"), 1);
/// assert_eq!(levenshtein("", "BRCA1"), 5);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_slices(&a, &b)
}

/// Levenshtein distance over arbitrary element slices.
///
/// Keeps two rows of the cost grid, each as wide as the shorter input, so
/// memory is `O(min(|a|, |b|))`. The result is always exact.
#[must_use]
pub fn levenshtein_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];

    for (i, long_item) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_item) in short.iter().enumerate() {
            let insert = previous[j + 1] + 1;
            let delete = current[j] + 1;
            let substitute = previous[j] + usize::from(short_item != long_item);
            current[j + 1] = insert.min(delete).min(substitute);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
