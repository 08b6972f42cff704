//! Levenshtein edit distance
//!
//! Unit cost for insertion, deletion and substitution. No transpositions.

/// Edit distance between `a` and `b`, ignoring case
///
/// Uses two rolling rows sized by the shorter input, so memory is
/// `O(min(len(a), len(b)))`. The result matches the full-matrix formulation.
///
/// # Examples
/// ```
/// use dictionary_search::core::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("Apple", "apple"), 0);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a == b {
        return 0;
    }

    // Row length follows the longer word, the outer loop the shorter one
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=long.len()).collect();
    let mut curr_row = vec![0; long.len() + 1];

    for (i, &sc) in short.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &lc) in long.iter().enumerate() {
            let cost = usize::from(sc != lc);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[long.len()]
}
