use std::collections::HashSet;
use std::hash::Hash;

/// Builds a duplicate-free sequence from any iterator
///
/// Each distinct value is kept once, at the position of its first
/// occurrence. Later occurrences are dropped.
pub fn unique_in_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_in_order_removes_duplicates() {
        let result = unique_in_order(vec!["a", "b", "a", "c", "b"]);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_in_order_empty() {
        let result: Vec<String> = unique_in_order(Vec::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_unique_in_order_all_same() {
        let result = unique_in_order(vec![7, 7, 7, 7]);
        assert_eq!(result, vec![7]);
    }

    #[test]
    fn test_unique_in_order_matches_distinct_set() {
        let input = vec!["x", "y", "x", "z", "y", "w", "z"];
        let result = unique_in_order(input.clone());

        let expected: HashSet<&str> = input.into_iter().collect();
        let actual: HashSet<&str> = result.iter().copied().collect();
        assert_eq!(actual, expected);
        assert_eq!(result.len(), expected.len());
    }
}
