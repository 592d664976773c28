//! This file provides label counting and the majority vote
//! shared by the tree builder and the classifier.
use std::collections::BTreeMap;


/// Counts the occurrences of each label.
/// Labels are kept in sorted order so that iteration is deterministic.
#[inline]
pub(crate) fn label_counts<'a, I>(labels: I) -> BTreeMap<&'a str, usize>
    where I: IntoIterator<Item = &'a str>,
{
    let mut counter = BTreeMap::new();
    for label in labels {
        *counter.entry(label).or_insert(0_usize) += 1;
    }
    counter
}


/// Returns the most frequent label.
/// Ties go to the lexicographically smallest label.
/// Returns `None` if `counts` is empty.
#[inline]
pub(crate) fn majority<'a>(counts: &BTreeMap<&'a str, usize>)
    -> Option<&'a str>
{
    let mut best: Option<(&'a str, usize)> = None;
    for (&label, &count) in counts {
        match best {
            Some((_, c)) if c >= count => {},
            _ => { best = Some((label, count)); },
        }
    }
    best.map(|(label, _)| label)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_picks_highest_count() {
        let counts = label_counts(["no", "yes", "yes", "maybe"]);
        assert_eq!(majority(&counts), Some("yes"));
    }

    #[test]
    fn majority_tie_goes_to_smallest_label() {
        let counts = label_counts(["yes", "no", "yes", "no"]);
        assert_eq!(majority(&counts), Some("no"));
    }

    #[test]
    fn majority_of_nothing() {
        let counts = label_counts(std::iter::empty());
        assert_eq!(majority(&counts), None);
    }
}
