//! Fuzzy name scoring for the search box.
//!
//! The score is advisory: it is attached to every ranked row while a search
//! term is active but does not decide inclusion or order.

/// Score for a name identical to the search term.
pub const EXACT_SCORE: u32 = 100;
/// Score for a name containing the search term.
pub const SUBSTRING_SCORE: u32 = 75;
/// Ceiling for edit-distance based scores.
pub const FUZZY_CEILING: u32 = 50;

/// Classic Levenshtein distance over Unicode scalar values.
///
/// Fills the full `(a.len() + 1) x (b.len() + 1)` table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;

    let mut table = vec![0usize; (a.len() + 1) * width];
    for (i, row) in table.chunks_mut(width).enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[..width].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let substitution = table[(i - 1) * width + j - 1] + cost;
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            table[i * width + j] = substitution.min(deletion).min(insertion);
        }
    }

    table[a.len() * width + b.len()]
}

/// Score how well `name` matches `term`. Both are expected lowercased, and
/// `term` trimmed.
///
/// * empty term → 0
/// * exact → 100
/// * substring → 75
/// * otherwise → `max(0, 50 - edit_distance)`
pub fn match_score(name: &str, term: &str) -> u32 {
    if term.is_empty() {
        return 0;
    }
    if name == term {
        return EXACT_SCORE;
    }
    if name.contains(term) {
        return SUBSTRING_SCORE;
    }
    let distance = u32::try_from(edit_distance(name, term)).unwrap_or(u32::MAX);
    FUZZY_CEILING.saturating_sub(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("bob", "alice"), 5);
    }

    #[test]
    fn test_edit_distance_identity_and_symmetry() {
        let words = ["", "a", "ann", "anna", "hannah", "bob", "zoë", "alice"];
        for a in words {
            assert_eq!(edit_distance(a, a), 0);
            for b in words {
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("zoë", "zoe"), 1);
    }

    #[test]
    fn test_match_score_tiers() {
        assert_eq!(match_score("alice", "alice"), 100);
        assert_eq!(match_score("alicia", "ali"), 75);
        assert_eq!(match_score("bob", "alice"), 50 - 5);
    }

    #[test]
    fn test_match_score_empty_term() {
        assert_eq!(match_score("alice", ""), 0);
        assert_eq!(match_score("", ""), 0);
    }

    #[test]
    fn test_match_score_floors_at_zero() {
        let long_name = "x".repeat(80);
        assert_eq!(match_score(&long_name, "ab"), 0);
    }
}
