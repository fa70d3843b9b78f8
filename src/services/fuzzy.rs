//! Approximate keyword matching against free text.
//!
//! Scores lie in `(0, 1]`, higher is better. An exact occurrence of the needle
//! scores close to 1; an in-order but scattered occurrence scores at most 0.5
//! and decays with every skipped character and every break in the match.
//! Matches further into the text are slightly discounted.

/// Scores at or below this value are not treated as matches
pub const LOW_MATCH_THRESHOLD: f64 = 0.01;

const WORD_START_SCORE: f64 = 1.0;
const MID_WORD_SCORE: f64 = 0.9;
const SCATTERED_SCORE: f64 = 0.5;

/// Extra cost for each additional contiguous run in a scattered match
const GROUP_PENALTY: usize = 4;

/// Scattered matches costing more than this are discarded
const MAX_SCATTER_COST: usize = 48;

/// Position (in chars) at which a match is worth half as much
const POSITION_SCALE: f64 = 1000.0;

/// Scores how well `needle` occurs in `haystack`
///
/// Comparison is exact on chars; callers lowercase both sides. Returns `None`
/// when the needle is empty or no usable occurrence exists.
pub fn score(needle: &str, haystack: &str) -> Option<f64> {
    let needle: Vec<char> = needle.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    substring_score(&needle, &haystack).or_else(|| subsequence_score(&needle, &haystack))
}

fn positioned(base: f64, start: usize) -> f64 {
    base / (1.0 + start as f64 / POSITION_SCALE)
}

fn is_word_start(haystack: &[char], start: usize) -> bool {
    start == 0 || !haystack[start - 1].is_alphanumeric()
}

fn substring_score(needle: &[char], haystack: &[char]) -> Option<f64> {
    let mut best: Option<f64> = None;

    for (start, window) in haystack.windows(needle.len()).enumerate() {
        if window != needle {
            continue;
        }

        let word_start = is_word_start(haystack, start);
        let base = if word_start {
            WORD_START_SCORE
        } else {
            MID_WORD_SCORE
        };
        let candidate = positioned(base, start);

        if best.map_or(true, |b| candidate > b) {
            best = Some(candidate);
        }
        // Later occurrences only lose position
        if word_start {
            break;
        }
    }

    best
}

fn subsequence_score(needle: &[char], haystack: &[char]) -> Option<f64> {
    let mut best: Option<f64> = None;

    for start in 0..haystack.len() {
        if haystack[start] != needle[0] {
            continue;
        }
        let Some(cost) = scatter_cost(needle, &haystack[start..]) else {
            continue;
        };

        let candidate = positioned(SCATTERED_SCORE / (1.0 + cost as f64), start);
        if best.map_or(true, |b| candidate > b) {
            best = Some(candidate);
        }
    }

    best
}

/// Greedy in-order match of `needle` in `window`, whose first char already matches
fn scatter_cost(needle: &[char], window: &[char]) -> Option<usize> {
    let mut cost = 0;
    let mut cursor = 1;

    for &wanted in &needle[1..] {
        let end = (cursor + MAX_SCATTER_COST - cost + 1).min(window.len());
        let skipped = window
            .get(cursor..end)?
            .iter()
            .position(|&c| c == wanted)?;

        if skipped > 0 {
            cost += skipped + GROUP_PENALTY;
            if cost > MAX_SCATTER_COST {
                return None;
            }
        }
        cursor += skipped + 1;
    }

    Some(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_at_start_is_perfect() {
        assert_eq!(score("mecha", "mecha pilots"), Some(1.0));
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert_eq!(score("", "anything"), None);
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(score("psychological", "drama"), None);
    }

    #[test]
    fn test_missing_characters_do_not_match() {
        assert_eq!(score("mecha", "a quiet slice of life"), None);
    }

    #[test]
    fn test_word_start_beats_mid_word() {
        let word = score("art", "martial art").unwrap();
        let mid = score("art", "martial").unwrap();
        assert!(word > mid);
    }

    #[test]
    fn test_earlier_match_scores_higher() {
        let early = score("drama", "drama and more").unwrap();
        let late = score("drama", &format!("{} drama", "x".repeat(500))).unwrap();
        assert!(early > late);
        assert!(late > LOW_MATCH_THRESHOLD);
    }

    #[test]
    fn test_scattered_match_scores_below_exact() {
        let scattered = score("romance", "a quiet romantic comedy drama").unwrap();
        assert!(scattered > LOW_MATCH_THRESHOLD);
        assert!(scattered < SCATTERED_SCORE);
        assert!(score("romance", "a romance").unwrap() > scattered);
    }

    #[test]
    fn test_widely_scattered_match_is_discarded() {
        let haystack = format!("s{}c{}i", "x".repeat(40), "y".repeat(40));
        assert_eq!(score("sci", &haystack), None);
    }

    #[test]
    fn test_tighter_scatter_scores_higher() {
        let tight = score("scifi", "sci fi").unwrap();
        let loose = score("scifi", "sci and also fi").unwrap();
        assert!(tight > loose);
    }

    #[test]
    fn test_scores_are_bounded() {
        for (needle, haystack) in [
            ("action", "action"),
            ("action", "reaction"),
            ("sports", "s p o r t s"),
        ] {
            let s = score(needle, haystack).unwrap();
            assert!(s > 0.0 && s <= 1.0, "{} in {} scored {}", needle, haystack, s);
        }
    }
}
