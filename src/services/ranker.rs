use crate::{models::Anime, services::fuzzy};

/// Maximum number of recommendations returned
pub const MAX_RESULTS: usize = 10;

/// Ranking state for one catalog entry, scoped to a single `rank` call
#[derive(Debug)]
struct ScoredCandidate<'a> {
    anime: &'a Anime,
    score: f64,
    match_count: usize,
}

/// Lowercased synopsis followed by the genre tags
fn search_target(anime: &Anime) -> String {
    format!(
        "{} {}",
        anime.synopsis.as_deref().unwrap_or(""),
        anime.genres.join(" ")
    )
    .to_lowercase()
}

fn score_candidate<'a>(anime: &'a Anime, keywords: &[String]) -> ScoredCandidate<'a> {
    let target = search_target(anime);
    let mut total = 0.0;
    let mut match_count = 0;

    for keyword in keywords {
        if let Some(score) = fuzzy::score(keyword, &target) {
            if score > fuzzy::LOW_MATCH_THRESHOLD {
                total += score;
                match_count += 1;
            }
        }
    }

    // Divide by every keyword, not just the matched ones, so partial coverage costs
    let score = if match_count > 0 {
        total / keywords.len() as f64
    } else {
        f64::NEG_INFINITY
    };

    ScoredCandidate {
        anime,
        score,
        match_count,
    }
}

/// Ranks catalog entries by fuzzy keyword relevance
///
/// Entries matching no keyword are dropped. The rest are ordered by score,
/// best first, keeping corpus order for ties, and cut to [`MAX_RESULTS`].
pub fn rank<'a, S, I>(keywords: &[S], corpus: I) -> Vec<&'a Anime>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Anime>,
{
    if keywords.is_empty() {
        return Vec::new();
    }

    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .collect();

    let mut candidates: Vec<ScoredCandidate<'a>> = corpus
        .into_iter()
        .map(|anime| score_candidate(anime, &keywords))
        .filter(|candidate| candidate.match_count > 0)
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    candidates
        .into_iter()
        .take(MAX_RESULTS)
        .map(|candidate| candidate.anime)
        .collect()
}
