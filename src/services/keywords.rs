use crate::models::{Energy, Judgment, Lifestyle, Perception, PersonalityType};

/// Search keywords for a personality type, most characteristic first
pub fn keywords_for(personality: PersonalityType) -> &'static [&'static str] {
    use Energy::{Extraversion as E, Introversion as I};
    use Judgment::{Feeling as F, Thinking as T};
    use Lifestyle::{Judging as J, Perceiving as P};
    use Perception::{Intuition as N, Sensing as S};

    match (
        personality.energy,
        personality.perception,
        personality.judgment,
        personality.lifestyle,
    ) {
        (I, S, T, J) => &["historical", "military", "detective", "strategy", "seinen"],
        (I, S, F, J) => &["slice of life", "family", "healing", "school", "drama"],
        (I, N, F, J) => &["psychological", "drama", "supernatural", "fantasy", "tragedy"],
        (I, N, T, J) => &["strategy", "psychological", "thriller", "mystery", "sci-fi"],
        (I, S, T, P) => &["mecha", "action", "martial arts", "survival", "sports"],
        (I, S, F, P) => &["music", "art", "romance", "slice of life", "iyashikei"],
        (I, N, F, P) => &["fantasy", "coming of age", "romance", "magic", "drama"],
        (I, N, T, P) => &["sci-fi", "mystery", "cyberpunk", "psychological", "time travel"],
        (E, S, T, P) => &["action", "sports", "adventure", "martial arts", "shonen"],
        (E, S, F, P) => &["comedy", "music", "idol", "romance", "adventure"],
        (E, N, F, P) => &["adventure", "fantasy", "comedy", "isekai", "magic"],
        (E, N, T, P) => &["sci-fi", "comedy", "heist", "strategy", "parody"],
        (E, S, T, J) => &["sports", "military", "police", "historical", "workplace"],
        (E, S, F, J) => &["romance", "school", "comedy", "friendship", "slice of life"],
        (E, N, F, J) => &["drama", "friendship", "shojo", "coming of age", "romance"],
        (E, N, T, J) => &["strategy", "politics", "war", "thriller", "mecha"],
    }
}

/// Keywords for a raw four-letter code
///
/// Unrecognised codes resolve to no keywords rather than an error.
pub fn keywords_for_code(code: &str) -> &'static [&'static str] {
    code.parse::<PersonalityType>()
        .map(keywords_for)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_keywords() {
        for personality in PersonalityType::all() {
            assert!(
                !keywords_for(personality).is_empty(),
                "{} has no keywords",
                personality
            );
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        for personality in PersonalityType::all() {
            assert_eq!(keywords_for(personality), keywords_for(personality));
        }
    }

    #[test]
    fn test_code_lookup_matches_typed_lookup() {
        for personality in PersonalityType::all() {
            assert_eq!(
                keywords_for_code(&personality.to_string()),
                keywords_for(personality)
            );
        }
    }

    #[test]
    fn test_infj_keywords() {
        assert_eq!(
            keywords_for_code("INFJ"),
            &["psychological", "drama", "supernatural", "fantasy", "tragedy"]
        );
    }

    #[test]
    fn test_unknown_code_resolves_to_nothing() {
        assert!(keywords_for_code("XXXX").is_empty());
        assert!(keywords_for_code("").is_empty());
        assert!(keywords_for_code("INFJP").is_empty());
    }
}
