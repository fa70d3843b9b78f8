use crate::{
    error::{AppError, AppResult},
    models::{Energy, Judgment, Lifestyle, Perception, PersonalityType},
};

/// Number of questions in the questionnaire
pub const ANSWER_COUNT: usize = 10;

/// Answer token that votes for the second letter of an axis (I, N, F, P)
const SECOND_LETTER_VOTE: &str = "1";

const ENERGY_QUESTIONS: [usize; 3] = [0, 4, 8];
const PERCEPTION_QUESTIONS: [usize; 3] = [1, 5, 9];
const JUDGMENT_QUESTIONS: [usize; 2] = [2, 6];
const LIFESTYLE_QUESTIONS: [usize; 2] = [3, 7];

fn second_letter_votes<S: AsRef<str>>(answers: &[S], questions: &[usize]) -> usize {
    questions
        .iter()
        .filter(|&&i| answers[i].as_ref() == SECOND_LETTER_VOTE)
        .count()
}

/// Classifies questionnaire answers into one of the sixteen personality types
///
/// E/I and S/N are decided by majority (2 of 3 votes). T/F and J/P flip to
/// their second letter on a single vote out of 2. The two rules differ on
/// purpose and must not be unified.
///
/// Any token other than `"1"` counts as a vote for the first letter.
pub fn classify<S: AsRef<str>>(answers: &[S]) -> AppResult<PersonalityType> {
    if answers.len() != ANSWER_COUNT {
        return Err(AppError::InvalidInput(format!(
            "Expected {} answers for personality classification, got {}",
            ANSWER_COUNT,
            answers.len()
        )));
    }

    let energy = if second_letter_votes(answers, &ENERGY_QUESTIONS) >= 2 {
        Energy::Introversion
    } else {
        Energy::Extraversion
    };

    let perception = if second_letter_votes(answers, &PERCEPTION_QUESTIONS) >= 2 {
        Perception::Intuition
    } else {
        Perception::Sensing
    };

    let judgment = if second_letter_votes(answers, &JUDGMENT_QUESTIONS) >= 1 {
        Judgment::Feeling
    } else {
        Judgment::Thinking
    };

    let lifestyle = if second_letter_votes(answers, &LIFESTYLE_QUESTIONS) >= 1 {
        Lifestyle::Perceiving
    } else {
        Lifestyle::Judging
    };

    Ok(PersonalityType::new(energy, perception, judgment, lifestyle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn answers(bits: &str) -> Vec<String> {
        bits.chars().map(|c| c.to_string()).collect()
    }

    fn code(bits: &str) -> String {
        classify(&answers(bits)).unwrap().to_string()
    }

    #[test]
    fn test_alternating_answers() {
        assert_eq!(code("1010101010"), "INFJ");
    }

    #[test]
    fn test_all_first_letters() {
        assert_eq!(code("0000000000"), "ESTJ");
    }

    #[test]
    fn test_all_second_letters() {
        assert_eq!(code("1111111111"), "INFP");
    }

    #[test]
    fn test_majority_axis_needs_two_votes() {
        // E/I questions are 0, 4, 8
        assert_eq!(code("0000000010"), "ESTJ");
        assert_eq!(code("0000100010"), "ISTJ");
        // S/N questions are 1, 5, 9
        assert_eq!(code("0000000001"), "ESTJ");
        assert_eq!(code("0100000001"), "ENTJ");
    }

    #[test]
    fn test_any_vote_axis_flips_on_one_vote() {
        // T/F questions are 2, 6
        assert_eq!(code("0000001000"), "ESFJ");
        assert_eq!(code("0010000000"), "ESFJ");
        // J/P questions are 3, 7
        assert_eq!(code("0000000100"), "ESTP");
        assert_eq!(code("0001000000"), "ESTP");
    }

    #[test]
    fn test_unknown_tokens_vote_for_first_letter() {
        let answers = vec!["yes", "x", "", "1 ", "true", "2", "-1", "0", "maybe", "I"];
        let personality = classify(&answers).unwrap();
        assert_eq!(personality.to_string(), "ESTJ");
    }

    #[test]
    fn test_wrong_length_is_invalid_input() {
        for len in [0, 1, 9, 11, 20] {
            let answers = vec!["1"; len];
            let result = classify(&answers);
            assert!(matches!(result, Err(AppError::InvalidInput(_))), "len {}", len);
        }
    }

    #[test]
    fn test_every_answer_vector_yields_a_known_type() {
        let known: HashSet<String> = PersonalityType::all().iter().map(|t| t.to_string()).collect();
        let mut seen = HashSet::new();

        for mask in 0u32..(1 << ANSWER_COUNT) {
            let bits: String = (0..ANSWER_COUNT)
                .map(|i| if mask & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            let result = code(&bits);
            assert!(known.contains(&result));
            seen.insert(result);
        }

        assert_eq!(seen.len(), 16);
    }
}
