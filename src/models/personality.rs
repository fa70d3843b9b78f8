use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// E/I axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Energy {
    Extraversion,
    Introversion,
}

/// S/N axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perception {
    Sensing,
    Intuition,
}

/// T/F axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    Thinking,
    Feeling,
}

/// J/P axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifestyle {
    Judging,
    Perceiving,
}

impl Energy {
    pub fn letter(self) -> char {
        match self {
            Energy::Extraversion => 'E',
            Energy::Introversion => 'I',
        }
    }
}

impl Perception {
    pub fn letter(self) -> char {
        match self {
            Perception::Sensing => 'S',
            Perception::Intuition => 'N',
        }
    }
}

impl Judgment {
    pub fn letter(self) -> char {
        match self {
            Judgment::Thinking => 'T',
            Judgment::Feeling => 'F',
        }
    }
}

impl Lifestyle {
    pub fn letter(self) -> char {
        match self {
            Lifestyle::Judging => 'J',
            Lifestyle::Perceiving => 'P',
        }
    }
}

/// Four-letter personality type derived from questionnaire answers
///
/// Never persisted; it is recomputed from the answers on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityType {
    pub energy: Energy,
    pub perception: Perception,
    pub judgment: Judgment,
    pub lifestyle: Lifestyle,
}

impl PersonalityType {
    pub fn new(
        energy: Energy,
        perception: Perception,
        judgment: Judgment,
        lifestyle: Lifestyle,
    ) -> Self {
        Self {
            energy,
            perception,
            judgment,
            lifestyle,
        }
    }

    /// All sixteen types, in E/I, S/N, T/F, J/P order
    pub fn all() -> Vec<PersonalityType> {
        let mut types = Vec::with_capacity(16);
        for energy in [Energy::Extraversion, Energy::Introversion] {
            for perception in [Perception::Sensing, Perception::Intuition] {
                for judgment in [Judgment::Thinking, Judgment::Feeling] {
                    for lifestyle in [Lifestyle::Judging, Lifestyle::Perceiving] {
                        types.push(Self::new(energy, perception, judgment, lifestyle));
                    }
                }
            }
        }
        types
    }
}

impl Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.energy.letter(),
            self.perception.letter(),
            self.judgment.letter(),
            self.lifestyle.letter()
        )
    }
}

impl FromStr for PersonalityType {
    type Err = AppError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidInput(format!("Unknown personality type: {}", code));

        let letters: Vec<char> = code.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        let &[e, s, t, j] = letters.as_slice() else {
            return Err(invalid());
        };

        let energy = match e {
            'E' => Energy::Extraversion,
            'I' => Energy::Introversion,
            _ => return Err(invalid()),
        };
        let perception = match s {
            'S' => Perception::Sensing,
            'N' => Perception::Intuition,
            _ => return Err(invalid()),
        };
        let judgment = match t {
            'T' => Judgment::Thinking,
            'F' => Judgment::Feeling,
            _ => return Err(invalid()),
        };
        let lifestyle = match j {
            'J' => Lifestyle::Judging,
            'P' => Lifestyle::Perceiving,
            _ => return Err(invalid()),
        };

        Ok(Self::new(energy, perception, judgment, lifestyle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_code() {
        let infj = PersonalityType::new(
            Energy::Introversion,
            Perception::Intuition,
            Judgment::Feeling,
            Lifestyle::Judging,
        );
        assert_eq!(infj.to_string(), "INFJ");
    }

    #[test]
    fn test_all_types_are_distinct() {
        let codes: HashSet<String> = PersonalityType::all().iter().map(|t| t.to_string()).collect();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_parse_round_trips_every_code() {
        for personality in PersonalityType::all() {
            let parsed: PersonalityType = personality.to_string().parse().unwrap();
            assert_eq!(parsed, personality);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: PersonalityType = "entp".parse().unwrap();
        assert_eq!(parsed.to_string(), "ENTP");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        for code in ["", "INF", "INFJX", "XNFJ", "IXFJ", "INXJ", "INFX"] {
            assert!(code.parse::<PersonalityType>().is_err(), "{} should not parse", code);
        }
    }
}
