//! Final recommendation for a decision session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::DecisionOption;

/// The option the coach recommends, and why.
///
/// `choice` is meant to be the title of one of the session's options. The
/// remote service is only asked to honour that, so incoming values go
/// through [`Recommendation::matched_to`] before being accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub choice: String,
    pub reasoning: String,
}

impl Recommendation {
    pub fn new(choice: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            choice: choice.into(),
            reasoning: reasoning.into(),
        }
    }

    /// Pins `choice` to the title of exactly one option.
    ///
    /// An exact title match is kept as-is. Otherwise a match ignoring case
    /// and surrounding whitespace is rewritten to the canonical title.
    /// A choice that fits several options, or none, is rejected.
    pub fn matched_to(self, options: &[DecisionOption]) -> Result<Self, ValidationError> {
        let exact = options.iter().filter(|o| o.title() == self.choice);
        if let Some(option) = self.single(exact)? {
            return Ok(Self {
                choice: option.title().to_string(),
                reasoning: self.reasoning,
            });
        }

        let wanted = normalize(&self.choice);
        let loose = options.iter().filter(|o| normalize(o.title()) == wanted);
        match self.single(loose)? {
            Some(option) => Ok(Self {
                choice: option.title().to_string(),
                reasoning: self.reasoning,
            }),
            None => Err(ValidationError::invalid_format(
                "choice",
                format!("'{}' does not match any option", self.choice),
            )),
        }
    }

    fn single<'a>(
        &self,
        mut candidates: impl Iterator<Item = &'a DecisionOption>,
    ) -> Result<Option<&'a DecisionOption>, ValidationError> {
        match (candidates.next(), candidates.next()) {
            (Some(_), Some(_)) => Err(ValidationError::invalid_format(
                "choice",
                format!("'{}' matches more than one option", self.choice),
            )),
            (first, _) => Ok(first),
        }
    }
}

fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn options() -> Vec<DecisionOption> {
        DecisionOption::from_titles(vec![
            "Software Development".into(),
            "UX/UI Design".into(),
            "Data Science".into(),
        ])
    }

    #[test]
    fn exact_match_is_kept() {
        let rec = Recommendation::new("Data Science", "fits").matched_to(&options()).unwrap();
        assert_eq!(rec.choice, "Data Science");
        assert_eq!(rec.reasoning, "fits");
    }

    #[test]
    fn loose_match_is_rewritten_to_canonical_title() {
        let rec = Recommendation::new("  software development ", "fits")
            .matched_to(&options())
            .unwrap();
        assert_eq!(rec.choice, "Software Development");
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let result = Recommendation::new("Become a chef", "why not").matched_to(&options());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn ambiguous_loose_match_is_rejected() {
        let options = DecisionOption::from_titles(vec!["Rent".into(), "RENT".into()]);
        assert!(Recommendation::new("rent", "").matched_to(&options).is_err());
    }

    #[test]
    fn exact_match_wins_over_loose_duplicates() {
        let options = DecisionOption::from_titles(vec!["Rent".into(), "RENT".into()]);
        let rec = Recommendation::new("RENT", "").matched_to(&options).unwrap();
        assert_eq!(rec.choice, "RENT");
    }

    #[test]
    fn duplicate_exact_titles_are_rejected() {
        let options = DecisionOption::from_titles(vec!["Buy".into(), "Rent".into(), "Buy".into()]);
        let result = Recommendation::new("Buy", "").matched_to(&options);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    proptest! {
        #[test]
        fn any_option_title_matches_itself(index in 0usize..3) {
            let options = options();
            let title = options[index].title().to_string();
            let rec = Recommendation::new(title.clone(), "r").matched_to(&options).unwrap();
            prop_assert_eq!(rec.choice, title);
        }

        #[test]
        fn matched_choice_is_always_an_option_title(choice in "\\PC{0,24}") {
            let options = options();
            if let Ok(rec) = Recommendation::new(choice, "r").matched_to(&options) {
                prop_assert!(options.iter().any(|o| o.title() == rec.choice));
            }
        }
    }
}
