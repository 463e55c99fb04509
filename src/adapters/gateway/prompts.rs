//! Prompt texts and response schemas for the decision coach.

use crate::ports::{ResponseSchema, SchemaField};

/// System instruction for the clarifying conversation.
pub const COACH_PERSONA: &str = "You are Solvio, a friendly and empathetic AI decision-making coach. \
Your goal is to help users clarify their problems by asking insightful follow-up questions. \
Keep your responses concise and encouraging.";

/// Prompt for the daily insight.
pub const INSIGHT_PROMPT: &str = "Give me one powerful, concise, and actionable tip for better \
decision-making. Frame it as a daily insight. No intro or sign-off.";

pub fn options_prompt(problem: &str) -> String {
    format!(
        "My problem is: \"{problem}\". Please suggest 3 distinct and actionable options to solve \
         this problem. Do not add any introductory or concluding text, just the options."
    )
}

pub fn analysis_prompt(problem: &str, option_title: &str) -> String {
    format!(
        "I am trying to solve this problem: \"{problem}\". Please analyze the pros and cons of \
         this specific option: \"{option_title}\". Provide 2-3 pros and 2-3 cons."
    )
}

/// `options_json` is the serialized list of `{title, analysis}` objects.
pub fn recommendation_prompt(problem: &str, options_json: &str) -> String {
    format!(
        "I need help making a decision. My problem is: \"{problem}\". I have analyzed the \
         following options: {options_json}. Based on this, which option is the best choice and \
         why? Your choice must exactly match one of the option titles."
    )
}

pub fn options_schema() -> ResponseSchema {
    ResponseSchema::object("options").with_field(SchemaField::string_array("options"))
}

pub fn analysis_schema() -> ResponseSchema {
    ResponseSchema::object("option_analysis")
        .with_field(
            SchemaField::string_array("pros")
                .described("Positive aspects or advantages of the option."),
        )
        .with_field(
            SchemaField::string_array("cons")
                .described("Negative aspects or disadvantages of the option."),
        )
}

pub fn recommendation_schema() -> ResponseSchema {
    ResponseSchema::object("recommendation")
        .with_field(SchemaField::string("choice").described("The title of the recommended option."))
        .with_field(
            SchemaField::string("reasoning").described("A brief justification for the recommendation."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_prompt_quotes_problem() {
        let prompt = options_prompt("Deciding on a new career path");
        assert!(prompt.contains("\"Deciding on a new career path\""));
        assert!(prompt.contains("3 distinct and actionable options"));
    }

    #[test]
    fn analysis_prompt_names_option() {
        let prompt = analysis_prompt("Where to live", "Move to Lisbon");
        assert!(prompt.contains("\"Where to live\""));
        assert!(prompt.contains("\"Move to Lisbon\""));
    }

    #[test]
    fn recommendation_prompt_embeds_options_and_rule() {
        let prompt = recommendation_prompt("p", r#"[{"title":"A"}]"#);
        assert!(prompt.contains(r#"[{"title":"A"}]"#));
        assert!(prompt.ends_with("Your choice must exactly match one of the option titles."));
    }

    #[test]
    fn schemas_declare_expected_fields() {
        let names = |s: ResponseSchema| s.fields.into_iter().map(|f| f.name).collect::<Vec<_>>();
        assert_eq!(names(options_schema()), vec!["options"]);
        assert_eq!(names(analysis_schema()), vec!["pros", "cons"]);
        assert_eq!(names(recommendation_schema()), vec!["choice", "reasoning"]);
    }
}
