//! Sample history shown on first launch.

use crate::domain::decision::{Decision, DecisionOption, ProCon, Recommendation};
use crate::domain::foundation::{DecisionId, OptionId, ValidationError};

fn procon(pros: [&str; 2], cons: [&str; 2]) -> ProCon {
    ProCon::new(
        pros.iter().map(|s| s.to_string()).collect(),
        cons.iter().map(|s| s.to_string()).collect(),
    )
}

/// Decisions the store starts with, oldest first.
pub fn sample_decisions() -> Result<Vec<Decision>, ValidationError> {
    let options = vec![
        DecisionOption::analyzed(
            OptionId::from_index(1),
            "Software Development",
            procon(["High demand", "Good salary"], ["Steep learning curve", "Can be sedentary"]),
        ),
        DecisionOption::analyzed(
            OptionId::from_index(2),
            "UX/UI Design",
            procon(["Creative fulfillment", "Collaborative"], ["Subjective feedback", "Competitive field"]),
        ),
        DecisionOption::analyzed(
            OptionId::from_index(3),
            "Data Science",
            procon(["Highly analytical", "Impactful work"], ["Requires strong math skills", "Complex concepts"]),
        ),
    ];

    Ok(vec![Decision::reconstitute(
        DecisionId::from_string("sample-1")?,
        "Deciding on a new career path",
        options,
        Recommendation::new(
            "Software Development",
            "Given your interest in problem-solving and building things, Software Development \
             aligns well with your skills and offers strong career growth.",
        ),
        "October 26, 2023",
    )])
}
