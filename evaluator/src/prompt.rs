//! # Prompt Builders
//!
//! Pure functions that turn challenge requirements, submission summaries, and
//! performance history into prompt text for the model boundary. Inputs are
//! embedded pretty-printed; no shape validation is performed, so any
//! serializable mapping formats successfully.

use crate::error::EvaluatorError;
use serde_json::Value;

fn pretty(value: &Value) -> Result<String, EvaluatorError> {
    serde_json::to_string_pretty(value).map_err(|e| EvaluatorError::InvalidJson(e.to_string()))
}

/// Build the fixed instructional evaluation prompt.
///
/// Embeds the challenge requirements and submission summary as pretty-printed
/// JSON and asks the model for the strict JSON output shape the response
/// parser expects.
pub fn evaluation_prompt(
    challenge_requirements: &Value,
    submission_summary: &Value,
) -> Result<String, EvaluatorError> {
    Ok(format!(
        r#"You are an expert CAD instructor evaluating a student's 3D model submission.

Challenge Requirements:
{requirements}

Student Submission Summary:
{submission}

Evaluate the submission on:
1. Correctness: Does it meet all requirements?
2. Technique: Are operations used appropriately?
3. Precision: Is alignment and positioning accurate?
4. Efficiency: Is the approach optimal?

Provide:
- Overall score (0-100)
- Specific feedback on what's correct and incorrect
- Actionable suggestions for improvement
- Identification of error locations

Output as JSON with structure:
{{
  "score": <number>,
  "feedback": "<string>",
  "suggestions": ["<string>", ...],
  "error_locations": [{{ "object_id": "<string>", "issue": "<string>" }}],
  "correctness": {{
    "requirements_met": <boolean>,
    "operations_correct": <boolean>,
    "alignment_accurate": <boolean>
  }}
}}
"#,
        requirements = pretty(challenge_requirements)?,
        submission = pretty(submission_summary)?,
    ))
}

/// Build the sectioned evaluation prompt variant.
///
/// Composes a fixed list of markdown sections; the `## Hints for Evaluation`
/// block is appended only when `include_hints` is set.
pub fn build_evaluation_prompt(
    submission: &Value,
    challenge: &Value,
    include_hints: bool,
) -> Result<String, EvaluatorError> {
    let mut parts = vec![
        "# CAD Model Evaluation Task".to_string(),
        String::new(),
        "## Challenge Specification".to_string(),
        pretty(challenge)?,
        String::new(),
        "## Student Submission".to_string(),
        pretty(submission)?,
        String::new(),
        "## Evaluation Criteria".to_string(),
        "- Geometric accuracy".to_string(),
        "- Operation correctness".to_string(),
        "- Design efficiency".to_string(),
        "- Constraint satisfaction".to_string(),
    ];

    if include_hints {
        parts.extend([
            String::new(),
            "## Hints for Evaluation".to_string(),
            "- Check object count matches requirements".to_string(),
            "- Verify boolean operations are applied correctly".to_string(),
            "- Ensure spatial relationships are accurate".to_string(),
        ]);
    }

    Ok(parts.join("\n"))
}

/// Build the free-form personalized feedback prompt from a learning history
/// and the current performance record. The output shape is left to the model
/// beyond "Output as JSON".
pub fn personalized_feedback_prompt(
    user_history: &[Value],
    current_performance: &Value,
) -> Result<String, EvaluatorError> {
    let history = serde_json::to_string_pretty(user_history)
        .map_err(|e| EvaluatorError::InvalidJson(e.to_string()))?;

    Ok(format!(
        r#"Analyze this CAD student's learning history and current performance:

History: {history}
Current: {current}

Provide personalized recommendations including:
- Suggested next challenges
- Focus areas for improvement
- Estimated time to mastery
- Specific tips based on their learning pattern

Output as JSON.
"#,
        history = history,
        current = pretty(current_performance)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_evaluation_prompt_embeds_both_inputs() {
        let requirements = json!({
            "min_objects": 2,
            "required_shapes": ["cube", "cylinder"],
            "operations": ["union"]
        });
        let submission = json!({
            "total_objects": 3,
            "complexity_score": 30,
            "operations_used": 2,
            "spatial_distribution": "compact"
        });

        let prompt = evaluation_prompt(&requirements, &submission).unwrap();
        assert!(prompt.contains(&serde_json::to_string_pretty(&requirements).unwrap()));
        assert!(prompt.contains(&serde_json::to_string_pretty(&submission).unwrap()));
        assert!(prompt.contains("Output as JSON with structure:"));
        assert!(prompt.contains("\"score\": <number>"));
    }

    #[test]
    fn test_build_evaluation_prompt_embeds_both_inputs() {
        let submission = json!({ "total_objects": 1 });
        let challenge = json!({ "min_objects": 1 });

        let prompt = build_evaluation_prompt(&submission, &challenge, false).unwrap();
        assert!(prompt.starts_with("# CAD Model Evaluation Task"));
        assert!(prompt.contains(&serde_json::to_string_pretty(&submission).unwrap()));
        assert!(prompt.contains(&serde_json::to_string_pretty(&challenge).unwrap()));
    }

    #[test]
    fn test_hints_block_only_when_requested() {
        let submission = json!({});
        let challenge = json!({});

        let without = build_evaluation_prompt(&submission, &challenge, false).unwrap();
        assert!(!without.contains("Hints for Evaluation"));

        let with = build_evaluation_prompt(&submission, &challenge, true).unwrap();
        assert!(with.contains("## Hints for Evaluation"));
        assert!(with.contains("- Check object count matches requirements"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let requirements = json!({ "operations": ["union", "subtract"] });
        let submission = json!({ "total_objects": 5 });
        let first = evaluation_prompt(&requirements, &submission).unwrap();
        let second = evaluation_prompt(&requirements, &submission).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_personalized_prompt_embeds_history_and_current() {
        let history = vec![json!({ "challenge": "c1", "score": 70 })];
        let current = json!({ "challenge": "c2", "score": 85 });

        let prompt = personalized_feedback_prompt(&history, &current).unwrap();
        assert!(prompt.contains(&serde_json::to_string_pretty(&history).unwrap()));
        assert!(prompt.contains(&serde_json::to_string_pretty(&current).unwrap()));
        assert!(prompt.ends_with("Output as JSON.\n"));
    }
}
