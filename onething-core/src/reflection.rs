//! Monthly-reflection prompt formatting.
//!
//! Pure text assembly: a fixed system policy plus a user prompt built from
//! the submitted journal entries. No provider calls happen here, which keeps
//! the formatting contract testable without any network.

use thiserror::Error;

use crate::models::JournalEntry;

/// Fixed policy for the downstream model. Never altered per request.
pub const REFLECTION_SYSTEM_PROMPT: &str = "
You are a neutral reflection assistant for a daily journaling app called OneThing.

Your role is to:
- Detect recurring themes and patterns in user's answers
- Summarize emotional patterns neutrally
- Reflect language back to the user

You MUST NOT:
- Give advice or recommendations
- Diagnose mental health conditions
- Use motivational or therapeutic language
- Suggest actions or changes
- Make judgments or evaluations

Tone: Neutral, descriptive, reflective, non-judgmental.
Length: 3-5 sentences maximum.

Example style:
\"This month, your answers often referenced tiredness around work and moments of relief during quieter days. Several entries reflected a desire for fewer obligations. This summary simply reflects recurring themes without judgment.\"
";

#[derive(Error, Debug)]
pub enum ReflectionError {
    #[error("No entries provided for reflection")]
    EmptyEntries,
}

/// System and user prompt pair for one reflection request.
#[derive(Debug, Clone)]
pub struct ReflectionPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt pair for a month of entries.
///
/// Each entry renders as four labeled lines with fixed placeholders for
/// missing fields; entries are joined in input order, separated by a blank
/// line. Deterministic for a fixed input.
pub fn build_reflection_prompt(
    entries: &[JournalEntry],
    month: &str,
) -> Result<ReflectionPrompt, ReflectionError> {
    if entries.is_empty() {
        return Err(ReflectionError::EmptyEntries);
    }

    let entries_text = entries
        .iter()
        .map(|entry| {
            format!(
                "Date: {}\nQuestion: {}\nAnswer: {}\nMood: {}",
                entry.date.as_deref().unwrap_or("Unknown"),
                entry.question.as_deref().unwrap_or("N/A"),
                entry.answer.as_deref().unwrap_or("N/A"),
                entry.mood.as_deref().unwrap_or("None"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let user = format!(
        "\nPlease analyze these journal entries from {month} and provide a neutral, reflective summary:\n\n{entries_text}\n\nProvide a brief, neutral summary of recurring themes and patterns.\n"
    );

    Ok(ReflectionPrompt {
        system: REFLECTION_SYSTEM_PROMPT.to_string(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, question: &str, answer: &str, mood: &str) -> JournalEntry {
        JournalEntry {
            date: Some(date.to_string()),
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            mood: Some(mood.to_string()),
        }
    }

    #[test]
    fn test_empty_entries_rejected() {
        let result = build_reflection_prompt(&[], "January 2025");
        assert!(matches!(result, Err(ReflectionError::EmptyEntries)));
        assert_eq!(
            ReflectionError::EmptyEntries.to_string(),
            "No entries provided for reflection"
        );
    }

    #[test]
    fn test_entry_renders_as_labeled_lines() {
        let entries = vec![entry("2025-01-01", "Q", "A", "calm")];
        let prompt = build_reflection_prompt(&entries, "January 2025").unwrap();

        assert!(prompt.user.contains("Date: 2025-01-01\n"));
        assert!(prompt.user.contains("Question: Q\n"));
        assert!(prompt.user.contains("Answer: A\n"));
        assert!(prompt.user.contains("Mood: calm"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_placeholders() {
        let entries = vec![JournalEntry::default()];
        let prompt = build_reflection_prompt(&entries, "January 2025").unwrap();

        assert!(prompt.user.contains("Date: Unknown"));
        assert!(prompt.user.contains("Question: N/A"));
        assert!(prompt.user.contains("Answer: N/A"));
        assert!(prompt.user.contains("Mood: None"));
    }

    #[test]
    fn test_entries_joined_by_blank_line_in_input_order() {
        let entries = vec![
            entry("2025-01-01", "Q1", "A1", "calm"),
            entry("2025-01-02", "Q2", "A2", "tired"),
        ];
        let prompt = build_reflection_prompt(&entries, "January 2025").unwrap();

        let first = prompt.user.find("Date: 2025-01-01").unwrap();
        let second = prompt.user.find("Date: 2025-01-02").unwrap();
        assert!(first < second, "entries must keep input order");
        assert!(prompt.user.contains("Mood: calm\n\nDate: 2025-01-02"));
    }

    #[test]
    fn test_month_embedded_in_user_prompt() {
        let entries = vec![entry("2025-03-10", "Q", "A", "calm")];
        let prompt = build_reflection_prompt(&entries, "March 2025").unwrap();
        assert!(prompt
            .user
            .contains("journal entries from March 2025"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let entries = vec![entry("2025-01-01", "Q", "A", "calm")];
        let a = build_reflection_prompt(&entries, "January 2025").unwrap();
        let b = build_reflection_prompt(&entries, "January 2025").unwrap();
        assert_eq!(a.system, b.system);
        assert_eq!(a.user, b.user);
    }

    #[test]
    fn test_system_prompt_is_the_fixed_policy() {
        let entries = vec![entry("2025-01-01", "Q", "A", "calm")];
        let prompt = build_reflection_prompt(&entries, "January 2025").unwrap();
        assert_eq!(prompt.system, REFLECTION_SYSTEM_PROMPT);
        assert!(prompt.system.contains("neutral reflection assistant"));
        assert!(prompt.system.contains("3-5 sentences maximum"));
    }
}
