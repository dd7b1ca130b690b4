use crate::web::models::HistoryEntry;

const SYSTEM_PREAMBLE: &str = "You are a friendly support assistant for AyurSutra – Panchakarma patient management and automated therapy scheduling software.
Answer questions ONLY about AyurSutra, Ayurveda, Panchakarma modules, features, benefits, onboarding, registration, pricing and related usage.
Be accurate, concise and warm, and respond in clear bullet points where appropriate. Start your answer with a short greeting.
If the user asks something outside this scope, politely state that you can only answer questions related to AyurSutra.";

pub fn build_prompt(message: &str, history: &[HistoryEntry]) -> String {
    let history_text = history
        .iter()
        .map(|entry| format!("{}: {}", entry.role.label(), entry.content))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!("{}\n\n", SYSTEM_PREAMBLE);
    if !history_text.is_empty() {
        prompt.push_str(&history_text);
        prompt.push_str("\n\n");
    }
    prompt.push_str("User: ");
    prompt.push_str(message);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::models::Role;

    #[test]
    fn without_history_message_follows_preamble() {
        let prompt = build_prompt("What is AyurSutra?", &[]);
        assert!(prompt.starts_with(SYSTEM_PREAMBLE));
        assert!(prompt.ends_with("\n\nUser: What is AyurSutra?"));
        assert!(!prompt.contains("Assistant:"));
    }

    #[test]
    fn history_is_rendered_in_order_with_role_labels() {
        let history = vec![
            HistoryEntry {
                role: Role::User,
                content: "Hello".to_string(),
            },
            HistoryEntry {
                role: Role::Assistant,
                content: "Hi! How can I help?".to_string(),
            },
        ];
        let prompt = build_prompt("Tell me about Basti", &history);
        let tail = &prompt[SYSTEM_PREAMBLE.len()..];
        assert_eq!(
            tail,
            "\n\nUser: Hello\nAssistant: Hi! How can I help?\n\nUser: Tell me about Basti"
        );
    }

    #[test]
    fn identical_inputs_build_identical_prompts() {
        let history = vec![HistoryEntry {
            role: Role::User,
            content: "pricing?".to_string(),
        }];
        assert_eq!(build_prompt("and trials?", &history), build_prompt("and trials?", &history));
    }
}
