pub const GREETING: &str = "Hi there! 👋 ";

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "namaste", "greetings"];

pub fn starts_with_greeting(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    GREETING_WORDS.iter().any(|word| {
        lowered.strip_prefix(*word).map_or(false, |rest| {
            rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
        })
    })
}

pub fn ensure_greeting(text: &str) -> String {
    if starts_with_greeting(text) {
        text.to_string()
    } else {
        format!("{}{}", GREETING, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ungreeted_text_gets_prefix() {
        assert_eq!(ensure_greeting("• Item"), "Hi there! 👋 • Item");
    }

    #[test]
    fn existing_greetings_are_kept_in_any_case() {
        for text in ["Hello, welcome!", "  NAMASTE 🙏", "hey", "Greetings.", "hi\nthere"] {
            assert_eq!(ensure_greeting(text), text);
        }
    }

    #[test]
    fn greeting_is_not_added_twice() {
        let once = ensure_greeting("• Pricing scales with centres");
        assert_eq!(ensure_greeting(&once), once);
        assert_eq!(ensure_greeting("Hi there! 👋 • ..."), "Hi there! 👋 • ...");
    }

    #[test]
    fn words_merely_starting_with_greeting_letters_do_not_count() {
        assert!(!starts_with_greeting("History of Ayurveda"));
        assert!(!starts_with_greeting("Heyday"));
        assert_eq!(ensure_greeting("Hierarchy"), "Hi there! 👋 Hierarchy");
    }

    #[test]
    fn original_whitespace_is_preserved_after_prefix() {
        assert_eq!(ensure_greeting("  spaced"), "Hi there! 👋   spaced");
        assert_eq!(ensure_greeting(""), "Hi there! 👋 ");
    }
}
