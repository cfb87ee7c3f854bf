// src/catalog.rs

/// Difficulty levels offered for every scenario, easiest first.
pub const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Hard"];

/// Opening line the interviewer uses for a scenario/level pair.
pub fn greeting(scenario: &str, level: &str) -> String {
    let topic = scenario
        .strip_suffix(" Interview")
        .unwrap_or(scenario)
        .trim();
    let level_name = level.to_lowercase();

    if level_name == "beginner" {
        format!(
            "Welcome to the {} level {} interview. Let's start with your introduction.",
            level_name, topic
        )
    } else {
        format!("Welcome to the {} level {} interview.", level_name, topic)
    }
}

/// The level unlocked after passing `level`, if any.
pub fn next_level(level: &str) -> Option<&'static str> {
    let position = LEVELS.iter().position(|l| l.eq_ignore_ascii_case(level))?;
    LEVELS.get(position + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_greeting_asks_for_introduction() {
        assert_eq!(
            greeting("Java Interview", "Beginner"),
            "Welcome to the beginner level Java interview. Let's start with your introduction."
        );
    }

    #[test]
    fn test_other_levels() {
        assert_eq!(
            greeting("Excel Interview", "Hard"),
            "Welcome to the hard level Excel interview."
        );
        assert_eq!(
            greeting("ordering food", "Intermediate"),
            "Welcome to the intermediate level ordering food interview."
        );
    }

    #[test]
    fn test_next_level() {
        assert_eq!(next_level("Beginner"), Some("Intermediate"));
        assert_eq!(next_level("intermediate"), Some("Hard"));
        assert_eq!(next_level("Hard"), None);
        assert_eq!(next_level("Expert"), None);
    }
}
