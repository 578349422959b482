//! Markdown files seeded into a new project

const INTENT_PLACEHOLDER: &str = "[Describe what this project is trying to achieve]";

/// `meta/summary.md`, with the intent seeded from the description
pub fn summary(description: &str) -> String {
    let intent = if description.is_empty() {
        INTENT_PLACEHOLDER
    } else {
        description
    };

    format!(
        r#"# Project Summary

## Intent
{intent}

## Current Focus
[What are you working on right now?]

## Constraints
- [List any hard constraints or rules]

## Open Questions
- [What decisions are pending?]

## Last Known Good State
[What was working last time you touched this?]

## Notes to Future Me
[Anything you'll forget but shouldn't]
"#
    )
}

/// `docs/index.md`
pub fn index(name: &str, description: &str) -> String {
    format!("# {}\n\n{}\n", name, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_headers() {
        let content = summary("");
        let headers: Vec<_> = content.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(
            headers,
            [
                "# Project Summary",
                "## Intent",
                "## Current Focus",
                "## Constraints",
                "## Open Questions",
                "## Last Known Good State",
                "## Notes to Future Me",
            ]
        );
    }

    #[test]
    fn test_summary_intent() {
        assert!(summary("").contains("## Intent\n[Describe what this project"));
        assert!(summary("Ship it").contains("## Intent\nShip it\n"));
    }

    #[test]
    fn test_index() {
        assert_eq!(index("Test Project", "About"), "# Test Project\n\nAbout\n");
    }
}
