const PROMPT_PREFIX: &str = "Write a comprehensive programming article with the title: ";
const PROMPT_BODY: &str = "Provide a well-structured article with an introduction, main content sections, code examples where appropriate, and a conclusion. Make it informative and practical for developers.";

/// Splits the titles input into trimmed, non-blank titles in input order.
pub fn parse_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Builds the completion prompt for one title.
///
/// `title` is expected to be trimmed already (see [`parse_titles`]); whitespace-only
/// details are treated as absent rather than sent as empty context.
pub fn build_prompt(title: &str, details: Option<&str>) -> String {
    match details.map(str::trim).filter(|d| !d.is_empty()) {
        Some(details) => format!(
            "{PROMPT_PREFIX}\"{title}\". Additional context: {details}\n\n{PROMPT_BODY}"
        ),
        None => format!("{PROMPT_PREFIX}\"{title}\". {PROMPT_BODY}"),
    }
}
