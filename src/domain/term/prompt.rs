/// Prompt template for the term of the day
pub struct TermPrompt;

impl TermPrompt {
    /// Builds the generation prompt for `category`.
    ///
    /// Recently used terms are listed as an exclusion the model is asked to respect;
    /// nothing checks that it does.
    pub fn build(category: &str, recent_terms: &[String]) -> String {
        let mut prompt = format!(
            "Give me one important and trending {} term of the day with its definition. \
             Format it as 'Term: Definition'. The definition should be concise (under 60 words).",
            category
        );

        if !recent_terms.is_empty() {
            prompt.push_str(&format!(
                " Do not use any of the following terms: {}.",
                recent_terms.join(", ")
            ));
        }

        prompt
    }
}
