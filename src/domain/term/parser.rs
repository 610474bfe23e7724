use crate::utils::error::AppError;

/// Term name and definition split out of the raw model reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTerm {
    pub name: String,
    pub definition: String,
}

/// Splits `raw` on its first colon into name and definition, trimming both.
///
/// Later colons stay in the definition. A name containing a colon is cut at it.
/// Empty halves are not rejected.
pub fn parse_term_response(raw: &str) -> Result<ParsedTerm, AppError> {
    let (name, definition) = raw.split_once(':').ok_or_else(|| {
        AppError::ResponseFormat(format!(
            "expected 'Term: Definition', got {} chars without ':'",
            raw.chars().count()
        ))
    })?;

    Ok(ParsedTerm {
        name: name.trim().to_string(),
        definition: definition.trim().to_string(),
    })
}
