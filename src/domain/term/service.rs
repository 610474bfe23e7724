use tracing::{error, info, warn};

use super::{
    dto::{TermRequest, TermResponse},
    parser::parse_term_response,
    prompt::TermPrompt,
    store::{TermStore, RECENCY_WINDOW_DAYS, RECENT_TERMS_LIMIT},
};
use crate::domain::ai::AiClientTrait;
use crate::utils::error::AppError;

pub struct TermService;

impl TermService {
    /// Generates one new term for the request's category and records it.
    ///
    /// 1. load terms used in the category over the recency window
    /// 2. ask the generator, listing those terms as exclusions
    /// 3. split the reply on its first colon
    /// 4. persist the new term name
    pub async fn generate_term(
        ai: &dyn AiClientTrait,
        store: &dyn TermStore,
        req: &TermRequest,
    ) -> Result<TermResponse, AppError> {
        let category = req.category.as_str();

        let recent_terms = store
            .recent_terms(category, RECENCY_WINDOW_DAYS, RECENT_TERMS_LIMIT)
            .await
            .inspect_err(|e| error!(category = %category, error = %e, "Recent term lookup failed"))?;

        let prompt = TermPrompt::build(category, &recent_terms);

        let raw = ai
            .generate(&prompt)
            .await
            .inspect_err(|e| error!(category = %category, error = %e, "AI generation failed"))?;

        let parsed = parse_term_response(&raw).inspect_err(|e| {
            error!(category = %category, raw = %raw, error = %e, "Unparseable AI response")
        })?;

        if parsed.name.is_empty() || parsed.definition.is_empty() {
            warn!(
                category = %category,
                raw = %raw,
                "AI response has an empty term name or definition"
            );
        }

        store.save(&parsed.name, category).await.inspect_err(|e| {
            error!(
                category = %category,
                term = %parsed.name,
                error = %e,
                "Failed to save generated term"
            )
        })?;

        info!(
            category = %category,
            user_id = %req.user_id,
            term = %parsed.name,
            excluded = recent_terms.len(),
            "Generated term of the day"
        );

        Ok(TermResponse {
            term_name: parsed.name,
            term_definition: parsed.definition,
        })
    }
}
