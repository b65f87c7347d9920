//! Prompt templates for the image generation service

/// Templates for generating image prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the proposal scene shown on a successful match.
    ///
    /// Image services refuse to depict real people, so the prompt asks for a
    /// fictional celebrity who merely resembles the partner.
    pub fn proposal_image(partner: &str) -> String {
        format!(
            "A handsome Korean male celebrity resembling {}, holding a bouquet of roses, \
             proposing romantically in a cinematic setting, ultra-realistic, high quality",
            partner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_prompt_mentions_partner() {
        let prompt = PromptTemplate::proposal_image("이영희");
        assert!(prompt.contains("resembling 이영희,"));
        assert!(prompt.contains("bouquet of roses"));
        assert!(!prompt.contains('\n'));
    }
}
