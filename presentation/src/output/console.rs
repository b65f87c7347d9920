//! Console output formatter for match results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use gunghap_domain::{DomainError, ImageOutcome, ImageReference, MatchResult, Verdict};

/// Formats match results for console display
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    show_trace: bool,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the folding triangle in text output
    pub fn with_trace(mut self, show: bool) -> Self {
        self.show_trace = show;
        self
    }

    /// Format the complete result
    pub fn format(&self, result: &MatchResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("이름 궁합점 테스트"));
        output.push_str("\n\n");

        output.push_str(&format!(
            "{} {} {}\n\n",
            result.name.as_str().bold(),
            "♥".red(),
            result.partner.as_str().bold()
        ));

        if self.show_trace {
            output.push_str(&Self::format_trace(result));
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {}\n\n",
            "궁합점수:".cyan().bold(),
            result.score.to_string().bold()
        ));

        match result.verdict {
            Verdict::Proposal => {
                output.push_str(&format!(
                    "{}\n",
                    format!(
                        "{}님이 꽃을 들고 {}님께 프로포즈합니다! 💐",
                        result.partner, result.name
                    )
                    .green()
                    .bold()
                ));
                output.push_str(&Self::format_image(result));
            }
            Verdict::Consolation => {
                output.push_str(&format!("{}\n", "아쉽게도 궁합점수가 낮아요.".red()));
                output.push_str("다른 분들을 보시는 건 어떨까요?\n");
                output.push_str(&format!(
                    "{}\n",
                    "힘내세요! 더 좋은 인연이 기다리고 있을 거예요. 😊".yellow()
                ));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &MatchResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the folding triangle under the syllables of both names
    ///
    /// Each cell is four columns wide; a Hangul syllable renders two columns.
    pub fn format_trace(result: &MatchResult) -> String {
        let mut output: String = result
            .name
            .as_str()
            .chars()
            .chain(result.partner.as_str().chars())
            .map(|c| format!("  {}", c))
            .collect();
        output.push('\n');

        for (depth, row) in result.trace.rows().iter().enumerate() {
            output.push_str(&" ".repeat(depth * 2));
            for value in row {
                output.push_str(&format!("{:>4}", value));
            }
            output.push('\n');
        }

        output
    }

    /// User-facing warning for an invalid name
    pub fn validation_message(error: &DomainError) -> String {
        match error {
            DomainError::EmptyName => "이름을 모두 입력해주세요.".to_string(),
            DomainError::NonHangulName { found, .. } => {
                format!("이름은 한글로만 입력해주세요. ({:?} 사용 불가)", found)
            }
        }
    }

    fn format_image(result: &MatchResult) -> String {
        match &result.image {
            ImageOutcome::Skipped => String::new(),
            ImageOutcome::Generated { image } => {
                let mut output = format!(
                    "\n{}\n",
                    "참고: AI는 실제 연예인 이미지를 생성할 수 없으므로, 가상의 잘생긴 한국 연예인 이미지를 보여드립니다."
                        .dimmed()
                );
                match image {
                    ImageReference::Url(url) => {
                        output.push_str(&format!("{} {}\n", "이미지:".cyan().bold(), url));
                    }
                    ImageReference::Base64(data) => {
                        output.push_str(&format!(
                            "{} base64 ({} bytes)\n",
                            "이미지:".cyan().bold(),
                            data.len()
                        ));
                    }
                }
                output.push_str(&format!(
                    "{}\n",
                    format!("{}을(를) 닮은 가상 연예인의 프로포즈 장면", result.partner).italic()
                ));
                output
            }
            ImageOutcome::Failed { message } => {
                format!("\n{} {}\n", "이미지 생성 중 에러:".red().bold(), message)
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(40).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &MatchResult) -> String {
        ConsoleFormatter::format(self, result)
    }

    fn format_json(&self, result: &MatchResult) -> String {
        Self::format_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunghap_domain::{PersonName, fold_trace};

    fn result(name: &str, partner: &str, verdict: Verdict, image: ImageOutcome) -> MatchResult {
        let name = PersonName::try_new(name).unwrap();
        let partner = PersonName::try_new(partner).unwrap();
        let trace = fold_trace(name.as_str(), partner.as_str());
        MatchResult::new(name, partner, trace, verdict, image)
    }

    #[test]
    fn test_proposal_with_image() {
        let r = result(
            "김철수",
            "이영희",
            Verdict::Proposal,
            ImageOutcome::Generated {
                image: ImageReference::Url("https://img.example/p.png".to_string()),
            },
        );
        let output = ConsoleFormatter::new().format(&r);
        assert!(output.contains("84%"));
        assert!(output.contains("이영희님이 꽃을 들고 김철수님께 프로포즈합니다!"));
        assert!(output.contains("https://img.example/p.png"));
        assert!(output.contains("이영희을(를) 닮은 가상 연예인의 프로포즈 장면"));
    }

    #[test]
    fn test_proposal_with_failed_image() {
        let r = result(
            "홍길동",
            "이영희",
            Verdict::Proposal,
            ImageOutcome::Failed {
                message: "Timeout".to_string(),
            },
        );
        let output = ConsoleFormatter::new().format(&r);
        assert!(output.contains("79%"));
        assert!(output.contains("이미지 생성 중 에러:"));
        assert!(output.contains("Timeout"));
    }

    #[test]
    fn test_consolation() {
        let r = result("닭", "값", Verdict::Consolation, ImageOutcome::Skipped);
        let output = ConsoleFormatter::new().format(&r);
        assert!(output.contains("20%"));
        assert!(output.contains("아쉽게도 궁합점수가 낮아요."));
        assert!(!output.contains("프로포즈"));
    }

    #[test]
    fn test_trace_is_opt_in() {
        let r = result("가나", "다", Verdict::Proposal, ImageOutcome::Skipped);
        assert!(!ConsoleFormatter::new().format(&r).contains("   8   9"));
        assert!(
            ConsoleFormatter::new()
                .with_trace(true)
                .format(&r)
                .contains("   8   9")
        );
    }

    #[test]
    fn test_format_trace_layout() {
        let r = result("김철수", "이영희", Verdict::Proposal, ImageOutcome::Skipped);
        let trace = ConsoleFormatter::format_trace(&r);
        let lines: Vec<&str> = trace.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  김  철  수  이  영  희");
        assert_eq!(lines[1], "   7  11   4   2   5   5");
        assert_eq!(lines[2], "    18  15   6   7  10");
        assert_eq!(lines[5], "          88  64");
    }

    #[test]
    fn test_format_json() {
        let r = result("가", "나", Verdict::Consolation, ImageOutcome::Skipped);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&r)).unwrap();
        assert_eq!(json["score"], 44);
        assert_eq!(json["verdict"], "consolation");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ConsoleFormatter::validation_message(&DomainError::EmptyName),
            "이름을 모두 입력해주세요."
        );
        let message = ConsoleFormatter::validation_message(&DomainError::NonHangulName {
            name: "Kim".to_string(),
            found: 'K',
        });
        assert!(message.starts_with("이름은 한글로만 입력해주세요."));
        assert!(message.contains("'K'"));
    }
}
