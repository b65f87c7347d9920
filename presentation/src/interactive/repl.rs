//! Interactive prompt loop: ask for two names, show the result, repeat

use crate::{ConsoleFormatter, ProgressReporter};
use colored::Colorize;
use gunghap_application::{MatchNamesInput, MatchNamesUseCase};
use gunghap_domain::{MatchResult, OutputFormat, PersonName};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

/// What the user typed at a name prompt
#[derive(Debug, PartialEq, Eq)]
enum NameInput {
    Name(PersonName),
    Invalid(String),
    Quit,
}

/// Interactive name-matching REPL
pub struct MatchRepl {
    use_case: MatchNamesUseCase,
    formatter: ConsoleFormatter,
    output_format: OutputFormat,
    show_progress: bool,
}

impl MatchRepl {
    /// Create a new MatchRepl
    pub fn new(use_case: MatchNamesUseCase, formatter: ConsoleFormatter) -> Self {
        Self {
            use_case,
            formatter,
            output_format: OutputFormat::Text,
            show_progress: true,
        }
    }

    /// Set the format each result is printed in
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL until Ctrl-D or /quit
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = Reedline::create();

        self.print_welcome();

        loop {
            let Some(name) = Self::read_name(&mut editor, "당신의 이름")? else {
                break;
            };
            let Some(partner) = Self::read_name(&mut editor, "상대의 이름")? else {
                break;
            };

            self.process(&name, &partner).await;
        }

        println!("안녕히 가세요!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          💖 이름 궁합점 테스트 💖           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Enter two Hangul names. /quit or Ctrl-D exits.");
        println!();
    }

    /// Prompt until a valid name is entered. `None` means the user quit.
    fn read_name(editor: &mut Reedline, label: &str) -> io::Result<Option<PersonName>> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match Self::classify(&line) {
                    NameInput::Name(name) => return Ok(Some(name)),
                    NameInput::Quit => return Ok(None),
                    NameInput::Invalid(message) => println!("{}", message.yellow()),
                },
                Signal::CtrlD => return Ok(None),
                _ => continue,
            }
        }
    }

    fn classify(line: &str) -> NameInput {
        match line.trim() {
            "/quit" | "/exit" | "/q" => NameInput::Quit,
            _ => match PersonName::try_new(line) {
                Ok(name) => NameInput::Name(name),
                Err(e) => NameInput::Invalid(ConsoleFormatter::validation_message(&e)),
            },
        }
    }

    async fn process(&self, name: &PersonName, partner: &PersonName) {
        println!();

        let input = MatchNamesInput::new(name.as_str(), partner.as_str());

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(result) => println!("{}", self.render(&result)),
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    fn render(&self, result: &MatchResult) -> String {
        match self.output_format {
            OutputFormat::Text => self.formatter.format(result),
            OutputFormat::Json => ConsoleFormatter::format_json(result),
        }
    }
}
