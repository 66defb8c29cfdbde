use anyhow::Context;
use fq_core::AnswerSheet;

use crate::cli::subcommands::AnswersSyntax;
use crate::context::AppContext;

/// Print a blank answers file for the pending session.
pub fn run(syntax: AnswersSyntax, ctx: &AppContext) -> anyhow::Result<()> {
    let sheet = ctx.store.load()?.builder().template();
    println!("{}", render(&sheet, syntax)?);
    Ok(())
}

pub fn render(sheet: &AnswerSheet, syntax: AnswersSyntax) -> anyhow::Result<String> {
    match syntax {
        AnswersSyntax::Toml => toml::to_string_pretty(sheet).context("failed to render TOML"),
        AnswersSyntax::Json => serde_json::to_string_pretty(sheet).context("failed to render JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fq_core::QuestionBuilder;

    #[test]
    fn toml_template_parses_back() {
        let sheet = QuestionBuilder::new(1, 2).template();
        let text = render(&sheet, AnswersSyntax::Toml).unwrap();
        assert!(text.contains("[[questions]]"));
        let back: AnswerSheet = toml::from_str(&text).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn json_template_has_three_choices_each() {
        let sheet = QuestionBuilder::new(1, 1).template();
        let text = render(&sheet, AnswersSyntax::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["questions"][0]["choices"].as_array().unwrap().len(), 3);
    }
}
