//! Filling the question form: from an answers file or from prompts.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, bail};
use fq_core::entities::Choice;
use fq_core::{AnswerSheet, QuestionAnswer, QuestionBuilder};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonAnswers {
    Sheet(AnswerSheet),
    List(Vec<QuestionAnswer>),
}

/// Read an answers file. `.toml` files are TOML; anything else is JSON, either
/// an `AnswerSheet` object or a bare array of questions.
pub fn load_answers(path: &Path) -> anyhow::Result<AnswerSheet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        return toml::from_str(&raw)
            .with_context(|| format!("invalid TOML answers file {}", path.display()));
    }

    let answers: JsonAnswers = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON answers file {}", path.display()))?;
    Ok(match answers {
        JsonAnswers::Sheet(sheet) => sheet,
        JsonAnswers::List(questions) => AnswerSheet { questions },
    })
}

/// Walk the builder's blocks and prompt for every field.
pub fn prompt_answers<R, W>(builder: &QuestionBuilder, input: &mut R, out: &mut W) -> anyhow::Result<AnswerSheet>
where
    R: BufRead,
    W: Write,
{
    let mut questions = Vec::with_capacity(builder.blocks().len());

    for block in builder.blocks() {
        let question = ask(input, out, &format!("{}: ", block.label))?;
        let mut choices = Vec::with_capacity(block.choices.len());
        for slot in &block.choices {
            let content = ask(input, out, &format!("  {}: ", slot.label))?;
            let toggle = ask(input, out, "    correct? [y/N]: ")?;
            choices.push(Choice {
                content,
                is_true: parse_toggle(&toggle),
            });
        }
        questions.push(QuestionAnswer { question, choices });
    }

    Ok(AnswerSheet { questions })
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> anyhow::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before the form was complete");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_toggle(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "x"
    )
}
