use fq_core::form::QuestionBlock;
use serde_json::{Value, json};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let builder = ctx.store.load()?.builder();

    if flags.format == OutputFormat::Table {
        return output(&flatten(builder.blocks()), flags.format);
    }
    output(
        &json!({
            "fact_id": builder.fact_id(),
            "blocks": builder.blocks(),
        }),
        flags.format,
    )
}

/// One row per choice slot, for table output.
fn flatten(blocks: &[QuestionBlock]) -> Vec<Value> {
    blocks
        .iter()
        .flat_map(|block| {
            block.choices.iter().map(move |slot| {
                json!({
                    "question": block.label,
                    "question_field": block.field,
                    "choice": slot.label,
                    "text_field": slot.text_field,
                    "toggle_field": slot.toggle_field,
                })
            })
        })
        .collect()
}
