use std::ops::Range;

use thiserror::Error;
use yansi::{Condition, Paint};

/// A command line argument that could not be understood
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{0}")]
    Parse(String),
}

impl InputError {
    /// Creates an error that points at the characters in `span` of the
    /// given argument
    pub fn at(input: &str, span: Range<usize>, msg: &str) -> Self {
        let span = span.start.min(input.len())..span.end.min(input.len());

        // format message
        let span_len = span.end - span.start;
        let prefix = input[..span.start].chars().count();
        let marked = input[span.clone()].chars().count();
        let center_prefix = ((marked + 1) / 2).saturating_sub(1);
        let center_suffix = marked / 2;
        InputError::Parse(
            format!(
                "Unable to parse argument\n\n{}{}{}\n{}{}{}{}\n{}{}{}",
                &input[..span.start],
                &input[span.clone()].red(),
                &input[span.end..],
                " ".repeat(prefix),
                "─".repeat(center_prefix).red(),
                (if span_len > 0 { "┬" } else { "│" }).red(),
                "─".repeat(center_suffix).red(),
                " ".repeat(prefix + center_prefix),
                "╰── ".red(),
                msg.red().bold()
            )
            .whenever(Condition::from(|| {
                Condition::stderr_is_tty() && Condition::clicolor() && Condition::no_color()
            }))
            .to_string(),
        )
    }
}
