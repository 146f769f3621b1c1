//! Rendering of a [`DiffResult`](crate::model::DiffResult).
//!
//! Both renderers are views over the same value; neither recomputes anything.

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

/// Output format selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Render a result in the requested format.
///
/// # Errors
///
/// Returns `Serialization` only for [`OutputFormat::Json`] when encoding fails.
pub fn render(
    result: &crate::model::DiffResult,
    format: OutputFormat,
) -> crate::errors::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(result)),
        OutputFormat::Json => render_json(result),
    }
}
