use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::domain::AppError;

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    // Template names end in .xml/.json; output must stay verbatim.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// Render `body` with the fields of `data`.
///
/// Undefined fields render as empty strings.
pub fn render<S: Serialize>(name: &str, body: &str, data: &S) -> Result<String, AppError> {
    let env = build_environment();
    env.render_named_str(name, body, data)
        .map_err(|e| AppError::Template(format!("Failed to render template '{}': {}", name, e)))
}
