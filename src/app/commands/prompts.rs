//! Prompt helpers shared by the interactive commands.

use crate::domain::AppError;
use crate::ports::Console;

/// Ask for a value, offering `default` when the answer is blank.
pub(crate) fn ask<C: Console + ?Sized>(
    console: &mut C,
    label: &str,
    default: Option<&str>,
) -> Result<String, AppError> {
    let default = default.map(str::trim).filter(|value| !value.is_empty());
    let prompt = match default {
        Some(value) => format!("{label} (default: {value})"),
        None => label.to_string(),
    };

    let answer = console.read_line(&prompt)?.trim().to_string();
    if answer.is_empty() {
        return Ok(default.unwrap_or_default().to_string());
    }
    Ok(answer)
}

/// Like [`ask`], but a blank result is a validation error naming `field`.
pub(crate) fn ask_required<C: Console + ?Sized>(
    console: &mut C,
    label: &str,
    default: Option<&str>,
    field: &str,
) -> Result<String, AppError> {
    let value = ask(console, label, default)?;
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty.")));
    }
    Ok(value)
}

/// Yes/no question; only `y` or `yes` count as yes.
pub(crate) fn confirm<C: Console + ?Sized>(
    console: &mut C,
    question: &str,
) -> Result<bool, AppError> {
    let answer = console.read_line(&format!("{question} (y/n)"))?.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
