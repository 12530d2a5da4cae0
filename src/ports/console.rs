use crate::domain::AppError;

/// Port for line-oriented interaction with the operator.
pub trait Console {
    /// Print one line of menu or status text.
    fn show(&mut self, line: &str);

    /// Print `prompt` and read one line of input, without the line terminator.
    ///
    /// End of input is an error; prompts never time out.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError>;

    /// Short delay after rejected input so the message stays readable.
    fn pause(&mut self);
}
