pub mod add;
pub mod create;
pub mod folder_select;
pub(crate) mod prompts;
