//! Interactive destination picker for `add`.

use crate::app::commands::prompts::confirm;
use crate::domain::project_layout::SUITESCRIPTS_LABEL;
use crate::domain::{AppError, FolderEntry, FolderPager, MenuInput, MenuStep, Selection};
use crate::ports::Console;

const SEPARATOR_WIDTH: usize = 60;

/// Let the user pick a folder from `folders`, or the SuiteScripts root.
///
/// With no folders the menu is skipped and the user is asked whether to use
/// the root; declining yields `AppError::UserCancelled`.
pub fn select_folder<C: Console + ?Sized>(
    console: &mut C,
    folders: &[FolderEntry],
) -> Result<Selection, AppError> {
    if folders.is_empty() {
        console.show("");
        let question = format!(
            "No folders found under {SUITESCRIPTS_LABEL}. Place script in {SUITESCRIPTS_LABEL} root?"
        );
        return if confirm(console, &question)? {
            Ok(Selection::Root)
        } else {
            Err(AppError::UserCancelled)
        };
    }

    let mut pager = FolderPager::new(folders.len());
    loop {
        show_page(console, folders, &pager);

        let input = console.read_line(&selection_prompt(&pager))?;
        match pager.apply(MenuInput::parse(&input)) {
            MenuStep::Selected(selection) => return Ok(selection),
            MenuStep::Redisplay => continue,
            MenuStep::Rejected(rejection) => {
                console.show(&rejection.message());
                console.pause();
            }
        }
    }
}

fn show_page<C: Console + ?Sized>(console: &mut C, folders: &[FolderEntry], pager: &FolderPager) {
    console.show("");
    console.show(&format!("Available folders under {SUITESCRIPTS_LABEL}:"));
    console.show(&format!("  0. {SUITESCRIPTS_LABEL} (root)"));
    console.show(&"-".repeat(SEPARATOR_WIDTH));

    for index in pager.visible() {
        console.show(&format!("  {}. {}", index + 1, folders[index].display_label));
    }

    if pager.is_paged() {
        console.show("");
        console.show(&page_indicator(pager));
    }
}

fn page_indicator(pager: &FolderPager) -> String {
    let mut hints = Vec::new();
    if pager.has_previous() {
        hints.push("p: previous page");
    }
    if pager.has_next() {
        hints.push("n: next page");
    }

    let mut line = format!("Page {} of {}", pager.current_page() + 1, pager.page_count());
    if !hints.is_empty() {
        line.push_str(&format!(" ({})", hints.join(", ")));
    }
    line
}

fn selection_prompt(pager: &FolderPager) -> String {
    if pager.is_paged() {
        "Select folder (0 for root, number to select, 'n' for next page, 'p' for previous page)"
            .to_string()
    } else {
        "Select folder (0 for root, number to select)".to_string()
    }
}
