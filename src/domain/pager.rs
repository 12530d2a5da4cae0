//! Paging state machine behind the interactive folder menu.

use std::ops::Range;

/// Entries shown per menu page.
pub const PAGE_SIZE: usize = 20;

/// Where the user chose to place the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Root,
    /// Zero-based index into the folder catalog.
    Entry(usize),
}

/// One line of menu input, already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Next,
    Previous,
    Number(i64),
    Unrecognized,
}

impl MenuInput {
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        match token.as_str() {
            "n" => MenuInput::Next,
            "p" => MenuInput::Previous,
            _ => token.parse::<i64>().map(MenuInput::Number).unwrap_or(MenuInput::Unrecognized),
        }
    }
}

/// Result of feeding one input to the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    /// Page changed; show the menu again.
    Redisplay,
    Selected(Selection),
    /// Input rejected; show the message and prompt again on the same page.
    Rejected(MenuRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRejection {
    NoNextPage,
    NoPreviousPage,
    NotANumber { paged: bool },
    OutOfRange { max: usize },
}

impl MenuRejection {
    pub fn message(&self) -> String {
        match self {
            MenuRejection::NoNextPage => "Already on the last page".to_string(),
            MenuRejection::NoPreviousPage => "Already on the first page".to_string(),
            MenuRejection::NotANumber { paged: true } => {
                "Invalid selection. Please enter a number or 'n'/'p' for navigation".to_string()
            }
            MenuRejection::NotANumber { paged: false } => {
                "Invalid selection. Please enter a number".to_string()
            }
            MenuRejection::OutOfRange { max } => {
                format!("Invalid selection. Please choose between 0 and {max}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPager {
    len: usize,
    page: usize,
}

impl FolderPager {
    pub fn new(len: usize) -> Self {
        Self { len, page: 0 }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.len)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn is_paged(&self) -> bool {
        self.page_count() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Catalog indices visible on the current page.
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * PAGE_SIZE).min(self.len);
        let end = (start + PAGE_SIZE).min(self.len);
        start..end
    }

    pub fn apply(&mut self, input: MenuInput) -> MenuStep {
        let paged = self.is_paged();
        match input {
            MenuInput::Next if paged => {
                if !self.has_next() {
                    return MenuStep::Rejected(MenuRejection::NoNextPage);
                }
                self.page += 1;
                MenuStep::Redisplay
            }
            MenuInput::Previous if paged => {
                if !self.has_previous() {
                    return MenuStep::Rejected(MenuRejection::NoPreviousPage);
                }
                self.page -= 1;
                MenuStep::Redisplay
            }
            MenuInput::Next | MenuInput::Previous | MenuInput::Unrecognized => {
                MenuStep::Rejected(MenuRejection::NotANumber { paged })
            }
            MenuInput::Number(0) => MenuStep::Selected(Selection::Root),
            MenuInput::Number(n) if n >= 1 && (n as u64) <= self.len as u64 => {
                MenuStep::Selected(Selection::Entry(n as usize - 1))
            }
            MenuInput::Number(_) => MenuStep::Rejected(MenuRejection::OutOfRange { max: self.len }),
        }
    }
}

/// `ceil(len / PAGE_SIZE)`.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}
