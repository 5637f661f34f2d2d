//! Investments page state.

use super::catalog::Status;
use crate::pages::ScrollState;

/// Which listings the pipeline shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterSelection {
    #[default]
    All,
    Vetted,
    Active,
    Featured,
}

impl FilterSelection {
    pub const ALL: [FilterSelection; 4] = [
        FilterSelection::All,
        FilterSelection::Vetted,
        FilterSelection::Active,
        FilterSelection::Featured,
    ];

    pub fn matches(self, status: Status) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Vetted => status == Status::Vetted,
            FilterSelection::Active => status == Status::Active,
            FilterSelection::Featured => status == Status::Featured,
        }
    }

    /// Filter button caption.
    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => "All Opportunities",
            FilterSelection::Vetted => "Ready for Investment",
            FilterSelection::Active => "Due Diligence Phase",
            FilterSelection::Featured => "Capital Raise",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Vetted => "Ready",
            FilterSelection::Active => "Diligence",
            FilterSelection::Featured => "Raise",
        }
    }

    pub fn index(self) -> u16 {
        match self {
            FilterSelection::All => 0,
            FilterSelection::Vetted => 1,
            FilterSelection::Active => 2,
            FilterSelection::Featured => 3,
        }
    }

    pub fn from_index(i: u16) -> Option<FilterSelection> {
        FilterSelection::ALL.into_iter().find(|s| s.index() == i)
    }
}

impl From<Status> for FilterSelection {
    fn from(status: Status) -> Self {
        match status {
            Status::Vetted => FilterSelection::Vetted,
            Status::Active => FilterSelection::Active,
            Status::Featured => FilterSelection::Featured,
        }
    }
}

pub struct InvestmentsState {
    pub selection: FilterSelection,
    pub scroll: ScrollState,
}

impl InvestmentsState {
    pub fn new() -> Self {
        Self {
            selection: FilterSelection::default(),
            scroll: ScrollState::new(),
        }
    }

    /// Replace the current selection outright.
    pub fn select(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }
}
