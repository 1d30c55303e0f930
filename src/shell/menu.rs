//! Main menu entries.

/// A main menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddPredefined,
    AddCustom,
    RemoveRule,
    ChangeRange,
    Run,
    Quit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddPredefined,
        MenuChoice::AddCustom,
        MenuChoice::RemoveRule,
        MenuChoice::ChangeRange,
        MenuChoice::Run,
        MenuChoice::Quit,
    ];

    /// Get an entry by 1-based menu number.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddPredefined => "Add Predefined Rule",
            MenuChoice::AddCustom => "Add Custom Rule",
            MenuChoice::RemoveRule => "Remove a Rule",
            MenuChoice::ChangeRange => "Change Range",
            MenuChoice::Run => "Run this iteration",
            MenuChoice::Quit => "Quit",
        }
    }
}
