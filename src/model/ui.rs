//! UI state - presentation state separate from domain data

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Login,
    Browse,
}

impl AppMode {
    pub fn toggled(self) -> AppMode {
        match self {
            AppMode::Login => AppMode::Browse,
            AppMode::Browse => AppMode::Login,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AppMode::Login => "Login",
            AppMode::Browse => "Tables",
        }
    }
}

/// Input field focused on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Input focused on the table browser screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseField {
    #[default]
    Table,
    Command,
    PageSize,
    PageNumber,
    /// The result grid itself (cell cursor)
    Grid,
}

impl BrowseField {
    const ORDER: [BrowseField; 5] = [
        BrowseField::Table,
        BrowseField::Command,
        BrowseField::PageSize,
        BrowseField::PageNumber,
        BrowseField::Grid,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> BrowseField {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> BrowseField {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(&self) -> &str {
        match self {
            BrowseField::Table => "Table",
            BrowseField::Command => "Command",
            BrowseField::PageSize => "Page size",
            BrowseField::PageNumber => "Go to page",
            BrowseField::Grid => "Rows",
        }
    }
}

pub const EXPANDED_LABEL: &str = "Table Content [ - ]";
pub const COLLAPSED_LABEL: &str = "Table Content [ + ]";

/// CSS-style display of the table container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// Show/hide toggle for the table container.
///
/// The label text is the source of truth: only the exact expanded label
/// collapses, every other label expands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePanel {
    label: String,
    display: Display,
}

impl Default for TablePanel {
    fn default() -> Self {
        Self {
            label: EXPANDED_LABEL.to_string(),
            display: Display::Block,
        }
    }
}

impl TablePanel {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }

    /// Flip the container and return the new display
    pub fn toggle(&mut self) -> Display {
        if self.label == EXPANDED_LABEL {
            self.label = COLLAPSED_LABEL.to_string();
            self.display = Display::None;
        } else {
            self.label = EXPANDED_LABEL.to_string();
            self.display = Display::Block;
        }
        self.display
    }

    /// Show the container, as done when fresh headers arrive
    pub fn expand(&mut self) {
        self.label = EXPANDED_LABEL.to_string();
        self.display = Display::Block;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_block() {
        let mut panel = TablePanel::default();
        assert_eq!(panel.label(), EXPANDED_LABEL);

        assert_eq!(panel.toggle(), Display::None);
        assert_eq!(panel.label(), COLLAPSED_LABEL);

        assert_eq!(panel.toggle(), Display::Block);
        assert_eq!(panel.label(), EXPANDED_LABEL);
    }

    #[test]
    fn test_unknown_label_expands() {
        let mut panel = TablePanel {
            label: "Table Content".to_string(),
            display: Display::None,
        };
        assert_eq!(panel.toggle(), Display::Block);
        assert!(panel.is_visible());
    }

    #[test]
    fn test_expand_after_collapse() {
        let mut panel = TablePanel::default();
        panel.toggle();
        panel.expand();
        assert!(panel.is_visible());
        assert_eq!(panel.label(), EXPANDED_LABEL);
    }

    #[test]
    fn test_browse_field_cycle() {
        let mut field = BrowseField::Table;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, BrowseField::Table);
        assert_eq!(BrowseField::Table.prev(), BrowseField::Grid);
        assert_eq!(BrowseField::Grid.next(), BrowseField::Table);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AppMode::Login.toggled(), AppMode::Browse);
        assert_eq!(AppMode::Browse.toggled(), AppMode::Login);
        assert_eq!(LoginField::Password.next(), LoginField::Username);
    }
}
