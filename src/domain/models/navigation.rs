use serde::Serialize;

/// Glyphs the sidebar knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    BellRinging,
    SwitchHorizontal,
    Logout,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::BellRinging => "bell-ringing",
            IconId::SwitchHorizontal => "switch-horizontal",
            IconId::Logout => "logout",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::BellRinging => "🔔",
            IconId::SwitchHorizontal => "⇄",
            IconId::Logout => "⎋",
        }
    }
}

/// One configured sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconId,
}

/// Sidebar links, in display order. Fixed for the lifetime of the process.
pub const NAVIGATION: &[NavigationEntry] = &[NavigationEntry {
    label: "Homepage",
    path: "/",
    icon: IconId::BellRinging,
}];

/// Label of the highlighted navigation entry.
///
/// Only constructible from an entry of a navigation sequence, so it always
/// names a configured label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSelection(&'static str);

impl ActiveSelection {
    /// Selection pointing at the first entry, if any
    pub fn first_of(entries: &[NavigationEntry]) -> Option<Self> {
        entries.first().map(Self::of)
    }

    pub fn of(entry: &NavigationEntry) -> Self {
        Self(entry.label)
    }

    pub fn label(&self) -> &'static str {
        self.0
    }

    pub fn is(&self, entry: &NavigationEntry) -> bool {
        self.0 == entry.label
    }
}

/// Footer affordances. They suppress the default link behavior and do nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountAction {
    SwitchAccount,
    Logout,
}

impl AccountAction {
    pub const ALL: [AccountAction; 2] = [AccountAction::SwitchAccount, AccountAction::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::SwitchAccount => "Change account",
            AccountAction::Logout => "Logout",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            AccountAction::SwitchAccount => IconId::SwitchHorizontal,
            AccountAction::Logout => IconId::Logout,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountAction::SwitchAccount => "switch_account",
            AccountAction::Logout => "logout",
        }
    }
}
