//! Icon identifiers and their SVG path data.
//!
//! Content lists name their icon explicitly through [`Icon`]; nothing looks
//! an icon up by position, so reordering or resizing a list cannot pair copy
//! with the wrong glyph.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Every glyph the UI draws. Paths target a 24x24 stroke-only viewBox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Alert,
    ArrowDown,
    ArrowUp,
    Award,
    Ban,
    Bell,
    Book,
    Building,
    Calendar,
    Chart,
    Check,
    Clock,
    Close,
    Cloud,
    Database,
    Edit,
    FileText,
    Globe,
    Home,
    Inbox,
    Key,
    Layers,
    Link,
    Lock,
    Logout,
    Mail,
    Minus,
    Plus,
    Refresh,
    Server,
    Settings,
    Shield,
    Sparkles,
    Trash,
    Users,
    Workflow,
}

impl Icon {
    pub const ALL: [Self; 36] = [
        Self::Alert,
        Self::ArrowDown,
        Self::ArrowUp,
        Self::Award,
        Self::Ban,
        Self::Bell,
        Self::Book,
        Self::Building,
        Self::Calendar,
        Self::Chart,
        Self::Check,
        Self::Clock,
        Self::Close,
        Self::Cloud,
        Self::Database,
        Self::Edit,
        Self::FileText,
        Self::Globe,
        Self::Home,
        Self::Inbox,
        Self::Key,
        Self::Layers,
        Self::Link,
        Self::Lock,
        Self::Logout,
        Self::Mail,
        Self::Minus,
        Self::Plus,
        Self::Refresh,
        Self::Server,
        Self::Settings,
        Self::Shield,
        Self::Sparkles,
        Self::Trash,
        Self::Users,
        Self::Workflow,
    ];

    /// SVG `d` attribute for this glyph.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Alert => "M12 9v4 M12 17h.01 M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z",
            Self::ArrowDown => "M12 5v14 M19 12l-7 7-7-7",
            Self::ArrowUp => "M12 19V5 M5 12l7-7 7 7",
            Self::Award => "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12z M8.2 13.9 7 23l5-3 5 3-1.2-9.1",
            Self::Ban => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z M4.9 4.9l14.2 14.2",
            Self::Bell => "M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9 M13.7 21a2 2 0 0 1-3.4 0",
            Self::Book => "M4 19.5A2.5 2.5 0 0 1 6.5 17H20 M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z",
            Self::Building => "M3 21h18 M5 21V7l8-4v18 M19 21V11l-6-4 M9 9v.01 M9 12v.01 M9 15v.01 M9 18v.01",
            Self::Calendar => "M3 4h18v18H3z M16 2v4 M8 2v4 M3 10h18",
            Self::Chart => "M3 3v18h18 M18 17V9 M13 17V5 M8 17v-3",
            Self::Check => "M20 6 9 17l-5-5",
            Self::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z M12 6v6l4 2",
            Self::Close => "M18 6 6 18 M6 6l12 12",
            Self::Cloud => "M17.5 19H9a7 7 0 1 1 6.7-9h1.8a4.5 4.5 0 1 1 0 9z",
            Self::Database => "M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z M21 12c0 1.66-4 3-9 3s-9-1.34-9-3 M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
            Self::Edit => "M12 20h9 M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z",
            Self::FileText => "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6 M16 13H8 M16 17H8 M10 9H8",
            Self::Globe => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            Self::Home => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z M9 22V12h6v10",
            Self::Inbox => "M22 12h-6l-2 3h-4l-2-3H2 M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
            Self::Key => "M21 2l-2 2 M15.5 7.5l3 3L22 7l-3-3 M11.4 11.6a5.5 5.5 0 1 1-7.8 7.8 5.5 5.5 0 0 1 7.8-7.8z M11.4 11.6 19 4",
            Self::Layers => "M12 2 2 7l10 5 10-5-10-5z M2 17l10 5 10-5 M2 12l10 5 10-5",
            Self::Link => "M10 13a5 5 0 0 0 7.5.5l3-3a5 5 0 0 0-7-7l-1.7 1.7 M14 11a5 5 0 0 0-7.5-.5l-3 3a5 5 0 0 0 7 7l1.7-1.7",
            Self::Lock => "M5 11h14v11H5z M7 11V7a5 5 0 0 1 10 0v4",
            Self::Logout => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4 M16 17l5-5-5-5 M21 12H9",
            Self::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 6l-10 7L2 6",
            Self::Minus => "M5 12h14",
            Self::Plus => "M12 5v14 M5 12h14",
            Self::Refresh => "M23 4v6h-6 M1 20v-6h6 M3.5 9a9 9 0 0 1 14.9-3.4L23 10 M1 14l4.6 4.4A9 9 0 0 0 20.5 15",
            Self::Server => "M2 2h20v8H2z M2 14h20v8H2z M6 6h.01 M6 18h.01",
            Self::Settings => "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z",
            Self::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            Self::Sparkles => "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z M19 15l.9 2.1L22 18l-2.1.9L19 21l-.9-2.1L16 18l2.1-.9z",
            Self::Trash => "M3 6h18 M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6 M10 11v6 M14 11v6 M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
            Self::Users => "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2 M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z M23 21v-2a4 4 0 0 0-3-3.9 M16 3.1a4 4 0 0 1 0 7.8",
            Self::Workflow => "M3 3h6v6H3z M15 15h6v6h-6z M6 9v3a3 3 0 0 0 3 3h6",
        }
    }
}
