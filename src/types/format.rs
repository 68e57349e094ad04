/// Rich-text indicator state mirrored from the platform's text selection.
///
/// Not persisted anywhere: recomputed on every selection-change notification
/// and immediately after a formatting command is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// A rich-text formatting command applied to the active text selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
}

impl FormatCommand {
    /// All commands, in toolbar order.
    pub const ALL: [FormatCommand; 3] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Underline,
    ];

    /// The editing-command identifier understood by the platform.
    pub fn command_id(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
        }
    }

    /// Parse a command identifier back into a command.
    pub fn from_command_id(id: &str) -> Option<Self> {
        match id {
            "bold" => Some(FormatCommand::Bold),
            "italic" => Some(FormatCommand::Italic),
            "underline" => Some(FormatCommand::Underline),
            _ => None,
        }
    }

    /// Toolbar button caption.
    pub fn caption(self) -> &'static str {
        match self {
            FormatCommand::Bold => "B",
            FormatCommand::Italic => "I",
            FormatCommand::Underline => "U",
        }
    }
}

impl FormattingState {
    /// Whether the given command's formatting is active in this state.
    pub fn is_active(&self, command: FormatCommand) -> bool {
        match command {
            FormatCommand::Bold => self.bold,
            FormatCommand::Italic => self.italic,
            FormatCommand::Underline => self.underline,
        }
    }
}
