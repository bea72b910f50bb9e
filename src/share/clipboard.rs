// src/share/clipboard.rs
//
// Ordered copy strategy: secure clipboard if the host offers one, then the
// legacy staged copy, then hand the text to the user.

use thiserror::Error;

pub const COPIED_NOTICE: &str = "Dashboard link copied to clipboard!";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("staging error: {0}")]
    Staging(#[from] std::io::Error),
}

/// Capability that writes text straight to the system clipboard.
pub trait SecureClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Older copy mechanism: stage the text somewhere selectable, select all of
/// it, then issue a copy command for the current selection.
pub trait LegacyClipboard {
    fn stage(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn select_all(&mut self) -> Result<(), ClipboardError>;
    fn exec_copy(&mut self) -> Result<(), ClipboardError>;
    /// Must be safe to call even if staging failed half-way.
    fn unstage(&mut self);
}

pub trait ClipboardHost {
    /// `None` when the secure capability is missing in this environment.
    fn secure(&mut self) -> Option<&mut dyn SecureClipboard>;
    fn legacy(&mut self) -> &mut dyn LegacyClipboard;
}

/// What a notice reports, so notifiers never parse the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The text reached the clipboard.
    Copied,
    /// The text is shown for manual copy.
    Manual,
}

/// Where user-visible notices go (terminal, test recorder...).
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Secure,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied(CopyPath),
    /// Nothing could be copied; the user was shown the text instead.
    Manual(String),
}

/// Removes the staged text when dropped, whatever happened in between.
struct StagedText<'a> {
    legacy: &'a mut dyn LegacyClipboard,
}

impl<'a> StagedText<'a> {
    fn stage(legacy: &'a mut dyn LegacyClipboard, text: &str) -> Result<Self, ClipboardError> {
        // the guard exists before staging so a partial stage is cleaned too
        let mut guard = StagedText { legacy };
        guard.legacy.stage(text)?;
        Ok(guard)
    }

    fn copy(mut self) -> Result<(), ClipboardError> {
        self.legacy.select_all()?;
        self.legacy.exec_copy()
    }
}

impl Drop for StagedText<'_> {
    fn drop(&mut self) {
        self.legacy.unstage();
    }
}

fn legacy_copy(legacy: &mut dyn LegacyClipboard, text: &str) -> Result<(), ClipboardError> {
    StagedText::stage(legacy, text)?.copy()
}

/// Copy `text` with the best mechanism available. Never fails: the worst
/// outcome is a notice carrying the text itself.
pub fn copy_with_fallback(
    text: &str,
    host: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> ShareOutcome {
    if let Some(secure) = host.secure()
        && secure.write_text(text).is_ok()
    {
        notifier.notify(NoticeKind::Copied, COPIED_NOTICE);
        return ShareOutcome::Copied(CopyPath::Secure);
    }

    match legacy_copy(host.legacy(), text) {
        Ok(()) => {
            notifier.notify(NoticeKind::Copied, COPIED_NOTICE);
            ShareOutcome::Copied(CopyPath::Legacy)
        }
        Err(_) => {
            notifier.notify(NoticeKind::Manual, &format!("Dashboard link: {text}"));
            ShareOutcome::Manual(text.to_string())
        }
    }
}
