//! Transient UI chrome state: toast notices.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a toast notice, mapped to a CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// CSS class fragment (`toast-success`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

/// One transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// UI state: the active toast plus a sequence number, so repeating the same
/// message still re-arms the auto-dismiss timer and stale timers can tell
/// they are stale.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toast: Option<Toast>,
    pub toast_seq: u64,
}

impl UiState {
    /// Replace the active toast. A new notice always evicts the old one.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast { message: message.into(), kind });
        self.toast_seq += 1;
    }

    /// Clear the toast `seq` was issued for. A dismiss raced by a newer
    /// toast leaves that newer toast alone.
    pub fn dismiss(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }
}
