use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied hex values.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. The handle is opened on first use and held for the
/// session so X11/Wayland selections stay served while the app runs.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text);
        if let Err(error) = result {
            // A broken handle is reopened on the next copy.
            self.inner = None;
            return Err(ClipboardError::Write(error.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::{Clipboard, ClipboardError};

    /// Records every write; fails them all when `fail` is set.
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        pub writes: Rc<RefCell<Vec<String>>>,
        pub fail: Rc<Cell<bool>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            if self.fail.get() {
                return Err(ClipboardError::Write("permission denied".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingClipboard;
    use super::*;

    #[test]
    fn recording_clipboard_reports_failure() {
        let mut clipboard = RecordingClipboard::default();
        assert!(clipboard.write_text("#000000").is_ok());
        clipboard.fail.set(true);
        let err = clipboard.write_text("#FFFFFF").unwrap_err();
        assert_eq!(err.to_string(), "clipboard write failed: permission denied");
        assert_eq!(clipboard.writes.borrow().len(), 2);
    }
}
