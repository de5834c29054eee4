//! Pending-request types shared by the coordinator's bridges.

use tokio::sync::oneshot;
use tracing::debug;

/// Result of a file-selection request: the chosen resource URIs, or `None`
/// when the user cancelled or nothing usable came back.
pub type FileSelection = Option<Vec<String>>;

/// Single-shot completion handle for an embedded file-selection request.
///
/// Wraps the sender half of a oneshot channel so resolution consumes the
/// handle; a pending request can never be resolved twice.
#[derive(Debug)]
pub struct FileSelectionHandle {
    tx: oneshot::Sender<FileSelection>,
}

impl FileSelectionHandle {
    /// Create a handle and the receiver the embedded surface waits on.
    pub fn new() -> (Self, oneshot::Receiver<FileSelection>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Deliver the selection result to the embedded surface.
    pub fn resolve(self, selection: FileSelection) {
        if self.tx.send(selection).is_err() {
            // The surface stopped waiting; nothing to deliver to.
            debug!("File selection receiver dropped before resolution");
        }
    }
}

/// The single outstanding file-selection request, if any.
///
/// `captured_resource_path` records where a prepared camera-capture
/// destination was written, set only when a capture path was successfully
/// prepared before the chooser was shown. The prepared file itself is never
/// proactively deleted on cancellation: the capture app may still hold the
/// path.
#[derive(Debug)]
pub struct PendingFileRequest {
    pub handle: FileSelectionHandle,
    pub captured_resource_path: Option<String>,
}

impl PendingFileRequest {
    pub const fn new(handle: FileSelectionHandle) -> Self {
        Self {
            handle,
            captured_resource_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_delivers_selection() {
        let (handle, mut rx) = FileSelectionHandle::new();
        handle.resolve(Some(vec!["content://photo/1".to_string()]));
        let selection = rx.try_recv().unwrap();
        assert_eq!(selection, Some(vec!["content://photo/1".to_string()]));
    }

    #[test]
    fn resolve_tolerates_dropped_receiver() {
        let (handle, rx) = FileSelectionHandle::new();
        drop(rx);
        handle.resolve(None);
    }
}
