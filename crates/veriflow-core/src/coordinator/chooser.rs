//! File-selection bridging.
//!
//! The embedded flow asks for a file (a document photo); the host can
//! satisfy that by capturing a new photo or by picking an existing one. The
//! bridge prepares both paths, presents them in a single chooser, and
//! disambiguates which path produced the result: the host chooser does not
//! reliably say which option the user completed, so the coordinator infers
//! it from which signal is present.

use tracing::{debug, info, warn};

use crate::capture;
use crate::host::{CaptureTarget, ChooserRequest, PickerTarget};

use super::types::{FileSelectionHandle, PendingFileRequest};
use super::FlowCoordinator;

const CHOOSER_TITLE: &str = "Image Chooser";

impl FlowCoordinator {
    /// Intercept a file-chooser request from the embedded content.
    ///
    /// Always returns `true`: the coordinator takes ownership of the request
    /// and never falls back to the host's default handling.
    pub fn on_file_chooser_requested(&mut self, handle: FileSelectionHandle) -> bool {
        // Single-occupancy slot: a request still awaiting its chooser result
        // is resolved with no selection before the new one takes the slot.
        if let Some(previous) = self.pending_file.take() {
            warn!("Superseding pending file-selection request");
            previous.handle.resolve(None);
        }

        let mut pending = PendingFileRequest::new(handle);

        let capture_target = if self.host.chooser.can_capture() {
            self.prepare_capture_destination(&mut pending)
        } else {
            debug!("Host cannot handle capture intents; offering picker only");
            None
        };

        let chooser = ChooserRequest {
            title: CHOOSER_TITLE,
            picker: PickerTarget::images(),
            capture: capture_target,
        };

        self.pending_file = Some(pending);
        self.host.chooser.present(chooser);
        true
    }

    /// Deliver the host chooser outcome.
    ///
    /// `uri` is the resource the picker returned; a completed camera capture
    /// commonly returns none, in which case the prepared capture destination
    /// is the result. A result with no pending request is a no-op.
    pub fn on_host_selection_result(&mut self, succeeded: bool, uri: Option<String>) {
        let Some(pending) = self.pending_file.take() else {
            debug!(succeeded, "Selection result with no pending request");
            return;
        };

        let selection = if !succeeded {
            None
        } else if uri.is_none() && pending.captured_resource_path.is_some() {
            pending.captured_resource_path.clone().map(|path| vec![path])
        } else {
            uri.map(|uri| vec![uri])
        };

        info!(selection = ?selection, "Resolving file-selection request");
        pending.handle.resolve(selection);
    }

    /// Prepare a unique image destination for the capture path.
    ///
    /// Creation failure only degrades the chooser: the flow continues with
    /// the picker alone rather than failing the whole selection.
    fn prepare_capture_destination(
        &self,
        pending: &mut PendingFileRequest,
    ) -> Option<CaptureTarget> {
        let dir = capture::pictures_dir(self.pictures_dir.as_deref())?;
        match capture::create_unique_file(&dir, &capture::capture_prefix_now(), capture::CAPTURE_SUFFIX)
        {
            Ok(path) => {
                pending.captured_resource_path = Some(format!("file:{}", path.display()));
                debug!(path = %path.display(), "Prepared capture destination");
                Some(CaptureTarget { output: path })
            }
            Err(e) => {
                warn!(error = %e, "Capture destination unavailable; offering picker only");
                None
            }
        }
    }
}
