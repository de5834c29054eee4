//! Terminal stand-ins for the host collaborators.
//!
//! A real embedding wires the coordinator to platform surfaces (a web view,
//! an intent dispatcher, a runtime-permission API). The shell replaces them
//! with logged stand-ins; modal interactions are parked here and answered by
//! the command loop, preserving the coordinator's suspend-without-blocking
//! contract.

use std::sync::Mutex;

use tracing::info;
use url::Url;

use veriflow_core::host::{
    Capability, ChooserPresenter, ChooserRequest, ContentSurface, EmbeddedPermissionRequest,
    ExternalLinkHandler, NotificationSurface, PermissionPrompter,
};

/// Host collaborators backed by the terminal.
///
/// Fire-and-forget modal requests (permission prompt, chooser) are parked in
/// single slots; the command loop drains them and feeds the answers back
/// into the coordinator, the way a platform event loop would.
#[derive(Default)]
pub struct TerminalHost {
    pending_prompt: Mutex<Option<Capability>>,
    pending_chooser: Mutex<Option<ChooserRequest>>,
}

impl TerminalHost {
    /// Take the parked permission prompt, if one arrived.
    pub fn take_permission_prompt(&self) -> Option<Capability> {
        self.pending_prompt.lock().ok()?.take()
    }

    /// Take the parked chooser presentation, if one arrived.
    pub fn take_chooser(&self) -> Option<ChooserRequest> {
        self.pending_chooser.lock().ok()?.take()
    }
}

impl ContentSurface for TerminalHost {
    fn load_url(&self, url: &Url) {
        info!(%url, "Surface loading");
    }
}

impl ExternalLinkHandler for TerminalHost {
    fn open_externally(&self, url: &Url) {
        info!(%url, "Opening in system browser");
    }
}

impl PermissionPrompter for TerminalHost {
    fn prompt_for_capability(&self, capability: Capability) {
        if let Ok(mut slot) = self.pending_prompt.lock() {
            *slot = Some(capability);
        }
    }
}

impl ChooserPresenter for TerminalHost {
    fn can_capture(&self) -> bool {
        true
    }

    fn present(&self, chooser: ChooserRequest) {
        if let Ok(mut slot) = self.pending_chooser.lock() {
            *slot = Some(chooser);
        }
    }
}

impl NotificationSurface for TerminalHost {
    fn notify(&self, message: &str) {
        info!(message, "Notification");
    }
}

/// A permission request as the embedded content would deliver it.
pub struct SimulatedPermissionRequest {
    origin: String,
    resources: Vec<String>,
}

impl SimulatedPermissionRequest {
    pub fn new(origin: &str) -> Box<Self> {
        Box::new(Self {
            origin: origin.to_string(),
            resources: vec!["video-capture".to_string()],
        })
    }
}

impl EmbeddedPermissionRequest for SimulatedPermissionRequest {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn resources(&self) -> &[String] {
        &self.resources
    }

    fn grant(&self, resources: &[String]) {
        info!(origin = %self.origin, ?resources, "Embedded request granted");
    }

    fn deny(&self) {
        info!(origin = %self.origin, "Embedded request denied");
    }
}
