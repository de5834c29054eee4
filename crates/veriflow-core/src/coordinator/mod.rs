//! Flow coordination between the embedded surface and the host.
//!
//! One coordinator instance mediates the three interaction classes the
//! embedded verification flow needs from the host: navigation interception,
//! camera-permission bridging, and file-selection bridging. All state lives
//! in two single-occupancy pending slots.

mod chooser;
mod navigation;
mod permission;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use navigation::NavigationDecision;
pub use types::{FileSelection, FileSelectionHandle, PendingFileRequest};

use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

use crate::config::FlowConfig;
use crate::error::Result;
use crate::flow;
use crate::host::{
    ChooserPresenter, ContentSurface, EmbeddedPermissionRequest, ExternalLinkHandler,
    NotificationSurface, PermissionPrompter,
};

/// Host collaborators the coordinator drives.
#[derive(Clone)]
pub struct HostHandles {
    pub surface: Arc<dyn ContentSurface>,
    pub links: Arc<dyn ExternalLinkHandler>,
    pub permissions: Arc<dyn PermissionPrompter>,
    pub chooser: Arc<dyn ChooserPresenter>,
    pub notifications: Arc<dyn NotificationSurface>,
}

/// Coordinator for an embedded verification flow session.
///
/// Thread confinement is a precondition of this contract: every entry point
/// must be invoked from one logical thread (the host's UI/event dispatch
/// thread), never concurrently. The `&mut self` receivers make the compiler
/// enforce exclusive access; there is no internal locking. Intercept calls
/// return immediately, and host decisions arrive later through the
/// `on_host_*` entry points on the same thread.
pub struct FlowCoordinator {
    host: HostHandles,
    entry_url: Url,
    pictures_dir: Option<PathBuf>,
    pending_file: Option<PendingFileRequest>,
    pending_permission: Option<Box<dyn EmbeddedPermissionRequest>>,
}

impl FlowCoordinator {
    /// Create a coordinator for the configured inquiry flow.
    pub fn new(config: &FlowConfig, host: HostHandles) -> Result<Self> {
        Ok(Self {
            host,
            entry_url: flow::entry_url(&config.flow)?,
            pictures_dir: config.storage.pictures_dir.clone(),
            pending_file: None,
            pending_permission: None,
        })
    }

    /// The canonical flow entry URL this coordinator reloads on completion.
    pub const fn entry_url(&self) -> &Url {
        &self.entry_url
    }

    /// Kick off the flow by loading the entry URL into the surface.
    pub fn start(&self) {
        self.host.surface.load_url(&self.entry_url);
    }

    /// Whether a file-selection request is awaiting a host result.
    pub const fn has_pending_file_request(&self) -> bool {
        self.pending_file.is_some()
    }

    /// Whether a permission request is awaiting a host result.
    pub const fn has_pending_permission_request(&self) -> bool {
        self.pending_permission.is_some()
    }
}
