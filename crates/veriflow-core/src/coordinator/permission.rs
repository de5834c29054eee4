//! Camera-permission bridging.
//!
//! The embedded flow asks the browser layer for camera access; the browser
//! layer cannot grant it without a host-level runtime permission. The bridge
//! holds the embedded request while the host prompts the user, then resolves
//! it with the host's answer.

use tracing::{debug, info, warn};

use crate::host::{Capability, EmbeddedPermissionRequest};

use super::FlowCoordinator;

impl FlowCoordinator {
    /// Intercept a permission request from the embedded content.
    ///
    /// Only requests declared under the trusted flow origin reach the host's
    /// permission prompt; arbitrary embedded content must not be able to
    /// trigger camera prompts. Everything else is denied on the spot.
    pub fn on_permission_requested(&mut self, request: Box<dyn EmbeddedPermissionRequest>) {
        if request.origin() != crate::flow::TRUSTED_ORIGIN {
            info!(origin = request.origin(), "Denying permission request from untrusted origin");
            request.deny();
            return;
        }

        // Single-occupancy slot: a superseded request is denied rather than
        // discarded, so its grant/deny is never leaked.
        if let Some(previous) = self.pending_permission.take() {
            warn!("Superseding pending permission request");
            previous.deny();
        }

        debug!(resources = ?request.resources(), "Bridging camera permission request to host");
        self.pending_permission = Some(request);
        self.host.permissions.prompt_for_capability(Capability::Camera);
    }

    /// Deliver the host permission-prompt outcome.
    ///
    /// Resolves the pending embedded request, granting exactly the resource
    /// set it originally declared. A result with no pending request is a
    /// no-op; the prompt may outlive the request that triggered it.
    pub fn on_host_permission_result(&mut self, granted: bool) {
        let Some(request) = self.pending_permission.take() else {
            debug!(granted, "Permission result with no pending request");
            return;
        };

        if granted {
            info!("Host granted camera permission");
            request.grant(request.resources());
        } else {
            info!("Host denied camera permission");
            request.deny();
        }
    }
}
