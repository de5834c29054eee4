//! Host collaborator interfaces.
//!
//! The coordinator never talks to a concrete platform. Everything it needs
//! from the embedding host — loading URLs into the embedded surface, opening
//! external links, prompting for runtime permissions, presenting the file
//! chooser, surfacing notifications — goes through these traits, so tests
//! and the shell harness can stand in for a real platform.

use std::path::PathBuf;

use url::Url;

/// A host-level capability the embedded content may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Camera,
}

/// The embedded content surface the flow renders in.
pub trait ContentSurface: Send + Sync {
    /// Load (or reload) a URL in the embedded surface.
    fn load_url(&self, url: &Url);
}

/// Hands ordinary web links to the system-level handler. Fire-and-forget.
pub trait ExternalLinkHandler: Send + Sync {
    fn open_externally(&self, url: &Url);
}

/// The host's runtime-permission system.
///
/// `prompt_for_capability` is fire-and-forget; the outcome arrives later
/// through [`crate::FlowCoordinator::on_host_permission_result`].
pub trait PermissionPrompter: Send + Sync {
    fn prompt_for_capability(&self, capability: Capability);
}

/// The host's modal capture/selection chooser.
///
/// `present` is fire-and-forget; the outcome arrives later through
/// [`crate::FlowCoordinator::on_host_selection_result`].
pub trait ChooserPresenter: Send + Sync {
    /// Whether the host can handle a capture intent at all. When false the
    /// chooser is presented without a capture alternative.
    fn can_capture(&self) -> bool;

    fn present(&self, chooser: ChooserRequest);
}

/// Best-effort user-visible notification surface.
pub trait NotificationSurface: Send + Sync {
    fn notify(&self, message: &str);
}

/// A permission request delivered by the embedded content.
///
/// Exposes the declared origin and resource set, and the single-use
/// grant/deny operations that resolve it. The coordinator guarantees each
/// request is granted or denied at most once.
pub trait EmbeddedPermissionRequest: Send + Sync {
    fn origin(&self) -> &str;

    fn resources(&self) -> &[String];

    fn grant(&self, resources: &[String]);

    fn deny(&self);
}

/// Capture alternative offered in the chooser: take a photo into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    /// Prepared destination the capture app writes into.
    pub output: PathBuf,
}

/// Primary chooser path: pick an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerTarget {
    /// Media type filter (e.g. `"image/*"`).
    pub media_type: &'static str,
    /// Restrict to directly openable documents.
    pub openable_only: bool,
}

impl PickerTarget {
    /// Picker scoped to openable image media, as the flow expects.
    pub const fn images() -> Self {
        Self {
            media_type: "image/*",
            openable_only: true,
        }
    }
}

/// A single chooser presentation combining both completion paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserRequest {
    pub title: &'static str,
    /// Pick-existing path, always offered.
    pub picker: PickerTarget,
    /// Capture path, offered when a destination could be prepared and the
    /// host can handle capture intents.
    pub capture: Option<CaptureTarget>,
}
