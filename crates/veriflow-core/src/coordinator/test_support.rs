//! Recording fakes for the host collaborators, shared by coordinator tests.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use url::Url;

use crate::config::FlowConfig;
use crate::host::{
    Capability, ChooserPresenter, ChooserRequest, ContentSurface, ExternalLinkHandler,
    NotificationSurface, PermissionPrompter,
};

use super::{FlowCoordinator, HostHandles};

/// Records every call the coordinator makes into the host.
pub(crate) struct RecordingHost {
    pub loaded: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
    pub prompted: Mutex<Vec<Capability>>,
    pub presented: Mutex<Vec<ChooserRequest>>,
    pub notified: Mutex<Vec<String>>,
    pub capture_capable: AtomicBool,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            loaded: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
            prompted: Mutex::new(Vec::new()),
            presented: Mutex::new(Vec::new()),
            notified: Mutex::new(Vec::new()),
            capture_capable: AtomicBool::new(true),
        })
    }

    pub fn handles(self: &Arc<Self>) -> HostHandles {
        HostHandles {
            surface: Arc::clone(self) as Arc<dyn ContentSurface>,
            links: Arc::clone(self) as Arc<dyn ExternalLinkHandler>,
            permissions: Arc::clone(self) as Arc<dyn PermissionPrompter>,
            chooser: Arc::clone(self) as Arc<dyn ChooserPresenter>,
            notifications: Arc::clone(self) as Arc<dyn NotificationSurface>,
        }
    }
}

impl ContentSurface for RecordingHost {
    fn load_url(&self, url: &Url) {
        self.loaded.lock().unwrap().push(url.to_string());
    }
}

impl ExternalLinkHandler for RecordingHost {
    fn open_externally(&self, url: &Url) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

impl PermissionPrompter for RecordingHost {
    fn prompt_for_capability(&self, capability: Capability) {
        self.prompted.lock().unwrap().push(capability);
    }
}

impl ChooserPresenter for RecordingHost {
    fn can_capture(&self) -> bool {
        self.capture_capable.load(Ordering::Relaxed)
    }

    fn present(&self, chooser: ChooserRequest) {
        self.presented.lock().unwrap().push(chooser);
    }
}

impl NotificationSurface for RecordingHost {
    fn notify(&self, message: &str) {
        self.notified.lock().unwrap().push(message.to_string());
    }
}

/// Coordinator over a recording host, pictures directory unset.
pub(crate) fn test_coordinator(host: &Arc<RecordingHost>) -> FlowCoordinator {
    FlowCoordinator::new(&FlowConfig::default(), host.handles()).unwrap()
}

/// Coordinator whose capture destinations land in `pictures`.
pub(crate) fn test_coordinator_with_pictures(
    host: &Arc<RecordingHost>,
    pictures: &Path,
) -> FlowCoordinator {
    let mut config = FlowConfig::default();
    config.storage.pictures_dir = Some(pictures.to_path_buf());
    FlowCoordinator::new(&config, host.handles()).unwrap()
}
