//! Navigation interception for the embedded surface.
//!
//! Every navigation the surface wants to perform is classified into one of
//! three outcomes: the completion callback (suppress and reload the entry
//! URL), an ordinary web link (suppress and open externally), or anything
//! else (allow, covering the initial load).

use tracing::{debug, info};
use url::Url;

use crate::flow;

use super::FlowCoordinator;

/// Outcome of classifying a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Completion signal from the flow: suppress the navigation and reload
    /// the entry URL. The callback authority is fictitious and must never
    /// actually be navigated to.
    RedirectToEntry { inquiry_id: Option<String> },
    /// Ordinary web link (help pages etc.): suppress and hand to the
    /// system-level handler.
    OpenExternally,
    /// Everything else, including the entry URL itself. Fail open.
    Allow,
}

/// Classify a navigation target. Pure; no side effects.
pub fn classify(target: &str) -> NavigationDecision {
    let Ok(url) = Url::parse(target) else {
        // Unparseable input never matches the callback contract; let the
        // surface deal with it.
        return NavigationDecision::Allow;
    };

    if url.host_str() == Some(flow::CALLBACK_AUTHORITY) {
        return NavigationDecision::RedirectToEntry {
            inquiry_id: flow::inquiry_id(&url),
        };
    }

    // Navigations within the flow's own host are the session itself (the
    // entry load and in-flow steps); only foreign web links leave.
    if url.host_str() == Some(flow::FLOW_HOST) {
        return NavigationDecision::Allow;
    }

    match url.scheme() {
        "http" | "https" => NavigationDecision::OpenExternally,
        _ => NavigationDecision::Allow,
    }
}

impl FlowCoordinator {
    /// Intercept a navigation request from the embedded surface.
    ///
    /// Returns `true` when the coordinator took over the navigation and the
    /// surface must suppress it, `false` to let it proceed.
    pub fn on_navigation_requested(&mut self, target: &str) -> bool {
        match classify(target) {
            NavigationDecision::RedirectToEntry { inquiry_id } => {
                info!(inquiry_id = ?inquiry_id, "Inquiry completed");
                self.host.notifications.notify(&format!(
                    "The inquiry ID is {}",
                    inquiry_id.as_deref().unwrap_or("unknown")
                ));
                // Back to the flow entry; a real embedding would likely
                // transition away from the surface here.
                self.host.surface.load_url(&self.entry_url);
                true
            }
            NavigationDecision::OpenExternally => {
                debug!(target, "Delegating navigation to external handler");
                if let Ok(url) = Url::parse(target) {
                    self.host.links.open_externally(&url);
                }
                true
            }
            NavigationDecision::Allow => false,
        }
    }
}
