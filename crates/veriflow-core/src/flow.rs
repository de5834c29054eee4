//! Wire contract with the hosted verification flow.
//!
//! These constants are fixed by the embedded flow itself: the entry URL it
//! is served from, the fictitious authority it navigates to when an inquiry
//! completes, and the origin its permission requests are declared under.

use url::Url;

use crate::config::InquiryConfig;
use crate::error::Result;

/// Host serving the embedded flow. Navigations within it stay in-session.
pub const FLOW_HOST: &str = "inquiry.withpersona.com";

/// Authority of the completion-callback navigation. Never resolvable; used
/// purely as an in-band signal that the flow finished.
pub const CALLBACK_AUTHORITY: &str = "personacallback";

/// Query parameter carrying the completed inquiry identifier.
pub const INQUIRY_ID_PARAM: &str = "inquiry-id";

/// The only origin whose embedded permission requests are honored.
pub const TRUSTED_ORIGIN: &str = "https://inquiry.withpersona.com/";

/// Build the canonical flow entry URL for the configured inquiry.
pub fn entry_url(inquiry: &InquiryConfig) -> Result<Url> {
    let mut url = Url::parse("https://inquiry.withpersona.com/verify")?;
    url.query_pairs_mut()
        .append_pair("is-webview", "true")
        .append_pair("inquiry-template-id", &inquiry.template_id)
        .append_pair("environment", &inquiry.environment);
    Ok(url)
}

/// Extract the inquiry identifier from a callback URL, if present.
///
/// The flow omits the parameter in some environments; absence is not an
/// error, just an unknown identifier.
pub fn inquiry_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == INQUIRY_ID_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_url_carries_template_and_environment() {
        let url = entry_url(&InquiryConfig::default()).unwrap();
        assert_eq!(url.host_str(), Some("inquiry.withpersona.com"));
        assert_eq!(url.path(), "/verify");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("is-webview".into(), "true".into())));
        assert!(pairs.contains(&("environment".into(), "sandbox".into())));
    }

    #[test]
    fn inquiry_id_absent_is_none() {
        let url = Url::parse("https://personacallback").unwrap();
        assert_eq!(inquiry_id(&url), None);
    }

    #[test]
    fn inquiry_id_extracted_from_callback() {
        let url = Url::parse("https://personacallback?inquiry-id=inq_123").unwrap();
        assert_eq!(inquiry_id(&url).as_deref(), Some("inq_123"));
    }
}
