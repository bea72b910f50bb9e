//! Dashboard link sharing.

pub mod clipboard;
pub mod system;

pub use clipboard::{
    COPIED_NOTICE, ClipboardError, ClipboardHost, CopyPath, LegacyClipboard, NoticeKind, Notifier,
    SecureClipboard, ShareOutcome, copy_with_fallback,
};
pub use system::{SystemClipboardHost, TerminalNotifier};

pub const DEFAULT_DASHBOARD_SLUG: &str = "pacific-glory-jan2024";

/// `{origin}/dashboard/{slug}`; a trailing '/' on the origin is dropped.
pub fn dashboard_url(origin: &str, slug: &str) -> String {
    format!("{}/dashboard/{}", origin.trim_end_matches('/'), slug)
}

/// Build the dashboard link for `origin` and put it on the clipboard,
/// falling back as needed. Always tells the user something.
pub fn copy_dashboard_link(
    origin: &str,
    slug: &str,
    host: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> ShareOutcome {
    let url = dashboard_url(origin, slug);
    copy_with_fallback(&url, host, notifier)
}

#[cfg(test)]
mod tests {
    use super::clipboard::fakes::{FakeDocument, FakeHost, FakeSecure, Recorder};
    use super::*;

    #[test]
    fn url_is_origin_plus_fixed_path() {
        assert_eq!(
            dashboard_url("https://sof.example.com", DEFAULT_DASHBOARD_SLUG),
            "https://sof.example.com/dashboard/pacific-glory-jan2024"
        );
        assert_eq!(
            dashboard_url("http://localhost:5173/", DEFAULT_DASHBOARD_SLUG),
            "http://localhost:5173/dashboard/pacific-glory-jan2024"
        );
    }

    #[test]
    fn copied_link_matches_origin() {
        let mut host = FakeHost {
            secure: Some(FakeSecure::default()),
            ..Default::default()
        };
        let mut rec = Recorder::default();

        let out = copy_dashboard_link("https://a.b", DEFAULT_DASHBOARD_SLUG, &mut host, &mut rec);

        assert_eq!(out, ShareOutcome::Copied(CopyPath::Secure));
        assert_eq!(
            host.secure.unwrap().written.as_deref(),
            Some("https://a.b/dashboard/pacific-glory-jan2024")
        );
    }

    #[test]
    fn manual_notice_carries_literal_url() {
        let mut host = FakeHost {
            secure: None,
            document: FakeDocument {
                fail_copy: true,
                ..Default::default()
            },
        };
        let mut rec = Recorder::default();

        let out = copy_dashboard_link("https://a.b", DEFAULT_DASHBOARD_SLUG, &mut host, &mut rec);

        let url = "https://a.b/dashboard/pacific-glory-jan2024";
        assert_eq!(out, ShareOutcome::Manual(url.into()));
        assert_eq!(rec.notices, vec![format!("Dashboard link: {url}")]);
        assert!(host.document.elements.is_empty());
    }
}
