//! Disguised-link detection.
//!
//! A link is suspicious when the text shown for it looks like a URI but
//! names a different place than the link's real target, e.g. visible
//! `http://bank.example/` over `http://evil.example/`. Descriptive text
//! ("click here") over a link is normal and never flagged.
//!
//! Suspicious links go through a [`Confirm`] prompt. Only an explicit
//! [`Answer::Yes`] lets them open; a dismissed prompt blocks.

use std::fmt;

/// Schemes whose prefix is dropped before comparing two URIs.
const SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Prefix that makes schemeless text look like a URI.
const WWW: &str = "www.";

#[inline]
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Whether `s` looks like a web or FTP URI.
///
/// # Example
/// ```
/// use linkspan::trust::is_uri_string;
///
/// assert!(is_uri_string("HTTPS://example.com"));
/// assert!(is_uri_string("www.example.com"));
/// assert!(!is_uri_string("mailto:a@b.c"));
/// assert!(!is_uri_string("click here"));
/// ```
pub fn is_uri_string(s: &str) -> bool {
    SCHEMES
        .iter()
        .chain(std::iter::once(&WWW))
        .any(|prefix| starts_with_ignore_case(s, prefix))
}

/// Authority and path of a URI: the string with its scheme prefix removed.
///
/// `www.` forms have no scheme and are returned whole, so `www.a.com` and
/// `http://www.a.com` share the same authority and path.
pub fn uri_path(uri: &str) -> &str {
    SCHEMES
        .iter()
        .find(|scheme| starts_with_ignore_case(uri, scheme))
        .map_or(uri, |scheme| &uri[scheme.len()..])
}

/// A link whose visible text disagrees with its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Where the link really goes.
    pub actual: String,
    /// What the reader sees.
    pub apparent: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The real URL ({}) is different from the apparent URL ({}).",
            self.actual, self.apparent
        )
    }
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub trusted: bool,
    /// Set when the link is not trusted.
    pub reason: Option<Mismatch>,
}

impl Verdict {
    #[inline]
    fn trusted() -> Self {
        Self {
            trusted: true,
            reason: None,
        }
    }

    #[inline]
    fn untrusted(target: &str, visible: &str) -> Self {
        Self {
            trusted: false,
            reason: Some(Mismatch {
                actual: target.to_owned(),
                apparent: visible.to_owned(),
            }),
        }
    }
}

/// Decide whether `visible` text may be shown for a link to `target`.
///
/// # Example
/// ```
/// use linkspan::trust::verify;
///
/// assert!(verify("http://bank.example/login", "http://bank.example/login").trusted);
/// assert!(!verify("http://evil.example/", "http://bank.example/").trusted);
/// assert!(verify("http://example.com", "click here").trusted);
/// ```
pub fn verify(target: &str, visible: &str) -> Verdict {
    if !is_uri_string(target) || visible == target || !is_uri_string(visible) {
        return Verdict::trusted();
    }

    let actual = uri_path(target);
    let apparent = uri_path(visible);
    // An empty authority cannot be compared; treat it as a mismatch.
    if actual.is_empty() || apparent.is_empty() || actual != apparent {
        log::debug!("link text {visible:?} disguises target {target:?}");
        return Verdict::untrusted(target, visible);
    }

    Verdict::trusted()
}

/// A reader's response to a suspicious-link prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Open the link anyway.
    Yes,
    /// Do not open it.
    No,
    /// Prompt closed without a choice.
    Dismissed,
}

impl Answer {
    /// Only an explicit yes proceeds.
    #[inline]
    pub const fn proceeds(self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Asks the reader whether to follow a suspicious link.
pub trait Confirm {
    fn confirm(&mut self, mismatch: &Mismatch) -> Answer;
}

impl<F> Confirm for F
where
    F: FnMut(&Mismatch) -> Answer,
{
    fn confirm(&mut self, mismatch: &Mismatch) -> Answer {
        self(mismatch)
    }
}

/// Run a verdict through the prompt if needed.
///
/// Returns `Ok(())` when the link may be opened and the mismatch otherwise.
pub fn confirm_verdict(verdict: Verdict, prompt: &mut dyn Confirm) -> Result<(), Mismatch> {
    let Some(mismatch) = verdict.reason else {
        return Ok(());
    };
    let answer = prompt.confirm(&mismatch);
    if answer.proceeds() {
        log::info!("opening disguised link {:?} on request", mismatch.actual);
        Ok(())
    } else {
        log::warn!("blocked disguised link {:?} ({answer:?})", mismatch.actual);
        Err(mismatch)
    }
}
