//! Service URL rewriting

use url::Url;

/// Replace the host component of `url`, preserving scheme, port, and path
///
/// The probe uses this to point a cluster-advertised service URL at the
/// local instance (`http://myhost.example.com:11000/oozie` becomes
/// `http://0.0.0.0:11000/oozie`).
pub fn rewrite_host(url: &str, host: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(url)?;
    parsed.set_host(Some(host))?;
    Ok(parsed.to_string())
}
