use url::Url;

/// Extracts the authority (domain) component of a URL.
///
/// The authority is the lowercase host, with the port appended when the
/// URL carries an explicit non-default one. It is the key used for the
/// skip list and the discovered-domain set, so two URLs on the same host
/// but different ports count as different domains.
///
/// Returns `None` for URLs without a host (`mailto:`, `data:`, ...).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use owu_archiver::url::authority;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    })
}
