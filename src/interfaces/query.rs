use crate::domain::params::CallbackParams;
use url::form_urlencoded;

/// Reads a gateway redirect into [`CallbackParams`].
///
/// Accepts either a full URL or a bare query string; keys and values are
/// percent-decoded but otherwise kept verbatim, in redirect order. This
/// never fails: garbage in the query degrades to whatever pairs could be
/// read, and downstream classification fails closed on what is missing.
pub fn parse_redirect(raw: &str) -> CallbackParams {
    // Absolute URLs carry their query explicitly; anything else is either a
    // relative path with a query or a bare query string.
    let query = match url::Url::parse(raw) {
        Ok(parsed) => parsed.query().unwrap_or("").to_owned(),
        Err(_) => match raw.split_once('?') {
            Some((_, q)) => q.to_owned(),
            None => raw.to_owned(),
        },
    };

    form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
