use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use super::storage::window;

const NEXT_PARAM: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'=')
    .add(b'`');

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const TWO_FACTOR_PATH: &str = "/2fa-verification";
pub const HOME_PATH: &str = "/inicio";

pub fn login_redirect_url(attempted: &str) -> String {
    if attempted.is_empty() || attempted == "/" || attempted.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_string();
    }
    format!(
        "{}?next={}",
        LOGIN_PATH,
        utf8_percent_encode(attempted, NEXT_PARAM)
    )
}

/// Extracts a safe in-app `next` target from a query string. Absolute or
/// protocol-relative URLs are ignored.
pub fn next_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "next")
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
        .filter(|value| value.starts_with('/') && !value.starts_with("//"))
}

pub fn current_location() -> Option<(String, String)> {
    let location = window().ok()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some((path, search))
}

pub fn current_path_with_query() -> String {
    current_location()
        .map(|(path, search)| format!("{}{}", path, search))
        .unwrap_or_else(|| "/".to_string())
}

pub fn redirect_to(url: &str) {
    match window() {
        Ok(window) => {
            if let Err(err) = window.location().set_href(url) {
                log::error!("Failed to redirect to {}: {:?}", url, err);
            }
        }
        Err(err) => log::error!("Failed to redirect to {}: {}", url, err),
    }
}

pub fn redirect_to_login() {
    redirect_to(&login_redirect_url(&current_path_with_query()));
}
