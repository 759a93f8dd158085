/* src/server/core/rust/src/draft.rs */

use crate::config::DraftConfig;

/// Per-request preview state derived from cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftContext {
  pub enabled: bool,
  /// CMS session token, only kept when drafting.
  pub token: Option<String>,
}

impl DraftContext {
  pub fn disabled() -> Self {
    Self::default()
  }

  pub fn enabled(token: Option<String>) -> Self {
    Self { enabled: true, token }
  }

  pub fn from_cookie_header(header: Option<&str>, config: &DraftConfig) -> Self {
    let Some(header) = header else {
      return Self::disabled();
    };
    if parse_cookie(header, &config.draft_cookie).is_none() {
      return Self::disabled();
    }
    Self::enabled(parse_cookie(header, &config.token_cookie).map(str::to_string))
  }
}

/// First non-empty value for `name` in a `Cookie` header.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=') {
      if k.trim() == name {
        let v = v.trim().trim_matches('"');
        if !v.is_empty() {
          return Some(v);
        }
      }
    }
  }
  None
}
