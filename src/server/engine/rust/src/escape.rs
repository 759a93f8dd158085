/* src/server/engine/rust/src/escape.rs */

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// `blockName` to an element id: `Call To Action` and `callToAction` both
/// become `call-to-action`.
pub fn to_kebab_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len() + 4);
  let mut prev_lower = false;
  let mut in_space = false;
  for ch in s.chars() {
    if ch.is_whitespace() {
      if !in_space {
        out.push('-');
      }
      in_space = true;
      prev_lower = false;
      continue;
    }
    in_space = false;
    if ch.is_uppercase() && prev_lower {
      out.push('-');
    }
    prev_lower = ch.is_lowercase();
    out.extend(ch.to_lowercase());
  }
  out
}
