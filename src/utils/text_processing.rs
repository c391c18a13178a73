//! Text processing utilities.
//!
//! This module contains utilities for preparing text for narrow
//! layouts, such as truncating copy and shortening link targets for
//! display.

use log::*;
use regex::Regex;

/// Truncate text to the given width, appending an ellipsis when
/// anything was cut. Safe on multi-byte input.
///
pub fn shorten(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Strip the scheme and leading "www." from a link target so it reads
/// cleanly in a one-line layout. "mailto:" targets keep only the
/// address; unrecognized targets pass through untouched.
///
/// # Arguments
/// * `target` - The link target to clean up
///
/// # Returns
/// The display form of the target.
pub fn display_target(target: &str) -> String {
    if let Some(address) = target.strip_prefix("mailto:") {
        return address.to_string();
    }
    let re = match Regex::new(r"^[a-z][a-z0-9+.-]*://(www\.)?") {
        Ok(re) => re,
        Err(e) => {
            warn!("Failed to compile link display pattern: {}", e);
            return target.to_string();
        }
    };
    re.replace(target, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_keeps_short_text() {
        assert_eq!(shorten("hello", 10), "hello");
        assert_eq!(shorten("hello", 5), "hello");
    }

    #[test]
    fn test_shorten_truncates_with_ellipsis() {
        assert_eq!(shorten("hello world", 6), "hello…");
        assert_eq!(shorten("hello", 0), "");
    }

    #[test]
    fn test_shorten_is_char_boundary_safe() {
        assert_eq!(shorten("héllo wörld", 6), "héllo…");
    }

    #[test]
    fn test_display_target_strips_scheme() {
        assert_eq!(
            display_target("https://instagram.com/navinkumarcomedy"),
            "instagram.com/navinkumarcomedy"
        );
        assert_eq!(
            display_target("https://www.youtube.com/@navinkumarcomedy"),
            "youtube.com/@navinkumarcomedy"
        );
    }

    #[test]
    fn test_display_target_handles_mailto() {
        assert_eq!(
            display_target("mailto:booking@navinkumar.in"),
            "booking@navinkumar.in"
        );
    }

    #[test]
    fn test_display_target_passes_through_unrecognized() {
        assert_eq!(display_target("gopher-hole"), "gopher-hole");
    }
}
