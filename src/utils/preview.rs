//! Log Previews
//!
//! Shortens response bodies for log lines, keeping a prefix and a suffix
//! and respecting UTF-8 boundaries.

/// Default byte budget for bodies written to logs.
pub const DEFAULT_PREVIEW_BYTES: usize = 160;

pub fn preview(content: &str, max_bytes: usize) -> String {
    if content.len() <= max_bytes {
        return content.to_string();
    }

    if max_bytes == 0 {
        return format!("... [{} bytes truncated] ...", content.len());
    }

    let half = max_bytes / 2;

    let prefix_end = content
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .take_while(|end| *end <= half)
        .last()
        .unwrap_or(0);

    let suffix_target = content.len().saturating_sub(half);
    let suffix_start = content
        .char_indices()
        .map(|(idx, _)| idx)
        .find(|idx| *idx >= suffix_target)
        .unwrap_or(content.len())
        .max(prefix_end);

    let prefix = &content[..prefix_end];
    let suffix = &content[suffix_start..];
    let truncated = content.len() - (prefix.len() + suffix.len());

    format!("{} ... [{} bytes truncated] ... {}", prefix, truncated, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_untouched() {
        assert_eq!(preview("{\"value\":\"Calm\"}", 64), "{\"value\":\"Calm\"}");
    }

    #[test]
    fn test_long_content_keeps_both_ends() {
        let body = format!("start{}end", "x".repeat(500));
        let out = preview(&body, 20);
        assert!(out.starts_with("start"));
        assert!(out.ends_with("end"));
        assert!(out.contains("bytes truncated"));
    }

    #[test]
    fn test_multibyte_boundaries() {
        let body = "ñ".repeat(100);
        let out = preview(&body, 11);
        assert!(out.contains("bytes truncated"));
        assert!(out.starts_with("ññ"));
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(preview("abc", 0), "... [3 bytes truncated] ...");
    }
}
