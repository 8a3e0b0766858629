use irchat_core::DEFAULT_BACKEND_URL;

/// Backend base URL, fixed when the bundle is built
pub fn backend_url() -> &'static str {
    option_env!("IRCHAT_BACKEND_API_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
