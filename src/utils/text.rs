//! HTML 转纯文本

/// 把响应区域的 HTML 片段转成纯文本
///
/// 宽度 80，和终端显示保持一致
pub fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), 80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        let text = html_to_text("<p>hello <strong>world</strong></p>");
        assert!(text.contains("hello"));
        assert!(text.contains("world"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn keeps_list_structure() {
        let text = html_to_text("<ul><li>one</li><li>two</li></ul>");
        assert!(text.contains("one"));
        assert!(text.contains("two"));
    }
}
