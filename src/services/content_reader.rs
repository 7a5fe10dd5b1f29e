//! 输入内容读取 - 业务能力层
//!
//! 职责：
//! - 读取单个输入文件的文本并按行拆分
//! - 提供提交前的拼接规则

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// 行分隔：兼容 \r\n、\n、\r 三种换行
fn line_splitter() -> &'static Regex {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    SPLITTER.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("换行正则是字面量"))
}

/// 读取文件并拆成行
///
/// 读不到或不是合法 UTF-8 直接报错，不重试
pub async fn read_lines(path: &Path) -> AppResult<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::read_failed(path.display().to_string(), e))?;

    Ok(line_splitter()
        .split(&content)
        .map(|line| line.to_string())
        .collect())
}

/// 拼接提交文本：去掉空行后直接首尾相接，不插入任何分隔符
pub fn concat_nonempty(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn splits_on_all_newline_kinds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, "one\r\ntwo\nthree\rfour").unwrap();

        let lines = read_lines(&path).await.unwrap();
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let result = read_lines(&dir.path().join("nope.txt")).await;
        assert!(result.is_err());
    }

    #[test]
    fn concat_drops_empty_lines_and_uses_no_separator() {
        let lines = vec!["a".to_string(), "".to_string(), "b".to_string()];
        assert_eq!(concat_nonempty(&lines), "ab");
    }

    #[test]
    fn concat_of_all_empty_lines_is_empty() {
        let lines = vec![String::new(), String::new()];
        assert_eq!(concat_nonempty(&lines), "");
    }
}
