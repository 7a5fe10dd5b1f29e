//! 响应写出服务 - 业务能力层
//!
//! 只负责"写一个响应文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::debug;

/// 响应写出服务
///
/// 职责：
/// - 把一个响应文本写到输出目录，文件名就是输入文件的 basename
/// - 同名文件直接覆盖
/// - 不关心流程顺序
pub struct ResponseWriter {
    out_dir: PathBuf,
}

impl ResponseWriter {
    /// 用输出目录创建
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// 写出一个响应文件
    ///
    /// 输出目录不存在会先创建；目标不可写时返回错误
    pub async fn write(&self, name: &str, content: &str) -> AppResult<()> {
        let target = self.out_dir.join(name);
        let target_str = target.display().to_string();

        debug!("写出响应: {} ({} 字节)", target_str, content.len());

        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| AppError::write_failed(self.out_dir.display().to_string(), e))?;

        tokio::fs::write(&target, content)
            .await
            .map_err(|e| AppError::write_failed(target_str, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_artifact_into_fresh_directory() {
        let dir = tempdir().unwrap();
        let writer = ResponseWriter::new(dir.path().join("response"));

        writer.write("a.txt", "hello").await.unwrap();

        let content = fs::read_to_string(dir.path().join("response").join("a.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn overwrites_existing_artifact() {
        let dir = tempdir().unwrap();
        let writer = ResponseWriter::new(dir.path());

        writer.write("a.txt", "first").await.unwrap();
        writer.write("a.txt", "second").await.unwrap();

        let content = fs::read_to_string(dir.path().join("a.txt")).unwrap();
        assert_eq!(content, "second");
    }
}
