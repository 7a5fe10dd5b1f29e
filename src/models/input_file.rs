use std::path::{Path, PathBuf};

/// 一个待处理的输入文件
///
/// `name` 取自路径的最后一段，既是续跑判断的键，也是响应文件的名字。
/// 枚举之后不再变化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// 完整路径
    pub path: PathBuf,
    /// 文件名（basename）
    pub name: String,
}

impl InputFile {
    /// 从路径构造，文件名从路径派生
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }

    /// 路径的字符串形式（用于指纹计算）
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

impl From<&Path> for InputFile {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_basename() {
        let file = InputFile::new("resource/a.txt");
        assert_eq!(file.name, "a.txt");
        assert_eq!(file.path_str(), "resource/a.txt");
    }

    #[test]
    fn nested_path_keeps_last_segment() {
        let file = InputFile::new("some/deep/dir/notes.txt");
        assert_eq!(file.name, "notes.txt");
    }
}
