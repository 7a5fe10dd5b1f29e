//! 输入文件枚举 - 业务能力层
//!
//! 职责：
//! - 按 glob 模式列出候选输入文件
//! - 排除依赖目录
//! - 排序后返回，保证两次运行的枚举顺序一致（续跑语义依赖这一点）

use crate::error::{AppError, FileError};
use crate::models::InputFile;
use tracing::debug;

/// 枚举输入文件
///
/// 路径中包含排除目录名的条目会被丢弃，非普通文件会被丢弃，
/// 结果按路径字典序排序
pub fn scan_inputs(pattern: &str, exclude_dirs: &[String]) -> Result<Vec<InputFile>, AppError> {
    let paths = glob::glob(pattern).map_err(|e| {
        AppError::File(FileError::ScanFailed {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })
    })?;

    let mut files: Vec<InputFile> = paths
        .flatten()
        .filter(|path| path.is_file())
        .filter(|path| !is_excluded(path, exclude_dirs))
        .map(InputFile::new)
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));

    debug!("枚举到 {} 个输入文件 (模式: {})", files.len(), pattern);
    Ok(files)
}

/// 路径的任意一段命中排除列表即排除
fn is_excluded(path: &std::path::Path, exclude_dirs: &[String]) -> bool {
    path.components().any(|component| {
        let segment = component.as_os_str().to_string_lossy();
        exclude_dirs.iter().any(|dir| dir == segment.as_ref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn excludes() -> Vec<String> {
        vec!["node_modules".to_string()]
    }

    #[test]
    fn scans_and_sorts_lexicographically() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = scan_inputs(&pattern, &excludes()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn enumeration_is_deterministic_across_runs() {
        let dir = tempdir().unwrap();
        for name in ["z.txt", "m.txt", "a.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let pattern = format!("{}/*.txt", dir.path().display());
        let first = scan_inputs(&pattern, &excludes()).unwrap();
        let second = scan_inputs(&pattern, &excludes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn excluded_directories_are_dropped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules").join("dep.txt"), "dep").unwrap();

        let pattern = format!("{}/**/*.txt", dir.path().display());
        let files = scan_inputs(&pattern, &excludes()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.txt");
    }

    #[test]
    fn directories_matching_pattern_are_dropped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("weird.txt")).unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = scan_inputs(&pattern, &excludes()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "real.txt");
    }
}
