//! 完成日志存储 - 业务能力层
//!
//! 职责：
//! - 维护 指纹 -> 文件名 的映射
//! - 启动时加载一次，之后每处理完一个文件同步写盘
//! - 只有编排层这一个写入者

use crate::error::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 指纹加盐，保证同一路径在不同部署下得到相同指纹
const FINGERPRINT_SALT: &str = "$ome$alt";

/// 计算路径字符串的指纹
///
/// 同一输入永远得到同一指纹；碰撞不做特殊处理，命中即视为已完成
pub fn fingerprint(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_SALT.as_bytes());
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 完成日志
///
/// 判断"是否已完成"扫描的是映射的值而不是键：
/// 只要文件名出现在任何一条记录的值里就算完成，与指纹键无关。
/// 改成按键查找会改变续跑语义（目录挪动后按名字仍然命中）。
#[derive(Debug, Clone)]
pub struct CompletionLog {
    entries: BTreeMap<String, String>,
    path: PathBuf,
}

impl CompletionLog {
    /// 从磁盘加载完成日志
    ///
    /// 文件不存在或内容无法解析时返回空映射，绝不让调用方失败
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!("完成日志无法解析，按空日志处理 ({}): {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        debug!("已加载完成日志: {} 条记录", entries.len());
        Self { entries, path }
    }

    /// 判断某个文件名是否已完成
    ///
    /// 对值做线性扫描，O(日志大小)
    pub fn is_complete(&self, name: &str) -> bool {
        self.entries.values().any(|recorded| recorded == name)
    }

    /// 记录一次成功处理并同步写盘
    ///
    /// 指纹由完整路径计算，值是路径的最后一段。
    /// 合并写入，不影响已有的无关键；写盘失败返回错误，
    /// 由调用方决定是否中止（继续跑会导致内存与磁盘状态漂移）。
    pub fn record_completion(&mut self, fingerprint_input: &str) -> AppResult<()> {
        let key = fingerprint(fingerprint_input);
        let name = display_name(fingerprint_input);
        self.entries.insert(key, name);
        self.persist()
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 整体写盘：先写临时文件再改名，避免写一半的日志落盘
    fn persist(&self) -> AppResult<()> {
        let path_str = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::persist_failed(&path_str, e))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::persist_failed(&path_str, e))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| AppError::persist_failed(&path_str, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| AppError::persist_failed(&path_str, e))?;

        Ok(())
    }
}

/// 从指纹输入派生展示名（路径最后一段）
fn display_name(input: &str) -> String {
    Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint("resource/a.txt"), fingerprint("resource/a.txt"));
        assert_ne!(fingerprint("resource/a.txt"), fingerprint("resource/b.txt"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let log = CompletionLog::load(dir.path().join("log.json"));
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");
        fs::write(&path, "not json at all {{{").unwrap();
        let log = CompletionLog::load(&path);
        assert!(log.is_empty());
    }

    #[test]
    fn record_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");

        let mut log = CompletionLog::load(&path);
        log.record_completion("resource/a.txt").unwrap();
        log.record_completion("resource/b.txt").unwrap();

        let reloaded = CompletionLog::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_complete("a.txt"));
        assert!(reloaded.is_complete("b.txt"));
    }

    #[test]
    fn record_merges_without_touching_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");

        let mut log = CompletionLog::load(&path);
        log.record_completion("resource/a.txt").unwrap();

        let mut second = CompletionLog::load(&path);
        second.record_completion("resource/b.txt").unwrap();

        let reloaded = CompletionLog::load(&path);
        assert!(reloaded.is_complete("a.txt"));
        assert!(reloaded.is_complete("b.txt"));
    }

    #[test]
    fn is_complete_scans_values_not_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");
        // 手工构造一条键和指纹完全无关的记录
        fs::write(&path, r#"{ "whatever-key": "c.txt" }"#).unwrap();

        let log = CompletionLog::load(&path);
        assert!(log.is_complete("c.txt"));
        assert!(!log.is_complete("whatever-key"));
    }

    #[test]
    fn pretty_printed_utf8_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");

        let mut log = CompletionLog::load(&path);
        log.record_completion("resource/a.txt").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("a.txt"));
    }
}
