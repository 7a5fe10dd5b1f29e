use std::sync::Arc;

/// 单个文件的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// 日志里已有记录，跳过
    Skip,
    /// 实际提交并写出响应
    Process,
}

/// 进度信号
///
/// 只用于可见性，对控制流程没有任何影响
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// 已完结的文件数（含跳过）
    pub finished: usize,
    /// 文件总数
    pub total: usize,
    /// 当前文件名
    pub file_name: String,
    /// 跳过还是处理
    pub action: TaskAction,
}

impl ProgressEvent {
    /// 已完结的百分比
    pub fn finished_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.finished as f64 / self.total as f64 * 100.0
    }

    /// 剩余的百分比
    pub fn remaining_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.finished) as f64 / self.total as f64 * 100.0
    }
}

/// 进度回调
pub type ProgressSink = Arc<dyn Fn(&ProgressEvent) + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        let event = ProgressEvent {
            finished: 1,
            total: 4,
            file_name: "a.txt".to_string(),
            action: TaskAction::Skip,
        };
        assert_eq!(event.finished_percent(), 25.0);
        assert_eq!(event.remaining_percent(), 75.0);
    }

    #[test]
    fn empty_run_is_zero_percent() {
        let event = ProgressEvent {
            finished: 0,
            total: 0,
            file_name: String::new(),
            action: TaskAction::Process,
        };
        assert_eq!(event.finished_percent(), 0.0);
    }
}
