//! 日志工具模块
//!
//! 提供运行横幅、进度行和统计输出的辅助函数

use crate::models::{ProgressEvent, TaskAction};
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(target_url: &str, pattern: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量提交模式");
    info!("🌐 目标站点: {}", target_url);
    info!("📁 输入模式: {}", pattern);
    info!("{}", "=".repeat(60));
}

/// 记录输入文件数量
pub fn log_inputs_found(total: usize, already_done: usize) {
    info!("当前已有 {} 个文件", total);
    if already_done > 0 {
        info!("📋 完成日志里已有 {} 条记录", already_done);
    }
}

/// 进度行，跳过和完成用同一种口径（完成百分比）
pub fn log_progress(event: &ProgressEvent) {
    match event.action {
        TaskAction::Skip => {
            info!(
                "已完成 {:.1}% {} 文件（跳过）",
                event.finished_percent(),
                event.file_name
            );
        }
        TaskAction::Process => {
            info!(
                "已完成 {:.1}% {} 文件",
                event.finished_percent(),
                event.file_name
            );
        }
    }
}

/// 打印最终统计信息
pub fn print_final_stats(processed: usize, skipped: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 本次处理: {}/{}", processed, total);
    info!("⏭️ 跳过: {}", skipped);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_long_text() {
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("你好世界", 2), "你好...");
    }
}
