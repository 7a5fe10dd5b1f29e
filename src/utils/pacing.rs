//! 固定节奏等待
//!
//! 页面上有些步骤没有可观察的完成信号（比如输入框回显），
//! 只能按远端 UI 的节奏停一段时间。倒计时打出来让操作者知道在等什么。

use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// 等待指定秒数，每秒打一行倒计时
pub async fn wait_with_countdown(seconds: u64, operation: &str) {
    for remaining in (1..=seconds).rev() {
        info!("{} ----> {}", operation, remaining);
        sleep(Duration::from_secs(1)).await;
    }
}
