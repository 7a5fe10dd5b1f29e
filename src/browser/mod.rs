//! 浏览器获取
//!
//! 两种方式拿到 (Browser, Page)：
//! - 自行启动带界面的浏览器（默认）
//! - 连接到已有浏览器的调试端口（配置了 BROWSER_DEBUG_PORT 时）

pub mod connection;
pub mod launch;

pub use connection::connect_to_browser;
pub use launch::launch_browser;

use crate::config::Config;
use anyhow::Result;
use chromiumoxide::{Browser, Page};

/// 按配置获取浏览器和页面
pub async fn obtain_page(config: &Config) -> Result<(Browser, Page)> {
    if config.browser_debug_port > 0 {
        connect_to_browser(config.browser_debug_port, &config.target_url).await
    } else {
        launch_browser(&config.target_url).await
    }
}
