//! 单文件处理流程 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! 流程顺序：
//! 读取 → 拼接 → 提交并等响应 → HTML 转文本 → 写出响应文件
//!
//! 不碰完成日志：日志只有编排层一个写入者，
//! 响应文件必须先于日志记录落盘，顺序也由编排层保证。

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::InputFile;
use crate::services::{concat_nonempty, read_lines, ResponseWriter};
use crate::session::RemoteSession;
use crate::utils::html_to_text;
use crate::utils::logging::truncate_text;

/// 单文件处理流程
///
/// - 编排一个文件从读取到写出的全部步骤
/// - 不持有任何页面资源
/// - 只依赖会话能力（RemoteSession）
pub struct SubmitFlow {
    writer: ResponseWriter,
    verbose_logging: bool,
}

impl SubmitFlow {
    /// 创建新的处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            writer: ResponseWriter::new(&config.response_folder),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理一个文件：任何一步失败都直接向上传播，没有重试
    pub async fn run<S>(&self, session: &S, file: &InputFile) -> AppResult<()>
    where
        S: RemoteSession + ?Sized,
    {
        let lines = read_lines(&file.path).await?;
        let text = concat_nonempty(&lines);

        if self.verbose_logging {
            info!("[{}] 提交内容: {}", file.name, truncate_text(&text, 80));
        }

        let fragment = session.submit_and_await_response(&text).await?;
        let artifact = html_to_text(&fragment);

        info!("[{}] ✓ 收到响应 ({} 字节)", file.name, artifact.len());

        self.writer.write(&file.name, &artifact).await?;

        Ok(())
    }
}
