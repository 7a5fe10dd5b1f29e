//! 会话层
//!
//! 对编排层只暴露一个能力接口：提交一段文本并拿到响应 HTML。
//! 具体站点怎么登录、怎么点按钮都收在 `ChatSession` 里，
//! 测试时可以整体换成假实现。

pub mod chat_session;

pub use chat_session::ChatSession;

use crate::error::AppResult;
use async_trait::async_trait;

/// 远端交互会话
///
/// 一次运行只开一个会话，所有文件复用它
#[async_trait]
pub trait RemoteSession: Send + Sync {
    /// 开一个新的会话轮次，提交文本，等远端生成完毕后返回响应 HTML 片段
    ///
    /// 等待没有截止时间；任何一步找不到预期元素或被远端拒绝都报错
    async fn submit_and_await_response(&self, text: &str) -> AppResult<String>;

    /// 释放会话，尽力而为，可重复调用
    async fn close(&self);
}
