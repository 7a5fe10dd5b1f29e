//! # Chat File Submit
//!
//! 把本地文本文件逐个提交到网页聊天界面并保存响应的自动化工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 唯一的 page owner，提供执行脚本 / 点击 / 填值 / 无限等待能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件
//! - `CompletionLog` - 指纹 -> 文件名 的续跑日志
//! - `input_scanner` - 枚举输入文件（稳定排序）
//! - `content_reader` - 读行与拼接规则
//! - `ResponseWriter` - 写响应文件能力
//!
//! ### ③ 会话层（Session）
//! - `session/` - RemoteSession 能力接口与站点实现
//! - `ChatSession` - 登录一次、整次运行复用
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/SubmitFlow` - 定义"一个文件"的完整处理流程
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 顺序任务控制器：跳过或处理、记录进度、管理资源

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod session;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, Selectors};
pub use error::{AppError, AppResult};
pub use infrastructure::PageDriver;
pub use models::{InputFile, ProgressEvent, ProgressSink, TaskAction};
pub use orchestrator::{run_all_files, App, RunStats};
pub use services::{CompletionLog, ResponseWriter};
pub use session::{ChatSession, RemoteSession};
pub use workflow::SubmitFlow;
