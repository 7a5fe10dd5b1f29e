//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (顺序遍历 Vec<InputFile>，管理会话/日志/进度)
//!     ↓
//! workflow::SubmitFlow (处理单个 InputFile)
//!     ↓
//! services (能力层：读取 / 枚举 / 写出 / 完成日志)
//!     ↓
//! session / infrastructure (会话与页面驱动)
//! ```
//!
//! ## 设计原则
//!
//! 1. **严格顺序**：同一时刻只有一个文件在跑，远端一次只开一个会话
//! 2. **单一写入者**：完成日志只在这一层被修改
//! 3. **资源隔离**：只有编排层持有 Browser 和 ChatSession

pub mod batch_runner;

pub use batch_runner::{run_all_files, App, RunStats};
