//! 批量任务控制器 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：连接/启动浏览器、登录会话
//! 2. **加载状态**：完成日志读一次、输入文件枚举一次
//! 3. **顺序执行**：严格一个文件一个文件地跑，上一个没完结不碰下一个
//! 4. **续跑判断**：文件名已出现在日志值里就跳过，不碰会话
//! 5. **落盘顺序**：响应文件先写、日志后记，保证日志里不存在没有响应文件的记录
//! 6. **失败语义**：处理中任何一步失败中止整次运行，留给外部重启；
//!    最多只有失败瞬间在跑的那一个文件处于不一致状态
//!
//! ## 设计特点
//!
//! - 完成日志是显式句柄，从加载到记录都在这一层手里传递
//! - 会话只有这一层这一个拥有者
//! - 对会话只依赖 RemoteSession 能力接口，测试可以整体替换

use anyhow::Result;
use chromiumoxide::Browser;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{InputFile, ProgressEvent, ProgressSink, TaskAction};
use crate::services::{scan_inputs, CompletionLog};
use crate::session::{ChatSession, RemoteSession};
use crate::utils::logging::{log_inputs_found, log_progress, log_startup, print_final_stats};
use crate::workflow::SubmitFlow;

/// 一次运行的统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// 实际提交并写出响应的文件数
    pub processed: usize,
    /// 因日志命中而跳过的文件数
    pub skipped: usize,
    /// 枚举到的文件总数
    pub total: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    session: ChatSession,
    flow: SubmitFlow,
    progress: ProgressSink,
}

impl App {
    /// 初始化应用：拿到页面并完成登录
    ///
    /// 登录失败就是整次运行失败，不做重试
    pub async fn initialize(config: Config) -> Result<Self> {
        if !config.has_credentials() {
            return Err(AppError::Config(ConfigError::MissingValue {
                name: "CHAT_EMAIL / CHAT_PASSWORD".to_string(),
            })
            .into());
        }

        log_startup(&config.target_url, &config.resource_pattern);

        let (browser, page) = browser::obtain_page(&config).await?;
        let session = ChatSession::open(page, &config).await?;
        let flow = SubmitFlow::new(&config);

        Ok(Self {
            config,
            browser,
            session,
            flow,
            progress: Arc::new(log_progress),
        })
    }

    /// 替换进度回调（默认直接打日志）
    pub fn with_progress(mut self, progress: ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// 运行应用主逻辑
    pub async fn run(mut self) -> Result<RunStats> {
        // 完成日志和输入列表都只加载一次
        let mut log = CompletionLog::load(&self.config.log_file);
        let tasks = scan_inputs(&self.config.resource_pattern, &self.config.exclude_dirs)?;

        if tasks.is_empty() {
            warn!("⚠️ 没有找到待处理的输入文件，程序结束");
            self.shutdown().await;
            return Ok(RunStats::default());
        }

        log_inputs_found(tasks.len(), log.len());

        let outcome = run_all_files(
            &self.session,
            &self.flow,
            &tasks,
            &mut log,
            self.progress.as_ref(),
        )
        .await;

        // 无论正常结束还是中途失败，会话和浏览器都尽力收掉
        self.shutdown().await;

        let stats = outcome?;
        print_final_stats(stats.processed, stats.skipped, stats.total);
        Ok(stats)
    }

    /// 关闭会话和浏览器，错误全部吞掉
    async fn shutdown(&mut self) {
        self.session.close().await;
        if let Err(e) = self.browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
    }
}

/// 顺序处理所有文件（核心循环）
///
/// 对每个文件二选一：日志命中 → 跳过；否则走完整流程。
/// 处理失败直接把错误抛出循环，调用方负责善后。
pub async fn run_all_files<S>(
    session: &S,
    flow: &SubmitFlow,
    tasks: &[InputFile],
    log: &mut CompletionLog,
    progress: &dyn Fn(&ProgressEvent),
) -> AppResult<RunStats>
where
    S: RemoteSession + ?Sized,
{
    let total = tasks.len();
    let mut stats = RunStats {
        total,
        ..Default::default()
    };
    let mut finished = 0usize;

    for task in tasks {
        if log.is_complete(&task.name) {
            finished += 1;
            stats.skipped += 1;
            progress(&ProgressEvent {
                finished,
                total,
                file_name: task.name.clone(),
                action: TaskAction::Skip,
            });
            continue;
        }

        info!(
            "正在完成 {:.1}% {} 文件",
            (total - finished) as f64 / total as f64 * 100.0,
            task.name
        );

        if let Err(e) = flow.run(session, task).await {
            error!("处理 {} 失败: {}", task.name, e);
            return Err(e);
        }

        // 响应文件已经落盘，这里才记日志；记不上也要中止，
        // 否则重启后该文件会被重复提交而日志毫不知情
        log.record_completion(&task.path_str())?;

        finished += 1;
        stats.processed += 1;
        progress(&ProgressEvent {
            finished,
            total,
            file_name: task.name.clone(),
            action: TaskAction::Process,
        });
    }

    Ok(stats)
}
