//! 聊天站点会话
//!
//! 流程顺序：
//! 1. open：点登录 → 填邮箱 → 填密码 → 等人机验证被人工解决
//! 2. submit_and_await_response：新建会话 → 注入文本 → 发送 → 等完成信号 → 取第一块响应
//! 3. close：清空输入框，尽力而为

use async_trait::async_trait;
use chromiumoxide::Page;
use tracing::{debug, info};

use crate::config::{Config, Selectors};
use crate::error::{AppError, AppResult, SessionError};
use crate::infrastructure::PageDriver;
use crate::session::RemoteSession;
use crate::utils::logging::truncate_text;
use crate::utils::wait_with_countdown;

// 页面没有回显完成信号的步骤按远端 UI 的节奏停顿（秒）
const PACE_NEW_CHAT: u64 = 2;
const PACE_COMPOSER_READY: u64 = 10;
const PACE_TEXT_SETTLED: u64 = 5;
const PACE_RESPONSE_SETTLED: u64 = 5;
const PACE_NEXT_ROUND: u64 = 10;

/// 一个已登录的聊天会话
///
/// 持有唯一的 PageDriver，整次运行只建一次
pub struct ChatSession {
    driver: PageDriver,
    selectors: Selectors,
}

impl ChatSession {
    /// 登录并等到会话可用
    ///
    /// 页面此时已经停在目标站点首页。
    /// 人机验证什么时候过完由操作者决定，这里无限等输入框出现。
    pub async fn open(page: Page, config: &Config) -> AppResult<Self> {
        let driver = PageDriver::new(page);
        let selectors = config.selectors.clone();

        info!("🔑 开始登录流程");

        driver.wait_for_selector(&selectors.login_button).await?;
        driver
            .click(&selectors.login_button)
            .await
            .map_err(|e| login_failed("点击登录按钮", e))?;

        driver.wait_for_selector(&selectors.email_input).await?;
        driver
            .fill(&selectors.email_input, &config.email)
            .await
            .map_err(|e| login_failed("填写邮箱", e))?;
        driver
            .click(&selectors.email_continue)
            .await
            .map_err(|e| login_failed("确认邮箱", e))?;

        driver.wait_for_selector(&selectors.password_input).await?;
        driver
            .fill(&selectors.password_input, &config.password)
            .await
            .map_err(|e| login_failed("填写密码", e))?;
        driver
            .click(&selectors.password_submit)
            .await
            .map_err(|e| login_failed("提交密码", e))?;

        info!("🧍 等待人机验证，请在浏览器窗口完成操作...");
        driver.wait_for_selector(&selectors.prompt_textarea).await?;
        info!("✓ 登录完成，会话就绪");

        Ok(Self { driver, selectors })
    }

    /// 取页面驱动的引用（测试和诊断用）
    pub fn driver(&self) -> &PageDriver {
        &self.driver
    }
}

#[async_trait]
impl RemoteSession for ChatSession {
    async fn submit_and_await_response(&self, text: &str) -> AppResult<String> {
        let sel = &self.selectors;

        debug!("提交文本: {}", truncate_text(text, 80));

        wait_with_countdown(PACE_NEW_CHAT, "创建一个新的会话").await;
        self.driver.click(&sel.new_chat_button).await?;

        // 先放一个空格占位，让输入框进入可编辑状态
        self.driver.fill(&sel.prompt_textarea, " ").await?;
        wait_with_countdown(PACE_COMPOSER_READY, "等待输入框就绪").await;

        self.driver.fill(&sel.prompt_textarea, text).await?;
        wait_with_countdown(PACE_TEXT_SETTLED, "等待输入框文字输入完毕").await;

        // 主发送按钮不在时退回备用定位器
        let sent = self.driver.click_enabled(&sel.send_button).await?;
        if !sent {
            let fallback_sent = self.driver.click_enabled(&sel.send_button_fallback).await?;
            if !fallback_sent {
                return Err(AppError::affordance_not_found(&sel.send_button));
            }
        }

        // 发送按钮回到禁用态就是远端生成完毕的信号，没有截止时间
        info!("⏳ 等待远端响应完成...");
        self.driver.wait_for_selector(&sel.send_button_busy).await?;

        wait_with_countdown(PACE_RESPONSE_SETTLED, "只取第一个结果").await;

        let fragment = self
            .driver
            .inner_html(&sel.response_block)
            .await?
            .ok_or(AppError::Session(SessionError::EmptyResponse))?;

        self.driver.clear(&sel.prompt_textarea).await?;
        wait_with_countdown(PACE_NEXT_ROUND, "准备进行下一轮").await;

        Ok(fragment)
    }

    async fn close(&self) {
        // 释放时只清空输入框，浏览器生命周期归编排层管；失败也无所谓
        if let Err(e) = self.driver.clear(&self.selectors.prompt_textarea).await {
            debug!("关闭会话时清空输入框失败: {}", e);
        }
        info!("会话已关闭");
    }
}

fn login_failed(step: &str, source: AppError) -> AppError {
    AppError::Session(SessionError::LoginFailed {
        step: step.to_string(),
        source: Box::new(source),
    })
}
