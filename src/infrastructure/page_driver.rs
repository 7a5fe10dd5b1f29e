//! 页面驱动 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露能力：执行脚本、点击、填值、取 HTML、无限等待。
//! 不认识输入文件，不处理业务流程。

use crate::error::{AppError, AppResult};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// 无限等待时的轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// 页面驱动
pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    /// 创建新的页面驱动
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于导航等操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 判断元素是否存在
    pub async fn exists(&self, selector: &str) -> AppResult<bool> {
        let js = format!(
            "document.querySelector({}) !== null",
            js_string(selector)
        );
        self.eval_as(js).await
    }

    /// 点击元素，元素不存在时报错
    pub async fn click(&self, selector: &str) -> AppResult<()> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                if (!el) return false;
                el.click();
                return true;
            }})()"#,
            js_string(selector)
        );
        let clicked: bool = self.eval_as(js).await?;
        if !clicked {
            return Err(AppError::affordance_not_found(selector));
        }
        Ok(())
    }

    /// 在匹配的元素里找第一个未禁用的并点击
    ///
    /// 返回是否点击成功，不报错（调用方自己决定兜底）
    pub async fn click_enabled(&self, selector: &str) -> AppResult<bool> {
        let js = format!(
            r#"(() => {{
                const nodes = Array.from(document.querySelectorAll({}));
                const target = nodes.find((node) => !node.disabled);
                if (!target) return false;
                target.click();
                return true;
            }})()"#,
            js_string(selector)
        );
        self.eval_as(js).await
    }

    /// 把文本写进输入框并触发 input 事件
    pub async fn fill(&self, selector: &str, text: &str) -> AppResult<()> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.focus();
                el.value = {text};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = js_string(selector),
            text = js_string(text),
        );
        let filled: bool = self.eval_as(js).await?;
        if !filled {
            return Err(AppError::affordance_not_found(selector));
        }
        Ok(())
    }

    /// 清空输入框
    pub async fn clear(&self, selector: &str) -> AppResult<()> {
        self.fill(selector, "").await
    }

    /// 取第一个匹配元素的 innerHTML，没有匹配时返回 None
    pub async fn inner_html(&self, selector: &str) -> AppResult<Option<String>> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return el ? el.innerHTML : null;
            }})()"#,
            js_string(selector)
        );
        self.eval_as(js).await
    }

    /// 等待某个 JS 断言变成 true，没有超时
    ///
    /// 远端什么时候就绪由外部决定（比如人工过验证），
    /// 所以这里只轮询状态变化，不设截止时间
    pub async fn wait_until(&self, js_predicate: &str) -> AppResult<()> {
        loop {
            // 页面跳转过程中 eval 会瞬时失败，当作未就绪继续等
            let ready: bool = self.eval_as(js_predicate.to_string()).await.unwrap_or(false);
            if ready {
                return Ok(());
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// 等待某个元素出现，没有超时
    pub async fn wait_for_selector(&self, selector: &str) -> AppResult<()> {
        debug!("等待元素出现: {}", selector);
        let predicate = format!(
            "document.querySelector({}) !== null",
            js_string(selector)
        );
        self.wait_until(&predicate).await
    }
}

/// 把 Rust 字符串安全地嵌进 JS 源码（带引号的转义形式）
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("abc"), r#""abc""#);
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }
}
