use std::path::PathBuf;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 目标聊天站点URL
    pub target_url: String,
    /// 登录邮箱（必须通过环境变量注入）
    pub email: String,
    /// 登录密码（必须通过环境变量注入）
    pub password: String,
    /// 输入文件的 glob 模式
    pub resource_pattern: String,
    /// 枚举时排除的目录名
    pub exclude_dirs: Vec<String>,
    /// 响应输出目录
    pub response_folder: String,
    /// 完成日志文件路径（默认在用户主目录下）
    pub log_file: PathBuf,
    /// 浏览器调试端口（大于 0 时连接已有浏览器，否则自行启动）
    pub browser_debug_port: u16,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 页面元素定位器
    pub selectors: Selectors,
}

/// 页面元素定位器
///
/// 站点改版时只需要改这里，不需要动任何流程代码
#[derive(Clone, Debug)]
pub struct Selectors {
    /// 首页的登录按钮
    pub login_button: String,
    /// 邮箱输入框
    pub email_input: String,
    /// 邮箱确认按钮
    pub email_continue: String,
    /// 密码输入框
    pub password_input: String,
    /// 密码提交按钮
    pub password_submit: String,
    /// 新建会话按钮
    pub new_chat_button: String,
    /// 提示词输入框
    pub prompt_textarea: String,
    /// 发送按钮
    pub send_button: String,
    /// 发送按钮的备用定位器
    pub send_button_fallback: String,
    /// 发送按钮禁用态（远端生成完毕的信号）
    pub send_button_busy: String,
    /// 响应正文区域
    pub response_block: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            login_button: "nav button.btn.btn-neutral".to_string(),
            email_input: "#email-input".to_string(),
            email_continue: "div.login-container > button".to_string(),
            password_input: "#password".to_string(),
            password_submit: "button[type='submit']".to_string(),
            new_chat_button: ".-mr-2 div.bg-token-sidebar-surface-primary".to_string(),
            prompt_textarea: "textarea#prompt-textarea".to_string(),
            send_button: "button[data-testid='send-button']".to_string(),
            send_button_fallback: "button[as='button']".to_string(),
            send_button_busy: "button:disabled[data-testid='send-button']".to_string(),
            response_block: "div.markdown.prose".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: "https://chat.openai.com/".to_string(),
            email: String::new(),
            password: String::new(),
            resource_pattern: "resource/*.txt".to_string(),
            exclude_dirs: vec!["node_modules".to_string(), "target".to_string()],
            response_folder: "response".to_string(),
            log_file: default_log_file(),
            browser_debug_port: 0,
            verbose_logging: false,
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            email: std::env::var("CHAT_EMAIL").unwrap_or(default.email),
            password: std::env::var("CHAT_PASSWORD").unwrap_or(default.password),
            resource_pattern: std::env::var("RESOURCE_PATTERN").unwrap_or(default.resource_pattern),
            exclude_dirs: std::env::var("EXCLUDE_DIRS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
                .unwrap_or(default.exclude_dirs),
            response_folder: std::env::var("RESPONSE_FOLDER").unwrap_or(default.response_folder),
            log_file: std::env::var("COMPLETION_LOG_FILE").map(PathBuf::from).unwrap_or(default.log_file),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            selectors: Selectors::default(),
        }
    }

    /// 校验登录凭据是否已经注入
    pub fn has_credentials(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// 完成日志的默认位置：`~/.chat_file_submit/log.json`
///
/// 拿不到主目录时退回当前目录
fn default_log_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chat_file_submit")
        .join("log.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(!config.has_credentials());
    }

    #[test]
    fn default_log_file_is_home_relative() {
        let config = Config::default();
        assert!(config.log_file.ends_with(".chat_file_submit/log.json"));
    }
}
