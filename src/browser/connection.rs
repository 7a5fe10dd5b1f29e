use anyhow::Result;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到已在调试端口上运行的浏览器并获取页面
///
/// 优先复用已经打开目标站点的标签页，找不到就新开一个并导航过去
pub async fn connect_to_browser(port: u16, target_url: &str) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        e
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 查找已经停在目标站点上的标签页
    for p in pages.iter() {
        if let Ok(Some(page_url)) = p.url().await {
            debug!("检查页面: {}", page_url);
            if page_url.starts_with(target_url) {
                info!("✓ 复用已打开的页面: {}", page_url);
                return Ok((browser, p.clone()));
            }
        }
    }

    debug!("未找到已打开的目标页面，新开一个");
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        e
    })?;
    page.goto(target_url).await.map_err(|e| {
        error!("导航到 {} 失败: {}", target_url, e);
        e
    })?;
    info!("已导航到: {}", target_url);

    Ok((browser, page))
}
