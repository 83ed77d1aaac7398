use anyhow::Result;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到已登录 Greenhouse 的浏览器并获取页面
///
/// 登录属于前置条件：用户需提前以调试端口启动浏览器并手动完成认证，
/// 本程序只附着到现成的会话上。优先复用已经打开 Greenhouse 的标签页。
pub async fn connect_to_browser_and_page(port: u16, main_url: &str) -> Result<(Browser, Page)> {
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

    // 优先查找已经打开 Greenhouse 的标签页
    for p in pages.iter() {
        if let Ok(Some(url)) = p.url().await {
            debug!("检查页面地址: {}", url);
            if url.starts_with(main_url) {
                info!("✓ 找到已打开的 Greenhouse 标签页: {}", url);
                return Ok((browser, p.clone()));
            }
        }
    }

    // 没有现成标签页则新建空白页，导航交由调用方完成
    debug!("未找到 Greenhouse 标签页，将创建新页面");
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        e
    })?;

    Ok((browser, page))
}
