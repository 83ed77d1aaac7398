//! UI 会话 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"驱动页面"的能力

use std::time::Duration;

use anyhow::Result;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::AppError;

/// 轮询元素的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// UI 会话
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露导航 / 等待 / 读取 / 点击 / 输入能力
/// - 不认识 Application / Grader
/// - 不处理业务流程
pub struct UiSession {
    page: Page,
    selector_timeout: Duration,
}

impl UiSession {
    pub fn new(page: Page, selector_timeout: Duration) -> Self {
        Self {
            page,
            selector_timeout,
        }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 导航到指定地址并等待加载完成
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("导航到: {}", url);
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 等待元素出现，超时则报环境错误
    pub async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        let deadline = Instant::now() + self.selector_timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(AppError::SelectorTimeout {
                    selector: selector.to_string(),
                    timeout_secs: self.selector_timeout.as_secs(),
                }
                .into());
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// 元素当前是否存在（不等待）
    pub async fn exists(&self, selector: &str) -> bool {
        self.page.find_element(selector).await.is_ok()
    }

    /// 点击元素
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.page.find_element(selector).await?.click().await?;
        Ok(())
    }

    /// 向元素逐键输入文本
    pub async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        self.page.find_element(selector).await?.type_str(text).await?;
        Ok(())
    }

    /// 在元素上按下按键（如 "Enter" / "Backspace"）
    pub async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        self.page.find_element(selector).await?.press_key(key).await?;
        Ok(())
    }

    /// 点击元素并等待由此触发的页面跳转完成
    ///
    /// 两步视为一个原子操作，期间页面状态不可用
    pub async fn click_and_wait_for_navigation(&self, selector: &str) -> Result<()> {
        self.page.find_element(selector).await?.click().await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }
}
