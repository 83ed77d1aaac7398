//! 列表页服务 - 业务能力层
//!
//! 只负责"读当前页、翻下一页"两个能力，不关心过滤和流程

use anyhow::Result;

use crate::infrastructure::UiSession;
use crate::models::RawPersonRow;

/// 列表行选择器
const PERSON_ROW: &str = ".person";
/// 可用的下一页按钮（禁用态不算）
const NEXT_PAGE_ENABLED: &str = "a.next_page:not(.disabled)";

/// 列表页能力抽象
///
/// 工作项枚举器只依赖这三个操作，测试里用内存实现替换真实页面
#[allow(async_fn_in_trait)]
pub trait ListingPage {
    /// 等待当前页的行渲染完成
    async fn wait_for_rows(&self) -> Result<()>;

    /// 提取当前页的全部原始行
    async fn extract_rows(&self) -> Result<Vec<RawPersonRow>>;

    /// 尝试进入下一页
    ///
    /// 返回 false 表示没有下一页（自然结束，不是错误）；
    /// 返回 true 时页面已经完成跳转
    async fn next_page(&self) -> Result<bool>;
}

/// Greenhouse 待处理列表页
pub struct GreenhouseListing<'a> {
    session: &'a UiSession,
}

impl<'a> GreenhouseListing<'a> {
    pub fn new(session: &'a UiSession) -> Self {
        Self { session }
    }
}

impl ListingPage for GreenhouseListing<'_> {
    async fn wait_for_rows(&self) -> Result<()> {
        self.session.wait_for_selector(PERSON_ROW).await
    }

    async fn extract_rows(&self) -> Result<Vec<RawPersonRow>> {
        self.session
            .eval_as(
                r#"
                Array.from(document.querySelectorAll(".person")).map((p) => ({
                    applicationId: p.getAttribute("application"),
                    candidate: p.querySelector(".name a")?.textContent ?? null,
                    job: p.querySelector(".job")?.textContent ?? null,
                    toggleText: p.querySelector("a.toggle-interviews")?.textContent ?? null,
                }))
                "#,
            )
            .await
    }

    async fn next_page(&self) -> Result<bool> {
        if !self.session.exists(NEXT_PAGE_ENABLED).await {
            return Ok(false);
        }
        self.session
            .click_and_wait_for_navigation(NEXT_PAGE_ENABLED)
            .await?;
        Ok(true)
    }
}
