//! 阅卷人编辑弹窗服务 - 业务能力层
//!
//! 只负责单条申请的弹窗读写，不做挑选、不关心流程顺序

use anyhow::Result;
use tracing::debug;

use crate::infrastructure::UiSession;
use crate::models::Grader;

/// 弹窗里的阅卷人搜索输入框
const SEARCH_INPUT: &str = ".search-field input[type='text']";
/// 已分配阅卷人标签
const ASSIGNED_CHOICES: &str = "ul .search-choice span";
/// 弹窗容器
const EDITOR_MODAL: &str = "[aria-describedby='edit_take_home_test_graders_modal']";
/// 保存按钮
const SAVE_BUTTON: &str = "input[type='submit']";

/// 阅卷人编辑弹窗
pub struct GraderEditor;

impl GraderEditor {
    pub fn new() -> Self {
        Self
    }

    /// 打开指定申请的阅卷人编辑弹窗
    ///
    /// 通过 application 属性重新定位该行：展开面试折叠区 → 点编辑链接 → 等弹窗出现
    pub async fn open(&self, session: &UiSession, application_id: &str) -> Result<()> {
        let row = format!(".person[application=\"{}\"]", application_id);

        let toggle = format!("{} .toggle-interviews", row);
        session.wait_for_selector(&toggle).await?;
        session.click(&toggle).await?;

        let edit_link = format!("{} .edit-take-home-test-graders-link", row);
        session.wait_for_selector(&edit_link).await?;
        session.click(&edit_link).await?;

        session.wait_for_selector(EDITOR_MODAL).await?;
        Ok(())
    }

    /// 读取弹窗中已分配的阅卷人名字
    pub async fn assigned_graders(&self, session: &UiSession) -> Result<Vec<String>> {
        let js_code = format!(
            r#"Array.from(document.querySelectorAll("{}")).map((el) => el.textContent ?? "")"#,
            ASSIGNED_CHOICES
        );
        let names: Vec<String> = session.eval_as(js_code).await?;
        debug!("已分配阅卷人: {:?}", names);
        Ok(names)
    }

    /// 聚焦搜索输入框
    pub async fn focus_search(&self, session: &UiSession) -> Result<()> {
        session.wait_for_selector(SEARCH_INPUT).await?;
        session.click(SEARCH_INPUT).await?;
        Ok(())
    }

    /// 删除默认带入的那一条已分配记录
    ///
    /// 输入框为空时按退格会选中最后一个标签，再按一次将其删除
    pub async fn remove_default_entry(&self, session: &UiSession) -> Result<()> {
        session.press_key(SEARCH_INPUT, "Backspace").await?;
        session.press_key(SEARCH_INPUT, "Backspace").await?;
        Ok(())
    }

    /// 输入一名阅卷人并回车确认
    pub async fn add_grader(&self, session: &UiSession, grader: &Grader) -> Result<()> {
        session.type_text(SEARCH_INPUT, &grader.name).await?;
        session.press_key(SEARCH_INPUT, "Enter").await?;
        Ok(())
    }

    /// 保存弹窗
    ///
    /// 由宿主系统原子地应用改动，这里不做额外确认
    pub async fn save(&self, session: &UiSession) -> Result<()> {
        session.click(SAVE_BUTTON).await
    }
}

impl Default for GraderEditor {
    fn default() -> Self {
        Self::new()
    }
}
