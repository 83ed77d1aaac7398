//! 工作项枚举器 - 编排层
//!
//! 把分页、会变化的列表页摊平成一条"待处理申请"序列。
//! 枚举过程会点击"下一页"改写页面状态，因此序列是单趟的：
//! 想重新遍历必须重新导航到列表首页并新建枚举器。

use std::collections::{HashSet, VecDeque};

use anyhow::Result;
use tracing::debug;

use crate::models::{Application, RawPersonRow};
use crate::services::ListingPage;

/// 分页驱动的申请枚举器
///
/// 产出顺序：页内按 DOM 顺序，页间按翻页顺序，不做跨页排序
pub struct ApplicationSource<L> {
    listing: L,
    jobs: HashSet<String>,
    buffered: VecDeque<Application>,
    page_loaded: bool,
    exhausted: bool,
    page_count: usize,
}

impl<L: ListingPage> ApplicationSource<L> {
    pub fn new(listing: L, jobs: HashSet<String>) -> Self {
        Self {
            listing,
            jobs,
            buffered: VecDeque::new(),
            page_loaded: false,
            exhausted: false,
            page_count: 0,
        }
    }

    /// 产出下一条待处理申请，列表走完返回 None
    ///
    /// 当前页的匹配行全部产出之后才会翻页，这样调用方处理每条申请时
    /// 页面都停留在该申请所在的那一页上
    pub async fn next(&mut self) -> Result<Option<Application>> {
        loop {
            if let Some(application) = self.buffered.pop_front() {
                return Ok(Some(application));
            }
            if self.exhausted {
                return Ok(None);
            }

            // 当前页消费完毕，翻页；首次调用时当前页就是列表首页
            if self.page_loaded && !self.listing.next_page().await? {
                self.exhausted = true;
                continue;
            }

            self.listing.wait_for_rows().await?;
            let rows = self.listing.extract_rows().await?;
            self.page_loaded = true;
            self.page_count += 1;

            let total = rows.len();
            self.buffered.extend(filter_page(rows, &self.jobs));
            debug!(
                "第 {} 页: 共 {} 行，其中 {} 条待处理",
                self.page_count,
                total,
                self.buffered.len()
            );
        }
    }
}

/// 过滤一页原始行
///
/// 字段不全的行丢弃但留下日志；只保留待评分且职位在过滤集合内的申请
fn filter_page(rows: Vec<RawPersonRow>, jobs: &HashSet<String>) -> Vec<Application> {
    rows.into_iter()
        .filter_map(|raw| match Application::from_raw(&raw) {
            Some(application) => Some(application),
            None => {
                debug!("丢弃字段不全的行: {:?}", raw);
                None
            }
        })
        .filter(|application| application.to_grade && jobs.contains(&application.job))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn row(id: &str, job: &str, toggle: &str) -> RawPersonRow {
        RawPersonRow {
            application_id: Some(id.to_string()),
            candidate: Some(format!("候选人{}", id)),
            job: Some(job.to_string()),
            toggle_text: Some(toggle.to_string()),
        }
    }

    fn due(id: &str, job: &str) -> RawPersonRow {
        row(id, job, "Scorecard due")
    }

    /// 内存版列表页：预置若干页数据，记录翻页次数
    struct MockListing {
        pages: Vec<Vec<RawPersonRow>>,
        current: AtomicUsize,
        advance_calls: AtomicUsize,
    }

    impl MockListing {
        fn new(pages: Vec<Vec<RawPersonRow>>) -> Self {
            Self {
                pages,
                current: AtomicUsize::new(0),
                advance_calls: AtomicUsize::new(0),
            }
        }
    }

    impl ListingPage for MockListing {
        async fn wait_for_rows(&self) -> Result<()> {
            Ok(())
        }

        async fn extract_rows(&self) -> Result<Vec<RawPersonRow>> {
            Ok(self.pages[self.current.load(Ordering::SeqCst)].clone())
        }

        async fn next_page(&self) -> Result<bool> {
            self.advance_calls.fetch_add(1, Ordering::SeqCst);
            let current = self.current.load(Ordering::SeqCst);
            if current + 1 < self.pages.len() {
                self.current.store(current + 1, Ordering::SeqCst);
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    fn jobs(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    async fn drain<L: ListingPage>(source: &mut ApplicationSource<L>) -> Vec<Application> {
        let mut out = Vec::new();
        while let Some(app) = source.next().await.expect("枚举不应报错") {
            out.push(app);
        }
        out
    }

    #[tokio::test]
    async fn test_yields_rows_from_all_pages_in_order() {
        let listing = MockListing::new(vec![
            vec![due("1", "JobX"), due("2", "JobX")],
            vec![due("3", "JobX")],
            vec![due("4", "JobX")],
        ]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        let yielded = drain(&mut source).await;
        let ids: Vec<&str> = yielded.iter().map(|a| a.application_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_stops_after_last_page_without_further_navigation() {
        let listing = MockListing::new(vec![vec![due("1", "JobX")], vec![due("2", "JobX")]]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        let yielded = drain(&mut source).await;
        assert_eq!(yielded.len(), 2);

        // 两页的列表：成功翻页一次 + 末页探测一次
        assert_eq!(source.listing.advance_calls.load(Ordering::SeqCst), 2);

        // 枚举结束后再调用 next 不应再碰页面
        assert!(source.next().await.expect("结束后仍可调用").is_none());
        assert!(source.next().await.expect("结束后仍可调用").is_none());
        assert_eq!(source.listing.advance_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_filters_by_job_and_to_grade() {
        // 第一页：JobX 待评分（产出）、JobY 待评分（职位不在集合）、JobX 已评完（不产出）
        let listing = MockListing::new(vec![vec![
            due("1", "JobX"),
            due("2", "JobY"),
            row("3", "JobX", "All scorecards complete"),
        ]]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        let yielded = drain(&mut source).await;
        assert_eq!(yielded.len(), 1);
        assert_eq!(yielded[0].application_id, "1");
        assert_eq!(yielded[0].job, "JobX");
        assert!(yielded[0].to_grade);
    }

    #[tokio::test]
    async fn test_malformed_rows_are_dropped_silently() {
        let mut broken = due("1", "JobX");
        broken.candidate = None;

        let listing = MockListing::new(vec![vec![broken, due("2", "JobX")]]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        let yielded = drain(&mut source).await;
        assert_eq!(yielded.len(), 1);
        assert_eq!(yielded[0].application_id, "2");
    }

    #[tokio::test]
    async fn test_requisition_id_stripped_before_job_filter() {
        // 行里的职位带编制号，过滤集合里是规范化后的名字
        let listing = MockListing::new(vec![vec![due("1", "JobX (2048)")]]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        let yielded = drain(&mut source).await;
        assert_eq!(yielded.len(), 1);
        assert_eq!(yielded[0].job, "JobX");
    }

    #[tokio::test]
    async fn test_empty_pages_yield_nothing() {
        let listing = MockListing::new(vec![vec![], vec![due("1", "JobY")]]);
        let mut source = ApplicationSource::new(listing, jobs(&["JobX"]));

        assert!(drain(&mut source).await.is_empty());
    }

    #[test]
    fn test_filter_page_keeps_dom_order() {
        let rows = vec![due("b", "JobX"), due("a", "JobX"), due("c", "JobX")];
        let kept = filter_page(rows, &jobs(&["JobX"]));
        let ids: Vec<&str> = kept.iter().map(|a| a.application_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
