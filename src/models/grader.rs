use serde::Deserialize;

/// 阅卷人
///
/// 同一个名字可以按职位出现多次（每个可评的职位一条），
/// 身份由 (name, job) 共同确定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Grader {
    /// 显示名，需与 Greenhouse 搜索框中输入的内容一致
    pub name: String,
    /// 该阅卷人可评的职位
    pub job: String,
}
