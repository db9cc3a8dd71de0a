use crate::error::RequestError;
use phf::phf_ordered_map;
use serde::{Deserialize, Serialize};

/// 自定义职业未填写描述时使用的默认描述
pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "自定义身份";

/// 预设职业：id → (显示名称, 描述)
static PREDEFINED_PROFESSIONS: phf::OrderedMap<&'static str, (&'static str, &'static str)> = phf_ordered_map! {
    "programmer" => ("程序员", "程序员日常工作中常用的英语表达"),
    "designer" => ("设计师", "设计师工作交流中的常用英语"),
    "businessman" => ("商人", "商务人士日常沟通中的英语用语"),
    "doctor" => ("医生", "医疗工作者的日常交流"),
    "teacher" => ("教师", "教师教学和日常工作中的表达"),
    "lawyer" => ("律师", "律师职业日常使用的英语"),
};

/// 职业场景
///
/// `id` 是整个流水线中唯一使用的连接键，`label` 只用于展示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
}

impl Profession {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            is_custom: false,
        }
    }

    /// 创建自定义职业
    ///
    /// 名称不能为空；描述为空时使用默认描述；id 形如 `custom-<毫秒时间戳>`
    pub fn custom(label: &str, description: &str) -> Result<Self, RequestError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(RequestError::invalid("custom profession label is required"));
        }

        let description = match description.trim() {
            "" => DEFAULT_CUSTOM_DESCRIPTION,
            d => d,
        };

        Ok(Self {
            id: format!("custom-{}", chrono::Utc::now().timestamp_millis()),
            label: label.to_string(),
            description: description.to_string(),
            is_custom: true,
        })
    }

    /// 按 id 查找预设职业
    pub fn predefined(id: &str) -> Option<Self> {
        PREDEFINED_PROFESSIONS
            .get(id)
            .map(|(label, description)| Self::new(id, *label, *description))
    }

    /// 全部预设职业（保持定义顺序）
    pub fn all_predefined() -> Vec<Self> {
        PREDEFINED_PROFESSIONS
            .entries()
            .map(|(id, (label, description))| Self::new(*id, *label, *description))
            .collect()
    }

    /// id 非空才算有效
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
