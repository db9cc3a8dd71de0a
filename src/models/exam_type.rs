use crate::error::DictError;
use std::str::FromStr;

/// 考试类型（对应一个词典文件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamType {
    /// 大学英语四级
    Cet4,
    /// 大学英语六级
    Cet6,
    /// 考研
    Kaoyan,
    /// 高考
    Gaokao,
    Toefl,
    Ielts,
    Gre,
}

impl ExamType {
    pub const ALL: [ExamType; 7] = [
        ExamType::Cet4,
        ExamType::Cet6,
        ExamType::Kaoyan,
        ExamType::Gaokao,
        ExamType::Toefl,
        ExamType::Ielts,
        ExamType::Gre,
    ];

    /// 获取标准键名
    pub fn as_str(self) -> &'static str {
        match self {
            ExamType::Cet4 => "CET4",
            ExamType::Cet6 => "CET6",
            ExamType::Kaoyan => "KAOYAN",
            ExamType::Gaokao => "GAOKAO",
            ExamType::Toefl => "TOEFL",
            ExamType::Ielts => "IELTS",
            ExamType::Gre => "GRE",
        }
    }

    /// 词典文件名，如 `CET4_T.json`
    pub fn file_name(self) -> String {
        format!("{}_T.json", self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = DictError;

    /// 不区分大小写，例如 `cet4` → `CET4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|exam| exam.as_str() == upper)
            .ok_or_else(|| DictError::InvalidExamType {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("cet4".parse::<ExamType>().unwrap(), ExamType::Cet4);
        assert_eq!(" Gre ".parse::<ExamType>().unwrap(), ExamType::Gre);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "toeic".parse::<ExamType>().unwrap_err();
        assert!(matches!(err, DictError::InvalidExamType { value } if value == "toeic"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ExamType::Cet6.file_name(), "CET6_T.json");
    }
}
