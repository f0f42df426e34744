/// 考试格式枚举
///
/// 每种格式对应模板目录下的一个模板文件 `{name}.json`，
/// 暂存时复制到任务输入目录并统一命名为 `template.json`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    /// JEE 理科联考答题卡
    Jee,
    /// NEET 医学联考答题卡
    Neet,
    /// 校内模拟考答题卡
    Mock,
}

impl SheetFormat {
    /// 获取标准名称（同时也是模板文件的基础名）
    pub fn name(self) -> &'static str {
        match self {
            SheetFormat::Jee => "jee",
            SheetFormat::Neet => "neet",
            SheetFormat::Mock => "mock",
        }
    }

    /// 获取模板文件名
    pub fn template_file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// 尝试从字符串解析格式（忽略大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jee" => Some(SheetFormat::Jee),
            "neet" => Some(SheetFormat::Neet),
            "mock" => Some(SheetFormat::Mock),
            _ => None,
        }
    }
}

impl Default for SheetFormat {
    fn default() -> Self {
        SheetFormat::Jee
    }
}

impl std::fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
