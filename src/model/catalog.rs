// File: ./src/model/catalog.rs
// Fixed lookup tables shared by the query builder, the sample provider and the CLI.

/// Region value meaning "no region restriction".
pub const NATIONWIDE: &str = "전국";

pub const REGIONS: [&str; 18] = [
    NATIONWIDE, "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원",
    "충북", "충남", "전북", "전남", "경북", "경남", "제주",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Value sent as `searchLclasId`.
    pub code: &'static str,
    pub label: &'static str,
    /// Short name as it appears in the upstream category field.
    pub keyword: &'static str,
}

pub const CATEGORIES: [Category; 8] = [
    Category { code: "01", label: "금융 (융자/보증)", keyword: "금융" },
    Category { code: "02", label: "기술 (R&D)", keyword: "기술" },
    Category { code: "03", label: "인력", keyword: "인력" },
    Category { code: "04", label: "수출", keyword: "수출" },
    Category { code: "05", label: "내수", keyword: "내수" },
    Category { code: "06", label: "창업 (예비/초기)", keyword: "창업" },
    Category { code: "07", label: "경영", keyword: "경영" },
    Category { code: "09", label: "기타", keyword: "기타" },
];

pub fn category_by_code(code: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.code == code)
}
