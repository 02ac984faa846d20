use super::criteria::CriteriaGroup;

/// CVE advisory reference attached to a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CveReference {
    pub id: String,
    /// CVSS v3 score as written in the feed (e.g. `"7.5"` or a full vector)
    pub cvss3: Option<String>,
}

impl CveReference {
    pub fn new(id: String, cvss3: Option<String>) -> Self {
        Self { id, cvss3 }
    }
}

/// One fully resolved OVAL `<definition>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityDefinition {
    pub id: String,
    /// Upper-cased definition class (`VULNERABILITY`, `PATCH`, ...)
    pub class: String,
    pub title: String,
    pub description: String,
    pub family: String,
    pub cve: Vec<CveReference>,
    pub criteria: CriteriaGroup,
}

/// Definitions in document order
pub type VulnerabilityList = Vec<VulnerabilityDefinition>;
