use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct LateFineRequest {
    #[serde(default)]
    pub(super) check_in: Option<String>,
    #[serde(default)]
    pub(super) basic_salary: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct OvertimeRequest {
    #[serde(default)]
    pub(super) check_out: Option<String>,
    #[serde(default)]
    pub(super) basic_salary: i64,
}
