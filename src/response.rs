use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, PartialEq)]
pub struct ViewCountResponse {
    pub count: i64,
}

impl ViewCountResponse {
    pub const SENTINEL: i64 = -1;

    pub fn failed() -> Self {
        ViewCountResponse {
            count: Self::SENTINEL,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StatsResponse {
    pub data: Value,
}

impl StatsResponse {
    pub fn failed() -> Self {
        StatsResponse {
            data: serde_json::json!({ "totalSolved": "undefined" }),
        }
    }
}
