//! Wire shapes of the maker project API.

use std::collections::HashMap;

use serde::Deserialize;

use cn_core::project::{RemoteProjectRecord, StatusCountSummary, UnifiedStatus};

/// Project ids arrive either as strings or as bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectDto {
    pub id: WireId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    /// Publication lifecycle; some deployments name it `lifecycleStatus`.
    #[serde(default, alias = "lifecycleStatus")]
    pub status: Option<String>,
    #[serde(default)]
    pub review_status: Option<String>,
}

impl From<ProjectDto> for RemoteProjectRecord {
    fn from(dto: ProjectDto) -> Self {
        RemoteProjectRecord {
            id: dto.id.into(),
            title: dto.title.unwrap_or_default(),
            summary: dto.summary.unwrap_or_default(),
            image_path: dto.image_path,
            lifecycle_status: dto.status.unwrap_or_default(),
            review_status: dto.review_status.unwrap_or_default(),
        }
    }
}

/// Listing responses are either a bare array or wrapped in `{"items": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProjectListDto {
    Bare(Vec<ProjectDto>),
    Envelope { items: Vec<ProjectDto> },
}

impl ProjectListDto {
    pub fn into_records(self) -> Vec<RemoteProjectRecord> {
        let items = match self {
            ProjectListDto::Bare(items) => items,
            ProjectListDto::Envelope { items } => items,
        };
        items.into_iter().map(RemoteProjectRecord::from).collect()
    }
}

/// Count keys are matched case-insensitively; unknown keys are skipped.
pub(crate) fn counts_from_wire(raw: HashMap<String, u64>) -> StatusCountSummary {
    let mut counts = StatusCountSummary::new();
    for (key, value) in raw {
        match UnifiedStatus::parse_wire(&key) {
            Some(status) => {
                let value = u32::try_from(value).unwrap_or(u32::MAX);
                // Keys differing only by case fold into one status.
                let entry = counts.entry(status).or_insert(0);
                *entry = entry.saturating_add(value);
            }
            None => tracing::warn!(key = %key, "Ignoring unknown status count key"),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_with_numeric_ids() {
        let json = r#"[{"id": 17, "title": "Kettle", "imagePath": "/a.png",
                        "status": "LIVE", "reviewStatus": "APPROVED"}]"#;
        let list: ProjectListDto = serde_json::from_str(json).unwrap();

        let records = list.into_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "17");
        assert_eq!(records[0].image_path.as_deref(), Some("/a.png"));
        assert_eq!(records[0].lifecycle_status, "LIVE");
        assert_eq!(records[0].summary, "");
    }

    #[test]
    fn parses_items_envelope_and_lifecycle_alias() {
        let json = r#"{"items": [{"id": "p-1", "lifecycleStatus": "scheduled",
                                  "reviewStatus": "approved"}], "total": 1}"#;
        let list: ProjectListDto = serde_json::from_str(json).unwrap();

        let records = list.into_records();

        assert_eq!(records[0].id, "p-1");
        assert_eq!(records[0].lifecycle_status, "scheduled");
        assert_eq!(records[0].title, "");
    }

    #[test]
    fn count_keys_are_case_insensitive_and_unknown_keys_dropped() {
        let raw: HashMap<String, u64> =
            serde_json::from_str(r#"{"draft": 2, "LIVE": 5, "total": 7}"#).unwrap();

        let counts = counts_from_wire(raw);

        assert_eq!(counts.get(&UnifiedStatus::Draft), Some(&2));
        assert_eq!(counts.get(&UnifiedStatus::Live), Some(&5));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn case_variant_keys_are_summed_without_overflow() {
        let raw: HashMap<String, u64> =
            serde_json::from_str(r#"{"draft": 4294967295, "DRAFT": 1, "Live": 2, "live": 3}"#)
                .unwrap();

        let counts = counts_from_wire(raw);

        assert_eq!(counts.get(&UnifiedStatus::Draft), Some(&u32::MAX));
        assert_eq!(counts.get(&UnifiedStatus::Live), Some(&5));
    }
}
