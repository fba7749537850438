use serde::{Deserialize, Serialize};

/// A proposed edit to a video. `id` is assigned by the store and omitted
/// from the wire form when absent. `videoId` is not checked against the
/// catalog at this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub video_id: String,
    pub suggestion: String,
    /// Left to the caller; omitted from the insert payload when absent so
    /// the store's column default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SuggestionStatus>,
}

/// Lifecycle state of a suggestion, serialized as a lowercase string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Status-only update document for the approval endpoint, kept as a typed
/// value so the store-call contract stays statically checked.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusPatch {
    pub status: SuggestionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn video_reference_serializes_camel_case() {
        let suggestion = ImprovementSuggestion {
            id: None,
            video_id: "v1".into(),
            suggestion: "Add captions".into(),
            status: Some(SuggestionStatus::Pending),
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(
            value,
            json!({"videoId": "v1", "suggestion": "Add captions", "status": "pending"})
        );
    }

    #[test]
    fn absent_id_and_status_are_omitted() {
        let suggestion = ImprovementSuggestion {
            id: None,
            video_id: "v1".into(),
            suggestion: "Add captions".into(),
            status: None,
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("status").is_none());
    }

    #[test]
    fn assigned_id_round_trips() {
        let value = json!({"id": 7, "videoId": "v1", "suggestion": "s", "status": "rejected"});
        let decoded: ImprovementSuggestion = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.id, Some(7));
        assert_eq!(decoded.status, Some(SuggestionStatus::Rejected));
    }

    #[test]
    fn status_patch_serializes_to_status_document() {
        let patch = StatusPatch {
            status: SuggestionStatus::Approved,
        };
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            json!({"status": "approved"})
        );
    }
}
