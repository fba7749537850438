use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry. Wire keys are camelCase (`youtubeId`); the optional
/// sequences are omitted from the wire form when absent.
///
/// The codec is lenient, like the store it fronts: `id` is assigned by the
/// store and absent on creation, and no scalar field is validated for
/// presence — missing or null columns decode to their zero values rather
/// than failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub youtube_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub rating: f32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<Panel>>,
}

/// Decode an explicit `null` as the field's zero value, the way the
/// original store rows behave.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Titled content block attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub content: String,
}

/// List envelope, `{"videos": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoList {
    pub videos: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Video {
        Video {
            id: Some("1".into()),
            title: "DIY Gravity-Based Water Filter".into(),
            categories: vec!["Drinking Water".into(), "Health".into()],
            description: "A simple gravity water filter.".into(),
            youtube_id: "v6O6jFs5DrQ".into(),
            tags: vec!["water".into(), "filter".into()],
            rating: 4.5,
            date: "2023-05-15".into(),
            transcript: "Transcript...".into(),
            materials: None,
            steps: None,
            panels: None,
        }
    }

    #[test]
    fn youtube_id_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["youtubeId"], "v6O6jFs5DrQ");
        assert!(value.get("youtube_id").is_none());
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("materials").is_none());
        assert!(value.get("steps").is_none());
        assert!(value.get("panels").is_none());
    }

    #[test]
    fn present_optional_fields_round_trip() {
        let mut video = sample();
        video.materials = Some(vec!["Sand".into(), "Gravel".into()]);
        video.steps = Some(vec!["Prepare the containers".into()]);
        video.panels = Some(vec![Panel {
            title: "Safety".into(),
            content: "Boil before drinking.".into(),
        }]);

        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["materials"], json!(["Sand", "Gravel"]));
        assert_eq!(value["panels"][0]["title"], "Safety");

        let decoded: Video = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, video);
    }

    #[test]
    fn creation_body_without_id_decodes_and_omits_it() {
        let body = json!({
            "title": "Intro",
            "categories": ["basics"],
            "description": "d",
            "youtubeId": "abc123",
            "tags": ["x"],
            "rating": 4.5,
            "date": "2024-01-01",
            "transcript": "..."
        });

        let video: Video = serde_json::from_value(body).unwrap();
        assert_eq!(video.id, None);

        let value = serde_json::to_value(&video).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn null_scalar_columns_decode_to_zero_values() {
        let row = json!({
            "id": "1",
            "title": null,
            "categories": null,
            "rating": null,
            "youtubeId": "abc123"
        });

        let video: Video = serde_json::from_value(row).unwrap();
        assert_eq!(video.title, "");
        assert!(video.categories.is_empty());
        assert_eq!(video.rating, 0.0);
        assert_eq!(video.youtube_id, "abc123");
    }

    #[test]
    fn list_envelope_uses_videos_key() {
        let list = VideoList {
            videos: vec![sample()],
        };
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["videos"][0]["id"], "1");
    }
}
