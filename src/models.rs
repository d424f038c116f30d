//! Frontend Models
//!
//! Data structures matching the destinations API.

use serde::{Deserialize, Deserializer, Serialize};

/// District record as served by `/destinations/`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Destination {
    /// Document id; the backend uses the district name
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popular_places: Vec<Place>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden_places: Vec<Place>,
}

/// Point of interest nested in a district
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Destination {
    /// Popular places followed by hidden places
    pub fn all_places(&self) -> impl Iterator<Item = &Place> {
        self.popular_places.iter().chain(self.hidden_places.iter())
    }
}

/// Body of `POST /login/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Body of `POST /register/`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `{message}` / `{error}` envelope returned by the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_tolerates_missing_and_null_fields() {
        let json = r#"[
            {"id": "Chennai", "name": "Chennai", "region": "North",
             "popular_places": [{"name": "Marina Beach", "description": "Long beach", "image": null}]},
            {"name": "Ooty", "description": null, "hidden_places": null}
        ]"#;

        let parsed: Vec<Destination> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id.as_deref(), Some("Chennai"));
        assert_eq!(parsed[0].popular_places[0].image, "");
        assert!(parsed[0].hidden_places.is_empty());
        assert_eq!(parsed[1].id, None);
        assert_eq!(parsed[1].region, "");
        assert!(parsed[1].hidden_places.is_empty());
    }

    #[test]
    fn test_all_places_keeps_popular_first() {
        let dest = Destination {
            name: "Madurai".into(),
            popular_places: vec![Place { name: "Meenakshi Temple".into(), ..Default::default() }],
            hidden_places: vec![Place { name: "Samanar Hills".into(), ..Default::default() }],
            ..Default::default()
        };
        let names: Vec<_> = dest.all_places().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Meenakshi Temple", "Samanar Hills"]);
    }

    #[test]
    fn test_login_request_field_names() {
        let body = serde_json::to_value(LoginRequest { identifier: "asha", password: "pw" }).unwrap();
        assert_eq!(body, serde_json::json!({"identifier": "asha", "password": "pw"}));
    }
}
