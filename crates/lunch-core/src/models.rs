//! Wire Models
//!
//! Data structures matching the backend's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Menu item (matches backend `lunch_db` rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub imageurl: Option<String>,
}

impl MenuItem {
    pub fn new(id: i64, name: impl Into<String>, price: f64, imageurl: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            imageurl: imageurl.map(str::to_string),
        }
    }

    /// Image URL, treating an empty string as absent
    pub fn image_url(&self) -> Option<&str> {
        self.imageurl
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Prices arrive either as JSON numbers or numeric strings
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price {:?}", s))),
    }
}

/// Signed-in user as reported by `/check-auth`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// `/check-auth` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl AuthStatus {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            user: Some(SessionUser {
                id: String::new(),
                email: email.into(),
            }),
        }
    }
}

/// `/login` and `/signup` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthOutcome {
    /// Server message, ignoring blank ones
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// `/logout` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogoutOutcome {
    #[serde(default)]
    pub success: bool,
}

/// Body of `/login` and `/signup`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated add/update form contents (also the `/update/{id}` body)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
    pub imageurl: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_number_or_string() {
        let items: Vec<MenuItem> = serde_json::from_str(
            r#"[{"id":1,"name":"pizza","price":6.99,"imageurl":null},
                {"id":2,"name":"soda","price":"1.99"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].price, 6.99);
        assert_eq!(items[1].price, 1.99);
        assert_eq!(items[1].imageurl, None);
    }

    #[test]
    fn test_bad_price_string_is_rejected() {
        let res: Result<MenuItem, _> = serde_json::from_str(r#"{"id":1,"name":"x","price":"cheap"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_empty_image_url_is_absent() {
        let item = MenuItem::new(1, "salad", 5.99, Some("  "));
        assert_eq!(item.image_url(), None);
        let item = MenuItem::new(1, "salad", 5.99, Some("https://img/salad.jpg"));
        assert_eq!(item.image_url(), Some("https://img/salad.jpg"));
    }

    #[test]
    fn test_auth_status_tolerates_missing_fields() {
        let status: AuthStatus = serde_json::from_str(r#"{"authenticated": true}"#).unwrap();
        assert!(status.authenticated);
        assert!(status.user.is_none());

        let outcome: AuthOutcome = serde_json::from_str(r#"{"success": false, "message": ""}"#).unwrap();
        assert_eq!(outcome.message(), None);
    }
}
