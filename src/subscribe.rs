//! Mailing-list subscription service.
//!
//! A thin proxy in front of the Brevo contacts API: validate the email,
//! resolve the target contact list by name (cached in process memory after
//! the first successful lookup), and upsert the contact. The upstream
//! provider sits behind [`ContactListApi`] so the service logic is testable
//! without the network.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Incoming subscription request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    /// Subscriber email. Required.
    pub email: String,
    /// Optional first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Optional last name.
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A contact ready to hand to the provider: normalized email, blank name
/// fields dropped, list membership resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpsert {
    /// Trimmed, lowercased email.
    pub email: String,
    /// First name, if non-blank.
    pub first_name: Option<String>,
    /// Last name, if non-blank.
    pub last_name: Option<String>,
    /// Target list id, if one was resolved.
    pub list_id: Option<i64>,
}

/// The upstream contact-list provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactListApi: Send + Sync {
    /// Look up a contact list id by name (case-insensitive).
    ///
    /// `Ok(None)` means the provider answered but no list matched; that is
    /// a degraded state, not an error.
    async fn find_list_id(&self, name: &str) -> Result<Option<i64>>;

    /// Create or update a contact.
    async fn upsert_contact(&self, contact: ContactUpsert) -> Result<()>;
}

/// Brevo-backed implementation of [`ContactListApi`].
pub struct BrevoApi {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl BrevoApi {
    /// Production API base.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.brevo.com/v3";

    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ContactListApi for BrevoApi {
    async fn find_list_id(&self, name: &str) -> Result<Option<i64>> {
        let response = self
            .client
            .get(format!("{}/contacts/lists?limit=50&offset=0", self.base_url))
            .header("accept", "application/json")
            .header("api-key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "list lookup failed");
            return Ok(None);
        }

        let body: serde_json::Value = response.json().await?;
        let id = body["lists"].as_array().and_then(|lists| {
            lists.iter().find_map(|list| {
                let matches = list["name"]
                    .as_str()
                    .is_some_and(|n| n.eq_ignore_ascii_case(name));
                if matches {
                    list["id"].as_i64()
                } else {
                    None
                }
            })
        });

        Ok(id)
    }

    async fn upsert_contact(&self, contact: ContactUpsert) -> Result<()> {
        let mut payload = serde_json::json!({
            "email": contact.email,
            "updateEnabled": true,
        });

        let mut attributes = serde_json::Map::new();
        if let Some(first) = contact.first_name {
            attributes.insert("FIRSTNAME".into(), first.into());
        }
        if let Some(last) = contact.last_name {
            attributes.insert("LASTNAME".into(), last.into());
        }
        if !attributes.is_empty() {
            payload["attributes"] = attributes.into();
        }

        if let Some(list_id) = contact.list_id {
            payload["listIds"] = serde_json::json!([list_id]);
        }

        let response = self
            .client
            .post(format!("{}/contacts", self.base_url))
            .header("accept", "application/json")
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        // 201 = created, 204 = updated (updateEnabled).
        let status = response.status().as_u16();
        if status == 201 || status == 204 {
            return Ok(());
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["message"]
            .as_str()
            .unwrap_or("Failed to subscribe. Please try again.")
            .to_string();
        warn!(status, %message, "provider rejected contact upsert");

        Err(Error::Upstream { status, message })
    }
}

/// The subscription service.
pub struct MailingList {
    api: Arc<dyn ContactListApi>,
    list_name: String,
    /// List id cached after the first successful lookup, for the lifetime
    /// of the process.
    cached_list_id: RwLock<Option<i64>>,
}

impl MailingList {
    /// Create a service targeting the named contact list.
    pub fn new(api: Arc<dyn ContactListApi>, list_name: impl Into<String>) -> Self {
        Self {
            api,
            list_name: list_name.into(),
            cached_list_id: RwLock::new(None),
        }
    }

    /// Subscribe an email address to the list.
    ///
    /// A list that cannot be resolved is logged and the contact is saved
    /// without a list; only an unusable email or a provider failure is an
    /// error.
    pub async fn subscribe(&self, request: SubscribeRequest) -> Result<()> {
        let email = request.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::InvalidEmail);
        }

        let list_id = self.resolve_list_id().await?;
        if list_id.is_none() {
            warn!(
                list = %self.list_name,
                "contact list not found, contact saved without a list"
            );
        }

        let contact = ContactUpsert {
            email,
            first_name: non_blank(request.first_name),
            last_name: non_blank(request.last_name),
            list_id,
        };

        self.api.upsert_contact(contact).await?;
        info!("subscription accepted");
        Ok(())
    }

    /// The cached list id, resolving it on first use.
    async fn resolve_list_id(&self) -> Result<Option<i64>> {
        if let Some(id) = *self.cached_list_id.read() {
            return Ok(Some(id));
        }

        let id = self.api.find_list_id(&self.list_name).await?;
        if let Some(id) = id {
            *self.cached_list_id.write() = Some(id);
        }
        Ok(id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn request(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: email.to_string(),
            first_name: None,
            last_name: None,
        }
    }

    #[tokio::test]
    async fn test_rejects_missing_email() {
        let api = MockContactListApi::new();
        let list = MailingList::new(Arc::new(api), "cookingtemps");

        let err = list.subscribe(request("   ")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidEmail));

        let err = list.subscribe(request("not-an-address")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidEmail));
    }

    #[tokio::test]
    async fn test_normalizes_email_and_drops_blank_names() {
        let mut api = MockContactListApi::new();
        api.expect_find_list_id()
            .with(eq("cookingtemps"))
            .times(1)
            .returning(|_| Ok(Some(7)));
        api.expect_upsert_contact()
            .with(eq(ContactUpsert {
                email: "cook@example.com".to_string(),
                first_name: Some("Julia".to_string()),
                last_name: None,
                list_id: Some(7),
            }))
            .times(1)
            .returning(|_| Ok(()));

        let list = MailingList::new(Arc::new(api), "cookingtemps");
        let result = list
            .subscribe(SubscribeRequest {
                email: "  Cook@Example.COM ".to_string(),
                first_name: Some(" Julia ".to_string()),
                last_name: Some("   ".to_string()),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_id_is_resolved_once_and_cached() {
        let mut api = MockContactListApi::new();
        api.expect_find_list_id().times(1).returning(|_| Ok(Some(42)));
        api.expect_upsert_contact()
            .times(2)
            .returning(|contact| {
                assert_eq!(contact.list_id, Some(42));
                Ok(())
            });

        let list = MailingList::new(Arc::new(api), "cookingtemps");
        list.subscribe(request("a@example.com")).await.unwrap();
        list.subscribe(request("b@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_list_is_not_an_error() {
        let mut api = MockContactListApi::new();
        // Unresolved lookups are retried on the next request, never cached.
        api.expect_find_list_id().times(2).returning(|_| Ok(None));
        api.expect_upsert_contact()
            .times(2)
            .returning(|contact| {
                assert_eq!(contact.list_id, None);
                Ok(())
            });

        let list = MailingList::new(Arc::new(api), "cookingtemps");
        list.subscribe(request("a@example.com")).await.unwrap();
        list.subscribe(request("b@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through() {
        let mut api = MockContactListApi::new();
        api.expect_find_list_id().returning(|_| Ok(Some(1)));
        api.expect_upsert_contact().returning(|_| {
            Err(Error::Upstream {
                status: 400,
                message: "Invalid phone number".to_string(),
            })
        });

        let list = MailingList::new(Arc::new(api), "cookingtemps");
        let err = list.subscribe(request("a@example.com")).await.unwrap_err();
        match err {
            Error::Upstream { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid phone number");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
