use crate::domain::entities::{AccountId, Vacation};
use crate::domain::errors::{DomainError, DomainResult};
use crate::jmap::errors::JmapError;
use crate::jmap::method::ResponseName;
use chrono::{DateTime, Utc};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

/// Caller-chosen correlation token, echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inbound `[name, arguments, clientId]` triple.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall(pub String, pub Value, pub ClientId);

impl MethodCall {
    pub fn new(name: impl Into<String>, arguments: Value, client_id: ClientId) -> Self {
        Self(name.into(), arguments, client_id)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn client_id(&self) -> &ClientId {
        &self.2
    }
}

/// One outbound `[responseName, payload, clientId]` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct JmapResponse {
    pub client_id: ClientId,
    pub response_name: ResponseName,
    pub response: Value,
}

impl JmapResponse {
    pub fn new<T: Serialize>(
        client_id: ClientId,
        response_name: ResponseName,
        response: &T,
    ) -> DomainResult<Self> {
        let response = serde_json::to_value(response)
            .map_err(|e| DomainError::Internal(format!("Failed to serialize response: {}", e)))?;
        Ok(Self {
            client_id,
            response_name,
            response,
        })
    }

    pub fn error(client_id: ClientId, error: &JmapError) -> Self {
        Self {
            client_id,
            response_name: ResponseName::ERROR,
            response: json!({
                "type": error.error_type(),
                "description": error.to_string(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.response_name == ResponseName::ERROR
    }
}

impl Serialize for JmapResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut triple = serializer.serialize_tuple(3)?;
        triple.serialize_element(&self.response_name)?;
        triple.serialize_element(&self.response)?;
        triple.serialize_element(&self.client_id)?;
        triple.end()
    }
}

/// Arguments of `getVacationResponse`. The account is taken from the session,
/// so any members sent by the client are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GetVacationRequest {}

pub const SINGLETON_ID: &str = "singleton";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationResponse {
    pub id: String,
    pub is_enabled: bool,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
    #[serde(rename = "isActivated")]
    pub activated: bool,
}

impl VacationResponse {
    pub fn from_vacation(vacation: &Vacation, activated: bool) -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            is_enabled: vacation.is_enabled,
            from_date: vacation.from_date,
            to_date: vacation.to_date,
            subject: vacation.subject.clone(),
            text_body: vacation.text_body.clone(),
            html_body: vacation.html_body.clone(),
            activated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVacationResponse {
    pub account_id: String,
    pub list: Vec<VacationResponse>,
}

impl GetVacationResponse {
    pub fn new(account_id: &AccountId, vacation_response: VacationResponse) -> Self {
        Self {
            account_id: account_id.identifier().to_string(),
            list: vec![vacation_response],
        }
    }

    pub fn vacation_response(&self) -> Option<&VacationResponse> {
        self.list.first()
    }
}
