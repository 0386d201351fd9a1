use crate::utils::error::DevUrlError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheme sent with every create/update mutation.
pub const DEFAULT_SCHEME: &str = "http";

/// Who may reach a DevURL. The remote API requires the upper-case spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Private,
    Org,
    Authed,
    Public,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Private,
        AccessLevel::Org,
        AccessLevel::Authed,
        AccessLevel::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Private => "PRIVATE",
            AccessLevel::Org => "ORG",
            AccessLevel::Authed => "AUTHED",
            AccessLevel::Public => "PUBLIC",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccessLevel::Private => "Only you can access",
            AccessLevel::Org => "All members of your organization can access",
            AccessLevel::Authed => "Authenticated users can access",
            AccessLevel::Public => "Anyone on the internet can access this link",
        }
    }

    /// Case-insensitive lookup; `None` when the level is not one of the four.
    pub fn parse(level: &str) -> Option<AccessLevel> {
        let normalized = level.to_ascii_uppercase();
        AccessLevel::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = DevUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessLevel::parse(s).ok_or_else(|| DevUrlError::InvalidAccessLevel(s.to_ascii_uppercase()))
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AccessLevel::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown access level {:?}", raw)))
    }
}

/// One DevURL as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevUrl {
    pub id: String,
    pub url: String,
    pub port: u16,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub name: Option<String>,
    pub access: AccessLevel,
}

fn none_as_empty<S: Serializer>(name: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(name.as_deref().unwrap_or_default())
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|name| !name.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
}

/// A create-or-update intent exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevUrlRequest {
    pub environment: String,
    pub port: String,
    pub access: String,
    pub name: String,
}

impl DevUrlRequest {
    pub fn new(
        environment: impl Into<String>,
        port: impl Into<String>,
        access: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            port: port.into(),
            access: access.into(),
            name: name.into(),
        }
    }
}

/// A request whose port, access level and name have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub environment: String,
    pub port: u16,
    pub access: AccessLevel,
    pub name: Option<String>,
}

/// Body of a create or update call. Update is a full replace of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub environment_id: String,
    pub port: u16,
    pub access: AccessLevel,
    pub name: String,
    pub scheme: String,
}

impl Mutation {
    pub fn new(environment_id: &str, request: &ValidatedRequest) -> Self {
        Self {
            environment_id: environment_id.to_string(),
            port: request.port,
            access: request.access,
            name: request.name.clone().unwrap_or_default(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// What a single invocation did to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { port: u16 },
    Updated { id: String, port: u16 },
    Deleted { id: String, port: u16 },
}
