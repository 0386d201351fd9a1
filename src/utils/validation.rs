use crate::domain::model::{AccessLevel, DevUrlRequest, ValidatedRequest};
use crate::utils::error::{DevUrlError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Named devurls begin with a letter and hold only letters or digits, 64 chars max.
static DEVURL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9]{0,63}$").expect("valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a decimal port in 1..=65535. Port 0 ("any free port") is rejected.
pub fn validate_port(raw: &str) -> Result<u16> {
    let invalid = |reason: &str| DevUrlError::InvalidPort {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        tracing::error!("invalid port {:?}", raw);
        return Err(invalid("not an unsigned decimal number"));
    }

    let port: u16 = raw.parse().map_err(|_| {
        tracing::error!("invalid port {:?}", raw);
        invalid("out of range for a 16-bit port")
    })?;

    if port == 0 {
        tracing::error!("invalid port {:?}", raw);
        return Err(invalid("port must be > 0"));
    }

    Ok(port)
}

pub fn validate_access_level(level: &str) -> bool {
    let valid = AccessLevel::parse(level).is_some();
    if !valid {
        tracing::error!("invalid access level {:?}", level.to_ascii_uppercase());
    }
    valid
}

/// Empty names are valid and leave naming to the remote service.
pub fn validate_name(name: &str) -> bool {
    name.is_empty() || DEVURL_NAME_RE.is_match(name)
}

/// Runs every field check; the first failure wins and nothing touches the network.
pub fn validate_request(request: &DevUrlRequest) -> Result<ValidatedRequest> {
    let port = validate_port(&request.port)?;

    if !validate_access_level(&request.access) {
        return Err(DevUrlError::InvalidAccessLevel(
            request.access.to_ascii_uppercase(),
        ));
    }
    let access: AccessLevel = request.access.parse()?;

    if !validate_name(&request.name) {
        tracing::error!("invalid devurl name {:?}", request.name);
        return Err(DevUrlError::InvalidName(request.name.clone()));
    }

    Ok(ValidatedRequest {
        environment: request.environment.clone(),
        port,
        access,
        name: Some(request.name.clone()).filter(|name| !name.is_empty()),
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DevUrlError::config(format!("{} cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DevUrlError::config(format!(
                "{}: unsupported URL scheme {:?}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(DevUrlError::config(format!(
            "{}: invalid URL {:?}: {}",
            field_name, url_str, e
        ))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DevUrlError::config(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DevUrlError::config(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}
