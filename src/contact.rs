//! Contact form: validation, the email relay request, and the `mailto:`
//! fallback used whenever the relay can't be reached.

use http::StatusCode;
use log::{info, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Everything but the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0:?} doesn't look like an email address")]
    InvalidEmail(String),
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("email relay answered {0}")]
    Relay(StatusCode),
    #[error("couldn't reach the email relay: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Credentials baked in at compile time. Returns `None` if any of them
    /// is missing or still a placeholder.
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let usable = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty() && !is_placeholder(v))
                .map(str::to_string)
        };
        Some(Self {
            service_id: usable(service_id)?,
            template_id: usable(template_id)?,
            public_key: usable(public_key)?,
        })
    }
}

fn is_placeholder(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("your_") || lower.starts_with("your-") || lower == "changeme"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub subject: String,
    pub message: String,
}

/// JSON body of the relay's `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, to: &str, msg: &ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: msg.name.trim().to_string(),
                from_email: msg.email.trim().to_string(),
                to_email: to.to_string(),
                subject: msg.subject.trim().to_string(),
                message: msg.message.clone(),
            },
        }
    }
}

pub fn mailto_fallback(to: &str, msg: &ContactMessage) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        msg.name.trim(),
        msg.email.trim(),
        msg.message
    );
    format!(
        "mailto:{to}?subject={}&body={}",
        utf8_percent_encode(msg.subject.trim(), COMPONENT),
        utf8_percent_encode(&body, COMPONENT)
    )
}

/// What the visitor is told after pressing send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    /// The relay was skipped or failed; the mail client was opened instead.
    OpenedMailClient { href: String },
    Invalid(ContactError),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Sent => "Thanks! Your message has been sent.".to_string(),
            Notice::OpenedMailClient { .. } => {
                "Couldn't send directly, so your mail app has been opened with the message filled in."
                    .to_string()
            }
            Notice::Invalid(err) => format!("Please check the form: {err}."),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Invalid(_))
    }
}

/// Turns the outcome of a relay attempt into what the visitor sees. A relay
/// error is never surfaced as a failure; the mail link takes over.
pub fn settle(to: &str, msg: &ContactMessage, relay: Result<(), ContactError>) -> Notice {
    match relay {
        Ok(()) => {
            info!("contact: message relayed");
            Notice::Sent
        }
        Err(err) => {
            warn!("contact: {err}, falling back to mailto");
            Notice::OpenedMailClient {
                href: mailto_fallback(to, msg),
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub async fn send_via_relay(
    config: Option<&RelayConfig>,
    to: &str,
    msg: &ContactMessage,
) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let config = config.ok_or(ContactError::NotConfigured)?;
    let body = RelayRequest::new(config, to, msg);
    let resp = Request::post(RELAY_ENDPOINT)
        .json(&body)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        let status =
            StatusCode::from_u16(resp.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Err(ContactError::Relay(status))
    }
}

/// Validates, tries the relay, and falls back to the mail client.
#[cfg(feature = "hydrate")]
pub async fn submit(config: Option<&RelayConfig>, to: &str, msg: &ContactMessage) -> Notice {
    if let Err(err) = msg.validate() {
        return Notice::Invalid(err);
    }
    let relay = send_via_relay(config, to, msg).await;
    settle(to, msg, relay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello & welcome".to_string(),
            message: "Line one\nLine two".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(message().validate(), Ok(()));

        let mut blank = message();
        blank.subject = "   ".to_string();
        assert_eq!(blank.validate(), Err(ContactError::MissingField("subject")));

        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.io"] {
            let mut msg = message();
            msg.email = bad.to_string();
            assert_eq!(
                msg.validate(),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_relay_config_placeholders() {
        assert!(RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).is_some());
        assert!(RelayConfig::from_parts(Some("svc"), None, Some("key")).is_none());
        assert!(RelayConfig::from_parts(Some("svc"), Some(" "), Some("key")).is_none());
        assert!(
            RelayConfig::from_parts(Some("YOUR_SERVICE_ID"), Some("tpl"), Some("key")).is_none()
        );
    }

    #[test]
    fn test_relay_request_json() {
        let config = RelayConfig {
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
        };
        let req = RelayRequest::new(&config, "me@example.com", &message());
        let json = serde_json::to_value(&req).expect("serializes");
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["from_email"], "ada@example.com");
        assert_eq!(json["template_params"]["to_email"], "me@example.com");
    }

    #[test]
    fn test_mailto_fallback_encoding() {
        let href = mailto_fallback("me@example.com", &message());
        assert_eq!(
            href,
            "mailto:me@example.com?subject=Hello%20%26%20welcome\
             &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0ALine%20one%0ALine%20two"
        );
    }

    #[test]
    fn test_settle_never_fails_silently() {
        assert_eq!(settle("me@example.com", &message(), Ok(())), Notice::Sent);

        for err in [
            ContactError::NotConfigured,
            ContactError::Relay(StatusCode::BAD_REQUEST),
            ContactError::Network("offline".to_string()),
        ] {
            let notice = settle("me@example.com", &message(), Err(err));
            assert!(matches!(&notice, Notice::OpenedMailClient { href } if href.starts_with("mailto:")));
            assert!(!notice.is_error());
        }
    }
}
