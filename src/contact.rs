//! Contact form submission
//!
//! The form's fields are captured into a [`ContactForm`], posted through a
//! [`FormTransport`] (a `fetch` call in the browser), and the outcome turned into
//! a user-facing [`Notice`]. A successful send clears the form; a failed one
//! leaves the entered values in place.
//!
//! Overlapping submissions are not blocked. A second submit while one is pending
//! is logged and sent anyway.

use std::cell::Cell;
use std::future::Future;

use crate::settings::SiteConfig;

/// Submission failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has no action URL")]
    MissingAction,
    #[error("form endpoint responded with status {0}")]
    Rejected(u16),
    #[error("request failed: {0}")]
    Network(String),
}

/// Snapshot of the contact form: target, method, and text fields in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub action: String,
    pub method: String,
    fields: Vec<(String, String)>,
}

impl ContactForm {
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field append
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn push_field(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// First value for `name`
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Clear every field value, keeping the field names
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// True when every field value is empty
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_empty())
    }
}

/// Sends a captured form to its endpoint
pub trait FormTransport {
    /// Submit as multipart form data, asking for a JSON response.
    /// Resolves to the HTTP status, or an error if the request never completed.
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<u16, SubmitError>>;
}

/// Message shown to the sender once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Failure(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

/// Map an HTTP status onto success/failure (2xx is success)
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// Contact form submission handler
pub struct ContactHandler<T: FormTransport> {
    transport: T,
    name_field: String,
    success_message: String,
    failure_message: String,
    in_flight: Cell<usize>,
}

impl<T: FormTransport> ContactHandler<T> {
    pub fn new(transport: T, config: &SiteConfig) -> Self {
        Self {
            transport,
            name_field: config.selectors.name_field.clone(),
            success_message: config.success_message.clone(),
            failure_message: config.failure_message.clone(),
            in_flight: Cell::new(0),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submissions currently awaiting a response
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Send the form and report the outcome. Clears the form on success.
    pub async fn submit(&self, form: &mut ContactForm) -> Notice {
        match self.deliver(form).await {
            Ok(()) => {
                let name = form.field(&self.name_field).unwrap_or_default();
                let notice = Notice::Success(self.success_message.replace(
                    crate::settings::NAME_PLACEHOLDER,
                    name,
                ));
                log::info!("Contact form sent");
                form.reset();
                notice
            }
            Err(e) => {
                log::warn!("Contact form submission failed: {}", e);
                Notice::Failure(self.failure_message.clone())
            }
        }
    }

    async fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError> {
        if form.action.is_empty() {
            return Err(SubmitError::MissingAction);
        }

        let pending = self.in_flight.get();
        if pending > 0 {
            log::warn!("Contact form submitted while {} submission(s) still pending", pending);
        }
        self.in_flight.set(pending + 1);

        let result = self.transport.send(form).await;
        self.in_flight.set(self.in_flight.get() - 1);

        check_status(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Yields back to the executor once before completing
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Endpoint stand-in answering every request with a fixed result
    struct MockEndpoint {
        reply: Result<u16, SubmitError>,
        log: RefCell<Vec<String>>,
    }

    impl MockEndpoint {
        fn status(status: u16) -> Self {
            Self {
                reply: Ok(status),
                log: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(SubmitError::Network(message.to_string())),
                log: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for MockEndpoint {
        async fn send(&self, form: &ContactForm) -> Result<u16, SubmitError> {
            let who = form.field("name").unwrap_or_default().to_string();
            self.log.borrow_mut().push(format!("start {who}"));
            YieldOnce(false).await;
            self.log.borrow_mut().push(format!("end {who}"));
            self.reply.clone()
        }
    }

    fn filled_form(name: &str) -> ContactForm {
        ContactForm::new("https://formspree.io/f/test", "post")
            .with_field("name", name)
            .with_field("email", "ada@example.com")
            .with_field("message", "Hello from the analytical engine")
    }

    #[test]
    fn test_status_ranges() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Rejected(302)));
        assert_eq!(check_status(500), Err(SubmitError::Rejected(500)));
    }

    #[test]
    fn test_success_greets_sender_and_clears_form() {
        let handler = ContactHandler::new(MockEndpoint::status(200), &SiteConfig::default());
        let mut form = filled_form("Ada");

        let notice = block_on(handler.submit(&mut form));

        assert!(notice.is_success());
        assert!(notice.message().contains("Ada"));
        assert!(form.is_blank());
        assert_eq!(form.fields().len(), 3);
        assert_eq!(handler.in_flight(), 0);
    }

    #[test]
    fn test_server_error_keeps_values() {
        let config = SiteConfig::default();
        let handler = ContactHandler::new(MockEndpoint::status(500), &config);
        let mut form = filled_form("Ada");
        let before = form.clone();

        let notice = block_on(handler.submit(&mut form));

        assert_eq!(notice, Notice::Failure(config.failure_message.clone()));
        assert_eq!(form, before);
    }

    #[test]
    fn test_network_failure_is_generic_notice() {
        let config = SiteConfig::default();
        let handler = ContactHandler::new(MockEndpoint::failing("offline"), &config);
        let mut form = filled_form("Ada");

        let notice = block_on(handler.submit(&mut form));

        assert_eq!(notice.message(), config.failure_message);
        assert!(!notice.message().contains("offline"));
        assert_eq!(form.field("name"), Some("Ada"));
        assert_eq!(handler.in_flight(), 0);
    }

    #[test]
    fn test_missing_action_never_hits_transport() {
        let handler = ContactHandler::new(MockEndpoint::status(200), &SiteConfig::default());
        let mut form = ContactForm::new("", "post").with_field("name", "Ada");

        let notice = block_on(handler.submit(&mut form));

        assert!(!notice.is_success());
        assert!(handler.transport().log.borrow().is_empty());
    }

    #[test]
    fn test_missing_name_field_still_succeeds() {
        let handler = ContactHandler::new(MockEndpoint::status(200), &SiteConfig::default());
        let mut form = ContactForm::new("https://formspree.io/f/test", "post")
            .with_field("message", "hi");

        let notice = block_on(handler.submit(&mut form));

        assert!(notice.message().contains("reaching out, !"));
    }

    #[test]
    fn test_overlapping_submissions_both_sent() {
        let handler = ContactHandler::new(MockEndpoint::status(200), &SiteConfig::default());
        let mut first = filled_form("Ada");
        let mut second = filled_form("Grace");

        let (a, b) = block_on(async {
            futures::join!(handler.submit(&mut first), handler.submit(&mut second))
        });

        assert!(a.is_success() && b.is_success());
        assert_eq!(
            *handler.transport().log.borrow(),
            vec!["start Ada", "start Grace", "end Ada", "end Grace"]
        );
        assert_eq!(handler.in_flight(), 0);
    }
}
