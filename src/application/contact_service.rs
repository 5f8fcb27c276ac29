use std::time::Duration;

use crate::domain::contact::ContactMessage;
use crate::domain::errors::DomainError;
use crate::domain::notification::Notification;
use crate::domain::ports::Notifier;

pub struct ContactService<N> {
    notifier: N,
    delay: Duration,
}

impl<N: Notifier> ContactService<N> {
    pub fn new(notifier: N, delay: Duration) -> Self {
        Self { notifier, delay }
    }

    /// Nothing is stored or forwarded; the message is only acknowledged.
    pub async fn send(&self, message: ContactMessage) -> Result<Notification, DomainError> {
        message.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        log::info!(
            "Contact message from {} <{}>: {}",
            message.name,
            message.email,
            message.subject
        );
        let ack = Notification::new(
            "Message Sent!",
            "Thank you for contacting us. We will get back to you shortly.",
        );
        self.notifier.notify(&ack);
        Ok(ack)
    }
}
