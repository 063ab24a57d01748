// src/services/notify.rs

//! Email notification dispatch.
//!
//! Sends one plain-text alert mail per run over SMTP with implicit TLS
//! (port 465), authenticated with the configured credentials.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{info, warn};

use crate::config::MailConfig;
use crate::error::Result;
use crate::models::Posting;

/// Fixed subject line for alert mail.
const SUBJECT: &str = "New CSDS Job Postings";

/// Outcome of a notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The alert mail was handed to the SMTP relay.
    Sent,
    /// Sender, password, or recipient missing; nothing was sent.
    SkippedUnconfigured,
}

/// Render the plain-text alert body: title line, link line, blank line
/// per posting, in input order.
pub fn build_body(postings: &[Posting]) -> String {
    let mut body = String::from("Here are the new job postings:\n\n");
    for posting in postings {
        body.push_str(&posting.title);
        body.push('\n');
        body.push_str(&posting.link);
        body.push_str("\n\n");
    }
    body
}

/// Send one alert mail listing the given postings.
///
/// Incomplete mail settings skip the send without failing the run
/// (configuration guard, not an error path). An SMTP or address
/// failure is fatal for the run; there is no retry or queueing.
pub async fn send_alert(mail: &MailConfig, postings: &[Posting]) -> Result<Delivery> {
    if !mail.is_configured() {
        warn!("Email credentials not configured properly; skipping alert");
        return Ok(Delivery::SkippedUnconfigured);
    }

    let message = Message::builder()
        .from(mail.sender.parse()?)
        .to(mail.recipient.parse()?)
        .subject(SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(build_body(postings))?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&mail.smtp_host)?
        .credentials(Credentials::new(mail.sender.clone(), mail.password.clone()))
        .build();

    transport.send(message).await?;
    info!("Alert mail sent to {} via {}", mail.recipient, mail.smtp_host);
    Ok(Delivery::Sent)
}
