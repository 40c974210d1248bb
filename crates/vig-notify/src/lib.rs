//! # vig-notify
//!
//! Digest composition and outbound mail delivery for Vigia.
//!
//! [`compose`] renders a batch of newly detected records into a [`Digest`]
//! (HTML + plain text, grouped per source); [`Mailer`] is the delivery seam,
//! with [`ResendMailer`] talking to a Resend-style HTTP mail API. An empty
//! batch composes to `None` and the mailer is never invoked.

mod digest;
mod error;
mod mailer;

pub use digest::{Digest, compose};
pub use error::NotifyError;
pub use mailer::{Mailer, ResendMailer};
