//! Infrastructure Providers - HTTP adapters for external collaborators
//!
//! - [`GeoapifyAddressLookup`] implements `AddressLookup`
//! - [`ResendEmailSender`] and [`SimulatedEmailSender`] implement `EmailSender`
//! - [`TwilioSmsSender`] implements `SmsSender`
//!
//! Provider HTTP failures are mapped to `PortError` the same way everywhere:
//! 404 -> NotFound, 401/403 -> Unauthorized, 429 -> RateLimited,
//! 5xx -> ServiceUnavailable, client timeout -> Timeout, else Internal.

pub mod geoapify;
pub mod http;
pub mod resend;
pub mod simulated;
pub mod twilio;

pub use geoapify::{GeoapifyAddressLookup, GeoapifyConfig};
pub use resend::{ResendConfig, ResendEmailSender};
pub use simulated::SimulatedEmailSender;
pub use twilio::{TwilioConfig, TwilioSmsSender};
