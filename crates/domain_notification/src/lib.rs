//! Notification Domain - Delivering estimates by email and SMS
//!
//! Renders calculated estimates for customers and for the business inbox,
//! and sends them through provider-agnostic sender ports.

pub mod error;
pub mod message;
pub mod service;
pub mod templates;

pub use error::NotificationError;
pub use message::{DeliveryReceipt, EmailMessage, EmailSender, SmsMessage, SmsSender, SMS_SEGMENT_CHARS};
pub use service::{EmailDelivery, EstimateDeliveryService};
