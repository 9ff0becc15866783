//! Lead capture — payload assembly and best-effort CRM delivery.

pub mod gateway;
pub mod payload;

pub use gateway::{LeadGateway, LeadSink, WebhookSink};
pub use payload::{LEAD_SOURCE, LeadPayload};
