//! Data models for the bupot field record.

pub mod fields;

pub use fields::BupotFields;
