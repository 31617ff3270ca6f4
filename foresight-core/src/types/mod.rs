//! Record types stored in foresight ledgers

mod biometric;
mod notification;
mod outcome;

pub use biometric::{BiometricMetric, BiometricRecord};
pub use notification::NotificationRecord;
pub use outcome::{OutcomeRating, OutcomeRecord};
