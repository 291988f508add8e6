pub mod fcm;
pub mod phonepe;

pub use fcm::{FcmClient, SendOutcome};
pub use phonepe::{generate_checksum, PhonePeClient};
