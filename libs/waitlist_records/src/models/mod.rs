pub mod client;
pub mod therapist;
