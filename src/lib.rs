//! Vehicle part identification service
//!
//! One POST endpoint that forwards an image reference to a vision-capable
//! completion API, asks it to name the main vehicle part and the vehicle's
//! make/model, and relays the normalized two-field JSON answer.

pub mod api;
pub mod metrics;
