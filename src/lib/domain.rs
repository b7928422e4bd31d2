//! Domain layer

pub mod notification;
