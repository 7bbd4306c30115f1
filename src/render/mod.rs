//! Social image rendering: template fill + headless browser screenshot

pub mod browser;
pub mod template;
