//! UI layer for the desktop monitor: app shell and theme.

pub mod app;
pub mod theme;

pub use app::AqiMonitorApp;
