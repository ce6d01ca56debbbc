//! Terminal Progress Adapter
//!
//! indicatif によるスピナー表示

pub mod spinner_reporter;

pub use spinner_reporter::SpinnerReporter;
