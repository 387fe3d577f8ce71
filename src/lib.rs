//! Login-flow - floating-label login form with a welcome screen
//!
//! The form state machine and the reset protocol live in [`form`]; the
//! terminal front end in [`app`] and [`ui`] only reads that state and feeds
//! it input events.

pub mod activity;
pub mod app;
pub mod form;
pub mod input;
pub mod nav;
pub mod screens;
pub mod ui;
