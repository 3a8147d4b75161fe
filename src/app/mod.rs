//! Core application logic: the quiz store, event handling, and the view
//! projection the renderer draws from.

pub mod action;
pub mod error;
pub mod event;
pub mod handler;
pub mod state;
pub mod store;
pub mod view;
