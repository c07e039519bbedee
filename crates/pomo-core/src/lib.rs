//! # pomo-core
//!
//! Core types, lifecycle states, validation, and error types for Pomo.
//!
//! This crate provides the foundational types shared across all Pomo crates:
//! - The `Pomodoro` entity and its audit entries
//! - `PomodoroStatus` with its state machine transitions
//! - The `TransitionPolicy` applied by the lifecycle engine
//! - Input validation for new sessions and phase logs
//! - Request/response bodies of the REST surface
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;
pub mod responses;
pub mod validation;
