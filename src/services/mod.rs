//! Background simulation services.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the timer-driven behavior so view flows can stay
//! focused on validation and presentation.

pub mod lifecycle;
