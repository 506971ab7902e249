//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State models are plain data with pure transitions; components hold them in
//! `RwSignal` contexts and route all browser side effects through `util`.

pub mod theme;
