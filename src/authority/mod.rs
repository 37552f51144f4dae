//! Numbering-plan authority contract and implementations.
//!
//! The pipeline never interprets numbering-plan data itself; everything it
//! needs from the plan goes through the [`NumberingPlan`] trait, enabling
//! different implementations (the `phonenumber`-backed one, scripted mocks).

mod phonenumber_plan;
mod traits;

pub use phonenumber_plan::PhonenumberPlan;
pub use traits::{NumberingPlan, TypeCode};
