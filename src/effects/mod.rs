//! Effect system for card rewards.
//!
//! - `Effect`: Coefficient, bound and abstraction changes printed on cards
//! - `EffectGenerator`: Budgeted random effects for a new card
//! - `EffectResolver`: Applies effects to tuning with clamping
//!
//! ## Design Philosophy
//!
//! Generation and application are separate. Generated deltas are requests;
//! the resolver alone enforces the tuning invariants, so hand-built effect
//! lists are as safe to apply as generated ones.

mod effect;
mod generator;
mod resolver;

pub use effect::{Effect, EffectKind, EffectList};
pub use generator::EffectGenerator;
pub use resolver::{EffectResolver, ResolveResult};
