//! Domain and training data contribution stores for rasalint.
//!
//! This crate provides:
//! - [`Domain`] - Intent, action, and response declarations keyed by file
//! - [`TrainingData`] - Story, rule, and NLU usages keyed by file
//! - [`ContributionStore`] - The per-file reset-then-repopulate discipline
//!   both stores share
//!
//! Both stores keep their contributions in persistent `im` collections, so
//! cloning a store is O(1) and snapshots share structure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod store;
pub mod training;


pub use domain::{Domain, DomainContribution};
pub use store::ContributionStore;
pub use training::{FlowContribution, TrainingContribution, TrainingData};
