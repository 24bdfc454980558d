//! Rating computation: scoring primitives, country attribution and the rating ledger.

pub mod constants;
pub mod country_membership;
pub mod country_resolver;
pub mod elo;
pub mod rating_ledger;
pub mod rating_state;
pub mod structures;
