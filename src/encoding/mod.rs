//! Tensor encodings for learned policies.
//!
//! ## Overview
//!
//! - **EncodedState**: flat tensor plus shape
//! - **CardPlaneEncoder**: hand, table rows, discard memory and available
//!   actions as one-hot planes over the 37-slot codec
//! - **action_mask**: additive logit mask for the policy head
//!
//! The engine itself never encodes anything; drivers build an `Observation`
//! from the snapshot `step` returns and the acting seat's hand.

pub mod planes;
pub mod tensor;

pub use planes::{CardPlaneEncoder, DiscardMemory, Observation, StateEncoder};
pub use tensor::{action_mask, decode_action, EncodedState};
