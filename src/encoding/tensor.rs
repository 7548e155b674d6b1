//! Flat tensors handed to learned policies.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionSet, CardDeck, ACTION_SPACE};
use crate::core::Action;

/// Encoded observation as a flat row-major tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    pub tensor: Vec<f32>,

    /// Shape of the tensor, e.g. `[planes, ACTION_SPACE]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Zero-filled tensor of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }

    /// Set a one at every slot of `set`, offset by `plane * ACTION_SPACE`.
    pub fn set_plane(&mut self, plane: usize, set: ActionSet) {
        let base = plane * ACTION_SPACE;
        for action in set.iter() {
            self.set(base + CardDeck::index_of(action), 1.0);
        }
    }
}

/// Additive logit mask: `0.0` for legal slots, negative infinity elsewhere.
#[must_use]
pub fn action_mask(legal: ActionSet) -> Vec<f32> {
    (0..ACTION_SPACE)
        .map(|index| match CardDeck::action_at(index) {
            Some(action) if legal.contains(action) => 0.0,
            _ => f32::NEG_INFINITY,
        })
        .collect()
}

/// Decode a policy output index. `None` if out of range.
#[must_use]
pub fn decode_action(index: usize) -> Option<Action> {
    CardDeck::action_at(index)
}
