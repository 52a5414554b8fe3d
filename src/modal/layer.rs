//! Stacking order for open dialogs.
//!
//! Layers are derived from an entry's *current* index in the stack, never
//! stored on the entry, so closing an earlier dialog moves later ones down
//! without leaving gaps or collisions.

/// Base z-index for the modal layer.
pub const BASE_LAYER: u32 = 1000;

/// Z-index increment between stack positions. Content sits halfway between
/// its own backdrop and the next position's backdrop.
pub const LAYER_STEP: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layers {
    pub backdrop: u32,
    pub content: u32,
}

/// Layers for the entry at `position` (0 = oldest open dialog).
pub fn layer_of(position: usize) -> Layers {
    let position = u32::try_from(position).unwrap_or(u32::MAX);
    let backdrop = BASE_LAYER.saturating_add(position.saturating_mul(LAYER_STEP));
    Layers {
        backdrop,
        content: backdrop.saturating_add(LAYER_STEP / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_position_matches_base() {
        assert_eq!(
            layer_of(0),
            Layers {
                backdrop: 1000,
                content: 1005
            }
        );
        assert_eq!(layer_of(2).backdrop, 1020);
    }

    #[test]
    fn test_next_backdrop_covers_previous_content() {
        for p in 0..50 {
            assert!(layer_of(p + 1).backdrop > layer_of(p).content);
        }
    }

    proptest! {
        #[test]
        fn layers_strictly_increase(p in 0usize..10_000) {
            let here = layer_of(p);
            let next = layer_of(p + 1);
            prop_assert!(next.backdrop > here.backdrop);
            prop_assert!(next.content > here.content);
        }

        #[test]
        fn content_beats_every_backdrop_at_or_below(p in 0usize..500, q in 0usize..500) {
            prop_assume!(q <= p);
            prop_assert!(layer_of(p).content > layer_of(q).backdrop);
            prop_assert!(layer_of(p).content > layer_of(q).content || p == q);
        }
    }
}
