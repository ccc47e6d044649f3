use chartable::core::BoxSize;
use chartable::interaction::{DragConfig, Draggable, Placement, PointerHookRegistry, PointerSample, PositionMode};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn position_never_leaves_bounds(
        element in (0.0f64..300.0, 0.0f64..300.0),
        container in (0.0f64..1_000.0, 0.0f64..1_000.0),
        press in (-200.0f64..1_200.0, -200.0f64..1_200.0),
        moves in proptest::collection::vec((-2_000.0f64..2_000.0, -2_000.0f64..2_000.0), 0..24),
        seed in any::<u64>()
    ) {
        let registry = PointerHookRegistry::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut draggable = Draggable::attach(
            &registry,
            DragConfig { mode: PositionMode::Fixed, placement: Placement::Random },
        );
        draggable.mount(
            BoxSize::new(element.0, element.1).expect("element"),
            BoxSize::new(container.0, container.1).expect("container"),
            &mut rng,
        );
        let bounds = draggable.bounds();

        draggable.press(press.0, press.1).expect("press");
        for (x, y) in moves {
            draggable.pointer_move(PointerSample::at(x, y));
            let position = draggable.position();
            prop_assert!((0.0..=bounds.max_left).contains(&position.left));
            prop_assert!((0.0..=bounds.max_top).contains(&position.top));
        }
        draggable.release();

        prop_assert_eq!(registry.active_count(), 0);
    }
}
