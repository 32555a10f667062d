//! Tests for strategy execution and candidate comparison

#[cfg(test)]
mod tests {
    use crate::solid;
    use image::{Rgb, RgbImage};
    use quadmosaic::CompositeError;
    use quadmosaic::compose::{
        Axis, Candidate, InputSet, Slot, Strategy, arrange, closer_to_square,
    };
    use quadmosaic::geometry::{Orientation, square_distance};

    const RED: [u8; 3] = [255, 0, 0];
    const GREEN: [u8; 3] = [0, 255, 0];
    const BLUE: [u8; 3] = [0, 0, 255];
    const GRAY: [u8; 3] = [90, 90, 90];

    fn inputs(sizes: [(u32, u32); 4]) -> InputSet {
        let colors = [RED, GREEN, BLUE, GRAY];
        let images: Vec<RgbImage> = sizes
            .iter()
            .zip(colors)
            .map(|(&(w, h), color)| solid(w, h, color))
            .collect();
        InputSet::new(images).unwrap()
    }

    // Tests four 800x600 landscapes form two stacked columns side by side
    // Verified by stacking the columns instead
    #[test]
    fn test_four_landscapes() {
        let arrangement = arrange(&inputs([(800, 600); 4]));

        assert_eq!(arrangement.strategy, Strategy::AllLandscape);
        assert_eq!(arrangement.image.dimensions(), (1600, 1200));
        assert!(arrangement.decisions.is_empty());
        assert!(
            (f64::from(arrangement.image.width()) / f64::from(arrangement.image.height())
                - 1.333)
                .abs()
                < 1e-3
        );
    }

    // Tests four portraits form two rows stacked
    #[test]
    fn test_four_portraits() {
        let arrangement = arrange(&inputs([(6, 8); 4]));

        assert_eq!(arrangement.strategy, Strategy::AllPortrait);
        assert_eq!(arrangement.image.dimensions(), (12, 16));
        assert_eq!(*arrangement.image.get_pixel(0, 0), Rgb(RED));
        assert_eq!(*arrangement.image.get_pixel(6, 0), Rgb(GREEN));
        assert_eq!(*arrangement.image.get_pixel(0, 8), Rgb(BLUE));
        assert_eq!(*arrangement.image.get_pixel(11, 15), Rgb(GRAY));
    }

    // Tests two 600x800 portraits and two 800x600 landscapes pick the vertical combination
    // Verified by preferring the horizontal candidate
    #[test]
    fn test_mixed_prefers_closer_candidate() {
        let set = inputs([(600, 800), (600, 800), (800, 600), (800, 600)]);
        let arrangement = arrange(&set);

        assert!(matches!(arrangement.strategy, Strategy::Mixed { .. }));
        assert_eq!(arrangement.image.dimensions(), (1200, 2000));
        assert_eq!(arrangement.decisions, vec![Axis::Vertical]);

        // Both candidates exist and the kept one is the closer of the two
        let vertical = square_distance(1200, 2000);
        let horizontal = square_distance(2000, 1200);
        assert!(vertical < horizontal);
    }

    // Tests the horizontal combination wins when it is closer to square
    #[test]
    fn test_mixed_horizontal_winner() {
        let arrangement = arrange(&inputs([(1, 10), (3, 2), (1, 10), (3, 2)]));

        assert!(matches!(arrangement.strategy, Strategy::Mixed { .. }));
        assert_eq!(arrangement.image.dimensions(), (5, 10));
        assert_eq!(arrangement.decisions, vec![Axis::Horizontal]);
    }

    // Tests equal distances keep the first listed candidate
    // Verified by using < instead of <= in the comparison
    #[test]
    fn test_tie_keeps_first_candidate() {
        let wide = Candidate {
            image: solid(3, 2, RED),
            axis: Axis::Vertical,
            distance: square_distance(3, 2),
        };
        let tall = Candidate {
            image: solid(1, 2, BLUE),
            axis: Axis::Horizontal,
            distance: square_distance(1, 2),
        };
        assert!((wide.distance - tall.distance).abs() < f64::EPSILON);

        assert_eq!(closer_to_square(wide.clone(), tall.clone()).axis, Axis::Vertical);
        assert_eq!(closer_to_square(tall, wide).axis, Axis::Horizontal);
    }

    // Tests a strictly closer second candidate wins
    #[test]
    fn test_closer_second_candidate_wins() {
        let a = Candidate::join(Axis::Vertical, &solid(4, 4, RED), &solid(4, 4, BLUE));
        let b = Candidate::join(Axis::Horizontal, &solid(4, 8, RED), &solid(4, 8, BLUE));

        let winner = closer_to_square(a, b);
        assert_eq!(winner.axis, Axis::Horizontal);
        assert_eq!(winner.image.dimensions(), (8, 8));
        assert!(winner.distance.abs() < f64::EPSILON);
    }

    // Tests three portraits with a tie on the third and a square fourth
    // Verified by letting ties favor the horizontal candidate
    #[test]
    fn test_portrait_majority_with_tie() {
        let arrangement = arrange(&inputs([(1, 2), (1, 2), (1, 2), (2, 2)]));

        assert!(matches!(
            arrangement.strategy,
            Strategy::PortraitMajority { .. }
        ));
        assert_eq!(arrangement.decisions, vec![Axis::Vertical, Axis::Horizontal]);
        assert_eq!(arrangement.image.dimensions(), (4, 4));
    }

    // Tests the fourth image is taken by position, so a leading square is left out
    #[test]
    fn test_portrait_majority_fourth_by_position() {
        let set = inputs([(2, 2), (1, 2), (1, 2), (1, 2)]);
        assert_eq!(set.orientations()[0], Orientation::Square);

        let arrangement = arrange(&set);

        assert_eq!(
            arrangement.strategy,
            Strategy::PortraitMajority {
                portraits: [Slot::Second, Slot::Third, Slot::Fourth],
                fourth: Slot::Fourth,
            }
        );
        assert_eq!(arrangement.image.dimensions(), (3, 4));
        assert!(arrangement.image.pixels().all(|pixel| *pixel != Rgb(RED)));
    }

    // Tests three landscapes with a square fourth
    #[test]
    fn test_landscape_majority() {
        let arrangement = arrange(&inputs([(2, 1), (2, 1), (2, 1), (2, 2)]));

        assert!(matches!(
            arrangement.strategy,
            Strategy::LandscapeMajority { .. }
        ));
        assert_eq!(arrangement.decisions, vec![Axis::Vertical, Axis::Horizontal]);
        assert_eq!(arrangement.image.dimensions(), (4, 3));
    }

    // Tests the 2x2 grid for two portraits and two squares
    #[test]
    fn test_grid() {
        let arrangement = arrange(&inputs([(1, 2), (1, 2), (2, 2), (2, 2)]));

        assert_eq!(arrangement.strategy, Strategy::Grid);
        assert_eq!(arrangement.image.dimensions(), (4, 4));
        assert_eq!(*arrangement.image.get_pixel(3, 0), Rgb([255, 255, 255]));
        assert_eq!(*arrangement.image.get_pixel(0, 2), Rgb(BLUE));
        assert_eq!(*arrangement.image.get_pixel(2, 2), Rgb(GRAY));
    }

    // Tests identical inputs always give identical output
    #[test]
    fn test_arrangement_deterministic() {
        let set = inputs([(5, 9), (7, 3), (4, 4), (9, 2)]);
        let first = arrange(&set);
        let second = arrange(&set);

        assert_eq!(first.strategy, second.strategy);
        assert_eq!(first.decisions, second.decisions);
        assert_eq!(first.image, second.image);
        assert!(first.image.width() > 0 && first.image.height() > 0);
    }

    // Tests the input set rejects anything but four images
    // Verified by accepting any non-empty list
    #[test]
    fn test_input_set_count() {
        for count in [0, 3, 5] {
            let images = vec![solid(2, 2, RED); count];
            match InputSet::new(images) {
                Err(CompositeError::InvalidInputCount { expected, actual }) => {
                    assert_eq!(expected, 4);
                    assert_eq!(actual, count);
                }
                other => unreachable!("Expected InvalidInputCount, got {other:?}"),
            }
        }
    }

    // Tests slot lookup returns images in input order
    #[test]
    fn test_input_set_slots() {
        let set = inputs([(1, 1), (2, 2), (3, 3), (4, 4)]);
        for slot in Slot::ALL {
            let side = slot.index() as u32 + 1;
            assert_eq!(set.image(slot).dimensions(), (side, side));
        }
    }
}
