#[cfg(test)]
mod tests {
    use crate::camera::{Camera, MOVE_STEP};

    #[test]
    fn test_camera_initial_state() {
        let camera = Camera::new();

        assert_eq!(camera.position, [0.0, 0.0]);
        assert_eq!(camera.basis_right, [MOVE_STEP, 0.0, 0.0]);
        assert_eq!(camera.basis_up, [0.0, MOVE_STEP, 0.0]);
        assert_eq!(camera.basis_forward, [0.0, 0.0, MOVE_STEP]);
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_forward_vertical_fallback() {
        // The default forward basis points straight along z, so forward
        // motion falls back to the up-basis plane components.
        let mut camera = Camera::new();
        let pos = camera.move_forward();

        assert_eq!(pos, [0.0, MOVE_STEP]);
        assert_eq!(camera.position, [0.0, MOVE_STEP]);
    }

    #[test]
    fn test_forward_normalizes_planar_projection() {
        let mut camera = Camera::new();
        camera.basis_forward = [3.0, 4.0, 0.0];

        let pos = camera.move_forward();

        // 3-4-5 triangle: the planar projection normalizes exactly.
        assert_eq!(pos, [3.0 / 5.0 * MOVE_STEP, 4.0 / 5.0 * MOVE_STEP]);
    }

    #[test]
    fn test_backward_inverts_forward() {
        let mut camera = Camera::new();
        camera.basis_forward = [3.0, 4.0, 0.0];

        let _ = camera.move_forward();
        let pos = camera.move_backward();

        assert_eq!(pos, [0.0, 0.0]);
    }

    #[test]
    fn test_right_adds_raw_basis() {
        let mut camera = Camera::new();
        let pos = camera.move_right();

        assert_eq!(pos, [MOVE_STEP, 0.0]);
    }

    #[test]
    fn test_right_then_left_round_trips() {
        let mut camera = Camera::new();
        let _ = camera.move_right();
        let pos = camera.move_left();

        // Exact inverse: both sides add and subtract the same stored vector.
        assert_eq!(pos, [0.0, 0.0]);
    }

    #[test]
    fn test_drag_deltas_are_frame_to_frame() {
        let mut camera = Camera::new();

        camera.begin_drag(10.0, 10.0);
        assert_eq!(camera.drag_to(15.0, 12.0), Some([5.0, 2.0]));
        assert_eq!(camera.drag_to(20.0, 20.0), Some([5.0, 8.0]));

        camera.end_drag();
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_drag_ignored_while_idle() {
        let mut camera = Camera::new();

        assert_eq!(camera.drag_to(5.0, 5.0), None);

        // Releasing without a press is tolerated.
        camera.end_drag();
        assert_eq!(camera.drag_to(5.0, 5.0), None);
    }

    #[test]
    fn test_drag_does_not_move_position() {
        let mut camera = Camera::new();

        camera.begin_drag(0.0, 0.0);
        let _ = camera.drag_to(100.0, 100.0);
        camera.end_drag();

        assert_eq!(camera.position, [0.0, 0.0]);
    }
}
