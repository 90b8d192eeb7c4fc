#[cfg(test)]
mod tests {
    use crate::gradient::{ScreenVertex, Uniforms, SCREEN_SQUARE};

    #[test]
    fn test_screen_square_covers_clip_space() {
        assert_eq!(SCREEN_SQUARE.len(), 6);

        for corner in [[-1.0, 1.0], [1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]] {
            assert!(
                SCREEN_SQUARE.iter().any(|v| v.position == corner),
                "missing corner {corner:?}"
            );
        }
    }

    #[test]
    fn test_uniform_layout_is_16_bytes() {
        // Padded out to the uniform-buffer alignment the shader expects.
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
        assert_eq!(std::mem::size_of::<ScreenVertex>(), 8);
    }
}
