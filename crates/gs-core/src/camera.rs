/// Distance covered by a single movement step.
pub const MOVE_STEP: f32 = 0.1;

/// Pannable 2D camera driven by discrete key and pointer events.
///
/// The basis vectors describe a notional camera frame (right/up/forward
/// scaled by [`MOVE_STEP`]). Initially the frame matches the world axes.
/// No operation rotates the frame yet, so the vectors stay at their
/// construction values; movement still routes through them so a rotated
/// frame would steer the planar motion.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Current planar position (x, y). Unbounded.
    pub position: [f32; 2],
    pub basis_right: [f32; 3],
    pub basis_up: [f32; 3],
    pub basis_forward: [f32; 3],
    drag_anchor: Option<[f32; 2]>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            basis_right: [MOVE_STEP, 0.0, 0.0],
            basis_up: [0.0, MOVE_STEP, 0.0],
            basis_forward: [0.0, 0.0, MOVE_STEP],
            drag_anchor: None,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planar displacement of one forward step.
    fn forward_delta(&self) -> [f32; 2] {
        let [fx, fy, _] = self.basis_forward;
        if fx == 0.0 && fy == 0.0 {
            // Pointing straight up or down: fall back to the up-basis plane
            // components, unnormalized.
            [self.basis_up[0], self.basis_up[1]]
        } else {
            let length = (fx * fx + fy * fy).sqrt();
            [fx / length * MOVE_STEP, fy / length * MOVE_STEP]
        }
    }

    /// Step along the forward basis. Returns the new position.
    pub fn move_forward(&mut self) -> [f32; 2] {
        let [dx, dy] = self.forward_delta();
        self.position[0] += dx;
        self.position[1] += dy;
        self.position
    }

    /// Step against the forward basis. Returns the new position.
    pub fn move_backward(&mut self) -> [f32; 2] {
        let [dx, dy] = self.forward_delta();
        self.position[0] -= dx;
        self.position[1] -= dy;
        self.position
    }

    /// Step along the right basis. Returns the new position.
    ///
    /// Adds the raw basis components, which equal a step of [`MOVE_STEP`]
    /// for the unrotated frame.
    pub fn move_right(&mut self) -> [f32; 2] {
        self.position[0] += self.basis_right[0];
        self.position[1] += self.basis_right[1];
        self.position
    }

    /// Step against the right basis. Returns the new position.
    pub fn move_left(&mut self) -> [f32; 2] {
        self.position[0] -= self.basis_right[0];
        self.position[1] -= self.basis_right[1];
        self.position
    }

    /// Start a drag, anchored at the given pointer position.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag_anchor = Some([x, y]);
    }

    /// Advance an active drag to a new pointer position.
    ///
    /// Returns the delta from the previous anchor and re-anchors there, so
    /// successive calls report frame-to-frame deltas rather than offsets
    /// from the drag start. Returns `None` while no drag is active.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<[f32; 2]> {
        let [ax, ay] = self.drag_anchor?;
        self.drag_anchor = Some([x, y]);
        Some([x - ax, y - ay])
    }

    /// End the drag. A no-op while idle.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }
}
