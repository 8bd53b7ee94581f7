/// Full angular span across the element, in degrees (±10° per axis).
pub const TILT_RANGE_DEG: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();

        !finite || self.width <= 0.0 || self.height <= 0.0
    }

    /// Pointer offset relative to the top-left corner, clamped to the rectangle.
    pub fn pointer_offset(&self, client_x: f64, client_y: f64) -> Option<PointerOffset> {
        if self.is_degenerate() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }

        Some(PointerOffset {
            x: (client_x - self.left).clamp(0.0, self.width),
            y: (client_y - self.top).clamp(0.0, self.height),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// Rotation applied to the tilted element, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub const RESTING: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn css_transform(&self) -> String {
        // Adding +0.0 turns -0.0 into 0.0 so the center never prints "-0.00deg".
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg) translateZ(0)",
            self.rotate_x_deg + 0.0,
            self.rotate_y_deg + 0.0
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Tilt toward the pointer, or `None` when the rectangle has no area.
pub fn tilt_for_pointer(rect: &BoundingRect, client_x: f64, client_y: f64) -> Option<Tilt> {
    let offset = rect.pointer_offset(client_x, client_y)?;
    let rotate_x = (offset.y / rect.height - 0.5) * TILT_RANGE_DEG;
    let rotate_y = (offset.x / rect.width - 0.5) * TILT_RANGE_DEG;

    Some(Tilt {
        rotate_x_deg: -rotate_x,
        rotate_y_deg: rotate_y,
    })
}

/// Tilt state owned by a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltController {
    current: Tilt,
}

impl TiltController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tilt {
        self.current
    }

    /// Returns whether the transform changed. Degenerate rectangles leave it untouched.
    pub fn pointer_moved(&mut self, rect: &BoundingRect, client_x: f64, client_y: f64) -> bool {
        let Some(next) = tilt_for_pointer(rect, client_x, client_y) else {
            return false;
        };

        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn pointer_left(&mut self) {
        self.current = Tilt::RESTING;
    }
}
