/// Viewport and document measurements read at the moment of a scroll or resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    pub fn new(scroll_offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            document_height,
            viewport_height,
        }
    }

    pub fn scrollable_distance(&self) -> f64 {
        let distance = self.document_height - self.viewport_height;
        if distance.is_finite() {
            distance.max(0.0)
        } else {
            0.0
        }
    }

    pub fn fraction(&self) -> f64 {
        scroll_fraction(self)
    }
}

/// Scroll offset as a fraction of the scrollable distance, always in `[0, 1]`.
pub fn scroll_fraction(geometry: &ScrollGeometry) -> f64 {
    let distance = geometry.scrollable_distance();
    if distance <= 0.0 || !geometry.scroll_offset.is_finite() {
        return 0.0;
    }

    (geometry.scroll_offset / distance).clamp(0.0, 1.0)
}

/// Inline style for the progress bar, scaled from the left edge.
pub fn progress_bar_style(fraction: f64) -> String {
    let scale = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    format!("transform: scaleX({scale:.4}); transform-origin: 0% 50%;")
}
