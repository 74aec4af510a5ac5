//! Viewport state for the embedded widget.
//!
//! The widget spreads nodes apart proportionally to its edge length, so the
//! zoom buttons shorten or lengthen edges rather than scaling the canvas.

/// Edge length the widget starts with.
pub const DEFAULT_EDGE_LENGTH: u32 = 120;

/// Step applied per zoom action.
const EDGE_STEP: u32 = 10;

/// Lower bound; below this the layout collapses into an unreadable knot.
const MIN_EDGE_LENGTH: u32 = 10;

/// View parameters forwarded to the widget alongside the graph lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
	/// Current edge length in widget units.
	pub edge_length: u32,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			edge_length: DEFAULT_EDGE_LENGTH,
		}
	}
}

impl Viewport {
	/// Pull nodes closer together, never below the minimum edge length.
	pub fn zoom_in(&mut self) {
		self.edge_length = if self.edge_length > MIN_EDGE_LENGTH {
			self.edge_length - EDGE_STEP
		} else {
			MIN_EDGE_LENGTH
		};
	}

	/// Spread nodes further apart; no upper bound.
	pub fn zoom_out(&mut self) {
		self.edge_length += EDGE_STEP;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zoom_in_steps_down_from_default() {
		let mut viewport = Viewport::default();
		assert_eq!(viewport.edge_length, 120);

		for _ in 0..5 {
			viewport.zoom_in();
		}
		assert_eq!(viewport.edge_length, 70);
	}

	#[test]
	fn zoom_in_floors_at_minimum() {
		let mut viewport = Viewport::default();
		for _ in 0..15 {
			viewport.zoom_in();
		}
		assert_eq!(viewport.edge_length, 10);

		viewport.zoom_in();
		assert_eq!(viewport.edge_length, 10);
	}

	#[test]
	fn zoom_out_is_unbounded() {
		let mut viewport = Viewport::default();
		for _ in 0..100 {
			viewport.zoom_out();
		}
		assert_eq!(viewport.edge_length, 1120);
	}

	#[test]
	fn zooming_back_out_restores_default() {
		let mut viewport = Viewport::default();
		viewport.zoom_in();
		viewport.zoom_out();
		assert_eq!(viewport, Viewport::default());
	}
}
