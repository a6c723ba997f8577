//! Crop placement state and the interaction state machine around it.
//!
//! A [`CropState`] describes where an image sits inside the bleed frame:
//! pixel offsets from the frame center plus a zoom factor, all expressed at
//! the reference width the frame was displayed at when the state was
//! authored. The state is deliberately unconstrained in x/y — panning the
//! image out of the frame is legal and simply leaves background visible.
//!
//! ## Two state domains
//!
//! The interactive preview mutates a *live* copy continuously while a
//! gesture is in flight. Export only ever sees the *committed* snapshot,
//! taken when the gesture ends. [`CropEditor`] enforces that split: readers
//! of [`CropEditor::committed`] never observe a half-finished drag, and the
//! two domains share nothing but the snapshot handed over at commit time.

use serde::{Deserialize, Serialize};

/// Smallest accepted zoom factor. The zoom invariant is `scale > 0`; all
/// constructors and mutations clamp up to this floor.
pub const MIN_SCALE: f64 = 0.01;

/// Placement of an image inside the bleed frame, authored at a specific
/// reference width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropState {
    /// Horizontal offset of the image center from the frame center, in
    /// reference-width pixels. Unconstrained.
    pub x: f64,
    /// Vertical offset from the frame center. Unconstrained.
    pub y: f64,
    /// Zoom factor. Always positive.
    pub scale: f64,
}

impl CropState {
    /// The state every freshly loaded image starts with: centered, unzoomed.
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    /// Build a state from raw components, clamping the scale to stay positive.
    pub fn with(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x,
            y,
            scale: scale.max(MIN_SCALE),
        }
    }

    /// Replace the zoom factor, keeping it positive.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.max(MIN_SCALE);
    }
}

impl Default for CropState {
    fn default() -> Self {
        Self::new()
    }
}

/// A gesture in flight, or none.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Pointer drag. `origin` is the committed state at gesture start;
    /// `from` the pointer position the drag began at.
    Dragging { origin: CropState, from: (f64, f64) },
}

/// Interaction state machine for one image's crop.
///
/// The preview loop drives `begin_drag`/`drag_to`/`end_drag` and `zoom_to`;
/// anything that exports reads [`committed`](Self::committed). Commits only
/// happen at gesture end, so a consumer polling `committed` mid-drag sees
/// the pre-gesture state.
#[derive(Debug, Clone)]
pub struct CropEditor {
    live: CropState,
    committed: CropState,
    gesture: Gesture,
}

impl CropEditor {
    pub fn new() -> Self {
        Self::from_state(CropState::new())
    }

    /// Resume editing from a previously committed state.
    pub fn from_state(state: CropState) -> Self {
        Self {
            live: state,
            committed: state,
            gesture: Gesture::Idle,
        }
    }

    /// The state the render loop draws. Updates continuously during a drag.
    pub fn live(&self) -> &CropState {
        &self.live
    }

    /// The snapshot export is allowed to read. Stable for the duration of a
    /// gesture.
    pub fn committed(&self) -> &CropState {
        &self.committed
    }

    /// Start a pan gesture at the given pointer position (reference-width
    /// pixels). Starting a new drag while one is active re-anchors it.
    pub fn begin_drag(&mut self, px: f64, py: f64) {
        self.gesture = Gesture::Dragging {
            origin: self.live,
            from: (px, py),
        };
    }

    /// Move the pointer; only meaningful mid-drag, ignored when idle.
    pub fn drag_to(&mut self, px: f64, py: f64) {
        if let Gesture::Dragging { origin, from } = self.gesture {
            self.live.x = origin.x + (px - from.0);
            self.live.y = origin.y + (py - from.1);
        }
    }

    /// End the pan gesture and commit the live state.
    pub fn end_drag(&mut self) -> CropState {
        self.gesture = Gesture::Idle;
        self.commit()
    }

    /// Set the zoom factor on the live state. Zoom sliders report a final
    /// value on release, so callers follow with [`commit`](Self::commit).
    pub fn zoom_to(&mut self, scale: f64) {
        self.live.set_scale(scale);
    }

    /// Publish the live state as the committed snapshot and return a copy.
    pub fn commit(&mut self) -> CropState {
        self.committed = self.live;
        self.committed
    }
}

impl Default for CropEditor {
    fn default() -> Self {
        Self::new()
    }
}
