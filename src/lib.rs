//! # Bleedframe
//!
//! Author one crop inside a print bleed frame, then reproduce that exact
//! composition across every output size: print-ready PDF pages, a fixed web
//! thumbnail, and percentage resizes of the untouched original — bundled
//! per batch into one archive.
//!
//! # Architecture: Author, Then Export
//!
//! The tool runs as two stages connected by a JSON session document:
//!
//! ```text
//! 1. crop     adjust per-image placement/options  →  bleedframe-session.json
//! 2. export   session + source images             →  named files → archive.zip
//! ```
//!
//! The split exists because authoring and exporting are different
//! concurrency domains: authoring mutates live state continuously while a
//! gesture is in flight, export must only ever see a committed snapshot.
//! Persisting the committed snapshots between stages makes that handoff
//! explicit and inspectable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`specs`] | Output registry — print geometries, 300 DPI pixel math, codec qualities |
//! | [`crop`] | `CropState` and the gesture state machine with commit-at-gesture-end |
//! | [`transform`] | Pure placement math: one authored crop → draw rectangle per target size |
//! | [`raster`] | Exact-size white surface, Lanczos3 draw with clipping, JPEG/WebP encoding |
//! | [`pdf`] | Single-page PDF wrapping a print raster at physical page size |
//! | [`resize`] | Crop-independent percentage resize plus the savings comparison line |
//! | [`naming`] | Base-name resolution and the fixed `{base}_{target}` file naming |
//! | [`export`] | Per-image orchestrator — enabled targets in fixed order |
//! | [`batch`] | Strictly sequential multi-image coordinator |
//! | [`archive`] | Zip layout: single batch at root, multiple batches foldered |
//! | [`session`] | Per-image authored state, indexed by path, persisted as JSON |
//! | [`config`] | `bleedframe.toml` defaults for reference width and target selection |
//! | [`output`] | CLI reporting — pure `format_*` line builders |
//! | [`types`] | Shared result types (`Dimensions`, `GeneratedFile`, `BatchResult`) |
//!
//! # Design Decisions
//!
//! ## One Crop, Many Resolutions
//!
//! Crops are authored against the bleed frame at an on-screen reference
//! width and scaled linearly onto each target raster ([`transform`]). Any
//! target sharing the frame's aspect reproduces the framing exactly; the
//! fixed-aspect web thumbnail is a documented approximation. This keeps
//! authored state resolution-independent — no per-target coordinates are
//! ever stored.
//!
//! ## Ceiling, Not Rounding, for Print Pixels
//!
//! Print raster sizes are `ceil(total_cm × 118.1102)` per axis. Rounding
//! down even fractionally would leave an unprinted sliver at the cut line;
//! a fraction of a pixel of overshoot is invisible.
//!
//! ## Sequential Batches
//!
//! The batch coordinator processes one image at a time and drops its
//! decoded raster before the next decode. An A1 surface alone is ~200 MB;
//! bounding peak memory to one image is worth more than parallel speed
//! here.
//!
//! ## Pure-Rust Pipeline
//!
//! Decode and encode go through the `image` and `webp` crates, PDFs through
//! `lopdf`, archives through `zip` — no ImageMagick, no Ghostscript, no
//! system dependencies. The binary is fully self-contained.

pub mod archive;
pub mod batch;
pub mod config;
pub mod crop;
pub mod export;
pub mod naming;
pub mod output;
pub mod pdf;
pub mod raster;
pub mod resize;
pub mod session;
pub mod specs;
pub mod transform;
pub mod types;
