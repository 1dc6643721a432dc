//! Single-page campaign flyers as PDF.
//!
//! A [`FlyerConfig`] describes the content; [`FlyerEngine`] lays it
//! out on A4, A5 or A6 and returns the document bytes. Typography
//! shrinks with the page, within per-element floors.

pub mod assets;
mod blocks;
mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod qr;
pub mod settings;
pub mod textflow;

pub use assets::{AssetPurpose, AssetResolver};
pub use blocks::{BlockKind, RenderedBlock};
pub use canvas::TextRun;
pub use config::{FlyerConfig, FlyerLabels, Link, Topic};
pub use engine::{FlyerEngine, RenderedFlyer, CONTENT_TYPE};
pub use error::{FlyerError, Result};
pub use geometry::{mm, Orientation, PageSize, Scaled};
pub use settings::EngineSettings;
