// src/sheet/mod.rs

pub mod document;
pub mod image;
pub mod layout;
pub mod render;
mod winansi;

pub use self::image::{DecodedImage, EmbedOutcome, ImageData, ImageKind};
pub use layout::{Card, PagePlan, Rect, SheetPlan, plan_sheet};
pub use render::{CardImage, CardReport, RenderedSheet, SheetReport, render_sheet};
