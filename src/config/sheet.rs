// src/config/sheet.rs
use super::consts::*;
use crate::error::{Result, SheetError};

/// Geometry of the card sheet, in PDF points with the origin at the bottom-left.
///
/// Passed by reference into the layout and drawing code so alternate sheets
/// (tests, other paper sizes) never touch the module constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub h_space: f32,
    pub v_space: f32,

    pub card_width: f32,
    pub card_height: f32,
    pub columns: usize,
    pub rows: usize,

    pub max_img_width: f32,
    pub max_img_height: f32,

    pub text_inset: f32,  // left inset of both labels
    pub name_drop: f32,   // name baseline below the card top
    pub id_rise: f32,     // id baseline above the card bottom
    pub name_size: f32,
    pub id_size: f32,
    pub border_width: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margin: MARGIN,
            h_space: H_SPACE,
            v_space: V_SPACE,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            columns: COLUMNS,
            rows: ROWS,
            max_img_width: MAX_IMG_WIDTH,
            max_img_height: MAX_IMG_HEIGHT,
            text_inset: TEXT_INSET,
            name_drop: NAME_DROP,
            id_rise: ID_RISE,
            name_size: NAME_SIZE,
            id_size: ID_SIZE,
            border_width: BORDER_WIDTH,
        }
    }
}

impl SheetConfig {
    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Reject geometries where a full page would spill off the paper
    /// or an image box could not sit inside its card.
    ///
    /// Only the page edges are enforced, not the margin: the default sheet puts
    /// the bottom row 15pt above the paper edge, inside the nominal 20pt margin.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("max_img_width", self.max_img_width),
            ("max_img_height", self.max_img_height),
        ];
        for (field, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(SheetError::InvalidGeometry(format!("{field} must be positive, got {v}")));
            }
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(SheetError::InvalidGeometry(format!(
                "grid must have at least one cell, got {}x{}",
                self.columns, self.rows
            )));
        }

        let cols = self.columns as f32;
        let rows = self.rows as f32;
        let right = self.margin + cols * self.card_width + (cols - 1.0) * self.h_space;
        if self.margin < 0.0 || right > self.page_width {
            return Err(SheetError::InvalidGeometry(format!(
                "{} columns span {right}pt on a {}pt page",
                self.columns, self.page_width
            )));
        }
        let bottom = self.page_height - self.margin - rows * self.card_height - (rows - 1.0) * self.v_space;
        if bottom < 0.0 {
            return Err(SheetError::InvalidGeometry(format!(
                "{} rows end {}pt below the page",
                self.rows, -bottom
            )));
        }

        if self.max_img_width > self.card_width || self.max_img_height > self.card_height {
            return Err(SheetError::InvalidGeometry(format!(
                "image box {}x{} exceeds card {}x{}",
                self.max_img_width, self.max_img_height, self.card_width, self.card_height
            )));
        }
        Ok(())
    }
}
