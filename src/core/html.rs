// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, SheetError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SheetError::Selector(format!("{css:?}: {e}")))
}

fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(|hit| hit.text().collect())
}

/// Whitespace-normalized text of the first descendant matching `sel`.
/// Empty when nothing matches.
pub fn text_of(el: ElementRef<'_>, sel: &Selector) -> String {
    first_text(el, sel).map(|t| normalize_ws(&t)).unwrap_or_default()
}

/// Text of the first descendant matching `sel`, trimmed at both ends only.
pub fn trimmed_text_of(el: ElementRef<'_>, sel: &Selector) -> String {
    first_text(el, sel).map(|t| t.trim().to_string()).unwrap_or_default()
}

/// Attribute of the first descendant matching `sel`.
pub fn attr_of(el: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    el.select(sel).next()?.value().attr(attr).map(str::to_string)
}
