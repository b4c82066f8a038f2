// src/sheet/render.rs
use log::warn;

use super::document::{PageCanvas, SheetDocument};
use super::image::{EmbedOutcome, load_image};
use super::layout::{Card, fit_image, plan_sheet};
use crate::config::SheetConfig;
use crate::core::net::ByteFetcher;
use crate::error::Result;
use crate::progress::Progress;
use crate::record::Record;

/// What ended up in a card's image slot.
#[derive(Clone, Debug, PartialEq)]
pub enum CardImage {
    Embedded { width: f32, height: f32 },
    Skipped(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardReport {
    pub page: usize,
    pub cell: usize,
    pub id: Option<u32>,
    pub name: String,
    pub image_url: String,
    pub image: CardImage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetReport {
    pub pages: usize,
    pub cards: Vec<CardReport>,
}

impl SheetReport {
    pub fn embedded(&self) -> usize {
        self.cards.iter().filter(|c| matches!(c.image, CardImage::Embedded { .. })).count()
    }

    pub fn skipped(&self) -> usize {
        self.cards.len() - self.embedded()
    }
}

pub struct RenderedSheet {
    pub bytes: Vec<u8>,
    pub report: SheetReport,
}

/// Border, name, id label, then the image if there is one.
pub fn draw_card(
    doc: &mut SheetDocument,
    canvas: &mut PageCanvas,
    cfg: &SheetConfig,
    card: &Card,
    outcome: &EmbedOutcome,
) -> CardImage {
    canvas.stroke_rect(card.bounds, cfg.border_width);

    let (x, y) = card.name_anchor(cfg);
    canvas.text(x, y, cfg.name_size, &card.name);
    let (x, y) = card.id_anchor(cfg);
    canvas.text(x, y, cfg.id_size, &card.id_label);

    match outcome {
        EmbedOutcome::Embedded(img) => {
            let slot = fit_image(cfg, &card.bounds, img.width, img.height);
            let handle = doc.embed_image(img);
            canvas.image(&handle, slot);
            CardImage::Embedded { width: slot.width, height: slot.height }
        }
        EmbedOutcome::Skipped(reason) => CardImage::Skipped(reason.clone()),
    }
}

/// Lay out every record and build the whole document in memory.
/// Images are fetched one card at a time; a failed image only blanks its own slot.
pub fn render_sheet(
    records: Vec<Record>,
    fetcher: &dyn ByteFetcher,
    cfg: &SheetConfig,
    artwork_base: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RenderedSheet> {
    cfg.validate()?;
    let plan = plan_sheet(records, cfg, artwork_base);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(plan.card_count());
    }

    let mut doc = SheetDocument::new(cfg.page_width, cfg.page_height);
    let mut report = SheetReport { pages: plan.pages.len(), cards: Vec::with_capacity(plan.card_count()) };

    for (page_no, page) in plan.pages.iter().enumerate() {
        let mut canvas = doc.begin_page();
        for card in &page.cards {
            let outcome = load_image(fetcher, &card.image_url);
            if let EmbedOutcome::Skipped(reason) = &outcome {
                warn!("Image failed for {}: {}", card.name, reason);
            }
            let image = draw_card(&mut doc, &mut canvas, cfg, card, &outcome);

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(report.cards.len());
            }
            report.cards.push(CardReport {
                page: page_no,
                cell: card.cell,
                id: card.record.id,
                name: card.name.clone(),
                image_url: card.image_url.clone(),
                image,
            });
        }
        doc.finish_page(canvas);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RenderedSheet { bytes: doc.finish(), report })
}
