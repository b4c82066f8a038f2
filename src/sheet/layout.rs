// src/sheet/layout.rs
//
// Pure geometry: where each record lands and how big its image is drawn.
// All coordinates are PDF points, origin bottom-left.

use crate::config::SheetConfig;
use crate::core::sanitize::{artwork_slug, display_name};
use crate::record::{Record, sort_records};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn top(&self) -> f32 { self.y + self.height }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.top() <= self.top()
    }
}

/// One record placed on a page, with its labels already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub record: Record,
    pub cell: usize,
    pub bounds: Rect,
    pub name: String,
    pub id_label: String,
    pub image_url: String,
}

impl Card {
    pub fn name_anchor(&self, cfg: &SheetConfig) -> (f32, f32) {
        (self.bounds.x + cfg.text_inset, self.bounds.top() - cfg.name_drop)
    }

    pub fn id_anchor(&self, cfg: &SheetConfig) -> (f32, f32) {
        (self.bounds.x + cfg.text_inset, self.bounds.y + cfg.id_rise)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagePlan {
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetPlan {
    pub pages: Vec<PagePlan>,
}

impl SheetPlan {
    pub fn card_count(&self) -> usize {
        self.pages.iter().map(|p| p.cards.len()).sum()
    }
}

pub fn page_count(records: usize, per_page: usize) -> usize {
    records.div_ceil(per_page)
}

/// Bounds of grid cell `i`; row 0 is the top row.
pub fn cell_rect(cfg: &SheetConfig, i: usize) -> Rect {
    let row = (i / cfg.columns) as f32;
    let col = (i % cfg.columns) as f32;
    Rect {
        x: cfg.margin + col * (cfg.card_width + cfg.h_space),
        y: cfg.page_height - cfg.margin - (row + 1.0) * cfg.card_height - row * cfg.v_space,
        width: cfg.card_width,
        height: cfg.card_height,
    }
}

pub fn id_label(id: Option<u32>) -> String {
    match id {
        Some(id) => format!("Pokédex #{id:03}"),
        None => "Pokédex #???".to_string(),
    }
}

/// Stored image URL, else the artwork URL derived from the name.
pub fn image_url(record: &Record, artwork_base: &str) -> String {
    match &record.image {
        Some(url) => url.clone(),
        None => format!("{artwork_base}{}.jpg", artwork_slug(&record.name)),
    }
}

/// Scale `natural_w x natural_h` into the image box without upscaling and
/// center the result in `card`.
pub fn fit_image(cfg: &SheetConfig, card: &Rect, natural_w: u32, natural_h: u32) -> Rect {
    let (w, h) = (natural_w as f32, natural_h as f32);
    let scale = (cfg.max_img_width / w).min(cfg.max_img_height / h).min(1.0);
    let width = w * scale;
    let height = h * scale;
    Rect {
        x: card.x + (card.width - width) / 2.0,
        y: card.y + (card.height - height) / 2.0,
        width,
        height,
    }
}

/// Sort by id, then deal records into pages cell by cell.
pub fn plan_sheet(mut records: Vec<Record>, cfg: &SheetConfig, artwork_base: &str) -> SheetPlan {
    sort_records(&mut records);
    let per_page = cfg.cards_per_page();
    let mut pages: Vec<PagePlan> = Vec::with_capacity(page_count(records.len(), per_page));

    for (n, record) in records.into_iter().enumerate() {
        let cell = n % per_page;
        if cell == 0 {
            pages.push(PagePlan { cards: Vec::with_capacity(per_page) });
        }
        let card = Card {
            cell,
            bounds: cell_rect(cfg, cell),
            name: display_name(&record.name),
            id_label: id_label(record.id),
            image_url: image_url(&record, artwork_base),
            record,
        };
        if let Some(page) = pages.last_mut() {
            page.cards.push(card);
        }
    }
    SheetPlan { pages }
}
