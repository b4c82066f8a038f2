// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://pokemondb.net/pokedex/national";
pub const ARTWORK_BASE: &str = "https://img.pokemondb.net/artwork/large/";
pub const USER_AGENT: &str = concat!("dex_sheet/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Files
pub const DATA_FILE: &str = "pokemon_data.json";
pub const SHEET_FILE: &str = "pokemon_placeholders.pdf";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Page (A4 in points)
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 20.0;
pub const H_SPACE: f32 = 40.0;
pub const V_SPACE: f32 = 30.0;

// Card (~63x88mm)
pub const CARD_WIDTH: f32 = 179.0;
pub const CARD_HEIGHT: f32 = 249.0;
pub const COLUMNS: usize = 2;
pub const ROWS: usize = 3;

// Card contents
pub const MAX_IMG_WIDTH: f32 = 120.0;
pub const MAX_IMG_HEIGHT: f32 = 120.0;
pub const TEXT_INSET: f32 = 10.0;
pub const NAME_DROP: f32 = 30.0;
pub const ID_RISE: f32 = 10.0;
pub const NAME_SIZE: f32 = 12.0;
pub const ID_SIZE: f32 = 10.0;
pub const BORDER_WIDTH: f32 = 1.0;
