pub mod export;
pub mod palette;
pub mod store;

/// Number of palettes in a store, indices 0 through 9.
pub const PALETTE_COUNT: usize = 10;

/// Maximum number of colors a single palette can hold.
pub const PALETTE_CAPACITY: usize = 5;

/// Default name of the persisted store file.
pub const DEFAULT_STORE_FILE: &str = "palettes.json";
