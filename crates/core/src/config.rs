//! Game configuration: board dimensions, tile set, win threshold.

use crate::types::{
    Candy, TileKind, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_SCORE, MAX_KINDS, MIN_KINDS,
    POINTS_PER_TILE,
};

/// Errors raised while building or validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: u8, cols: u8 },

    #[error("tile set needs between {min} and {max} kinds (got {got})")]
    TileCount { got: usize, min: usize, max: usize },

    #[error("win score must be greater than zero")]
    ZeroWinScore,

    #[error("board is {got_rows}x{got_cols} but the configuration expects {rows}x{cols}")]
    BoardMismatch {
        rows: u8,
        cols: u8,
        got_rows: u8,
        got_cols: u8,
    },

    #[error("board uses kind {kind} but the tile set only has {kinds} kinds")]
    UnknownKind { kind: u8, kinds: usize },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// The closed set of tile kinds, one display symbol per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    symbols: Vec<String>,
}

impl TileSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// The six default candies
    pub fn candies() -> Self {
        Self::new(Candy::ALL.iter().map(|c| c.symbol()))
    }

    /// Comma-separated symbols. Candy names ("milk", "Cookie") stand for
    /// their candy's symbol; anything else is taken literally.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| match Candy::from_str(s) {
                    Some(candy) => candy.symbol().to_string(),
                    None => s.to_string(),
                }),
        )
    }

    /// Placeholder set of `count` kinds named by letter ("A", "B", ...)
    pub fn lettered(count: u8) -> Self {
        Self::new((0..count).map(|i| TileKind(i).letter().to_string()))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Kind count as drawn by tile sources. Only meaningful once validated.
    pub fn kinds(&self) -> u8 {
        self.symbols.len().min(MAX_KINDS) as u8
    }

    pub fn symbol(&self, kind: TileKind) -> Option<&str> {
        self.symbols.get(kind.index()).map(String::as_str)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::candies()
    }
}

/// Game configuration supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub tiles: TileSet,
    pub win_score: u32,
    pub points_per_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tiles: TileSet::candies(),
            win_score: DEFAULT_WIN_SCORE,
            points_per_tile: POINTS_PER_TILE,
        }
    }
}

impl GameConfig {
    /// Default configuration resized to `rows x cols`
    pub fn with_size(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// - `SWEET_MATCH_ROWS`, `SWEET_MATCH_COLS`: board size
    /// - `SWEET_MATCH_WIN_SCORE`: win threshold
    /// - `SWEET_MATCH_POINTS_PER_TILE`: points per removed tile
    /// - `SWEET_MATCH_TILES`: comma-separated tile symbols or candy names
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(v) = get("SWEET_MATCH_ROWS") {
            config.rows = parse_value("SWEET_MATCH_ROWS", &v)?;
        }
        if let Some(v) = get("SWEET_MATCH_COLS") {
            config.cols = parse_value("SWEET_MATCH_COLS", &v)?;
        }
        if let Some(v) = get("SWEET_MATCH_WIN_SCORE") {
            config.win_score = parse_value("SWEET_MATCH_WIN_SCORE", &v)?;
        }
        if let Some(v) = get("SWEET_MATCH_POINTS_PER_TILE") {
            config.points_per_tile = parse_value("SWEET_MATCH_POINTS_PER_TILE", &v)?;
        }
        if let Some(v) = get("SWEET_MATCH_TILES") {
            config.tiles = TileSet::parse(&v);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let kinds = self.tiles.len();
        if !(MIN_KINDS..=MAX_KINDS).contains(&kinds) {
            return Err(ConfigError::TileCount {
                got: kinds,
                min: MIN_KINDS,
                max: MAX_KINDS,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_matches_reference_game() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (7, 7));
        assert_eq!(config.tiles.len(), 6);
        assert_eq!(config.win_score, 300);
        assert_eq!(config.points_per_tile, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SWEET_MATCH_ROWS", "5"),
            ("SWEET_MATCH_COLS", " 8 "),
            ("SWEET_MATCH_WIN_SCORE", "120"),
            ("SWEET_MATCH_TILES", "x, y ,z,"),
        ]))
        .unwrap();
        assert_eq!((config.rows, config.cols), (5, 8));
        assert_eq!(config.win_score, 120);
        assert_eq!(config.points_per_tile, 10);
        assert_eq!(config.tiles.symbols(), &["x", "y", "z"]);
    }

    #[test]
    fn test_tile_list_accepts_candy_names() {
        let config = GameConfig::from_lookup(lookup(&[("SWEET_MATCH_TILES", "milk, Cookie,#")])).unwrap();
        assert_eq!(config.tiles.symbols(), &["🥛", "🍪", "#"]);
        assert_eq!(config.tiles.symbol(TileKind(2)), Some("#"));
    }

    #[test]
    fn test_from_lookup_blank_values_keep_defaults() {
        let config = GameConfig::from_lookup(lookup(&[("SWEET_MATCH_ROWS", "  ")])).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = GameConfig::from_lookup(lookup(&[("SWEET_MATCH_COLS", "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SWEET_MATCH_COLS",
                value: "wide".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_single_kind() {
        let config = GameConfig {
            tiles: TileSet::lettered(1),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TileCount { got: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_board_and_zero_target() {
        assert!(matches!(
            GameConfig::with_size(0, 7).validate(),
            Err(ConfigError::EmptyBoard { .. })
        ));
        let config = GameConfig {
            win_score: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }
}
