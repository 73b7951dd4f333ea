//! Level geometry and the text-grid loader
//!
//! A level file is an ASCII grid, one character per 16x16 cell, rows top to
//! bottom:
//!
//! ```text
//! ' '  empty          '#'  solid tile       '^'  hazard
//! '$'  currency       'E'  exit             '*'  decoration
//! 'P'  player start
//! ```
//!
//! The level exclusively owns its tiles and collectibles; dropping it frees
//! them all at once.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use thiserror::Error;

use crate::consts::GRID_CELL_SIZE;

/// Failure to produce a level from its description
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("level {name} has no player start position")]
    NoStartPosition { name: String },

    #[error("unknown character {ch:?} at row {row}, column {col}")]
    UnknownCharacter { ch: char, row: usize, col: usize },

    #[error("campaign has no levels")]
    EmptyCampaign,
}

/// One static collider cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub position: Vec2,
    pub size: Vec2,
    /// Contact kills the attempt instead of blocking
    pub deadly: bool,
}

/// What overlapping a collectible does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    /// A dollar; picked up once, counts toward the exit gate
    Currency,
    /// Advances the level once every dollar is collected
    Exit,
    /// Render-only, no gameplay effect
    Decoration,
}

/// A static trigger volume the player can overlap
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub position: Vec2,
    pub size: Vec2,
    pub kind: CollectibleKind,
    pub collected: bool,
}

/// Immutable-after-load level data
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    /// Every collider, in grid order (row-major)
    pub tiles: Vec<Tile>,
    pub collectibles: Vec<Collectible>,
    /// Where the player is placed on load and on hazard restart
    pub starting_position: Vec2,
    /// Bottom-right corner of the playable area
    pub play_limit: Vec2,
    /// Dollars not yet collected; must reach 0 before the exit opens
    pub dollars_left: u32,
}

impl Level {
    /// Load a level from its grid file
    pub fn load(path: impl AsRef<Path>) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelError::NotFound {
            path: path.display().to_string(),
            source,
        })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::parse(&name, &text)
    }

    /// Build a level from grid text
    pub fn parse(name: &str, text: &str) -> Result<Level, LevelError> {
        let mut tiles = Vec::new();
        let mut collectibles = Vec::new();
        let mut start = None;
        let mut columns = 0usize;
        let mut rows = 0usize;

        for (row, line) in text.lines().enumerate() {
            rows = row + 1;
            columns = columns.max(line.chars().count());

            for (col, ch) in line.chars().enumerate() {
                let position = Vec2::new(
                    col as f32 * GRID_CELL_SIZE,
                    row as f32 * GRID_CELL_SIZE,
                );
                let size = Vec2::splat(GRID_CELL_SIZE);

                match ch {
                    ' ' => {}
                    '#' => tiles.push(Tile {
                        position,
                        size,
                        deadly: false,
                    }),
                    '^' => tiles.push(Tile {
                        position,
                        size,
                        deadly: true,
                    }),
                    '$' => collectibles.push(Collectible {
                        position,
                        size,
                        kind: CollectibleKind::Currency,
                        collected: false,
                    }),
                    'E' => collectibles.push(Collectible {
                        position,
                        size,
                        kind: CollectibleKind::Exit,
                        collected: false,
                    }),
                    '*' => collectibles.push(Collectible {
                        position,
                        size,
                        kind: CollectibleKind::Decoration,
                        collected: false,
                    }),
                    'P' => start = Some(position),
                    _ => return Err(LevelError::UnknownCharacter { ch, row, col }),
                }
            }
        }

        let starting_position = start.ok_or_else(|| LevelError::NoStartPosition {
            name: name.to_owned(),
        })?;

        let dollars_left = collectibles
            .iter()
            .filter(|c| c.kind == CollectibleKind::Currency)
            .count() as u32;

        log::info!(
            "loaded level {name}: {} tiles, {} collectibles, {dollars_left} dollars",
            tiles.len(),
            collectibles.len(),
        );

        Ok(Level {
            name: name.to_owned(),
            tiles,
            collectibles,
            starting_position,
            play_limit: Vec2::new(
                columns as f32 * GRID_CELL_SIZE,
                rows as f32 * GRID_CELL_SIZE,
            ),
            dollars_left,
        })
    }
}
