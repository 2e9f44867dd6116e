//! Background ripple: a grid of cells whose fade animation is staggered by
//! distance from an origin cell.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::cn;

/// Delay added per cell of distance from the ripple origin.
pub const RIPPLE_STEP_MS: f64 = 55.0;

/// Upper bound on ripple rows; larger configs are clamped.
pub const MAX_RIPPLE_ROWS: usize = 64;
/// Upper bound on ripple columns; larger configs are clamped.
pub const MAX_RIPPLE_COLS: usize = 128;

const BASE_DURATION_MS: f64 = 200.0;
const DURATION_STEP_MS: f64 = 80.0;

/// Grid dimensions of the ripple layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Cell edge in pixels
    pub cell_size: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 27,
            cell_size: 56,
        }
    }
}

impl RippleConfig {
    /// Same config with rows and columns capped at
    /// [`MAX_RIPPLE_ROWS`] and [`MAX_RIPPLE_COLS`].
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.min(MAX_RIPPLE_ROWS),
            cols: self.cols.min(MAX_RIPPLE_COLS),
            ..self
        }
    }

    /// Center cell of the grid.
    pub fn center(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }
}

/// Animation timing of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleCell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Animation start offset
    pub delay_ms: u32,
    /// Animation length
    pub duration_ms: u32,
}

/// Timing for every cell, row-major. Delay and duration grow with the
/// Euclidean distance from `origin`. The grid is capped at
/// [`MAX_RIPPLE_ROWS`] by [`MAX_RIPPLE_COLS`].
pub fn ripple_delays(rows: usize, cols: usize, origin: (usize, usize)) -> Vec<RippleCell> {
    let rows = rows.min(MAX_RIPPLE_ROWS);
    let cols = cols.min(MAX_RIPPLE_COLS);
    let (origin_row, origin_col) = origin;
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            let dr = row as f64 - origin_row as f64;
            let dc = col as f64 - origin_col as f64;
            let distance = dr.hypot(dc);
            RippleCell {
                row,
                col,
                delay_ms: (distance * RIPPLE_STEP_MS).round() as u32,
                duration_ms: (BASE_DURATION_MS + distance * DURATION_STEP_MS).round() as u32,
            }
        })
        .collect()
}

/// Decorative ripple grid rendered behind hero content.
#[component]
pub fn BackgroundRipple(
    #[prop(optional)] config: RippleConfig,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let config = config.clamped();
    let RippleConfig {
        rows,
        cols,
        cell_size,
    } = config;
    let grid_style = format!(
        "grid-template-columns: repeat({cols}, {cell_size}px); grid-template-rows: repeat({rows}, {cell_size}px)"
    );

    view! {
        <div class=cn("ripple", class.as_deref()) aria-hidden="true">
            <div class="ripple-grid" style=grid_style>
                {ripple_delays(rows, cols, config.center())
                    .into_iter()
                    .map(|cell| view! {
                        <div
                            class="ripple-cell"
                            style=format!(
                                "--delay: {}ms; --duration: {}ms",
                                cell.delay_ms, cell.duration_ms
                            )
                        ></div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn origin_cell_starts_immediately() {
        let cells = ripple_delays(3, 3, (1, 1));
        let origin = cells.iter().find(|c| c.row == 1 && c.col == 1).unwrap();
        assert_eq!(origin.delay_ms, 0);
        assert_eq!(origin.duration_ms, 200);
    }

    #[test]
    fn delay_grows_with_distance() {
        let cells = ripple_delays(1, 5, (0, 0));
        let delays: Vec<u32> = cells.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 55, 110, 165, 220]);
    }

    #[test]
    fn diagonal_uses_euclidean_distance() {
        let cells = ripple_delays(2, 2, (0, 0));
        assert_eq!(cells[3].delay_ms, (2f64.sqrt() * RIPPLE_STEP_MS).round() as u32);
    }

    #[test]
    fn covers_whole_grid_row_major() {
        let config = RippleConfig::default();
        let cells = ripple_delays(config.rows, config.cols, config.center());
        assert_eq!(cells.len(), 8 * 27);
        assert_eq!((cells[27].row, cells[27].col), (1, 0));
    }

    #[test]
    fn oversized_grid_is_capped() {
        let cells = ripple_delays(100_000, 100_000, (0, 0));
        assert_eq!(cells.len(), MAX_RIPPLE_ROWS * MAX_RIPPLE_COLS);

        let config: RippleConfig =
            serde_json::from_str(r#"{"rows": 100000, "cols": 3}"#).unwrap();
        let clamped = config.clamped();
        assert_eq!((clamped.rows, clamped.cols), (MAX_RIPPLE_ROWS, 3));
        assert_eq!(clamped.center(), (MAX_RIPPLE_ROWS / 2, 1));
    }
}
