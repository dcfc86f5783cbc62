//! The alien formation
//!
//! A fixed rows x columns grid. Destroyed aliens leave an empty cell behind;
//! cells are never compacted, so `(row, col)` addresses stay stable for the
//! whole wave. Row 0 is the bottom row, nearest the defense line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::models::{Alien, AlienSprite, Bolt};
use crate::settings::Settings;

/// Horizontal marching direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum March {
    #[default]
    Right,
    Left,
}

impl March {
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            March::Right => 1.0,
            March::Left => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            March::Right => March::Left,
            March::Left => March::Right,
        }
    }
}

/// What one call to [`Formation::advance`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarchOutcome {
    /// The formation took a horizontal step
    pub stepped: bool,
    /// The formation reached a wall, turned around and descended
    pub turned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    rows: usize,
    cols: usize,
    /// Row-major cells, `None` once destroyed
    cells: Vec<Option<Alien>>,
    direction: March,
    /// Seconds since the last step
    step_timer: f32,
}

impl Formation {
    /// Build a full grid, anchored so the top row sits below the ceiling
    pub fn new(settings: &Settings) -> Self {
        let rows = settings.alien_rows;
        let cols = settings.aliens_in_row;
        assert!(rows > 0 && cols > 0, "formation needs at least one alien");

        let pitch_x = settings.alien_h_sep + settings.alien_width;
        let pitch_y = settings.alien_v_sep + settings.alien_height;
        let x0 = settings.alien_h_sep + 0.5 * settings.alien_width;
        let y0 = settings.game_height
            - settings.alien_ceiling
            - 0.5 * settings.alien_height
            - (rows - 1) as f32 * pitch_y;

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let sprite = AlienSprite::for_row(row + 1);
            let y = y0 + row as f32 * pitch_y;
            for col in 0..cols {
                let x = x0 + col as f32 * pitch_x;
                cells.push(Some(Alien::new(Vec2::new(x, y), sprite, settings)));
            }
        }

        Self {
            rows,
            cols,
            cells,
            direction: March::Right,
            step_timer: 0.0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn direction(&self) -> March {
        self.direction
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of range");
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Alien> {
        self.cells[self.index(row, col)].as_ref()
    }

    /// Empty a cell, returning the alien that was there
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Alien> {
        let idx = self.index(row, col);
        self.cells[idx].take()
    }

    /// Every cell in row-major order, bottom row first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<&Alien>)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell.as_ref()))
    }

    /// Living aliens in row-major order
    pub fn living(&self) -> impl Iterator<Item = &Alien> + '_ {
        self.cells.iter().flatten()
    }

    fn living_mut(&mut self) -> impl Iterator<Item = &mut Alien> + '_ {
        self.cells.iter_mut().flatten()
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn leftmost_x(&self) -> Option<f32> {
        self.living().map(|a| a.pos.x).reduce(f32::min)
    }

    pub fn rightmost_x(&self) -> Option<f32> {
        self.living().map(|a| a.pos.x).reduce(f32::max)
    }

    pub fn lowest_y(&self) -> Option<f32> {
        self.living().map(|a| a.pos.y).reduce(f32::min)
    }

    /// Columns that still hold at least one living alien, ascending
    pub fn living_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| (0..self.rows).any(|row| self.get(row, col).is_some()))
            .collect()
    }

    /// The living alien of a column nearest the defense line
    pub fn lowest_in_column(&self, col: usize) -> Option<&Alien> {
        (0..self.rows)
            .filter_map(|row| self.get(row, col))
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    /// First living alien (row-major from row 0) hit by a bolt
    pub fn first_hit(&self, bolt: &Bolt) -> Option<(usize, usize)> {
        self.cells().find_map(|(row, col, alien)| {
            alien
                .filter(|a| a.is_hit_by(bolt))
                .map(|_| (row, col))
        })
    }

    /// True once the lowest living alien's bottom edge is below the line
    pub fn has_crossed(&self, defense_line: f32) -> bool {
        self.living()
            .map(|a| a.pos.y - 0.5 * a.height)
            .reduce(f32::min)
            .is_some_and(|bottom| bottom < defense_line)
    }

    /// Advance the march by `dt` seconds
    ///
    /// The formation steps once the accumulated time exceeds the step
    /// interval. Whenever the extreme alien on the leading side is within
    /// the margin of its wall, the direction flips and every living alien
    /// descends by one vertical step.
    pub fn advance(&mut self, dt: f32, settings: &Settings) -> MarchOutcome {
        assert!(dt >= 0.0, "negative frame time: {dt}");
        let mut outcome = MarchOutcome::default();

        self.step_timer += dt;
        if self.step_timer > settings.alien_step_interval {
            let dx = self.direction.sign() * settings.alien_h_walk;
            for alien in self.living_mut() {
                alien.pos.x += dx;
            }
            self.step_timer = 0.0;
            outcome.stepped = true;
            log::trace!("formation stepped {:?}", self.direction);
        }

        let margin = settings.march_margin();
        let at_wall = match self.direction {
            March::Right => self
                .rightmost_x()
                .is_some_and(|x| settings.game_width - x <= margin),
            March::Left => self.leftmost_x().is_some_and(|x| x <= margin),
        };
        if at_wall {
            self.direction = self.direction.reversed();
            self.descend(settings.alien_v_walk);
            outcome.turned = true;
            log::debug!("formation turned {:?} and descended", self.direction);
        }

        outcome
    }

    fn descend(&mut self, distance: f32) {
        for alien in self.living_mut() {
            alien.pos.y -= distance;
        }
    }
}
