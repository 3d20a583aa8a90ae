//! Per-panel navigation state.
//!
//! Each calendar panel (one in single mode, a left/right pair in range mode)
//! tracks which month it displays, which drill-down view it is in (day grid,
//! month grid, or paginated year grid), and where its 12-year window starts.
//! Panels navigate independently; the only thing they share is the selection
//! model, which lives elsewhere.

use chrono::{Datelike, NaiveDate};

/// Identifies a panel in range/dual mode.
///
/// Single mode only ever addresses [`Side::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left (or only) panel.
    Left,
    /// The right panel, shown in range mode.
    Right,
}

/// Which granularity a panel currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The day grid for the visible month.
    #[default]
    Date,
    /// The 12-cell month grid.
    Month,
    /// The 12-cell year grid, paginated by the year window.
    Year,
}

/// Pagination direction for the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous month / previous 12-year window.
    Back,
    /// Next month / next 12-year window.
    Forward,
}

/// Navigation state for one calendar panel.
///
/// Invariant: `year_window_start` is always a multiple of 12; the year grid
/// shows `[year_window_start, year_window_start + 11]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    visible_year: i32,
    visible_month: u32,
    view_mode: ViewMode,
    year_window_start: i32,
}

impl PanelState {
    /// Create a panel showing the given month in the day-grid view.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            visible_year: year,
            visible_month: month,
            view_mode: ViewMode::Date,
            year_window_start: year_window_anchor(year),
        }
    }

    /// Create a panel showing the month after the given one.
    ///
    /// Used to seed the right panel in range mode.
    pub fn new_following(year: i32, month: u32) -> Self {
        let (year, month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        Self::new(year, month)
    }

    /// The displayed (year, month).
    pub fn visible_month(&self) -> (i32, u32) {
        (self.visible_year, self.visible_month)
    }

    /// The current drill-down view.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// First year of the 12-year window shown in [`ViewMode::Year`].
    pub fn year_window_start(&self) -> i32 {
        self.year_window_start
    }

    /// Activate the month label: switch to the month grid.
    pub fn show_month_picker(&mut self) {
        self.view_mode = ViewMode::Month;
    }

    /// Activate the year label: switch to the year grid.
    ///
    /// Reachable from both the day grid and the month grid.
    pub fn show_year_picker(&mut self) {
        self.view_mode = ViewMode::Year;
    }

    /// Pick a year cell: adopt the year and drop down to the month grid.
    pub fn pick_year(&mut self, year: i32) {
        self.visible_year = year;
        self.view_mode = ViewMode::Month;
    }

    /// Pick a month cell (1-12): adopt the month and drop down to the day grid.
    ///
    /// Out-of-range months are ignored.
    pub fn pick_month(&mut self, month: u32) {
        if !(1..=12).contains(&month) {
            return;
        }
        self.visible_month = month;
        self.view_mode = ViewMode::Date;
    }

    /// Shift the panel one page in the given direction.
    ///
    /// In the year view this moves the 12-year window; in the day and month
    /// views it moves the visible month, rolling the year over naturally.
    /// Pagination never changes the view mode.
    pub fn paginate(&mut self, direction: Direction) {
        match self.view_mode {
            ViewMode::Year => {
                self.year_window_start += match direction {
                    Direction::Back => -12,
                    Direction::Forward => 12,
                };
            }
            ViewMode::Date | ViewMode::Month => match direction {
                Direction::Back => self.shift_month(-1),
                Direction::Forward => self.shift_month(1),
            },
        }
    }

    /// Point the panel at the month containing `date`, keeping the view mode.
    pub fn show_date(&mut self, date: NaiveDate) {
        self.visible_year = date.year();
        self.visible_month = date.month();
    }

    fn shift_month(&mut self, step: i32) {
        if step > 0 {
            if self.visible_month == 12 {
                self.visible_year += 1;
                self.visible_month = 1;
            } else {
                self.visible_month += 1;
            }
        } else if self.visible_month == 1 {
            self.visible_year -= 1;
            self.visible_month = 12;
        } else {
            self.visible_month -= 1;
        }
    }
}

/// The left/right panel pair, indexed by [`Side`].
///
/// Replaces side-keyed field dispatch with an explicit structure; both panels
/// always exist, single mode just never addresses the right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    left: PanelState,
    right: PanelState,
}

impl Panels {
    /// Seed both panels from today's date: left shows the current month,
    /// right the following month.
    pub fn seeded(today: NaiveDate) -> Self {
        let (year, month) = (today.year(), today.month());
        Self {
            left: PanelState::new(year, month),
            right: PanelState::new_following(year, month),
        }
    }

    /// Borrow the panel for a side.
    pub fn get(&self, side: Side) -> &PanelState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Mutably borrow the panel for a side.
    pub fn get_mut(&mut self, side: Side) -> &mut PanelState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Anchor a year to the start of its 12-year window.
fn year_window_anchor(year: i32) -> i32 {
    year.div_euclid(12) * 12
}
