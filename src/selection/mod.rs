//! Pre-match selection of the start side and the autonomous routine.
//!
//! The selection is an explicit context object rather than free-standing
//! globals. A [`SelectionHandle`] is cloned into whoever needs it: the UI
//! callbacks mutate it through a [`Selector`], and the competition dispatcher
//! reads a [`RunSelection`] snapshot once at the start of every autonomous
//! run.
//!
//! # Example
//!
//! ```ignore
//! use changeup::selection::{SelectionHandle, Selector};
//!
//! let selection = SelectionHandle::default();
//! let mut selector = Selector::new(selection.clone(), brain_hints);
//! selector.show_banner();
//!
//! // Wired to the two screen buttons.
//! selector.on_side_button();
//! selector.on_routine_button();
//!
//! let run = selection.snapshot();
//! ```

use std::{cell::RefCell, fmt::Write, rc::Rc};

use log::{info, warn};

use crate::{motion::MirrorPolicy, peripherals::HintDisplay};

/// Routine kinds and the cyclable registry.
pub mod routine;

/// Start side.
pub mod side;

pub use routine::{RoutineKind, RoutineRegistry};
pub use side::StartSide;

/// Screen line holding the title banner.
pub const TITLE_LINE: u8 = 0;
/// Screen line holding the build stamp.
pub const BUILD_LINE: u8 = 1;
/// Screen line holding the start-side hint.
pub const SIDE_LINE: u8 = 2;
/// Screen line holding the routine hint.
pub const ROUTINE_LINE: u8 = 3;
/// Screen line holding the placement reminder.
pub const PLACEMENT_LINE: u8 = 4;

/// Longest hint line the Brain screen shows without clipping.
const HINT_CAPACITY: usize = 48;

/// Identifies the program loaded on the Brain.
pub const BUILD_STAMP: &str =
    concat!("Compiled from ", env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// The active start side and routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Tile the robot starts on.
    pub side:     StartSide,
    /// Routine selection.
    pub routines: RoutineRegistry,
}

/// What an autonomous run uses, read once when the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSelection {
    /// Routine to execute.
    pub routine: RoutineKind,
    /// Side the robot started on.
    pub side:    StartSide,
    /// Mirroring derived from `side`.
    pub mirror:  MirrorPolicy,
}

/// Shared handle to the [`Selection`].
///
/// Borrows never outlive a single method call, so UI callbacks and control
/// loops running on the same executor never observe a partial update.
#[derive(Debug, Clone, Default)]
pub struct SelectionHandle {
    inner: Rc<RefCell<Selection>>,
}

impl SelectionHandle {
    /// Creates a handle starting from `selection`.
    pub fn new(selection: Selection) -> Self {
        Self {
            inner: Rc::new(RefCell::new(selection)),
        }
    }

    /// The selected start side.
    pub fn side(&self) -> StartSide { self.inner.borrow().side }

    /// The selected routine.
    pub fn routine(&self) -> RoutineKind { self.inner.borrow().routines.current() }

    /// Switches to the other start side and returns it.
    pub fn toggle_side(&self) -> StartSide {
        let mut selection = self.inner.borrow_mut();
        selection.side = selection.side.toggled();
        selection.side
    }

    /// Selects the next routine and returns it.
    pub fn advance_routine(&self) -> RoutineKind { self.inner.borrow_mut().routines.advance() }

    /// Captures the selection for one autonomous run.
    pub fn snapshot(&self) -> RunSelection {
        let selection = *self.inner.borrow();
        RunSelection {
            routine: selection.routines.current(),
            side:    selection.side,
            mirror:  MirrorPolicy::for_side(selection.side),
        }
    }
}

/// UI-callback layer over a [`SelectionHandle`].
///
/// Every change refreshes the hint lines on the display. Display output is
/// fire-and-forget.
pub struct Selector<H: HintDisplay> {
    selection: SelectionHandle,
    display:   H,
}

impl<H: HintDisplay> Selector<H> {
    /// Creates a selector writing hints to `display`.
    pub fn new(selection: SelectionHandle, display: H) -> Self { Self { selection, display } }

    /// Writes the title, build stamp, placement reminder and current hints.
    pub fn show_banner(&mut self) {
        self.display.set_line(TITLE_LINE, "344R - Change Up");
        self.display.set_line(BUILD_LINE, BUILD_STAMP);
        self.display
            .set_line(PLACEMENT_LINE, "Auton starts 24\" horiz. from ctr home goal");
        self.refresh();
    }

    /// Callback for the start-side button.
    pub fn on_side_button(&mut self) -> StartSide {
        let side = self.selection.toggle_side();
        info!("Start side set to {}", side);
        self.refresh();
        side
    }

    /// Callback for the routine button.
    pub fn on_routine_button(&mut self) -> RoutineKind {
        let routine = self.selection.advance_routine();
        info!("Autonomous routine set to {}", routine);
        self.refresh();
        routine
    }

    /// Rewrites both hint lines from the current selection.
    pub fn refresh(&mut self) {
        let side = side_hint(self.selection.side());
        let routine = routine_hint(self.selection.routine());
        self.display.set_line(SIDE_LINE, &side);
        self.display.set_line(ROUTINE_LINE, &routine);
    }

    /// The selection this selector edits.
    pub fn selection(&self) -> &SelectionHandle { &self.selection }

    /// The display the hints are written to.
    pub fn display_mut(&mut self) -> &mut H { &mut self.display }
}

/// Hint text for the start-side line.
pub fn side_hint(side: StartSide) -> heapless::String<HINT_CAPACITY> {
    let mut text = heapless::String::new();
    if write!(text, "auton: {:<5} (change with btn0)", side).is_err() {
        warn!("Side hint truncated");
    }
    text
}

/// Hint text for the routine line.
pub fn routine_hint(routine: RoutineKind) -> heapless::String<HINT_CAPACITY> {
    let mut text = heapless::String::new();
    if write!(text, "routine: {} (change with btn1)", routine).is_err() {
        warn!("Routine hint truncated");
    }
    text
}
