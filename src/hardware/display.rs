//! Brain screen hints and selection buttons.
//!
//! Hint lines are drawn as monospace text rows. The bottom of the screen is
//! split into two touch zones standing in for the two selection buttons:
//! the left half is `btn0` (start side) and the right half is `btn1`
//! (routine).
//!
//! # Example
//!
//! ```ignore
//! use changeup::hardware::display::{BrainHints, selector_task};
//!
//! let mut selector = Selector::new(selection.clone(), BrainHints::new(peripherals.display));
//! selector.show_banner();
//! spawn(selector_task(selector)).detach();
//! ```

use std::time::Duration;

use vexide::{
    color::Rgb,
    display::{Display, Font, FontFamily, FontSize, Text, TouchState},
    time::sleep,
};

use crate::{opcontrol::EdgeDetector, peripherals::HintDisplay, selection::Selector};

/// Height of one hint line in pixels.
const LINE_HEIGHT: i16 = 20;

/// Touches below this row select.
const BUTTON_TOP: i16 = Display::VERTICAL_RESOLUTION as i16 - 60;

/// Rate the touch screen is read at.
const TOUCH_POLL: Duration = Duration::from_millis(20);

/// Width of a hint line in characters.
const LINE_CHARS: usize = 48;

/// Screen selection buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    /// `btn0`, toggles the start side.
    Side,
    /// `btn1`, cycles the routine.
    Routine,
}

/// Hint lines on the Brain screen.
pub struct BrainHints {
    display: Display,
    touch:   EdgeDetector,
}

impl BrainHints {
    /// Takes over the Brain screen.
    pub fn new(display: Display) -> Self {
        Self {
            display,
            touch: EdgeDetector::default(),
        }
    }

    /// The zone touched since the last call, if any. Each touch selects
    /// once, however long it is held.
    pub fn pressed_zone(&mut self) -> Option<TouchZone> {
        let event = self.display.touch_status();
        let down = matches!(event.state, TouchState::Pressed | TouchState::Held);
        if !self.touch.update(down) || event.y < BUTTON_TOP {
            return None;
        }
        if event.x < Display::HORIZONTAL_RESOLUTION as i16 / 2 {
            Some(TouchZone::Side)
        } else {
            Some(TouchZone::Routine)
        }
    }
}

impl HintDisplay for BrainHints {
    fn set_line(&mut self, line: u8, text: &str) {
        // Padding overwrites whatever the previous text left behind.
        let padded = format!("{:<width$}", text, width = LINE_CHARS);
        let text = Text::new(
            &padded,
            Font::new(FontSize::SMALL, FontFamily::Monospace),
            [4, i16::from(line) * LINE_HEIGHT + 4],
        );
        self.display
            .draw_text(&text, Rgb::new(255, 255, 255), Some(Rgb::new(0, 0, 0)));
    }
}

/// Reads the touch zones forever, forwarding presses to `selector`.
pub async fn selector_task(mut selector: Selector<BrainHints>) {
    loop {
        match selector.display_mut().pressed_zone() {
            Some(TouchZone::Side) => {
                selector.on_side_button();
            }
            Some(TouchZone::Routine) => {
                selector.on_routine_button();
            }
            None => {}
        }
        sleep(TOUCH_POLL).await;
    }
}
