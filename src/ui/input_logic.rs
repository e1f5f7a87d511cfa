use crate::config::{JOYSTICK_DOWN_THRESHOLD, JOYSTICK_UP_THRESHOLD};
use crate::ui::Direction;

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected % item_count + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected % item_count + 1) % item_count
}

/// Map a raw Y-axis reading onto a direction; both thresholds are Neutral.
pub fn classify_vertical(raw: u16) -> Direction {
    if raw < JOYSTICK_UP_THRESHOLD {
        Direction::Up
    } else if raw > JOYSTICK_DOWN_THRESHOLD {
        Direction::Down
    } else {
        Direction::Neutral
    }
}
