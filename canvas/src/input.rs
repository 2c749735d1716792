use crate::GridLayout;
use bitflags::bitflags;
use demineur_core::Coord2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Pressed pointer buttons, in the browser `MouseEvent.buttons` layout.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PointerButtons: u16 {
        const PRIMARY   = 1;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
    }
}

/// One pointer event. Coordinates are relative to the board surface; any
/// page offset or scroll is the caller's to subtract first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    pub x_px: i32,
    pub y_px: i32,
    pub buttons: PointerButtons,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Reveal,
    CycleMark,
}

/// Maps a pointer event to the grid position and action it requests. Gutter
/// hits, out-of-grid coordinates, and unmapped button sets are dropped.
pub fn route(input: PointerInput, layout: &GridLayout) -> Option<(Coord2, PointerAction)> {
    let action = match input.buttons {
        PointerButtons::PRIMARY => PointerAction::Reveal,
        PointerButtons::SECONDARY => PointerAction::CycleMark,
        _ => return None,
    };
    let pos = layout.position_at(input.x_px, input.y_px)?;
    log::trace!("({}, {}) routed to {:?} {:?}", input.x_px, input.y_px, pos, action);
    Some((pos, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DEFAULT_CELL_PX;

    fn input(x_px: i32, y_px: i32, buttons: PointerButtons) -> PointerInput {
        PointerInput { x_px, y_px, buttons }
    }

    #[test]
    fn primary_button_requests_a_reveal() {
        let layout = GridLayout::new((10, 10), DEFAULT_CELL_PX);
        let routed = route(input(38, 5, PointerButtons::PRIMARY), &layout);
        assert_eq!(routed, Some(((1, 0), PointerAction::Reveal)));
    }

    #[test]
    fn secondary_button_requests_a_mark_cycle() {
        let layout = GridLayout::new((10, 10), DEFAULT_CELL_PX);
        let routed = route(input(5, 38, PointerButtons::SECONDARY), &layout);
        assert_eq!(routed, Some(((0, 1), PointerAction::CycleMark)));
    }

    #[test]
    fn other_button_sets_are_dropped() {
        let layout = GridLayout::new((10, 10), DEFAULT_CELL_PX);
        assert_eq!(route(input(5, 5, PointerButtons::AUXILIARY), &layout), None);
        assert_eq!(
            route(
                input(5, 5, PointerButtons::PRIMARY | PointerButtons::SECONDARY),
                &layout
            ),
            None
        );
        assert_eq!(route(input(5, 5, PointerButtons::empty()), &layout), None);
    }

    #[test]
    fn gutter_clicks_are_dropped() {
        let layout = GridLayout::new((10, 10), DEFAULT_CELL_PX);
        assert_eq!(route(input(33, 5, PointerButtons::PRIMARY), &layout), None);
    }
}
