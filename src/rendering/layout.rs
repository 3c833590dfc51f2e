//! Palette and geometry of the splash logo, expressed as an ordered paint list.

use image::Rgba;

use crate::font::FontRole;
use crate::rendering::canvas::BoundingBox;
use crate::rendering::paint::PaintCommand;

pub const CANVAS_WIDTH: u32 = 1024;
pub const CANVAS_HEIGHT: u32 = 1024;

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

const fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color.0[0], color.0[1], color.0[2], alpha])
}

pub const BACKGROUND: Rgba<u8> = rgb(26, 26, 26);
pub const ORANGE: Rgba<u8> = rgb(255, 107, 53);
pub const WHITE: Rgba<u8> = rgb(255, 255, 255);
pub const FOAM: Rgba<u8> = rgb(247, 247, 247);
pub const GRAY: Rgba<u8> = rgb(102, 102, 102);
/// Part of the brand palette; the splash itself does not use it.
pub const GOLD: Rgba<u8> = rgb(255, 215, 0);

/// Opacity of the accent circle behind the mug.
pub const ACCENT_ALPHA: u8 = 26;
/// Opacity of the liquid band, 8% of full.
pub const LIQUID_ALPHA: u8 = (255 * 8 / 100) as u8;

pub const ACCENT_CIRCLE: BoundingBox = BoundingBox::new(32, 32, 992, 992);
pub const MUG_BODY: BoundingBox = BoundingBox::new(392, 300, 632, 650);
pub const MUG_OUTLINE_WIDTH: i32 = 8;
pub const FOAM_BASE: BoundingBox = BoundingBox::new(352, 240, 672, 340);
pub const FOAM_LEFT_BUBBLE: BoundingBox = BoundingBox::new(432, 220, 592, 290);
pub const FOAM_RIGHT_BUBBLE: BoundingBox = BoundingBox::new(512, 225, 652, 285);
pub const LIQUID: BoundingBox = BoundingBox::new(402, 320, 622, 640);
pub const HANDLE: BoundingBox = BoundingBox::new(632, 380, 732, 520);
pub const HANDLE_START_DEG: f32 = 270.0;
pub const HANDLE_END_DEG: f32 = 90.0;
pub const HANDLE_WIDTH: i32 = 20;

pub const TITLE: &str = "PINTS";
pub const TITLE_ANCHOR: (i32, i32) = (512, 720);
pub const SUBTITLE: &str = "LEAGUE";
pub const SUBTITLE_ANCHOR: (i32, i32) = (512, 800);

/// Paint list for the splash logo, back to front.
pub fn splash_logo() -> Vec<PaintCommand> {
    vec![
        PaintCommand::FillEllipse {
            bounds: ACCENT_CIRCLE,
            color: with_alpha(ORANGE, ACCENT_ALPHA),
        },
        PaintCommand::FillRect {
            bounds: MUG_BODY,
            color: ORANGE,
        },
        PaintCommand::StrokeRect {
            bounds: MUG_BODY,
            width: MUG_OUTLINE_WIDTH,
            color: BACKGROUND,
        },
        PaintCommand::FillEllipse {
            bounds: FOAM_BASE,
            color: FOAM,
        },
        PaintCommand::FillEllipse {
            bounds: FOAM_LEFT_BUBBLE,
            color: WHITE,
        },
        PaintCommand::FillEllipse {
            bounds: FOAM_RIGHT_BUBBLE,
            color: WHITE,
        },
        // Fills replace pixels, so a single pass is all repeated passes would give.
        PaintCommand::FillRect {
            bounds: LIQUID,
            color: with_alpha(ORANGE, LIQUID_ALPHA),
        },
        PaintCommand::StrokeArc {
            bounds: HANDLE,
            start: HANDLE_START_DEG,
            end: HANDLE_END_DEG,
            width: HANDLE_WIDTH,
            color: ORANGE,
        },
        PaintCommand::Text {
            anchor: TITLE_ANCHOR,
            text: TITLE.to_string(),
            color: ORANGE,
            font: FontRole::Large,
        },
        PaintCommand::Text {
            anchor: SUBTITLE_ANCHOR,
            text: SUBTITLE.to_string(),
            color: GRAY,
            font: FontRole::Medium,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquid_alpha_is_eight_percent() {
        assert_eq!(LIQUID_ALPHA, 20);
    }

    #[test]
    fn every_command_fits_the_canvas() {
        for cmd in splash_logo() {
            cmd.check_bounds(CANVAS_WIDTH, CANVAS_HEIGHT)
                .unwrap_or_else(|e| panic!("{}: {}", cmd.name(), e));
        }
    }

    #[test]
    fn text_lines_are_last_and_in_order() {
        let cmds = splash_logo();
        let texts: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["PINTS", "LEAGUE"]);
        assert!(matches!(cmds.last(), Some(PaintCommand::Text { font: FontRole::Medium, .. })));
    }
}
