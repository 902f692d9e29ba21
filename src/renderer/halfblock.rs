//! Half-block compression of the pixel grid into text
//!
//! Each pair of pixel rows becomes one text row, with the (top, bottom)
//! pixel pattern selecting a character:
//!
//! | top row | bottom row | character |
//! | :-----: | :--------: | :-------: |
//! |    .    |     .      | `<SPACE>` |
//! |    *    |     .      |    `^`    |
//! |    .    |     *      |    `_`    |
//! |    *    |     *      |    `S`    |
//!
//! For instance,
//!
//! ```text
//! *.***....*.*
//! .****...*.**
//! ```
//!
//! becomes
//!
//! ```text
//! ^_SSS   _^_S
//! ```

use crate::consts::{IHEIGHT, IWIDTH};
use crate::renderer::framebuffer::{FrameBuffer, Pixel};

/// Indexed by `top * 2 + bot`
const CHAR_TABLE: [char; 4] = [' ', '_', '^', 'S'];

fn bit(px: Pixel) -> usize {
    match px {
        Pixel::Bg => 0,
        Pixel::Fg => 1,
    }
}

/// Compress the framebuffer into `IHEIGHT / 2` rows of `IWIDTH` characters
pub fn render_rows(fb: &FrameBuffer) -> Vec<String> {
    let mut rows = Vec::with_capacity(IHEIGHT / 2);

    for y in (0..IHEIGHT as i32).step_by(2) {
        let mut row = String::with_capacity(IWIDTH);
        for x in 0..IWIDTH as i32 {
            let top = bit(fb.get(x, y));
            let bot = bit(fb.get(x, y + 1));
            row.push(CHAR_TABLE[top * 2 + bot]);
        }
        rows.push(row);
    }

    rows
}
