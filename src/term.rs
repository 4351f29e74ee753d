use crate::error::Result;
use crate::geometry::Rect;
use crate::input::{map_key, InputEvent, InputSource};
use crate::orientation::Shape;
use crate::render::{Renderer, Rgb, Tile};
use crate::config::TEXT_COLOR;
use crate::{TermInt, Coords};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};

pub struct TermManager<W: Write = Stdout> {
    width: TermInt,
    height: TermInt,
    stdout: W,
    background: Rgb,
}

impl TermManager<Stdout> {
    pub fn new() -> Result<Self> {
        let size = terminal::size()?;
        Ok(TermManager::with_writer(stdout(), size))
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(out: W, size: Coords) -> Self {
        TermManager { width: size.0, height: size.1, stdout: out, background: Rgb(0, 0, 0) }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor)?;
        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        self.set_cursor_blink(true)?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn print_at(&mut self, pos: Coords, text: &str, fg: Rgb) -> Result<()> {
        // queue! borrows the writer for the whole chain, so no `self` inside it
        let (fg, bg) = (to_color(fg), to_color(self.background));
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(text)
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_ring(&mut self, rect: Rect, color: Rgb) -> Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }

        let end_x = rect.x + rect.width - 1;
        let end_y = rect.y + rect.height - 1;
        let bar: String = "─".repeat(rect.width as usize - 2);

        self.print_at((rect.x, rect.y), &format!("╭{}╮", bar), color)?;
        self.print_at((rect.x, end_y), &format!("╰{}╯", bar), color)?;

        for y in rect.y + 1..end_y {
            self.print_at((rect.x, y), "│", color)?;
            self.print_at((end_x, y), "│", color)?;
        }

        Ok(())
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        if option {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn set_cursor_blink(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::EnableBlinking)?;
        } else {
            execute!(self.stdout, cursor::DisableBlinking)?;
        }
        Ok(())
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TermManager<W> {
    fn fill_background(&mut self, color: Rgb) -> Result<()> {
        self.background = color;
        let blank = " ".repeat(self.width as usize);

        for y in 0..self.height {
            self.print_at((0, y), &blank, color)?;
        }
        Ok(())
    }

    fn draw_border(&mut self, rect: Rect, thickness: TermInt, color: Rgb) -> Result<()> {
        // Rings grow inwards from the outer edge of `rect`
        for i in 0..thickness {
            let ring = Rect::new(
                rect.x + i,
                rect.y + i,
                rect.width.saturating_sub(2 * i),
                rect.height.saturating_sub(2 * i),
            );
            self.draw_ring(ring, color)?;
        }
        Ok(())
    }

    fn draw_tile(&mut self, tile: Tile, rect: Rect) -> Result<()> {
        let glyph = tile_glyph(tile);
        for y in rect.y..rect.y + rect.height {
            self.print_at((rect.x, y), glyph, tile.color())?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, pos: (TermInt, TermInt)) -> Result<()> {
        self.print_at(pos, text, TEXT_COLOR)
    }

    fn present(&mut self) -> Result<()> {
        self.flush()
    }
}

impl<W: Write> InputSource for TermManager<W> {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.extend(map_key(&ev));
            }
        }

        Ok(events)
    }
}

// Two columns per tile. The first column is the tile's centre, the second
// carries a horizontal stroke over to the right neighbour when connected.
pub fn tile_glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Food => "● ",
        Tile::Snake(shape) => match shape {
            Shape::HeadUp => "▲ ",
            Shape::HeadDown => "▼ ",
            Shape::HeadLeft => "◀━",
            Shape::HeadRight => "▶ ",
            Shape::TailUp => "╻ ",
            Shape::TailDown => "╹ ",
            Shape::TailLeft => "╺━",
            Shape::TailRight => "╸ ",
            Shape::BodyVertical => "┃ ",
            Shape::BodyHorizontal => "━━",
            Shape::BodyTopLeft => "┛ ",
            Shape::BodyTopRight => "┗━",
            Shape::BodyBottomLeft => "┓ ",
            Shape::BodyBottomRight => "┏━",
        },
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TILE_WIDTH;

    #[test]
    fn every_glyph_fills_one_tile() {
        for shape in Shape::ALL.iter() {
            let glyph = tile_glyph(Tile::Snake(*shape));
            assert_eq!(glyph.chars().count(), TILE_WIDTH as usize, "{:?}", shape);
        }
        assert_eq!(tile_glyph(Tile::Food).chars().count(), TILE_WIDTH as usize);
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<&str> = Shape::ALL.iter().map(|s| tile_glyph(Tile::Snake(*s))).collect();
        glyphs.push(tile_glyph(Tile::Food));
        let count = glyphs.len();

        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), count);
    }

    fn screen(size: Coords) -> TermManager<Vec<u8>> {
        TermManager::with_writer(Vec::new(), size)
    }

    fn output(term: &TermManager<Vec<u8>>) -> String {
        String::from_utf8(term.stdout.clone()).unwrap()
    }

    #[test]
    fn tiles_are_printed_on_the_current_background() {
        let mut term = screen((10, 3));
        term.fill_background(Rgb(175, 215, 70)).unwrap();
        term.stdout.clear();

        term.draw_tile(Tile::Snake(Shape::HeadRight), Rect::new(2, 1, 2, 1)).unwrap();
        term.present().unwrap();

        let out = output(&term);
        assert!(out.contains("\x1B[2;3H"), "{:?}", out);
        assert!(out.contains("48;2;175;215;70"), "{:?}", out);
        assert!(out.contains("38;2;70;116;233"), "{:?}", out);
        assert!(out.ends_with("▶ "), "{:?}", out);
    }

    #[test]
    fn background_fill_covers_every_row() {
        let mut term = screen((4, 3));
        term.fill_background(Rgb(1, 2, 3)).unwrap();

        let out = output(&term);
        assert_eq!(out.matches("    ").count(), 3);
        assert_eq!(term.background, Rgb(1, 2, 3));
    }

    #[test]
    fn border_draws_rounded_box() {
        let mut term = screen((6, 4));
        term.draw_border(Rect::new(0, 0, 6, 4), 1, Rgb(255, 255, 255)).unwrap();

        let out = output(&term);
        assert!(out.contains("╭────╮"));
        assert!(out.contains("╰────╯"));
        assert_eq!(out.matches('│').count(), 4);
    }

    #[test]
    fn rgb_maps_to_true_colour() {
        assert_eq!(to_color(Rgb(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
