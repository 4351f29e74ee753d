use crate::config::{FOOD_COLOR, FRAME_COLOR, GAME_OVER_TEXT, GREEN_BG, SNAKE_COLOR};
use crate::error::Result;
use crate::game::GameState;
use crate::geometry::{GridGeometry, Rect, FRAME_THICKNESS};
use crate::orientation::{shape_at, Shape};
use crate::TermInt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Food,
    Snake(Shape),
}

pub trait Renderer {
    fn fill_background(&mut self, color: Rgb) -> Result<()>;
    fn draw_border(&mut self, rect: Rect, thickness: TermInt, color: Rgb) -> Result<()>;
    fn draw_tile(&mut self, tile: Tile, rect: Rect) -> Result<()>;
    fn draw_text(&mut self, text: &str, pos: (TermInt, TermInt)) -> Result<()>;
    /// Pushes everything drawn since the last call to the screen.
    fn present(&mut self) -> Result<()>;
}

impl Tile {
    pub fn color(self) -> Rgb {
        match self {
            Tile::Food => FOOD_COLOR,
            Tile::Snake(_) => SNAKE_COLOR,
        }
    }
}

pub fn draw_frame<R: Renderer>(state: &GameState, geometry: &GridGeometry, renderer: &mut R) -> Result<()> {
    renderer.fill_background(GREEN_BG)?;
    renderer.draw_border(geometry.frame(), FRAME_THICKNESS, FRAME_COLOR)?;

    // Food under the snake is hidden by the body drawn after it
    renderer.draw_tile(Tile::Food, geometry.cell_rect(state.food()))?;

    // A head that crashed through the wall is never committed, so every
    // segment is on the grid; the check keeps cell_rect in range regardless
    let body = state.snake().body();
    for (i, cell) in body.iter().enumerate().filter(|(_, cell)| geometry.contains(**cell)) {
        renderer.draw_tile(Tile::Snake(shape_at(body, i)), geometry.cell_rect(*cell))?;
    }

    let score = format!("SCORE: {}", state.score());
    renderer.draw_text(&score, geometry.score_position(&score))?;

    if state.is_over() {
        renderer.draw_text(GAME_OVER_TEXT, geometry.banner_position(GAME_OVER_TEXT))?;
    }

    renderer.present()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::geometry::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Background(Rgb),
        Border(Rect, TermInt),
        Tile(Tile, Rect),
        Text(String, (TermInt, TermInt)),
        Present,
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<Call>,
    }

    impl RecordingRenderer {
        pub fn tiles(&self) -> Vec<(Tile, Rect)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Tile(tile, rect) => Some((*tile, *rect)),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(text, _) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn fill_background(&mut self, color: Rgb) -> Result<()> {
            self.calls.push(Call::Background(color));
            Ok(())
        }

        fn draw_border(&mut self, rect: Rect, thickness: TermInt, _color: Rgb) -> Result<()> {
            self.calls.push(Call::Border(rect, thickness));
            Ok(())
        }

        fn draw_tile(&mut self, tile: Tile, rect: Rect) -> Result<()> {
            self.calls.push(Call::Tile(tile, rect));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, pos: (TermInt, TermInt)) -> Result<()> {
            self.calls.push(Call::Text(text.to_string(), pos));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    fn new_state() -> GameState {
        GameState::new(15, StdRng::seed_from_u64(3))
    }

    #[test]
    fn frame_draws_every_element_once() {
        let state = new_state();
        let geo = GridGeometry::centered((80, 24), 15).unwrap();
        let mut renderer = RecordingRenderer::default();

        draw_frame(&state, &geo, &mut renderer).unwrap();

        assert_eq!(renderer.calls[0], Call::Background(GREEN_BG));
        assert_eq!(renderer.calls[1], Call::Border(geo.frame(), 1));
        assert_eq!(renderer.calls.last(), Some(&Call::Present));

        let tiles = renderer.tiles();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0], (Tile::Food, geo.cell_rect(state.food())));
        assert_eq!(tiles[1], (Tile::Snake(Shape::HeadRight), geo.cell_rect(Cell::new(7, 7))));
        assert_eq!(tiles[2], (Tile::Snake(Shape::BodyHorizontal), geo.cell_rect(Cell::new(6, 7))));
        assert_eq!(tiles[3], (Tile::Snake(Shape::TailLeft), geo.cell_rect(Cell::new(5, 7))));

        assert_eq!(renderer.texts(), vec!["SCORE: 0".to_string()]);
    }

    #[test]
    fn game_over_adds_banner() {
        let mut state = new_state();
        state.end();
        let geo = GridGeometry::centered((80, 24), 15).unwrap();
        let mut renderer = RecordingRenderer::default();

        draw_frame(&state, &geo, &mut renderer).unwrap();

        assert_eq!(renderer.texts(), vec!["SCORE: 0".to_string(), GAME_OVER_TEXT.to_string()]);
    }

    #[test]
    fn drawing_does_not_touch_the_state() {
        let state = new_state();
        let before = (state.snake().body().to_vec(), state.food(), state.score());
        let geo = GridGeometry::centered((80, 24), 15).unwrap();

        draw_frame(&state, &geo, &mut RecordingRenderer::default()).unwrap();
        draw_frame(&state, &geo, &mut RecordingRenderer::default()).unwrap();

        assert_eq!(before, (state.snake().body().to_vec(), state.food(), state.score()));
    }
}
