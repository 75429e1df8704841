use crate::types::Cell;

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectPx {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub rect: RectPx,
    pub label: &'static str,
}

/// Fixed pixel regions of the two overlays. The values match the classic
/// 625x625 layout and double as the input mapper's hit-test regions.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub menu_easy: RectPx,
    pub menu_hard: RectPx,
    pub game_over_panel: RectPx,
    pub restart: RectPx,
    pub close: RectPx,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            menu_easy: RectPx::new(200.0, 250.0, 200.0, 80.0),
            menu_hard: RectPx::new(200.0, 350.0, 200.0, 80.0),
            game_over_panel: RectPx::new(150.0, 100.0, 300.0, 400.0),
            restart: RectPx::new(200.0, 300.0, 200.0, 80.0),
            close: RectPx::new(200.0, 400.0, 200.0, 80.0),
        }
    }
}

/// Overlay shown on top of the play-field, present outside active play.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    Menu {
        title: &'static str,
        easy: Button,
        hard: Button,
    },
    GameOver {
        panel: RectPx,
        restart: Button,
        close: Button,
    },
}

/// Everything the host needs to draw one frame. The core produces this
/// description; rendering itself lives entirely in the host.
#[derive(Clone, Debug)]
pub struct Scene {
    pub cell_size: u32,
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub record: u32,
    pub overlay: Option<Overlay>,
}
