use std::time::Instant;

use eframe::egui;
use snake_core::engine::{GameEngine, GameEvent, SideEffect};
use snake_core::input::KeyPress;
use snake_core::scene::{Button, Overlay, RectPx, Scene};
use snake_core::types::Direction;
use snake_core::log;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0, 128, 0);
const SNAKE_TILE: egui::Color32 = egui::Color32::from_rgb(200, 30, 30);
const FOOD_FILL: egui::Color32 = egui::Color32::BLACK;
const PANEL_FILL: egui::Color32 = egui::Color32::WHITE;
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(200, 30, 30);

/// The windowed host: forwards input and frame events to the core engine,
/// paints whatever scene the core describes and executes its side effects.
/// All game rules live on the other side of that boundary.
pub struct ClientApp {
    engine: GameEngine,
}

impl ClientApp {
    pub fn new(engine: GameEngine) -> Self {
        // No audio backend in this host: cues and the background track
        // degrade to log lines, the simulation is unaffected.
        log!("Audio disabled: sound cues will be logged only");
        Self { engine }
    }

    fn collect_events(ctx: &egui::Context) -> Vec<GameEvent> {
        ctx.input(|i| {
            let mut events = Vec::new();

            if i.pointer.primary_pressed() {
                if let Some(pos) = i.pointer.interact_pos() {
                    events.push(GameEvent::PointerDown { x: pos.x, y: pos.y });
                }
            }

            let keys = [
                (egui::Key::ArrowUp, KeyPress::Direction(Direction::Up)),
                (egui::Key::ArrowDown, KeyPress::Direction(Direction::Down)),
                (egui::Key::ArrowLeft, KeyPress::Direction(Direction::Left)),
                (egui::Key::ArrowRight, KeyPress::Direction(Direction::Right)),
                (egui::Key::Escape, KeyPress::Escape),
            ];
            for (key, press) in keys {
                if i.key_pressed(key) {
                    events.push(GameEvent::KeyDown(press));
                }
            }

            events
        })
    }
}

impl eframe::App for ClientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut effects = Vec::new();
        for event in Self::collect_events(ctx) {
            effects.extend(self.engine.handle_event(event));
        }
        effects.extend(self.engine.handle_event(GameEvent::Frame {
            now: Instant::now(),
        }));

        for effect in effects {
            match effect {
                SideEffect::PlaySound(cue) => log!("Sound cue: {:?}", cue),
                SideEffect::RequestClose => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            }
        }

        let scene = self.engine.scene();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BACKGROUND))
            .show(ctx, |ui| {
                draw_scene(ui, &scene);
            });

        // Keep frames coming even without input, the tick scheduler needs them.
        ctx.request_repaint();
    }
}

fn to_egui_rect(origin: egui::Pos2, rect: RectPx) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + rect.x, origin.y + rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

fn draw_scene(ui: &mut egui::Ui, scene: &Scene) {
    let origin = ui.min_rect().min;
    let painter = ui.painter();
    let cell = scene.cell_size as f32;

    // Snake tiles, one pixel short of the cell so the grid shows through.
    for body_cell in &scene.snake {
        let min = egui::pos2(
            origin.x + body_cell.col as f32 * cell,
            origin.y + body_cell.row as f32 * cell,
        );
        painter.rect_filled(
            egui::Rect::from_min_size(min, egui::vec2(cell - 1.0, cell - 1.0)),
            egui::CornerRadius::ZERO,
            SNAKE_TILE,
        );
    }

    if let Some(food) = scene.food {
        let center = egui::pos2(
            origin.x + food.col as f32 * cell + cell / 2.0,
            origin.y + food.row as f32 * cell + cell / 2.0,
        );
        painter.circle_filled(center, cell / 2.0 - 1.0, FOOD_FILL);
    }

    match &scene.overlay {
        None => {
            painter.text(
                egui::pos2(origin.x + 10.0, origin.y + 10.0),
                egui::Align2::LEFT_TOP,
                format!("Score: {}", scene.score),
                egui::FontId::proportional(25.0),
                egui::Color32::WHITE,
            );
        }
        Some(Overlay::Menu { title, easy, hard }) => {
            painter.text(
                egui::pos2(origin.x + 200.0, origin.y + 200.0),
                egui::Align2::LEFT_TOP,
                *title,
                egui::FontId::proportional(30.0),
                egui::Color32::WHITE,
            );
            draw_button(painter, origin, easy);
            draw_button(painter, origin, hard);
        }
        Some(Overlay::GameOver {
            panel,
            restart,
            close,
        }) => {
            painter.text(
                egui::pos2(origin.x + 10.0, origin.y + 10.0),
                egui::Align2::LEFT_TOP,
                format!("Score: {}", scene.score),
                egui::FontId::proportional(25.0),
                egui::Color32::WHITE,
            );

            let panel_rect = to_egui_rect(origin, *panel);
            painter.rect_filled(panel_rect, egui::CornerRadius::ZERO, PANEL_FILL);
            painter.text(
                panel_rect.min + egui::vec2(10.0, 10.0),
                egui::Align2::LEFT_TOP,
                format!("Score: {}   Record: {}", scene.score, scene.record),
                egui::FontId::proportional(20.0),
                egui::Color32::BLACK,
            );
            painter.text(
                egui::pos2(panel_rect.center().x, panel_rect.min.y + 130.0),
                egui::Align2::CENTER_CENTER,
                "Game Over",
                egui::FontId::proportional(30.0),
                egui::Color32::BLACK,
            );
            draw_button(painter, origin, restart);
            draw_button(painter, origin, close);
        }
    }
}

fn draw_button(painter: &egui::Painter, origin: egui::Pos2, button: &Button) {
    let rect = to_egui_rect(origin, button.rect);
    painter.rect_filled(rect, egui::CornerRadius::ZERO, BUTTON_FILL);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        button.label,
        egui::FontId::proportional(25.0),
        egui::Color32::WHITE,
    );
}
