use crate::GameApp;
use crate::model::Screen;
use egui::{Button, Context, ProgressBar, Ui};

/// Barra superior: botón de inicio, progreso del nivel y altavoz.
pub fn top_panel(app: &mut GameApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("🏆 Pembina Ayat").clicked() {
                app.go_home();
            }

            if app.session.screen == Screen::Playing {
                if let Some(view) = app.session_view() {
                    ui.separator();
                    ui.label(format!("Tahap {}", view.level_id));
                    ui.add(
                        ProgressBar::new(view.progress_fraction())
                            .desired_width(200.0)
                            .text(format!("{} / {}", view.question_number, view.question_total)),
                    );
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if app.sound_enabled { "🔊" } else { "🔇" };
                if ui.button(icon).clicked() {
                    app.toggle_sound();
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Fila de fichas pulsables; devuelve el índice de la ficha pulsada.
pub fn word_tile_row(ui: &mut Ui, words: &[String], enabled: bool) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for (idx, word) in words.iter().enumerate() {
            let tile = Button::new(word.as_str()).min_size(egui::vec2(0.0, 40.0));
            if ui.add_enabled(enabled, tile).clicked() {
                clicked = Some(idx);
            }
        }
    });
    clicked
}

/// Botón ancho centrado. Devuelve si fue pulsado.
pub fn wide_button(ui: &mut Ui, panel_width: f32, label: &str, enabled: bool) -> bool {
    let btn_w = (panel_width * 0.9).clamp(120.0, 400.0);
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        clicked = ui
            .add_enabled(enabled, Button::new(label).min_size(egui::vec2(btn_w, 40.0)))
            .clicked();
    });
    clicked
}
