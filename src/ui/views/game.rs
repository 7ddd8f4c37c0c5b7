use crate::GameApp;
use crate::model::Feedback;
use crate::ui::layout::{centered_panel, wide_button, word_tile_row};
use egui::{Align, Color32, Context, RichText};

pub fn ui_game(app: &mut GameApp, ctx: &Context) {
    let view = match app.session_view() {
        Some(v) => v,
        None => {
            // Sin pregunta activa no hay nada que pintar: vuelta al menú
            app.go_home();
            return;
        }
    };

    centered_panel(ctx, 520.0, 720.0, |ui| {
        let panel_width = ui.available_width();

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            // Etiqueta del patrón gramatical y frase en chino
            ui.label(RichText::new(view.kind_label()).size(18.0).strong());
            ui.add_space(6.0);
            ui.heading(RichText::new(&view.prompt).size(40.0).strong());
            ui.add_space(18.0);

            // Zona de construcción de la frase
            let frame_stroke = match view.feedback {
                Feedback::Correct => egui::Stroke::new(2.0, Color32::GREEN),
                Feedback::Wrong => egui::Stroke::new(2.0, Color32::RED),
                Feedback::None => ui.visuals().widgets.noninteractive.bg_stroke,
            };
            let tiles_enabled = view.feedback == Feedback::None;
            let mut returned = None;

            egui::Frame::default()
                .stroke(frame_stroke)
                .inner_margin(egui::Margin::symmetric(12, 12))
                .show(ui, |ui| {
                    ui.set_min_height(56.0);
                    ui.set_width(panel_width - 24.0);
                    if view.sentence.is_empty() && view.feedback == Feedback::None {
                        ui.label(RichText::new("Tekan perkataan di bawah...").weak());
                    } else {
                        returned = word_tile_row(ui, &view.sentence, tiles_enabled);
                    }
                });

            if let Some(idx) = returned {
                app.return_word(idx);
            }

            ui.add_space(12.0);

            // Banco de palabras
            if let Some(idx) = word_tile_row(ui, &view.pool, tiles_enabled) {
                app.pick_word(idx);
            }

            ui.add_space(18.0);

            match view.feedback {
                Feedback::None => {
                    let can_check = !view.sentence.is_empty();
                    if wide_button(ui, panel_width, "SEMAK JAWAPAN", can_check) {
                        app.check_answer();
                    }
                }
                Feedback::Correct => {
                    if wide_button(ui, panel_width, "✅ SOALAN SETERUSNYA", true) {
                        app.next_question();
                    }
                }
                Feedback::Wrong => {
                    ui.label(RichText::new("JAWAPAN SEBENAR").small().weak());
                    ui.label(RichText::new(&view.answer).size(20.0).strong());
                    ui.add_space(8.0);
                    if wide_button(ui, panel_width, "⟲ Cuba Lagi", true) {
                        app.retry_question();
                    }
                }
            }
        });
    });
}
