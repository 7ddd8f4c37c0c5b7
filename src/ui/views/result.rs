use crate::GameApp;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Align, Color32, Context, RichText};

pub fn ui_result(app: &mut GameApp, ctx: &Context) {
    let title = app
        .current_level()
        .map(|l| l.title.clone())
        .unwrap_or_default();
    let score = app.session.score;
    let level_id = app.session.level_id;
    let can_advance = app.can_advance_level();
    let perfect = app.is_perfect();

    centered_panel(ctx, 420.0, 540.0, |ui| {
        let panel_width = ui.available_width();

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new(format!("{title} Selesai!")).size(32.0).strong());
            if perfect {
                ui.label(
                    RichText::new("SEMPURNA!")
                        .color(Color32::YELLOW)
                        .size(22.0)
                        .strong(),
                );
            }
            ui.add_space(8.0);
            ui.label(if score >= 80 {
                "Hebat! Anda memang pakar."
            } else {
                "Usaha yang bagus! Teruskan berlatih."
            });

            ui.add_space(16.0);
            ui.label(RichText::new("JUMLAH MARKAH").small().weak());
            ui.label(RichText::new(score.to_string()).size(64.0).strong());
            ui.add_space(16.0);

            if can_advance && wide_button(ui, panel_width, "Tahap Seterusnya ➡", true) {
                app.start_level(level_id + 1);
            }
            ui.add_space(4.0);
            if wide_button(ui, panel_width, "⟲ Main Semula", true) {
                app.start_level(level_id);
            }
            ui.add_space(4.0);
            if wide_button(ui, panel_width, "🏠 Menu Utama", true) {
                app.go_home();
            }
        });
    });
}
