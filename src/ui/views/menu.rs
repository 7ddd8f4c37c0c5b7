use crate::GameApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_menu(app: &mut GameApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 640.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("Pilih Tahap").size(32.0).strong());
            ui.label("Pilih tahap cabaran anda");
            ui.add_space(18.0);

            let cards = app.level_cards();
            let mut chosen = None;

            for card in &cards {
                let label = format!("{}\n{}", card.title, card.desc);
                let btn = Button::new(RichText::new(label).size(18.0))
                    .min_size(egui::vec2(320.0, 64.0));
                if ui.add(btn).on_hover_text("MULA").clicked() {
                    chosen = Some(card.id);
                }
                ui.add_space(8.0);
            }

            if let Some(level_id) = chosen {
                app.start_level(level_id);
            }

            ui.add_space(16.0);
            ui.label(
                RichText::new("TIP: Kata Nama ➡ yang ➡ Kata Adjektif / Kerja")
                    .italics(),
            );
        });
    });
}
