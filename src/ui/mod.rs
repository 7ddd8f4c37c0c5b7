pub mod layout;
pub mod views;

use crate::app::GameApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;

impl App for GameApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // Dispatch por pantalla a las funciones de views
        match self.session.screen {
            Screen::Menu => views::menu::ui_menu(self, ctx),
            Screen::Playing => views::game::ui_game(self, ctx),
            Screen::Finished => views::result::ui_result(self, ctx),
        }
    }
}
