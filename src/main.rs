use pembina_ayat::GameApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Pembina Ayat",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new()))),
    )
}

// Arranque web: engancha el runner al canvas de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no hay window")
            .document()
            .expect("no hay document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("falta el canvas #the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#the_canvas_id no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(GameApp::new()))),
            )
            .await
            .expect("no se pudo arrancar eframe");
    });
}
