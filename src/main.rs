mod app;
mod dialog;
mod notify;
mod upload;
mod utils;

use app::XeroxUploader;
use eframe::CreationContext;

fn main() {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([540.0, 640.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Cyber Café Xerox Uploader",
        options,
        Box::new(|cc: &CreationContext| Box::new(XeroxUploader::new(cc))),
    );
}
