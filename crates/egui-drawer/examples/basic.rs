use egui_drawer::{Drawer, DrawerWidth};

struct App {
    drawer_open: bool,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("Open drawer").clicked() {
                self.drawer_open = true;
            }
        });

        let response = Drawer::new(self.drawer_open)
            .width(DrawerWidth::Points(240.0))
            .show(ctx, |ui| {
                ui.heading("Drawer");
                ui.label("Swipe toward the edge or tap the backdrop to close.");
            });
        if response.close_requested {
            self.drawer_open = false;
        }
    }
}

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 300.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "drawer_example",
        native_options,
        Box::new(|_cc| Ok(Box::new(App { drawer_open: false }))),
    )
}
