use eframe::NativeOptions;
use egui::{Align2, Direction, RichText};
use egui_drawer::{Drawer, DrawerState, DrawerWidth, Side};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

struct Demo {
    label: &'static str,
    width: f32,
    side: Side,
    overlay_opacity: f32,
    notify_animation_end: bool,
}

pub struct DrawerDemo {
    demos: Vec<Demo>,
    selected: usize,
    drawer_open: bool,
}

impl Default for DrawerDemo {
    fn default() -> Self {
        Self {
            demos: vec![
                Demo {
                    label: "1",
                    width: 220.0,
                    side: Side::Left,
                    overlay_opacity: 0.4,
                    notify_animation_end: false,
                },
                Demo {
                    label: "2",
                    width: 280.0,
                    side: Side::Left,
                    overlay_opacity: 0.6,
                    notify_animation_end: false,
                },
                Demo {
                    label: "3",
                    width: 250.0,
                    side: Side::Right,
                    overlay_opacity: 0.5,
                    notify_animation_end: true,
                },
            ],
            selected: 0,
            drawer_open: false,
        }
    }
}

impl DrawerDemo {
    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "Drawer Demo",
            options,
            Box::new(|_cc| Ok(Box::new(DrawerDemo::default()))),
        )
    }
}

impl eframe::App for DrawerDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut toasts = Toasts::new()
            .anchor(Align2::CENTER_TOP, (0.0, 10.0))
            .direction(Direction::TopDown);

        egui::TopBottomPanel::bottom("demo_bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                egui::global_theme_preference_switch(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("Drawer Demo");
                ui.add_space(20.0);

                ui.horizontal_wrapped(|ui| {
                    for index in 0..self.demos.len() {
                        let selected = index == self.selected;
                        if ui
                            .selectable_label(selected, self.demos[index].label)
                            .clicked()
                        {
                            self.selected = index;
                            self.drawer_open = false;
                        }
                    }
                });

                let demo = &self.demos[self.selected];
                ui.add_space(12.0);
                ui.label(RichText::new(format!(
                    "width: {}pt, side: {:?}, overlay opacity: {}",
                    demo.width, demo.side, demo.overlay_opacity
                )));
                ui.add_space(20.0);

                if ui.button("Open Drawer").clicked() {
                    self.drawer_open = true;
                }
            });
        });

        let demo = &self.demos[self.selected];
        let mut close_clicked = false;
        let mut drawer = Drawer::new(self.drawer_open)
            .id(egui::Id::new(("drawer_demo", self.selected)))
            .width(DrawerWidth::Points(demo.width))
            .side(demo.side)
            .overlay_opacity(demo.overlay_opacity);
        if demo.notify_animation_end {
            drawer = drawer.on_animation_end(|state| {
                toasts.add(animation_toast(state));
            });
        }

        let response = drawer.show(ctx, |ui| {
            ui.add_space(40.0);
            ui.heading("Drawer Content");
            ui.label(format!("Demo {}", demo.label));
            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

        if response.close_requested || close_clicked {
            self.drawer_open = false;
        }

        toasts.show(ctx);
    }
}

fn animation_toast(state: DrawerState) -> Toast {
    Toast {
        text: format!("\"{state}\" animation complete").into(),
        kind: ToastKind::Info,
        options: ToastOptions::default()
            .duration_in_seconds(3.0)
            .show_progress(true),
        ..Default::default()
    }
}
