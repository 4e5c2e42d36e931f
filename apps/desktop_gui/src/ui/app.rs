use eframe::egui;
use monitor_core::{
    FormState, RandomTips, ResultPanel, Settings, SystemClock, TimestampFormatter,
};
use rand::rngs::StdRng;

use crate::controller::{
    events::UiEvent,
    reducer::{reduce, Effects, ViewState},
};
use crate::ui::theme::{
    band_color, band_tint, lighten_color, monitor_visuals, strip_color, ACTION_FILL, CARD_STROKE,
    INK, MUTED_INK,
};

const INPUT_ID: &str = "aqi_input";

pub struct AqiMonitorApp {
    view: ViewState,
    clock: SystemClock,
    tips: RandomTips<StdRng>,
    formatter: TimestampFormatter,
    pending: Vec<UiEvent>,
    focus_input: bool,
}

impl AqiMonitorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        cc.egui_ctx.set_visuals(monitor_visuals());

        let mut tips = settings.tip_picker();
        Self {
            view: ViewState::new(FormState::opening(&mut tips)),
            clock: SystemClock,
            tips,
            formatter: settings.timestamp_formatter(),
            pending: Vec::new(),
            focus_input: true,
        }
    }

    fn process_ui_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let mut effects = Effects {
            clock: &self.clock,
            tips: &mut self.tips,
        };
        for event in self.pending.drain(..) {
            let dismissing = event == UiEvent::NoticeDismissed;
            self.view = reduce(&self.view, event, &mut effects);
            if dismissing {
                self.focus_input = true;
            }
        }
    }

    fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
        egui::Frame::NONE
            .fill(egui::Color32::WHITE)
            .corner_radius(16.0)
            .stroke(egui::Stroke::new(1.0, CARD_STROKE))
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, add)
            .inner
    }

    fn show_header(ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(lighten_color(egui::Color32::from_rgb(229, 231, 235), 0.5))
            .corner_radius(16.0)
            .inner_margin(egui::Margin::symmetric(24, 22))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Air Quality Monitor")
                        .size(30.0)
                        .strong()
                        .color(INK),
                );
                ui.label(
                    egui::RichText::new(
                        "Enter an AQI value to see the category, color indicator, and recommended precautions.",
                    )
                    .color(MUTED_INK),
                );
            });
    }

    fn show_swatch_strip(ui: &mut egui::Ui, panel: Option<&ResultPanel>) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 22.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 6.0, strip_color(panel));
    }

    fn show_input_row(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Enter AQI value").strong().color(MUTED_INK));
        ui.horizontal(|ui| {
            let mut buffer = self.view.form.input_text().to_string();
            let field_width = (ui.available_width() - 140.0).max(120.0);
            let response = ui.add_sized(
                [field_width, 36.0],
                egui::TextEdit::singleline(&mut buffer)
                    .id_salt(INPUT_ID)
                    .hint_text("e.g., 42"),
            );
            if self.focus_input {
                response.request_focus();
                self.focus_input = false;
            }
            if response.changed() {
                self.pending.push(UiEvent::InputChanged(buffer));
            }
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let button = egui::Button::new(
                egui::RichText::new("Check AQI")
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(ACTION_FILL)
            .min_size(egui::vec2(128.0, 36.0));
            if ui.add(button).clicked() || enter_pressed {
                self.pending.push(UiEvent::SubmitRequested);
            }
        });
    }

    fn show_result(ui: &mut egui::Ui, panel: &ResultPanel) {
        let color = band_color(panel.info.color);
        let tint = band_tint(panel.info.color);

        ui.add_space(16.0);
        ui.columns(3, |cols| {
            Self::result_tile(&mut cols[0], tint, |ui| {
                ui.label(egui::RichText::new("AQI").color(MUTED_INK));
                ui.label(
                    egui::RichText::new(panel.reading.to_string())
                        .size(28.0)
                        .strong()
                        .color(INK),
                );
            });
            Self::result_tile(&mut cols[1], tint, |ui| {
                ui.label(egui::RichText::new("Category").color(MUTED_INK));
                ui.label(
                    egui::RichText::new(panel.info.category.label())
                        .size(20.0)
                        .strong()
                        .color(color),
                );
            });
            Self::result_tile(&mut cols[2], egui::Color32::WHITE, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 12.0, color);
                    ui.label(egui::RichText::new("Background reflects level").color(MUTED_INK));
                });
            });
        });

        ui.add_space(12.0);
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(249, 250, 251))
            .stroke(egui::Stroke::new(1.0, CARD_STROKE))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(panel.info.advisory).color(INK));
            });
    }

    fn result_tile(ui: &mut egui::Ui, fill: egui::Color32, add: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, CARD_STROKE))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add(ui);
            });
    }

    fn show_details(&self, ui: &mut egui::Ui) {
        Self::card(ui, |ui| {
            ui.label(egui::RichText::new("Reading Details").size(18.0).strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Date & time").color(MUTED_INK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.view.form.timestamp_label(&self.formatter))
                            .strong(),
                    );
                });
            });
            ui.separator();
            ui.label(egui::RichText::new("Tip to reduce air pollution").color(MUTED_INK));
            if let Some(tip) = self.view.form.tip() {
                ui.label(egui::RichText::new(tip.text()).strong());
            }
        });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.view.notice.clone() else {
            return;
        };
        egui::Window::new("Invalid AQI")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message());
                ui.add_space(8.0);
                let dismiss = ui.button("OK").clicked()
                    || ui.input(|i| {
                        i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)
                    });
                if dismiss {
                    self.pending.push(UiEvent::NoticeDismissed);
                }
            });
    }
}

impl eframe::App for AqiMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel = self.view.form.result_panel();
        let blocked = self.view.is_blocked();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    Self::show_header(ui);
                    ui.add_space(12.0);
                    Self::show_swatch_strip(ui, panel.as_ref());
                    ui.add_space(12.0);

                    ui.columns(2, |cols| {
                        Self::card(&mut cols[0], |ui| {
                            self.show_input_row(ui);
                            if let Some(panel) = panel.as_ref() {
                                Self::show_result(ui, panel);
                            }
                        });
                        self.show_details(&mut cols[1]);
                    });

                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Stay informed. Breathe better.").color(MUTED_INK),
                        );
                    });
                });
            });
        });

        self.show_notice(ctx);
        self.process_ui_events();
    }
}
