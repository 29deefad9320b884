use eframe::egui;
use likeview::{BurstConfig, LikeButton, LikeIcons, LikeView};

use crate::ui::{paint_heart, Heart};

const BUTTON_COUNT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    Documented,
    Legacy,
}

pub struct LikeDemoApp {
    pub config: BurstConfig,
    pub count_mode: CountMode,
    pub buttons: Vec<LikeView<Heart>>,
    pub show_settings: bool,
}

impl LikeDemoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BurstConfig) -> Self {
        let count_mode = if config.count == BurstConfig::legacy().count {
            CountMode::Legacy
        } else {
            CountMode::Documented
        };
        let mut app = Self {
            config,
            count_mode,
            buttons: Vec::new(),
            show_settings: true,
        };
        app.rebuild_buttons();
        app
    }

    /// Fresh buttons for the current config. Like state is kept.
    fn rebuild_buttons(&mut self) {
        let liked: Vec<bool> = self.buttons.iter().map(LikeView::is_liked).collect();
        self.buttons = (0..BUTTON_COUNT)
            .map(|i| {
                let mut view = LikeView::new(
                    LikeIcons::new(Heart::Filled, Heart::Outline),
                    self.config.clone(),
                );
                view.set_liked(liked.get(i).copied().unwrap_or(false));
                view
            })
            .collect();
        log::info!("burst count range {}..={}", self.config.count.min, self.config.count.max);
    }

    fn set_count_mode(&mut self, mode: CountMode) {
        if self.count_mode == mode {
            return;
        }
        self.count_mode = mode;
        self.config.count = match mode {
            CountMode::Documented => BurstConfig::default().count,
            CountMode::Legacy => BurstConfig::legacy().count,
        };
        self.rebuild_buttons();
    }

    pub fn draw_settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Burst");
        ui.separator();

        ui.label("Particle count:");
        let mut mode = self.count_mode;
        ui.radio_value(&mut mode, CountMode::Documented, "12 to 15");
        ui.radio_value(&mut mode, CountMode::Legacy, "13 to 16 (legacy)");
        self.set_count_mode(mode);

        ui.add_space(8.0);
        ui.label(format!(
            "Distance {}..={}  size {}..={}  duration {} ms",
            self.config.target_distance.min,
            self.config.target_distance.max,
            self.config.size.min,
            self.config.size.max,
            self.config.duration_ms,
        ));

        ui.add_space(8.0);
        let liked = self.buttons.iter().filter(|b| b.is_liked()).count();
        let live: usize = self.buttons.iter().map(|b| b.engine().particles().len()).sum();
        ui.label(format!("Liked: {liked}/{}", self.buttons.len()));
        ui.label(format!("Live particles: {live}"));
    }
}

impl eframe::App for LikeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.show_settings {
            egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
                if ui.button("▶ Show Settings").clicked() {
                    self.show_settings = true;
                }
            });
        }
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_settings_panel(ui);
                    if ui.button("◀ Hide").clicked() {
                        self.show_settings = false;
                    }
                });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                for (i, view) in self.buttons.iter_mut().enumerate() {
                    ui.push_id(i, |ui| {
                        if ui.add(LikeButton::new(view, paint_heart)).changed() {
                            log::info!("button {i} liked: {}", view.is_liked());
                        }
                    });
                }
            });
        });
    }
}
