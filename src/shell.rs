//! Egui presentation shell: header, prompt sidebar, query box, activation
//! panel, activity monitor, camera buttons and floating region labels.
//!
//! The shell never mutates the session or camera itself. It reads a
//! [`ShellFrame`] snapshot and returns [`ShellAction`]s for the viewer to
//! apply, so UI code stays free of simulation state.

use egui::{Align2, Color32, FontId, RichText};
use glam::{Vec2, Vec3};

use crate::animator::ParticleAnimator;
use crate::camera::{Camera, CameraPreset};
use crate::presets::{self, Preset};
use crate::region::describe_tag;
use crate::session::Session;
use crate::visuals::{to_srgb8, VisualConfig};

/// Cosmetic model selector entries: name and blurb.
pub const MODELS: [(&str, &str); 3] = [
    ("GPT-4o", "Advanced reasoning model"),
    ("Claude 3", "Balanced reasoning model"),
    ("Llama 3", "Open source model"),
];

const ACCENT: Color32 = Color32::from_rgb(0x4E, 0xCD, 0xC4);
const MUTED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);
const LABEL_LIFT: f32 = 0.15;

/// Something the user asked for this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    Submit(String),
    Preset(&'static Preset),
    Intensity(f32),
    Camera(CameraPreset),
    TogglePause,
}

/// Read-only view of the world the shell draws from.
pub struct ShellFrame<'a> {
    pub session: &'a Session,
    pub animator: &'a ParticleAnimator,
    pub camera: &'a Camera,
    pub fps: f32,
    pub paused: bool,
}

/// UI state owned by the viewer.
///
/// Panel flags are the source of truth: a window is drawn only while its
/// flag is set, and closing it from its title bar clears the flag.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub camera_open: bool,
    pub query_open: bool,
    pub activation_open: bool,
    pub monitor_open: bool,
    pub visuals: VisualConfig,
    /// Text in the query box.
    pub draft: String,
    /// Index into [`MODELS`].
    pub selected_model: usize,
}

impl ShellState {
    pub fn new(visuals: VisualConfig) -> Self {
        Self {
            sidebar_open: true,
            camera_open: false,
            query_open: true,
            activation_open: true,
            monitor_open: true,
            visuals,
            draft: String::new(),
            selected_model: 0,
        }
    }

    /// Turn the draft into a submit action. Blank drafts yield nothing.
    pub fn take_submit(&self) -> Option<ShellAction> {
        let text = self.draft.trim();
        (!text.is_empty()).then(|| ShellAction::Submit(text.to_owned()))
    }

    /// Draw the whole shell for one frame.
    pub fn show(&mut self, ctx: &egui::Context, frame: &ShellFrame<'_>) -> Vec<ShellAction> {
        let mut actions = Vec::new();

        self.header(ctx, frame, &mut actions);
        self.sidebar(ctx, &mut actions);
        self.camera_window(ctx, &mut actions);
        self.monitor_window(ctx, frame);
        self.query_window(ctx, frame, &mut actions);
        self.activation_window(ctx, frame, &mut actions);

        if self.visuals.show_labels {
            draw_labels(ctx, frame);
        }

        actions
    }

    fn header(&mut self, ctx: &egui::Context, frame: &ShellFrame<'_>, actions: &mut Vec<ShellAction>) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.sidebar_open { "◀" } else { "▶" }).clicked() {
                    self.sidebar_open = !self.sidebar_open;
                }
                ui.heading(RichText::new("Enhanced Neural Visualization").color(ACCENT).strong());
                ui.label(RichText::new("LIVE ACTIVATION").small().color(Color32::LIGHT_GREEN));
                ui.label(RichText::new("PULSING SIGNALS").small().color(Color32::LIGHT_BLUE));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (name, _) = MODELS[self.selected_model.min(MODELS.len() - 1)];
                    egui::ComboBox::from_id_salt("model")
                        .selected_text(name)
                        .show_ui(ui, |ui| {
                            for (i, (name, blurb)) in MODELS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_model, i, *name)
                                    .on_hover_text(*blurb);
                            }
                        });
                    ui.toggle_value(&mut self.activation_open, "Activation");
                    ui.toggle_value(&mut self.query_open, "Query");
                    ui.toggle_value(&mut self.monitor_open, "Monitor");
                    ui.toggle_value(&mut self.camera_open, "Camera");
                    ui.separator();
                    ui.checkbox(&mut self.visuals.show_shell, "Shell");
                    ui.checkbox(&mut self.visuals.show_particles, "Particles");
                    ui.checkbox(&mut self.visuals.show_pathways, "Pathways");
                    ui.checkbox(&mut self.visuals.show_labels, "Labels");
                    let pause = if frame.paused { "Resume" } else { "Pause" };
                    if ui.button(pause).clicked() {
                        actions.push(ShellAction::TogglePause);
                    }
                    ui.label(RichText::new(format!("{:.0} fps", frame.fps)).small().color(MUTED));
                });
            });
        });
    }

    fn sidebar(&mut self, ctx: &egui::Context, actions: &mut Vec<ShellAction>) {
        egui::SidePanel::left("prompts")
            .resizable(true)
            .default_width(320.0)
            .show_animated(ctx, self.sidebar_open, |ui| {
                ui.heading("Alignment Scenarios");
                ui.label(
                    RichText::new("Pick a scenario to see which regions it recruits. Signal intensity reflects cognitive load.")
                        .small()
                        .color(MUTED),
                );
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (i, category) in presets::CATEGORIES.iter().enumerate() {
                        egui::CollapsingHeader::new(category.title)
                            .id_salt(category.key)
                            .default_open(i == 0)
                            .show(ui, |ui| {
                                for preset in category.presets {
                                    if preset_card(ui, preset) {
                                        self.draft = preset.prompt.to_owned();
                                        actions.push(ShellAction::Preset(preset));
                                    }
                                }
                            });
                    }
                });
            });
    }

    fn camera_window(&mut self, ctx: &egui::Context, actions: &mut Vec<ShellAction>) {
        let mut open = self.camera_open;
        egui::Window::new("Camera Controls")
            .anchor(Align2::LEFT_TOP, [12.0, 12.0])
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (i, preset) in CameraPreset::ALL.into_iter().enumerate() {
                        if ui
                            .button(preset.label())
                            .on_hover_text(format!("Key {}", i + 1))
                            .clicked()
                        {
                            actions.push(ShellAction::Camera(preset));
                        }
                    }
                });
            });
        self.camera_open = open;
    }

    fn monitor_window(&mut self, ctx: &egui::Context, frame: &ShellFrame<'_>) {
        let session = frame.session;
        let mut open = self.monitor_open;
        egui::Window::new("Neural Activity Monitor")
            .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
            .default_width(300.0)
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.columns(3, |cols| {
                    stat(&mut cols[0], session.tags().len().to_string(), "Active Regions", Color32::LIGHT_BLUE);
                    stat(&mut cols[1], format!("{}%", session.processing_load()), "Neural Load", Color32::LIGHT_GREEN);
                    stat(
                        &mut cols[2],
                        session.anatomy().regions().len().to_string(),
                        "Brain Areas",
                        Color32::from_rgb(0xC0, 0x84, 0xFC),
                    );
                });
                ui.separator();

                egui::CollapsingHeader::new(format!("Active ({})", session.tags().len()))
                    .default_open(true)
                    .show(ui, |ui| {
                        if session.tags().is_empty() {
                            ui.label(RichText::new("No active regions").color(MUTED));
                            ui.label(
                                RichText::new("Select a scenario to observe neural activation")
                                    .small()
                                    .color(MUTED),
                            );
                        }
                        egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                            for tag in session.tags().iter() {
                                ui.label(RichText::new(title_case(tag)).color(Color32::LIGHT_BLUE).strong());
                                ui.label(
                                    RichText::new(describe_tag(tag).unwrap_or("Neural Processing"))
                                        .small()
                                        .color(MUTED),
                                );
                            }
                        });
                    });

                egui::CollapsingHeader::new("Pathways").show(ui, |ui| {
                    let mut any = false;
                    for pathway in session.anatomy().pathways() {
                        if session.activation().is_pathway_active(pathway.id) {
                            ui.label(RichText::new(pathway.name).color(color32(pathway.color)));
                            any = true;
                        }
                    }
                    if !any {
                        ui.label(RichText::new("No signal flow").color(MUTED));
                    }
                });

                egui::CollapsingHeader::new("Brain → AI Map").show(ui, |ui| {
                    for line in [
                        "Prefrontal Cortex → Reasoning Modules",
                        "Hippocampus → Embedding Layers",
                        "Language Areas → NLP Components",
                        "Visual Cortex → Computer Vision",
                        "Anterior Cingulate → Conflict Resolution",
                    ] {
                        ui.label(RichText::new(format!("• {line}")).small());
                    }
                });
            });
        self.monitor_open = open;
    }

    fn query_window(&mut self, ctx: &egui::Context, frame: &ShellFrame<'_>, actions: &mut Vec<ShellAction>) {
        let session = frame.session;
        let mut open = self.query_open;
        egui::Window::new("Neural Query")
            .anchor(Align2::LEFT_BOTTOM, [12.0, -12.0])
            .default_width(420.0)
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let edit = ui.add(
                    egui::TextEdit::multiline(&mut self.draft)
                        .hint_text("Ask about goals, memory, language, fear, the self...")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                let ctrl_enter =
                    edit.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);

                ui.horizontal(|ui| {
                    let clicked = ui
                        .add_enabled(!self.draft.trim().is_empty(), egui::Button::new("Process"))
                        .clicked();
                    if clicked || ctrl_enter {
                        if let Some(action) = self.take_submit() {
                            actions.push(action);
                        }
                    }
                    if session.is_processing() {
                        ui.spinner();
                        ui.label(RichText::new("Processing...").color(MUTED));
                    }
                });

                let response = session.response();
                if !response.is_empty() {
                    ui.separator();
                    egui::ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        ui.label(response);
                    });
                }
            });
        self.query_open = open;
    }

    fn activation_window(&mut self, ctx: &egui::Context, frame: &ShellFrame<'_>, actions: &mut Vec<ShellAction>) {
        let session = frame.session;
        let mut open = self.activation_open;
        egui::Window::new("Activation")
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .default_width(300.0)
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let mut intensity = session.intensity();
                if ui
                    .add(egui::Slider::new(&mut intensity, 0.0..=1.0).text("Intensity"))
                    .changed()
                {
                    actions.push(ShellAction::Intensity(intensity));
                }

                ui.separator();
                let activation = session.activation();
                if activation.is_empty() {
                    ui.label(RichText::new("Idle").color(MUTED));
                }
                for region in session.anatomy().regions() {
                    if activation.is_region_active(region.id) {
                        ui.label(RichText::new(format!("● {}", region.name)).color(color32(region.color)));
                    }
                }
            });
        self.activation_open = open;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(VisualConfig::new())
    }
}

/// A clickable preset. Returns true when clicked.
fn preset_card(ui: &mut egui::Ui, preset: &Preset) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let excerpt: String = preset.prompt.chars().take(140).collect();
        let text = if excerpt.len() < preset.prompt.len() {
            format!("{excerpt}…")
        } else {
            excerpt
        };
        clicked = ui
            .add(egui::Label::new(RichText::new(text).small()).sense(egui::Sense::click()))
            .on_hover_text(preset.explanation)
            .clicked();
        ui.horizontal(|ui| {
            // Five-dot intensity gauge.
            let lit = (preset.intensity * 5.0).round() as usize;
            let dots: String = (0..5).map(|i| if i < lit { '●' } else { '○' }).collect();
            ui.label(RichText::new(dots).small().color(Color32::LIGHT_RED));
            ui.label(RichText::new(format!("{} regions", preset.tags.len())).small().color(MUTED));
        });
        ui.label(RichText::new(preset.insight).small().italics().color(MUTED));
    });
    clicked
}

fn stat(ui: &mut egui::Ui, value: String, caption: &str, color: Color32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).heading().color(color).strong());
        ui.label(RichText::new(caption).small().color(MUTED));
    });
}

/// Region names floating above each body, projected through the camera.
fn draw_labels(ctx: &egui::Context, frame: &ShellFrame<'_>) {
    let screen = ctx.screen_rect();
    let size = Vec2::new(screen.width(), screen.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::background());
    for body in frame.animator.bodies() {
        let anchor = body.center + Vec3::Y * (body.scale.y + LABEL_LIFT);
        let Some(pos) = frame.camera.project(anchor, size) else {
            continue;
        };
        let color = if body.active { color32(body.base_color) } else { MUTED };
        painter.text(
            screen.min + egui::vec2(pos.x, pos.y),
            Align2::CENTER_BOTTOM,
            body.name,
            FontId::proportional(if body.active { 14.0 } else { 12.0 }),
            color,
        );
    }
}

fn color32(linear: Vec3) -> Color32 {
    let [r, g, b] = to_srgb8(linear);
    Color32::from_rgb(r, g, b)
}

/// "reasoning-module-1" -> "Reasoning Module 1".
pub fn title_case(tag: &str) -> String {
    tag.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
