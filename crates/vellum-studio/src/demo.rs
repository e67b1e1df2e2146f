//! The demo panel set: a widget showcase, a long scrolling list and some
//! free-drawn shapes.

use vellum_engine::coords::Viewport;
use vellum_engine::input::InputSnapshot;
use vellum_engine::paint::rgba;
use vellum_engine::scene::TextAlign;
use vellum_ui::Ui;

/// Application-owned state the widgets edit.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub showcase_scroll: i32,
    pub list_scroll: i32,
    pub checkbox: bool,
    pub disabled_checkbox: bool,
    pub expanded: bool,
    pub disabled_expanded: bool,
    pub slider: f32,
    pub disabled_slider: f32,
    pub clicks: u32,
    pub picked: Option<&'static str>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            showcase_scroll: 0,
            list_scroll: 0,
            checkbox: false,
            disabled_checkbox: false,
            expanded: true,
            disabled_expanded: false,
            slider: 50.0,
            disabled_slider: 30.0,
            clicks: 0,
            picked: None,
        }
    }
}

const LIST_ROWS: usize = 100;

/// Builds one frame of the demo.
pub fn frame(ui: &mut Ui, state: &mut DemoState, input: InputSnapshot, viewport: Viewport) {
    let width = viewport.width as i32;
    let height = viewport.height as i32;
    let column = width / 5;

    ui.begin_frame(input);

    ui.begin_scroll_area("Scroll area", 10, 10, column, height - 20, state.showcase_scroll);
    ui.separator_line();
    ui.separator(1.0);

    if ui.button("Button", true) {
        state.clicks += 1;
        log::info!("button clicked ({} total)", state.clicks);
    }
    ui.button("Disabled button", false);
    if ui.item("Item", true) {
        state.picked = Some("Item");
        log::info!("item picked");
    }
    ui.item("Disabled item", false);

    state.checkbox = ui.check("Checkbox", state.checkbox, true).value;
    state.disabled_checkbox = ui.check("Disabled checkbox", state.disabled_checkbox, false).value;

    let collapse = ui.collapse("Collapse", "subtext", state.expanded, true);
    if state.expanded {
        ui.indent(1.0);
        ui.label("Collapsible element", TextAlign::Left);
        ui.unindent(1.0);
    }
    state.expanded = collapse.value;
    state.disabled_expanded = ui.collapse("Disabled collapse", "subtext", state.disabled_expanded, false).value;

    ui.label("Label", TextAlign::Left);
    ui.value("Value", TextAlign::Right);

    let slider = ui.slider("Slider", state.slider, 0.0, 100.0, 1.0, true);
    if slider.changed {
        log::debug!("slider {} -> {}", state.slider, slider.value);
    }
    state.slider = slider.value;
    state.disabled_slider = ui.slider("Disabled slider", state.disabled_slider, 0.0, 100.0, 1.0, false).value;

    ui.indent(1.0);
    ui.label("Indented", TextAlign::Left);
    ui.unindent(1.0);
    ui.label("Unindented", TextAlign::Left);
    state.showcase_scroll = ui.end_scroll_area().value;

    ui.begin_scroll_area("Scroll area", 20 + column, 100, column, 510, state.list_scroll);
    ui.separator_line();
    ui.separator(1.0);
    for _ in 0..LIST_ROWS {
        ui.label("A wall of text", TextAlign::Left);
    }
    state.list_scroll = ui.end_scroll_area().value;

    free_draw(ui, (30 + column * 2) as f32, height as f32);

    ui.end_frame();
}

fn free_draw(ui: &mut Ui, x: f32, top: f32) {
    let green = rgba(32, 192, 32, 192);
    let blue = rgba(32, 32, 192, 192);
    let red = rgba(192, 32, 32, 192);

    ui.draw_text(x, top - 20.0, TextAlign::Left, "Free text", green, 8.0);
    ui.draw_text(x + 100.0, top - 40.0, TextAlign::Right, "Free text", blue, 8.0);
    ui.draw_text(x + 50.0, top - 60.0, TextAlign::Center, "Free text", red, 8.0);

    ui.draw_line(x, top - 80.0, x + 100.0, top - 60.0, 1.0, green);
    ui.draw_line(x, top - 100.0, x + 100.0, top - 80.0, 2.0, blue);
    ui.draw_line(x, top - 120.0, x + 100.0, top - 100.0, 3.0, red);

    ui.draw_rounded_rect(x, top - 240.0, 100.0, 100.0, 5.0, green);
    ui.draw_rounded_rect(x, top - 350.0, 100.0, 100.0, 10.0, blue);
    ui.draw_rounded_rect(x, top - 470.0, 100.0, 100.0, 20.0, red);

    ui.draw_rect(x, top - 590.0, 100.0, 100.0, green);
    ui.draw_rect(x, top - 710.0, 100.0, 100.0, blue);
    ui.draw_rect(x, top - 830.0, 100.0, 100.0, red);
}
