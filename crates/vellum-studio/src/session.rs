use vellum_engine::coords::Viewport;
use vellum_engine::input::{InputCollector, InputEvent};
use vellum_engine::render::Renderer;
use vellum_ui::Ui;

use crate::demo::{self, DemoState};
use crate::script::Step;

/// Replays `steps` against the demo, handing every frame to `renderer`.
pub fn run<R: Renderer>(steps: &[Step], viewport: Viewport, renderer: &mut R) -> anyhow::Result<DemoState> {
    let mut ui = Ui::new();
    let mut state = DemoState::default();
    let mut input = InputCollector::new();
    input.apply_event(&InputEvent::Focused(true));

    for step in steps {
        match step {
            Step::Event(ev) => input.apply_event(ev),
            Step::Frames(n) => {
                for _ in 0..*n {
                    let snapshot = input.take_snapshot(viewport.height);
                    log::trace!("snapshot {snapshot:?}");

                    demo::frame(&mut ui, &mut state, snapshot, viewport);
                    renderer.render(ui.commands(), viewport)?;

                    if ui.is_pointer_over_ui() {
                        log::trace!("pointer over ui (hot {})", ui.state().hot);
                    }
                }
            }
        }
    }

    Ok(state)
}
