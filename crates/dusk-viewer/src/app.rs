use dusk_engine::coords::Viewport;
use dusk_engine::core::{App, AppControl, FrameCtx};
use dusk_engine::input::{InputEvent, InputState};
use dusk_engine::paint::Color;
use dusk_engine::render::MeshRenderer;
use dusk_engine::scene::DrawList;
use dusk_engine::time::TickTime;
use dusk_scene::animation::TICK_DT;
use dusk_scene::{
    advance, apply_command, command_for_event, render_frame, AnimationState, Canvas, CommandOutcome,
};

/// Frames between debug stat lines.
const STATS_EVERY: u64 = 600;

/// Hosts the cityscape: ticks the animation, records and draws each frame.
pub struct ViewerApp {
    state: AnimationState,
    canvas: Viewport,
    clear: Color,
    draw_list: DrawList,
    renderer: MeshRenderer,
}

impl ViewerApp {
    pub fn new(canvas: Viewport, clear: Color) -> Self {
        Self {
            state: AnimationState::new(),
            canvas,
            clear,
            draw_list: DrawList::new(),
            renderer: MeshRenderer::new(),
        }
    }
}

impl App for ViewerApp {
    fn on_input(&mut self, event: &InputEvent, _input: &InputState) -> AppControl {
        let Some(cmd) = command_for_event(event) else {
            return AppControl::Continue;
        };
        match apply_command(&mut self.state, cmd) {
            CommandOutcome::Continue => AppControl::Continue,
            CommandOutcome::Quit => AppControl::Exit,
        }
    }

    fn on_tick(&mut self, _tick: TickTime) -> AppControl {
        // Motion is per tick, not per elapsed second.
        advance(&mut self.state, TICK_DT);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.draw_list.clear();
        {
            let mut canvas = Canvas::new(&mut self.draw_list, self.canvas);
            render_frame(&self.state, &mut canvas);
        }

        let draw_list = &self.draw_list;
        let renderer = &mut self.renderer;
        let control = ctx.render(self.canvas, self.clear, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        });

        if ctx.time.frame_index % STATS_EVERY == 0 {
            log::debug!(
                "frame {}: {} cmds, {} vertices, {} skipped, dt {:.4}s",
                ctx.time.frame_index,
                self.draw_list.len(),
                self.renderer.vertex_count(),
                self.renderer.skipped(),
                ctx.time.dt,
            );
        }

        control
    }
}
