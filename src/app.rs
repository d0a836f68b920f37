//! Window bootstrap and per-frame loop.
//!
//! Each redraw runs one frame: sample the clock and input, tick the
//! simulation, then draw the three entities. Quit is honored only after the
//! frame that sampled it completes.

use std::sync::Arc;

use glam::Mat4;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::clock::FrameClock;
use crate::consts;
use crate::input::InputSampler;
use crate::renderer::{DRAW_COUNT, RenderState, entity_transform};
use crate::sim::{GameState, ServeRng, tick};

/// Owns the game, the window and the renderer. Window and renderer are
/// created lazily on the first `resumed` callback.
struct App {
    state: GameState,
    serve_rng: ServeRng,
    clock: FrameClock,
    input: InputSampler,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
}

impl App {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(),
            serve_rng: ServeRng::new(seed),
            clock: FrameClock::new(),
            input: InputSampler::new(),
            window: None,
            renderer: None,
        }
    }

    /// Run one simulation-and-render frame.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let dt = self.clock.tick();
        let input = self.input.sample();
        tick(&mut self.state, &input, dt, &mut self.serve_rng);

        let transforms: [Mat4; DRAW_COUNT] = [
            entity_transform(self.state.paddles[0].pos, self.state.paddles[0].size),
            entity_transform(self.state.paddles[1].pos, self.state.paddles[1].size),
            entity_transform(self.state.ball.pos, self.state.ball.size),
        ];

        match renderer.render(&transforms) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                renderer.resize(renderer.size.0, renderer.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if input.quit {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(consts::WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(consts::WINDOW_WIDTH, consts::WINDOW_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ));

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.handle_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

/// Create the event loop and run the game until quit.
pub fn run(seed: u64) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(seed);
    event_loop.run_app(&mut app).expect("Event loop error");
}
