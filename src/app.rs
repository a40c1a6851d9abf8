//! Window host
//!
//! [`HostApp`] owns the winit event loop and drives any [`Renderable`]
//! through its lifecycle, rendering it with the [`RenderEngine`] and an ImGui
//! overlay.

use std::sync::Arc;

use anyhow::Context;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::{
    config::DiceConfig, gfx::RenderEngine, performance::FrameTimer, renderable::Renderable,
    ui::UiManager,
};

/// Window settings taken from [`DiceConfig`]
#[derive(Debug, Clone)]
struct WindowSettings {
    title: String,
    size: (u32, u32),
    vsync: bool,
}

pub struct HostApp<R: Renderable> {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState<R>,
}

struct AppState<R: Renderable> {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    frame_timer: FrameTimer,
    scene: R,
    settings: WindowSettings,
    init_error: Option<anyhow::Error>,
    shut_down: bool,
}

impl<R: Renderable> HostApp<R> {
    /// Creates the event loop for `scene`; no window exists until `run`
    pub fn new(scene: R, config: &DiceConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                frame_timer: FrameTimer::new(),
                scene,
                settings: WindowSettings {
                    title: config.window_title.clone(),
                    size: config.window_size,
                    vsync: config.vsync,
                },
                init_error: None,
                shut_down: false,
            },
        })
    }

    /// Runs until the window closes
    ///
    /// # Errors
    /// Returns the first failure while creating the window, the GPU device
    /// or the scene's GPU resources, or an event loop failure.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("Event loop failed")?;

        match self.app_state.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<R: Renderable> AppState<R> {
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = self.settings.size;
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(self.settings.title.clone())
                    .with_inner_size(winit::dpi::LogicalSize::new(width, height)),
            )
            .context("Failed to create window")?;
        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();

        let window_clone = window_handle.clone();
        let vsync = self.settings.vsync;
        let renderer = pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, vsync).await
        })
        .context("Failed to initialize renderer")?;

        self.scene
            .on_init(renderer.device())
            .context("Failed to initialize scene")?;
        self.scene.on_resize(width, height);

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        info!("Window ready: {}x{}", width, height);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(render_engine), Some(window)) =
            (self.render_engine.as_mut(), self.window.as_ref())
        else {
            return;
        };

        let delta_time = self.frame_timer.tick();
        self.scene.on_frame(delta_time, self.frame_timer.frame_rate());

        match self.ui_manager.as_mut() {
            Some(ui_manager) => {
                let scene = &mut self.scene;
                let frame_timer = &self.frame_timer;
                if let Err(e) = ui_manager.update_logic(window, |ui| {
                    scene.on_ui(ui);
                    frame_timer.render_overlay(ui);
                }) {
                    warn!("{:#}", e);
                }

                let params = self.scene.draw_params();
                render_engine.set_vsync(params.vsync);
                render_engine.render_frame(
                    self.scene.gpu_mesh(),
                    &params,
                    Some(|device: &wgpu::Device,
                          queue: &wgpu::Queue,
                          encoder: &mut wgpu::CommandEncoder,
                          color_attachment: &wgpu::TextureView| {
                        ui_manager.render_display_only(device, queue, encoder, color_attachment);
                    }),
                );
            }
            None => {
                let params = self.scene.draw_params();
                render_engine.set_vsync(params.vsync);
                render_engine.render_frame(
                    self.scene.gpu_mesh(),
                    &params,
                    None::<fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView)>,
                );
            }
        }
    }
}

impl<R: Renderable> ApplicationHandler for AppState<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            error!("{:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // UI gets first look at input
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if width > 0 && height > 0 {
                    self.scene.on_resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.shut_down {
            self.shut_down = true;
            self.scene.on_shutdown();
            info!("Shut down");
        }
    }
}
