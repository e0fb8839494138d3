use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tilt_core::{
    AttachOutcome, CardStyle, FinePointer, FrameScheduler, Geometry, InputBinding,
    PointerSample, Publisher, Rect, TickToken, TiltConfig, TiltController,
};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

// ~60 Hz frame clock for the convergence loop
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The window stands in for the card: its client area is the container and
/// the published variables end up in the title bar and the log.
struct WindowHost {
    size: PhysicalSize<u32>,
    pending: Option<TickToken>,
    next_frame_at: Instant,
    listening: bool,
    vars: BTreeMap<String, String>,
    dirty: bool,
}

impl WindowHost {
    fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            size,
            pending: None,
            next_frame_at: Instant::now(),
            listening: false,
            vars: BTreeMap::new(),
            dirty: false,
        }
    }

    /// The pending token once its frame is due.
    fn due_frame(&mut self, now: Instant) -> Option<TickToken> {
        if now < self.next_frame_at {
            return None;
        }
        let token = self.pending.take()?;
        self.next_frame_at = now + FRAME_INTERVAL;
        Some(token)
    }

    fn title(&self) -> String {
        let get = |k: &str| self.vars.get(k).map(String::as_str).unwrap_or("-");
        format!(
            "tilt {} / {} | bg {} {}",
            get("--rotate-x"),
            get("--rotate-y"),
            get("--background-x"),
            get("--background-y")
        )
    }
}

impl Geometry for WindowHost {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            0.0,
            0.0,
            self.size.width as f32,
            self.size.height as f32,
        ))
    }
}

impl FrameScheduler for WindowHost {
    fn request_tick(&mut self, token: TickToken) -> bool {
        self.pending = Some(token);
        true
    }

    fn cancel_tick(&mut self, token: TickToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}

impl Publisher for WindowHost {
    fn write_var(&mut self, name: &str, value: &str) {
        if self.vars.get(name).map(String::as_str) != Some(value) {
            self.vars.insert(name.to_string(), value.to_string());
            self.dirty = true;
        }
    }
}

impl InputBinding for WindowHost {
    fn bind(&mut self) {
        self.listening = true;
    }

    fn unbind(&mut self) {
        self.listening = false;
    }
}

fn config_from_args() -> TiltConfig {
    std::env::args()
        .nth(1)
        .map(|text| TiltConfig::from_json_or_default(&text))
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = config_from_args();
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tilt card (native)")
        .build(&event_loop)?;

    let mut tilt = TiltController::new(WindowHost::new(window.inner_size()), Box::new(FinePointer));
    CardStyle::default().apply(tilt.host_mut());
    match tilt.attach(&config) {
        AttachOutcome::Attached => log::info!("space toggles tilt, esc quits"),
        other => log::warn!("tilt not attached: {:?}", other),
    }

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                tilt.detach();
                elwt.exit();
            }
            WindowEvent::Resized(size) => tilt.host_mut().size = size,
            WindowEvent::CursorMoved { position, .. } if tilt.host().listening => {
                tilt.on_pointer_move(PointerSample::mouse(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } if tilt.host().listening => tilt.on_pointer_leave(),
            WindowEvent::Touch(touch) if tilt.host().listening => {
                let p = touch.location;
                tilt.on_pointer_move(PointerSample::touch(p.x as f32, p.y as f32));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Space) => {
                    if tilt.is_active() {
                        tilt.detach();
                    } else {
                        let outcome = tilt.attach(&config);
                        log::info!("attach: {:?}", outcome);
                    }
                }
                Key::Named(NamedKey::Escape) => {
                    tilt.detach();
                    elwt.exit();
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            if let Some(token) = tilt.host_mut().due_frame(Instant::now()) {
                tilt.tick(token);
            }
            let host = tilt.host_mut();
            if host.dirty {
                host.dirty = false;
                log::debug!("vars {:?}", host.vars);
                window.set_title(&host.title());
            }
            if host.pending.is_some() {
                elwt.set_control_flow(ControlFlow::WaitUntil(host.next_frame_at));
            } else {
                elwt.set_control_flow(ControlFlow::Wait);
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_frame_waits_for_the_interval() {
        let mut host = WindowHost::new(PhysicalSize::new(400, 300));
        let start = Instant::now();
        host.next_frame_at = start + FRAME_INTERVAL;
        host.request_tick(TickToken {
            generation: 1,
            sequence: 0,
        });
        assert!(host.due_frame(start).is_none());
        assert!(host.due_frame(start + FRAME_INTERVAL).is_some());
        assert!(host.pending.is_none());
    }

    #[test]
    fn unchanged_writes_do_not_dirty_the_title() {
        let mut host = WindowHost::new(PhysicalSize::new(400, 300));
        host.write_var("--rotate-x", "0deg");
        assert!(host.dirty);
        host.dirty = false;
        host.write_var("--rotate-x", "0deg");
        assert!(!host.dirty);
        assert!(host.title().starts_with("tilt 0deg / -"));
    }

    #[test]
    fn window_drives_a_full_attach_cycle() {
        let mut tilt = TiltController::new(
            WindowHost::new(PhysicalSize::new(400, 600)),
            Box::new(FinePointer),
        );
        assert_eq!(tilt.attach(&TiltConfig::default()), AttachOutcome::Attached);
        assert!(tilt.host().listening);
        tilt.on_pointer_move(PointerSample::mouse(300.0, 150.0));
        let mut now = Instant::now();
        let mut frames = 0;
        while tilt.host().pending.is_some() {
            now += FRAME_INTERVAL;
            if let Some(token) = tilt.host_mut().due_frame(now) {
                tilt.tick(token);
                frames += 1;
            }
            assert!(frames < 100);
        }
        assert_eq!(tilt.target().map(|t| (t.x(), t.y())), Some((75.0, 25.0)));
        tilt.detach();
        assert!(!tilt.host().listening);
    }
}
