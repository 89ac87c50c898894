pub mod app;
pub mod pitch_view;
pub mod renderer;
pub mod ui;

use winit::event_loop::{ControlFlow, EventLoop};

use app::App;

/// Build the event loop and drive the application until the window closes.
pub fn run() {
    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("event loop failed");
}
