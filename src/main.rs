mod clock;
mod collision;
mod config;
mod food;
mod grid;
mod render;
mod score;
mod session;
mod snake;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::config::{DIFFICULTY, Difficulty, FOOD_ICON_PATH, HEIGHT, WIDTH};
use crate::grid::Dir;
use crate::render::FoodIcon;
use crate::session::Session;

fn main() -> Result<()> {
    env_logger::init();

    // The icon is a hard startup dependency; without it there is no game.
    let icon = FoodIcon::load(Path::new(FOOD_ICON_PATH))?;

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Snake")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture).context("creating framebuffer surface")?
    };

    let difficulty = Difficulty::from_name(DIFFICULTY);
    log::info!("starting {difficulty:?} session, tick {:?}", difficulty.tick_interval());

    let mut session = Session::new(difficulty, Instant::now());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            render::draw_frame(pixels.frame_mut(), &session, &icon, Instant::now());
            if pixels.render().is_err() {
                *control_flow = ControlFlow::Exit;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape)
                || input.close_requested()
                || input.destroyed()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if input.key_pressed(VirtualKeyCode::R) && session.is_over() {
                session = Session::new(difficulty, Instant::now());
            }

            // Steering is level-sensed: the first held direction this frame
            // wins, no key held means continue straight.
            if input.key_held(VirtualKeyCode::Up) || input.key_held(VirtualKeyCode::W) {
                session.steer(Dir::Up);
            } else if input.key_held(VirtualKeyCode::Down) || input.key_held(VirtualKeyCode::S) {
                session.steer(Dir::Down);
            } else if input.key_held(VirtualKeyCode::Left) || input.key_held(VirtualKeyCode::A) {
                session.steer(Dir::Left);
            } else if input.key_held(VirtualKeyCode::Right) || input.key_held(VirtualKeyCode::D) {
                session.steer(Dir::Right);
            }

            session.update(Instant::now());
            window.request_redraw();
        }
    });
}
