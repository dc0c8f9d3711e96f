use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;
use life_paint::{
    LifeEngine, Session, ViewConfig,
    config::{SURFACE_HEIGHT, SURFACE_WIDTH},
    input::{self, PointerTracker},
    rendering::MacroquadSurface,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Paint".to_owned(),
        window_width: SURFACE_WIDTH as i32,
        window_height: SURFACE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ViewConfig::default();
    let mut session = Session::new(LifeEngine::from_config(&config), config);
    let mut surface = MacroquadSurface::new(config.surface_origin);
    let mut pointer = PointerTracker::new();

    // Closing the window detaches the view instead of killing the process mid-frame
    prevent_quit();

    loop {
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            session.detach();
        }
        if !session.is_attached() {
            break;
        }

        for event in pointer.poll() {
            input::handle_pointer(&mut session, event);
        }

        clear_background(WHITE);
        session.frame(get_time() * 1000.0, &mut surface);

        next_frame().await;
    }
}
