#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    use app::CounterApp;
    use config::Settings;
    use iced::Size;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    log::info!("Starting '{}'", settings.title);

    let title = settings.title.clone();
    iced::application(move |_: &CounterApp| title.clone(), CounterApp::update, CounterApp::view)
        .window_size(Size::new(settings.window_width, settings.window_height))
        .run()
}

// The browser entry point is `counter_widget::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
