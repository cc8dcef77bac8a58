//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use clap::Parser;

    env_logger::init();

    let config = emoface_app::AppConfig::parse();
    let result = emoface_app::App::new(config).and_then(|mut app| app.render());

    match result {
        Ok(svg) => print!("{}", svg),
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
