// crates/sandbox/src/main.rs

use engine_core::Game;

fn main() {
    engine_core::init_logging();

    if let Err(err) = Game::new("Ember Sandbox").run() {
        eprintln!("engine bootstrap failed: {err}");
        std::process::exit(1);
    }
}
