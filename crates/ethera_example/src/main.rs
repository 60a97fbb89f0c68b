use ethera_engine::foundation::logging;
use ethera_engine::prelude::*;
use ethera_example::{ExampleApp, GameConfig};

const ENGINE_CONFIG: &str = "config/engine.toml";
const GAME_CONFIG: &str = "config/game.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine_config = EngineConfig::load_or_default(ENGINE_CONFIG)?;
    logging::init(&engine_config.log_filter);

    log::info!("Starting {}", engine_config.window.title);
    let game_config = GameConfig::load_or_default(GAME_CONFIG)?;

    let mut canvas = Canvas::new(engine_config.window.width, engine_config.window.height);
    let frames = game_config.frames;
    let screenshot = game_config.screenshot.clone();
    let mut app = ExampleApp::new(game_config);

    let engine = Engine::run(engine_config, &mut app, &mut canvas, frames)?;
    log::info!("Finished in scene {:?}", engine.scenes.current_name());

    canvas.save(&screenshot)?;
    Ok(())
}
