use anyhow::Context;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use dicebox::{
    animation::RollAnimator, mesh::load_indexed_mesh, DiceConfig, DiceScene, HostApp,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = DiceConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_model_path(path);
    }

    let mesh = load_indexed_mesh(&config.model_path)
        .with_context(|| format!("Failed to load dice model {}", config.model_path.display()))?;

    let rng = match config.seed {
        Some(seed) => {
            info!("Seeding rolls with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let animator = RollAnimator::new(config.roll.clone(), rng);

    let scene = DiceScene::new(mesh, animator).with_vsync(config.vsync);
    HostApp::new(scene, &config)?.run()
}
