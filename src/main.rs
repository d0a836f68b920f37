//! Native entry point.

use classic_pong::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // PONG_SEED pins the serve RNG for reproducible sessions.
    let seed = match std::env::var("PONG_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::warn!("PONG_SEED {:?} is not a u64, using a random seed", raw);
                rand::random::<u64>()
            }
        },
        Err(_) => rand::random::<u64>(),
    };
    log::info!("Serve RNG seed: {}", seed);

    app::run(seed);
}
