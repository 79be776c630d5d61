use log::error;
use random_map::config::MapConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = random_map::run(&MapConfig::default()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
