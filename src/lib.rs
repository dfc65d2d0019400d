pub mod cards;
pub mod evaluation;
pub mod gameplay;
pub mod players;
pub mod training;
pub mod tree;

/// chip count. signed so that folds can carry a -1 amount in the logs.
pub type Chips = i32;
/// unit interval probability or score
pub type Probability = f64;

/// starting stack for every freshly seated player
pub const STACK: Chips = 10_000;
/// small blind is stack / 200, posted by the dealer
pub const SBLIND_RATIO: Chips = 200;
/// big blind is stack / 100, posted by the non-dealer
pub const BBLIND_RATIO: Chips = 100;
/// a draw or a threat is worth naming once its odds clear 1 in 6
pub const LEGITIMACY: Probability = 1.0 / 6.0;

pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = std::fs::File::create(format!("logs/{}.log", time)).expect("create log file");
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("logger init");
}
