use env_logger::{Env, Target};
use kana_core::config::TrainerConfig;
use kana_core::tui::{self, HostKey, TerminalGuard};
use kana_core::word_bank::load_word_bank;
use kana_core::{KeystrokeOutcome, RomanizationEngine, Session, TrainerEngine};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::stdout;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}

// The terminal is in raw mode while the trainer runs, so logs go to a file.
fn init_logging(config: &TrainerConfig) {
    match File::create(&config.log_path) {
        Ok(file) => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!(
            "[WARN] Could not open log file {}: {}",
            config.log_path.display(),
            e
        ),
    }
}

fn run() -> kana_core::Result<()> {
    println!("Reading configuration...");
    let config = TrainerConfig::load_or_default(&TrainerConfig::default_path())?;
    init_logging(&config);
    info!("starting with {:?}", config);

    let words = load_word_bank(&config.word_bank_path)?;
    let session = Session::generate(words, config.session_length, &mut StdRng::from_entropy())?;
    let mut engine = TrainerEngine::new(session, RomanizationEngine::new(config.script));
    info!(
        "practising {} words in {:?}",
        engine.session().words().len(),
        engine.converter().script()
    );

    let _guard = TerminalGuard::new()?;
    let mut out = stdout();
    let mut resized = false;

    loop {
        let clear = engine.take_redraw() | std::mem::take(&mut resized);
        tui::draw(&mut out, &engine.frame(), clear)?;

        match tui::read_key()? {
            HostKey::Quit => {
                info!("quit before finishing the session");
                return Ok(());
            }
            HostKey::Resize => resized = true,
            HostKey::Input(key) => {
                if engine.apply_keystroke(key) == KeystrokeOutcome::Finished {
                    let clear = engine.take_redraw();
                    tui::draw(&mut out, &engine.frame(), clear)?;
                    tui::draw_summary(&mut out, &engine.summary())?;
                    tui::read_key()?;
                    return Ok(());
                }
            }
        }
    }
}
