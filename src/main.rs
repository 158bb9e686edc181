use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, RootSelection, Settings, parse_cli};
use word_scramble::error::{AppError, AppResult};
use word_scramble::tui::TuiInterface;
use word_scramble::{
    GameInterface, RandomWordSource, SequenceWordSource, WordListDictionary, WordSource, game_loop,
    logging,
};

fn build_word_source(settings: &Settings) -> AppResult<Box<dyn WordSource>> {
    let source: Box<dyn WordSource> = match &settings.root {
        RootSelection::Fixed(word) => {
            word_scramble::word_source::check_root_word(word)?;
            Box::new(SequenceWordSource::new([word.clone()]))
        }
        RootSelection::Random { seed: Some(seed) } => Box::new(RandomWordSource::with_seed(
            settings.start_words.clone(),
            *seed,
        )?),
        RootSelection::Random { seed: None } => {
            Box::new(RandomWordSource::new(settings.start_words.clone())?)
        }
    };
    Ok(source)
}

fn run() -> AppResult<()> {
    let cli = parse_cli();
    let settings = Settings::from_cli(&cli)?;

    if let Err(e) = logging::init(&settings.log_target) {
        eprintln!("Failed to set up logging: {e}");
    }
    log::info!(
        "Loaded {} root words and {} dictionary words",
        settings.start_words.len(),
        settings.dictionary.len()
    );

    let mut source = build_word_source(&settings)?;
    let dictionary = WordListDictionary::new(settings.dictionary.iter().cloned());

    let mut interface: Box<dyn GameInterface> = if settings.tui {
        Box::new(TuiInterface::new().map_err(AppError::Terminal)?)
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let state = game_loop(interface.as_mut(), source.as_mut(), &dictionary)?;
    // restore the terminal before printing anything
    drop(interface);
    log::info!("Game over with score {}", state.score());
    if settings.tui {
        println!("Final score: {}", state.score());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
