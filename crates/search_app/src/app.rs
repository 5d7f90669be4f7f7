use std::collections::VecDeque;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use search_core::{update, AppState, AppViewModel, Msg};
use search_logging::{search_info, search_warn};

use crate::config::{self, AppConfig};
use crate::effects::EffectRunner;
use crate::ui;
use crate::ui::keys::KeyAction;

pub fn run() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let loaded = config::load(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    // The terminal belongs to the UI, so logs go to a file only.
    search_logging::initialize(config.level_filter(), &config.log_file);
    match loaded {
        Ok(Some(_)) => search_info!("Loaded config from {:?}", config_path),
        Ok(None) => search_info!("No config at {:?}; using defaults", config_path),
        Err(err) => search_warn!("Ignoring config {:?}: {}", config_path, err),
    }

    let runner = EffectRunner::new(config.client_settings())?;
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, Screen::new(runner), &config);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut screen: Screen,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let tick = config.tick();
    screen.dispatch(Msg::Started);

    loop {
        if screen.take_redraw() {
            let view = screen.view();
            terminal.draw(|frame| ui::render::render(frame, &view))?;
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match ui::keys::map_key(key, &screen.view()) {
                        KeyAction::Dispatch(msg) => screen.dispatch(msg),
                        KeyAction::Quit => {
                            screen.dispatch(Msg::Closed);
                            search_info!("Search screen closed");
                            return Ok(());
                        }
                        KeyAction::Ignore => {}
                    }
                }
                Event::Resize(..) => screen.request_redraw(),
                _ => {}
            }
        }

        for msg in screen.runner.drain() {
            screen.dispatch(msg);
        }
        screen.dispatch(Msg::Tick);
    }
}

/// Owns the state on the UI thread; the only place `update` runs.
struct Screen {
    state: AppState,
    runner: EffectRunner,
    redraw: bool,
}

impl Screen {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            redraw: true,
        }
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn request_redraw(&mut self) {
        self.redraw = true;
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                self.redraw = true;
            }
            self.state = state;
            for effect in effects {
                inbox.extend(self.runner.run(effect));
            }
        }
    }
}
