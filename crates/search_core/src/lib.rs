//! Search core: pure state machine for the hot-keyword search screen.
mod controller;
mod effect;
mod msg;
mod state;
mod update;
mod view;
mod view_model;

pub use controller::{SearchController, SearchSession};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Article, Generation, Notice, TrailingIndicator, ViewState};
pub use update::update;
pub use view::{format_search_error, ResultView, SEARCH_ERROR_TEMPLATE};
pub use view_model::AppViewModel;
