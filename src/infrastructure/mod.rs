pub mod ui_session;

pub use ui_session::UiSession;
