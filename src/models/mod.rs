pub mod application;
pub mod grader;
pub mod loaders;

pub use application::{Application, RawPersonRow};
pub use grader::Grader;
pub use loaders::{load_roster, Roster};
