pub mod editor;
pub mod listing;
pub mod operator;
pub mod record_writer;
pub mod selection;

pub use editor::GraderEditor;
pub use listing::{GreenhouseListing, ListingPage};
pub use operator::find_current_operator;
pub use record_writer::RecordWriter;
pub use selection::GraderSelection;
