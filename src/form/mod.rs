pub mod cache;
pub mod page;
pub mod select;
pub mod state;
pub mod validate;

pub use cache::RecordCache;
pub use page::{create_page, edit_page, PageSetup};
pub use select::{FkOption, FkSelect};
pub use state::{FormMode, FormPage, FormPhase, Navigation};
