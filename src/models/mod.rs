pub mod calendar_event;
pub mod record;
pub mod session;
pub mod sheet;

pub use calendar_event::CalendarEvent;
pub use record::Record;
pub use session::Session;
pub use sheet::Sheet;
