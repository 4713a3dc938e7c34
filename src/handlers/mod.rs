/// Handler modules organized by event
mod interaction;

pub use interaction::handle_interaction;
