mod console;
mod export;

pub use console::generate as generate_console;
pub use export::generate as generate_csv;
