mod logger;
mod prompts;

pub use logger::init_logger;
pub use prompts::prompt_line;
