mod feedback;
mod prompt;
mod question;

pub use feedback::*;
pub use prompt::*;
pub use question::*;
