pub mod logging;
pub mod voice;
