pub mod editor;
pub mod outline;
pub mod preview;
pub mod publish;
pub mod welcome;
pub mod wizard;
