pub mod automate;
pub mod mask;
