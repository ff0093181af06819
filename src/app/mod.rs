pub mod session;
pub mod view;
